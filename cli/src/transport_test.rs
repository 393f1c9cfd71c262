use super::*;

#[test]
fn new_rejects_relative_base() {
    assert!(matches!(ReqwestTransport::new("/api"), Err(CliError::InvalidBaseUrl(_))));
}

#[test]
fn new_rejects_non_http_scheme() {
    assert!(matches!(ReqwestTransport::new("ftp://example.com/api"), Err(CliError::InvalidBaseUrl(_))));
}

#[test]
fn origin_strips_api_path() {
    let transport = ReqwestTransport::new("http://127.0.0.1:8000/api").expect("transport");
    assert_eq!(transport.origin(), "http://127.0.0.1:8000");
}

#[test]
fn url_joins_base_and_endpoint() {
    let transport = ReqwestTransport::new("http://127.0.0.1:8000/api/").expect("transport");
    assert_eq!(transport.url("/todos/3/"), "http://127.0.0.1:8000/api/todos/3/");
}

#[test]
fn methods_map_one_to_one() {
    assert_eq!(to_reqwest_method(Method::Get), reqwest::Method::GET);
    assert_eq!(to_reqwest_method(Method::Patch), reqwest::Method::PATCH);
    assert_eq!(to_reqwest_method(Method::Delete), reqwest::Method::DELETE);
}

#[test]
fn multipart_form_rejects_invalid_mime() {
    let upload = Upload {
        field: "profile_image".to_owned(),
        file_name: "me.png".to_owned(),
        content_type: Some("not a mime".to_owned()),
        bytes: vec![1],
    };
    assert!(matches!(multipart_form(&upload), Err(ApiError::Transport(_))));
}

// =============================================================
// over HTTP
// =============================================================

mod http {
    use serde_json::json;
    use todo_api::session::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
    use todo_api::{AuthClient, SessionStore};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::store::FileSessionStore;

    fn transport_for(server: &MockServer) -> ReqwestTransport {
        ReqwestTransport::new(&format!("{}/api", server.uri())).expect("transport")
    }

    #[tokio::test]
    async fn sends_bearer_and_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/todos/"))
            .and(header("authorization", "Bearer a1"))
            .and(body_json(json!({ "title": "milk" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 1, "title": "milk" })))
            .expect(1)
            .mount(&server)
            .await;

        let request = ApiRequest::post_json("/todos/", &json!({ "title": "milk" })).expect("request");
        let response = transport_for(&server).send(&request, Some("a1")).await.expect("sent");

        assert_eq!(response.status, 201);
    }

    #[tokio::test]
    async fn omits_authorization_without_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/todos/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        transport_for(&server).send(&ApiRequest::get("/todos/"), None).await.expect("sent");

        let received = server.received_requests().await.expect("recording");
        assert!(received[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn unauthorized_is_a_response_not_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/profile/"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "detail": "expired" })))
            .mount(&server)
            .await;

        let response = transport_for(&server)
            .send(&ApiRequest::get("/profile/"), Some("stale"))
            .await
            .expect("response");

        assert_eq!(response.status, 401);
        assert!(response.is_unauthorized());
    }

    #[tokio::test]
    async fn multipart_upload_names_field_and_file() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/api/profile/"))
            .and(header("authorization", "Bearer a1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "profile_image": "/media/me.png" })))
            .expect(1)
            .mount(&server)
            .await;

        let upload = Upload {
            field: "profile_image".to_owned(),
            file_name: "me.png".to_owned(),
            content_type: Some("image/png".to_owned()),
            bytes: b"PNGDATA".to_vec(),
        };
        transport_for(&server)
            .send(&ApiRequest::patch_multipart("/profile/", upload), Some("a1"))
            .await
            .expect("sent");

        let received = server.received_requests().await.expect("recording");
        let content_type = received[0]
            .headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        assert!(content_type.starts_with("multipart/form-data"), "{content_type}");
        let body = String::from_utf8_lossy(&received[0].body).to_ascii_lowercase();
        assert!(body.contains(r#"name="profile_image""#), "{body}");
        assert!(body.contains(r#"filename="me.png""#), "{body}");
        assert!(body.contains("content-type: image/png"), "{body}");
        assert!(body.contains("pngdata"));
    }

    #[tokio::test]
    async fn refreshed_token_is_written_to_session_file() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/todos/"))
            .and(header("authorization", "Bearer old-access"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/token/refresh/"))
            .and(body_json(json!({ "refresh": "r1" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access": "new-access" })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/todos/"))
            .and(header("authorization", "Bearer new-access"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 3, "title": "x", "complete": true }])))
            .expect(1)
            .mount(&server)
            .await;

        let session_path = std::env::temp_dir().join(format!("todo-cli-session-{}.json", uuid::Uuid::new_v4()));
        let store = FileSessionStore::open(&session_path).expect("open");
        store.set(ACCESS_TOKEN_KEY, "old-access");
        store.set(REFRESH_TOKEN_KEY, "r1");
        let client = AuthClient::new(transport_for(&server), store);

        let todos = client.list_todos().await.expect("replayed");

        assert_eq!(todos.len(), 1);
        let reopened = FileSessionStore::open(&session_path).expect("reopen");
        assert_eq!(reopened.get(ACCESS_TOKEN_KEY).as_deref(), Some("new-access"));
        assert_eq!(reopened.get(REFRESH_TOKEN_KEY).as_deref(), Some("r1"));
        reopened.clear();
    }
}
