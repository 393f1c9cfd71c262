use serde_json::json;

use super::*;
use crate::request::{Method, RequestBody};
use crate::session::{ACCESS_TOKEN_KEY, MemoryStore, REFRESH_TOKEN_KEY};
use crate::test_helpers::ScriptedTransport;

fn store() -> MemoryStore {
    let store = MemoryStore::new();
    store.set(ACCESS_TOKEN_KEY, "a1");
    store.set(REFRESH_TOKEN_KEY, "r1");
    store
}

fn two_todos() -> serde_json::Value {
    json!([
        { "id": 1, "title": "Buy milk", "complete": false },
        { "id": 2, "title": "Walk dog", "complete": true }
    ])
}

// =============================================================
// pure helpers
// =============================================================

#[test]
fn todo_path_has_trailing_slash() {
    assert_eq!(todo_path(12), "/todos/12/");
}

#[test]
fn normalize_title_rejects_whitespace() {
    assert_eq!(normalize_title("  milk "), Some("milk"));
    assert_eq!(normalize_title(" \t "), None);
}

#[test]
fn absolute_image_urls_are_kept() {
    assert_eq!(
        resolve_image_url("http://localhost:3000", "https://cdn.example.com/a.png"),
        "https://cdn.example.com/a.png"
    );
}

#[test]
fn relative_image_urls_get_origin_prefix() {
    assert_eq!(
        resolve_image_url("http://localhost:3000/", "/media/profile/a.png"),
        "http://localhost:3000/media/profile/a.png"
    );
    assert_eq!(
        resolve_image_url("http://localhost:3000", "media/a.png"),
        "http://localhost:3000/media/a.png"
    );
}

// =============================================================
// endpoints
// =============================================================

#[tokio::test]
async fn list_todos_decodes_items() {
    let transport = ScriptedTransport::new().reply(200, two_todos());
    let client = AuthClient::new(&transport, store());

    let todos = client.list_todos().await.expect("todos");

    assert_eq!(todos.len(), 2);
    assert_eq!(todos[1].title, "Walk dog");
    assert_eq!(transport.sent()[0].request.method, Method::Get);
}

#[tokio::test]
async fn blank_title_makes_no_request() {
    let transport = ScriptedTransport::new();
    let client = AuthClient::new(&transport, store());

    let err = client.create_todo("   ").await.expect_err("blank");

    assert!(matches!(err, ApiError::EmptyTitle));
    assert!(transport.sent().is_empty());
}

#[tokio::test]
async fn toggle_sends_negated_status() {
    let transport = ScriptedTransport::new()
        .reply(200, json!({ "id": 2, "title": "Walk dog", "complete": false }));
    let client = AuthClient::new(&transport, store());

    client.toggle_todo(2, true).await.expect("toggled");

    let sent = transport.sent();
    assert_eq!(sent[0].request.method, Method::Patch);
    assert_eq!(sent[0].request.path, "/todos/2/");
    assert_eq!(sent[0].request.body, RequestBody::Json(json!({ "complete": false })));
}

#[tokio::test]
async fn add_and_reload_refetches_list() {
    let transport = ScriptedTransport::new()
        .reply(201, json!({ "id": 3, "title": "New", "complete": false }))
        .reply(200, two_todos());
    let client = AuthClient::new(&transport, store());

    let todos = client.add_and_reload("New").await.expect("reloaded");

    assert_eq!(todos.len(), 2);
    assert_eq!(transport.paths(), vec![TODOS_PATH, TODOS_PATH]);
    assert_eq!(transport.sent()[0].request.body, RequestBody::Json(json!({ "title": "New" })));
}

#[tokio::test]
async fn failed_mutation_skips_reload() {
    let transport = ScriptedTransport::new()
        .reply(404, json!({ "detail": "Not found." }))
        .reply(200, two_todos());
    let client = AuthClient::new(&transport, store());

    let err = client.delete_and_reload(9).await.expect_err("missing");

    assert_eq!(err.status(), Some(404));
    assert_eq!(transport.sent().len(), 1);
    assert_eq!(transport.remaining(), 1);
}

#[tokio::test]
async fn delete_accepts_no_content() {
    let transport = ScriptedTransport::new().reply(204, json!(null)).reply(200, json!([]));
    let client = AuthClient::new(&transport, store());

    let todos = client.delete_and_reload(1).await.expect("deleted");

    assert!(todos.is_empty());
    assert_eq!(transport.sent()[0].request.method, Method::Delete);
}

#[tokio::test]
async fn toggle_and_reload_refreshes_expired_token_first() {
    let transport = ScriptedTransport::new()
        .reply(401, json!(null))
        .reply(200, json!({ "access": "a2" }))
        .reply(200, json!({ "id": 1, "title": "Buy milk", "complete": true }))
        .reply(200, two_todos());
    let client = AuthClient::new(&transport, store());

    client.toggle_and_reload(1, false).await.expect("reloaded");

    let sent = transport.sent();
    assert_eq!(sent.len(), 4);
    assert_eq!(sent[3].bearer.as_deref(), Some("a2"));
}

#[tokio::test]
async fn fetch_profile_reads_image_url() {
    let transport = ScriptedTransport::new().reply(200, json!({ "profile_image": "/media/a.png" }));
    let client = AuthClient::new(&transport, store());

    let profile = client.fetch_profile().await.expect("profile");

    assert_eq!(profile.profile_image.as_deref(), Some("/media/a.png"));
}

#[tokio::test]
async fn upload_uses_profile_image_field() {
    let transport = ScriptedTransport::new().reply(200, json!({ "profile_image": "/media/b.png" }));
    let client = AuthClient::new(&transport, store());
    let upload = Upload {
        field: "file".to_owned(),
        file_name: "me.png".to_owned(),
        content_type: Some("image/png".to_owned()),
        bytes: vec![0x89, b'P', b'N', b'G'],
    };

    let profile = client.upload_profile_image(upload).await.expect("uploaded");

    assert_eq!(profile.profile_image.as_deref(), Some("/media/b.png"));
    let sent = transport.sent();
    assert_eq!(sent[0].request.method, Method::Patch);
    assert_eq!(sent[0].request.path, PROFILE_PATH);
    match &sent[0].request.body {
        RequestBody::Multipart(part) => {
            assert_eq!(part.field, PROFILE_IMAGE_FIELD);
            assert_eq!(part.file_name, "me.png");
        }
        other => panic!("expected multipart body, got {other:?}"),
    }
}
