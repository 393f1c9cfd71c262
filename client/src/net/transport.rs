//! `gloo-net` implementation of [`todo_api::Transport`].
//!
//! Client-side (csr): real `fetch` calls.
//! Elsewhere: every send fails, since these endpoints are only meaningful in
//! the browser.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use async_trait::async_trait;
use todo_api::{ApiError, ApiRequest, ApiResponse, Config, Transport};

/// Browser transport rooted at the configured API base.
#[derive(Clone, Debug)]
pub struct GlooTransport {
    config: Config,
}

impl GlooTransport {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn url(&self, request: &ApiRequest) -> String {
        self.config.url(&request.path)
    }
}

#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn content_type_or_default(content_type: Option<&str>) -> &str {
    content_type.unwrap_or("application/octet-stream")
}

#[cfg(feature = "csr")]
fn multipart_form(upload: &todo_api::Upload) -> Result<web_sys::FormData, ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Transport(format!("{e:?}"));
    let bytes = js_sys::Uint8Array::from(upload.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(content_type_or_default(upload.content_type.as_deref()));
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
    let form = web_sys::FormData::new().map_err(js_err)?;
    form.append_with_blob_and_filename(&upload.field, &blob, &upload.file_name)
        .map_err(js_err)?;
    Ok(form)
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: &ApiRequest, bearer: Option<&str>) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::{Method, RequestBuilder};
            use todo_api::RequestBody;

            let method = match request.method {
                todo_api::Method::Get => Method::GET,
                todo_api::Method::Post => Method::POST,
                todo_api::Method::Patch => Method::PATCH,
                todo_api::Method::Delete => Method::DELETE,
            };
            let mut builder = RequestBuilder::new(&self.url(request)).method(method);
            if let Some(token) = bearer {
                builder = builder.header("Authorization", &todo_api::transport::bearer_header(token));
            }
            let to_err = |e: gloo_net::Error| ApiError::Transport(e.to_string());
            // Multipart bodies get their boundary header from the browser.
            let prepared = match &request.body {
                RequestBody::Empty => builder.build().map_err(to_err)?,
                RequestBody::Json(value) => builder.json(value).map_err(to_err)?,
                RequestBody::Multipart(upload) => builder.body(multipart_form(upload)?).map_err(to_err)?,
            };
            let response = prepared.send().await.map_err(to_err)?;
            let status = response.status();
            let body = response.binary().await.map_err(to_err)?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (request, bearer);
            Err(ApiError::Transport("not available outside the browser".to_owned()))
        }
    }
}
