//! `reqwest` implementation of [`todo_api::Transport`].

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use reqwest::multipart::{Form, Part};
use todo_api::{ApiError, ApiRequest, ApiResponse, Config, Method, RequestBody, Transport, Upload};

use crate::error::CliError;

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Native HTTP transport rooted at an absolute API base URL.
pub struct ReqwestTransport {
    http: reqwest::Client,
    config: Config,
    origin: String,
}

impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns [`CliError::InvalidBaseUrl`] unless `base_url` is an absolute
    /// `http(s)` URL, or [`CliError::HttpClient`] if the client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, CliError> {
        let parsed = Url::parse(base_url).map_err(|_| CliError::InvalidBaseUrl(base_url.to_owned()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CliError::InvalidBaseUrl(base_url.to_owned()));
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            config: Config::from_override(Some(base_url)),
            origin: parsed.origin().ascii_serialization(),
        })
    }

    /// Scheme, host and port of the API, used to resolve relative media URLs.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn url(&self, path: &str) -> String {
        self.config.url(path)
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn multipart_form(upload: &Upload) -> Result<Form, ApiError> {
    let mime = upload.content_type.as_deref().unwrap_or("application/octet-stream");
    let part = Part::bytes(upload.bytes.clone())
        .file_name(upload.file_name.clone())
        .mime_str(mime)
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    Ok(Form::new().part(upload.field.clone(), part))
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &ApiRequest, bearer: Option<&str>) -> Result<ApiResponse, ApiError> {
        let url = self.url(&request.path);
        tracing::debug!(method = request.method.as_str(), %url, "sending request");

        let mut builder = self.http.request(to_reqwest_method(request.method), &url);
        if let Some(token) = bearer {
            builder = builder.bearer_auth(token);
        }
        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Multipart(upload) => builder.multipart(multipart_form(upload)?),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        tracing::debug!(status, %url, "received response");
        Ok(ApiResponse { status, body: body.to_vec() })
    }
}
