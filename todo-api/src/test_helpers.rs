//! Scripted transport shared by unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::request::{ApiRequest, ApiResponse};
use crate::transport::Transport;

/// A request as the transport saw it.
#[derive(Clone, Debug, PartialEq)]
pub struct SentRequest {
    pub request: ApiRequest,
    pub bearer: Option<String>,
}

/// Replays queued responses in order and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
    sent: RefCell<Vec<SentRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: serde_json::Value) -> Self {
        let body = if body.is_null() { Vec::new() } else { body.to_string().into_bytes() };
        self.replies.borrow_mut().push_back(Ok(ApiResponse { status, body }));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.replies.borrow_mut().push_back(Err(ApiError::Transport(message.to_owned())));
        self
    }

    pub fn sent(&self) -> Vec<SentRequest> {
        self.sent.borrow().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.sent.borrow().iter().map(|s| s.request.path.clone()).collect()
    }

    pub fn remaining(&self) -> usize {
        self.replies.borrow().len()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: &ApiRequest, bearer: Option<&str>) -> Result<ApiResponse, ApiError> {
        self.sent.borrow_mut().push(SentRequest {
            request: request.clone(),
            bearer: bearer.map(str::to_owned),
        });
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted reply".to_owned())))
    }
}
