//! Scripted transport for native tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::api::Api;
use super::error::ApiError;
use super::http::{HttpClient, HttpRequest, HttpResponse};
use crate::config::ApiConfig;

pub const TEST_BASE_URL: &str = "http://backend.test";

/// Replays queued responses in order and records every request it receives.
/// Clones share the same script and log.
#[derive(Clone, Default)]
pub struct ScriptedClient {
    replies: Rc<RefCell<VecDeque<Result<HttpResponse, ApiError>>>>,
    sent: Rc<RefCell<Vec<HttpRequest>>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, status: u16, body: &str) -> &Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
        self
    }

    pub fn fail(&self, err: ApiError) -> &Self {
        self.replies.borrow_mut().push_back(Err(err));
        self
    }

    pub fn sent(&self) -> Vec<HttpRequest> {
        self.sent.borrow().clone()
    }

    pub fn api(&self) -> Api<ScriptedClient> {
        Api::new(ApiConfig::new(TEST_BASE_URL), self.clone())
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for ScriptedClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.sent.borrow_mut().push(req);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted reply".to_owned())))
    }
}

pub fn url(path: &str) -> String {
    format!("{TEST_BASE_URL}{path}")
}
