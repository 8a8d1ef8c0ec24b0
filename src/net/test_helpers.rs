use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use super::client::ApiClient;
use super::transport::{HttpRequest, HttpResponse, Transport, TransportError};
use crate::config::ClientConfig;
use crate::nav::{MemoryNavigator, Route};
use crate::session::SessionService;

pub(crate) const API: &str = "http://api.test/api";
pub(crate) const AUTH: &str = "http://api.test/auth";

/// Records every request and answers from a queue of canned responses.
///
/// An exhausted queue answers `500` so a missing stub fails loudly.
#[derive(Default)]
pub(crate) struct MockTransport {
    requests: Mutex<Vec<HttpRequest>>,
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
}

impl MockTransport {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn push_json(&self, status: u16, body: Value) {
        self.push(Ok(HttpResponse { status, body: body.to_string() }));
    }

    pub(crate) fn push_status(&self, status: u16) {
        self.push(Ok(HttpResponse { status, body: String::new() }));
    }

    pub(crate) fn push_failure(&self, message: &str) {
        self.push(Err(TransportError::Request(message.to_owned())));
    }

    pub(crate) fn push(&self, response: Result<HttpResponse, TransportError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last(&self) -> HttpRequest {
        self.requests().pop().expect("no request recorded")
    }

    pub(crate) fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(HttpResponse { status: 500, body: String::new() }))
    }
}

pub(crate) struct Harness {
    pub client: ApiClient,
    pub transport: Arc<MockTransport>,
    pub session: SessionService,
    pub nav: Arc<MemoryNavigator>,
}

pub(crate) fn harness() -> Harness {
    let config = ClientConfig {
        api_url: API.into(),
        auth_url: AUTH.into(),
        session_file: "unused.json".into(),
    };
    let transport = MockTransport::new();
    let session = SessionService::in_memory();
    let nav = Arc::new(MemoryNavigator::new(Route::Dashboard));
    let client = ApiClient::new(&config, transport.clone(), session.clone(), nav.clone());
    Harness { client, transport, session, nav }
}

pub(crate) fn signed_in_harness(token: &str) -> Harness {
    let h = harness();
    h.session.set_token(token).unwrap();
    h
}
