//! Test doubles shared by the client unit tests.


use std::rc::Rc;

use crate::client::{api::ApiClient, store::session::Session};

pub use backend::{FakeBackend, RecordedRequest};

pub static TEST_API_URL: &str = "http://localhost:5000/api";
pub static TEST_TOKEN: &str = "admin-token";

pub struct TestSetup {
    pub backend: Rc<FakeBackend>,
    pub api: ApiClient,
}

/// Returns an [`ApiClient`] wired to an in-memory backend
pub fn test_setup(backend: FakeBackend) -> TestSetup {
    let backend = Rc::new(backend);
    let api = ApiClient::new(TEST_API_URL, backend.clone());

    TestSetup { backend, api }
}

pub fn signed_in() -> Session {
    Session::new(Some(TEST_TOKEN.to_string()))
}
