//! HTTP plumbing shared by the advertisement services.
//!
//! Services build an [`ApiRequest`] and hand it to an [`ApiClient`], which resolves it against
//! the configured base URL, sends it through a [`Transport`] and maps the status code onto a
//! [`ClientError`]. The browser build uses [`ReqwasmTransport`]; tests swap in a recording
//! transport.

use std::{fmt, future::Future, pin::Pin, rc::Rc};

use dioxus_logger::tracing;
use serde::{de::DeserializeOwned, Serialize};

use crate::{client::error::ClientError, model::api::ErrorDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        })
    }
}

/// A request against the advertisement API, relative to the API base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub bearer: Option<String>,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            bearer: None,
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn with_query(mut self, query: Vec<(&'static str, String)>) -> Self {
        self.query = query;
        self
    }

    /// Attaches `Authorization: Bearer <token>` when a token is present
    pub fn with_bearer(mut self, token: Option<&str>) -> Self {
        self.bearer = token.map(str::to_string);
        self
    }

    pub fn with_json<T: Serialize>(mut self, body: &T) -> Result<Self, ClientError> {
        let body = serde_json::to_string(body)
            .map_err(|e| ClientError::Parse(format!("Failed to serialize request body: {}", e)))?;
        self.body = Some(body);
        Ok(self)
    }

    /// Path plus percent-encoded query string
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }

        let query = self
            .query
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.path, query)
    }
}

/// Raw response as seen by the transport
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

pub type TransportFuture<'a> = Pin<Box<dyn Future<Output = Result<ApiResponse, ClientError>> + 'a>>;

/// Sends a fully resolved request and returns the raw response.
///
/// Only failures to obtain a response are errors here; status handling belongs to
/// [`ApiClient`].
pub trait Transport {
    fn send<'a>(&'a self, url: String, request: ApiRequest) -> TransportFuture<'a>;
}

/// Handle to the advertisement API shared by every service
#[derive(Clone)]
pub struct ApiClient {
    base_url: Rc<str>,
    transport: Rc<dyn Transport>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && Rc::ptr_eq(&self.transport, &other.transport)
    }
}

impl ApiClient {
    pub fn new(base_url: &str, transport: Rc<dyn Transport>) -> Self {
        Self {
            base_url: Rc::from(base_url.trim_end_matches('/')),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, request: &ApiRequest) -> String {
        format!("{}{}", self.base_url, request.path_and_query())
    }

    /// Sends a request and fails on any non-success status
    pub async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let url = self.url_for(&request);
        let method = request.method;
        tracing::debug!("{} {}", method, url);

        let response = self.transport.send(url.clone(), request).await?;

        if (200..300).contains(&response.status) {
            return Ok(response);
        }

        tracing::debug!("{} {} returned status {}", method, url, response.status);
        Err(status_error(response))
    }

    /// Sends a request and decodes a JSON body from the successful response
    pub async fn execute_json<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<T, ClientError> {
        let response = self.execute(request).await?;

        serde_json::from_str(&response.body).map_err(|e| ClientError::Parse(e.to_string()))
    }
}

fn status_error(response: ApiResponse) -> ClientError {
    let message = match serde_json::from_str::<ErrorDto>(&response.body) {
        Ok(error_dto) => error_dto.error,
        Err(_) if response.body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => response.body,
    };

    match response.status {
        401 | 403 => ClientError::Unauthorized(message),
        400 | 422 => ClientError::Validation(message),
        status => ClientError::Status { status, message },
    }
}

/// An unreadable body is a transport failure, never an empty body
pub fn read_body<E: fmt::Display>(body: Result<String, E>) -> Result<String, ClientError> {
    body.map_err(|e| ClientError::Transport(format!("Failed to read response body: {}", e)))
}

/// Browser transport built on `reqwasm`
#[cfg(feature = "web")]
pub struct ReqwasmTransport;

#[cfg(feature = "web")]
impl Transport for ReqwasmTransport {
    fn send<'a>(&'a self, url: String, request: ApiRequest) -> TransportFuture<'a> {
        use reqwasm::http::{Method as HttpMethod, Request};

        Box::pin(async move {
            let method = match request.method {
                Method::Get => HttpMethod::GET,
                Method::Post => HttpMethod::POST,
                Method::Put => HttpMethod::PUT,
                Method::Patch => HttpMethod::PATCH,
                Method::Delete => HttpMethod::DELETE,
            };

            let mut builder = Request::new(&url).method(method);

            if let Some(token) = &request.bearer {
                builder = builder.header("Authorization", &format!("Bearer {}", token));
            }
            if let Some(body) = request.body {
                builder = builder.header("Content-Type", "application/json").body(body);
            }

            let response = builder
                .send()
                .await
                .map_err(|e| ClientError::Transport(e.to_string()))?;

            let status = response.status();
            let body = read_body(response.text().await)?;

            Ok(ApiResponse { status, body })
        })
    }
}

/// Transport used outside the browser build, where no HTTP client is compiled in
#[cfg(not(feature = "web"))]
pub struct UnavailableTransport;

#[cfg(not(feature = "web"))]
impl Transport for UnavailableTransport {
    fn send<'a>(&'a self, url: String, _request: ApiRequest) -> TransportFuture<'a> {
        Box::pin(async move {
            Err(ClientError::Transport(format!(
                "no HTTP transport for {} outside the web build",
                url
            )))
        })
    }
}

/// The transport for the current build target
pub fn default_transport() -> Rc<dyn Transport> {
    #[cfg(feature = "web")]
    return Rc::new(ReqwasmTransport);

    #[cfg(not(feature = "web"))]
    return Rc::new(UnavailableTransport);
}

#[cfg(test)]
mod tests;
