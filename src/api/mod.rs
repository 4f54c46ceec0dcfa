//! HTTP API client.
//!
//! Every response passes through [`ApiClient::intercept`]. A 401 on a request
//! that carried a session token ends the session and sends the user to the
//! login page through the [`AuthFailureBridge`]; a 401 without a token is a
//! rejected sign-in and only produces a message. Error messages are localized
//! through the same bridge. The client never touches Dioxus directly.

pub mod models;

use std::rc::Rc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::bridge::AuthFailureBridge;
use crate::config::{AppConfig, ConfigError};
use crate::stores::SessionStore;

pub use models::{Booking, BookingRequest, LoginRequest, LoginResponse, Seat, SeatStatus};

#[derive(Debug, Error)]
pub enum ApiError {
    /// Server rejected the session token; the user has already been redirected.
    #[error("{message}")]
    Unauthorized { message: String },
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("{0}")]
    Transport(String),
    #[error("invalid response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// Sends a prepared request. Not `Send`: in the browser requests are JS promises.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// `reqwest` transport (fetch in WASM, hyper natively).
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };
        let mut builder = self.client.request(method, request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}

/// Error body shape the backend uses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: Result<Url, Rc<ConfigError>>,
    api_key: Option<String>,
    transport: Rc<dyn HttpTransport>,
    session: SessionStore,
    auth_bridge: AuthFailureBridge,
}

impl ApiClient {
    pub fn new(
        config: &AppConfig,
        transport: Rc<dyn HttpTransport>,
        session: SessionStore,
        auth_bridge: AuthFailureBridge,
    ) -> Self {
        let base_url = config.api_base_url().map_err(|e| {
            warn!("API client has no usable base URL: {}", e);
            Rc::new(e)
        });
        Self {
            base_url,
            api_key: config.api_key.clone(),
            transport,
            session,
            auth_bridge,
        }
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        let base = self.base_url.as_ref().map_err(|e| {
            ApiError::Transport(format!("API is not configured: {}", e))
        })?;
        Ok(base.join(path.trim_start_matches('/'))?)
    }

    fn build(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<ApiRequest, ApiError> {
        let mut headers = vec![("accept".to_string(), "application/json".to_string())];
        if let Some(token) = self.session.token() {
            headers.push(("authorization".to_string(), format!("Bearer {}", token)));
        }
        if let Some(key) = &self.api_key {
            headers.push(("x-api-key".to_string(), key.clone()));
        }
        Ok(ApiRequest {
            method,
            url: self.url(path)?,
            headers,
            body,
        })
    }

    async fn execute(&self, request: ApiRequest) -> Result<String, ApiError> {
        debug!("{:?} {}", request.method, request.url);
        let with_session = request.header("authorization").is_some();
        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(ApiError::Transport(detail)) => {
                warn!("Request failed: {}", detail);
                let message = self.auth_bridge.translate("errors.network");
                return Err(ApiError::Transport(message));
            }
            Err(e) => return Err(e),
        };
        self.intercept(response, with_session)
    }

    /// Map a raw response to the body or an error.
    ///
    /// `with_session` tells whether the request carried the session token.
    /// Only then does a 401 mean the session expired.
    pub fn intercept(&self, response: ApiResponse, with_session: bool) -> Result<String, ApiError> {
        match response.status {
            200..=299 => Ok(response.body),
            401 if with_session => {
                warn!("Server returned 401, ending session");
                self.session.sign_out();
                self.auth_bridge.redirect_to_login();
                Err(ApiError::Unauthorized {
                    message: self.auth_bridge.translate("errors.unauthorized"),
                })
            }
            401 => {
                let message = server_message(&response.body)
                    .unwrap_or_else(|| self.auth_bridge.translate("errors.invalid_credentials"));
                warn!("Server rejected credentials: {}", message);
                Err(ApiError::Status {
                    status: 401,
                    message,
                })
            }
            status => {
                let message = server_message(&response.body).unwrap_or_else(|| {
                    let status = status.to_string();
                    self.auth_bridge
                        .translate_with("errors.request_failed", &[("status", status.as_str())])
                });
                warn!("Server returned {}: {}", status, message);
                Err(ApiError::Status { status, message })
            }
        }
    }

    fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
        // Empty 2xx bodies decode as JSON null so `()` and `Option` work
        let body = if body.trim().is_empty() { "null" } else { body };
        Ok(serde_json::from_str(body)?)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.build(Method::Get, path, None)?;
        let body = self.execute(request).await?;
        Self::decode(&body)
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.build(Method::Post, path, Some(serde_json::to_value(body)?))?;
        let body = self.execute(request).await?;
        Self::decode(&body)
    }
}

/// The `message` field of an error body, if the server sent one.
fn server_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
}
