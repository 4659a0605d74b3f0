/// Client for the shortener backend's two endpoints
use crate::url_data::{ErrorBody, ShortenRequest, ShortenResult, UrlRecord};
use gloo_net::http::Request;
use thiserror::Error;

pub const SHORTEN_FALLBACK_MESSAGE: &str = "Error shortening URL";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// Non-2xx response, with the server's message when it sent one
    #[error("rejected by server: {}", .0.as_deref().unwrap_or("no message"))]
    Rejected(Option<String>),

    /// No response at all
    #[error("network error: {0}")]
    Network(String),

    /// A 2xx response whose body did not match the contract
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text shown in the error toast
    pub fn toast_message(&self) -> String {
        match self {
            ApiError::Rejected(Some(message)) => message.clone(),
            ApiError::Rejected(None) => SHORTEN_FALLBACK_MESSAGE.to_string(),
            ApiError::Network(_) | ApiError::Decode(_) => NETWORK_ERROR_MESSAGE.to_string(),
        }
    }
}

/// The backend as seen by the page
#[allow(async_fn_in_trait)]
pub trait ShortenerApi {
    async fn shorten(&self, url: &str) -> Result<ShortenResult, ApiError>;

    async fn recent(&self) -> Result<Vec<UrlRecord>, ApiError>;
}

/// `fetch`-backed implementation
#[derive(Debug, Clone)]
pub struct HttpApi {
    shorten_endpoint: String,
    recent_endpoint: String,
}

impl HttpApi {
    pub fn new(shorten_endpoint: impl Into<String>, recent_endpoint: impl Into<String>) -> HttpApi {
        HttpApi {
            shorten_endpoint: shorten_endpoint.into(),
            recent_endpoint: recent_endpoint.into(),
        }
    }
}

impl ShortenerApi for HttpApi {
    async fn shorten(&self, url: &str) -> Result<ShortenResult, ApiError> {
        let response = Request::post(&self.shorten_endpoint)
            .json(&ShortenRequest::new(url))
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let ok = response.ok();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode_shorten(ok, &body)
    }

    async fn recent(&self) -> Result<Vec<UrlRecord>, ApiError> {
        let response = Request::get(&self.recent_endpoint)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let ok = response.ok();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode_recent(ok, &body)
    }
}

/// Interpret a shorten response body
pub fn decode_shorten(ok: bool, body: &str) -> Result<ShortenResult, ApiError> {
    if ok {
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        Err(rejection(body))
    }
}

/// Interpret a recent-list response body
pub fn decode_recent(ok: bool, body: &str) -> Result<Vec<UrlRecord>, ApiError> {
    if ok {
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        Err(rejection(body))
    }
}

fn rejection(body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty());
    ApiError::Rejected(message)
}
