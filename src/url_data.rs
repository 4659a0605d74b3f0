/// Data structures exchanged with the shortener backend
use serde::{Deserialize, Serialize};

/// Body of `POST /api/shorten`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShortenRequest {
    pub url: String,
}

impl ShortenRequest {
    pub fn new(url: impl Into<String>) -> ShortenRequest {
        ShortenRequest { url: url.into() }
    }
}

/// Successful response of `POST /api/shorten`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShortenResult {
    pub short_url: String,
    pub original_url: String,
    pub clicks: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_code: Option<String>,
}

/// One entry of `GET /api/recent`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UrlRecord {
    pub short_url: String,
    pub short_code: String,
    pub original_url: String,
    pub created_at: String,
    pub clicks: u64,
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
