//! HTTP client for the zhconvert `/convert` endpoint.
//!
//! One request per call, no retries and no client-side timeout: a failed
//! round trip is reported to the caller as-is.

use reqwest::Client;

use crate::api::{ConversionRequest, ConversionResponse, Converter};
use crate::error::ProcessingError;

/// Public zhconvert API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.zhconvert.org";

/// Client for the zhconvert conversion API.
#[derive(Debug, Clone)]
pub struct ZhConvertClient {
    /// HTTP client for making API requests.
    client: Client,
    /// Base URL of the API, without a trailing slash.
    base_url: String,
}

impl ZhConvertClient {
    /// Create a client for the public endpoint.
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_base_url(DEFAULT_ENDPOINT)
    }

    /// Create a client against a custom base URL.
    ///
    /// Useful for testing or self-hosted mirrors of the API.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Convert `text` with the given converter and return the converted text.
    pub async fn convert(&self, converter: Converter, text: &str) -> Result<String, ProcessingError> {
        let url = format!("{}/convert", self.base_url);
        let request = ConversionRequest::new(converter, text);

        tracing::debug!(
            url = %url,
            converter = %converter,
            chars = text.chars().count(),
            "Sending conversion request"
        );

        let http_response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = http_response.status();
        if !status.is_success() {
            let body = http_response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            return Err(ProcessingError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let body = http_response.text().await?;
        let response: ConversionResponse = serde_json::from_str(&body)?;
        let converted = response.into_text()?;

        tracing::debug!(chars = converted.chars().count(), "Received converted text");
        Ok(converted)
    }
}
