//! HTTP document source backed by reqwest.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::Source;
use crate::config::ClientConfig;
use crate::error::{Error, HttpError, Result};

/// HTTP source retrieving a document with a GET request.
///
/// Non-success statuses and transport failures are reported as
/// [`HttpError`]s carrying the request URL. No retries are attempted.
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    /// Create a source for `url` using the given client configuration.
    pub fn new(url: impl Into<String>, config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::Config(format!("invalid header name '{}': {}", name, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| Error::Config(format!("invalid header value for '{}': {}", name, e)))?;
            headers.insert(name, value);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()
            .map_err(|e| HttpError::ClientBuild(e.to_string()))?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }

    /// The URL this source fetches.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Source for HttpSource {
    async fn load(&self) -> Result<Bytes> {
        debug!("GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| HttpError::Request {
                url: self.url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            }
            .into());
        }

        let body = response.bytes().await.map_err(|e| HttpError::Request {
            url: self.url.clone(),
            message: e.to_string(),
        })?;

        debug!("Fetched {} bytes from {}", body.len(), self.url);
        Ok(body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// GET `url` with the default client configuration and parse the response
/// body as JSON.
pub async fn get_json(url: &str) -> Result<Value> {
    let source = HttpSource::new(url, &ClientConfig::default())?;
    let body = source.load().await?;
    Ok(serde_json::from_slice(&body)?)
}
