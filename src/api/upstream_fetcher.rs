use std::time::Duration;
use async_trait::async_trait;
use reqwest::{ Client, StatusCode };
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request to {url} timed out")]
    Timeout { url: String },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: StatusCode },

    #[error("Request to {url} failed: {source}")]
    Transport { url: String, #[source] source: reqwest::Error },

    #[error("{url} did not answer with JSON: {source}")]
    Decode { url: String, #[source] source: reqwest::Error },
}

#[async_trait]
pub trait UpstreamFetcher: Send + Sync {
    async fn try_fetch(&self, url: &str) -> Result<Value, FetchError>;

    /// GETs `url` once. Any failure is logged and yields an empty list.
    async fn fetch(&self, url: &str) -> Value {
        match self.try_fetch(url).await {
            Ok(value) => value,
            Err(error) => {
                log::error!("{}", error);
                Value::Array(vec![])
            }
        }
    }
}

pub struct HttpUpstreamFetcher {
    client: Client
}

impl HttpUpstreamFetcher {
    pub fn new(timeout: Duration) -> Result<HttpUpstreamFetcher, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(HttpUpstreamFetcher { client })
    }
}

#[async_trait]
impl UpstreamFetcher for HttpUpstreamFetcher {
    async fn try_fetch(&self, url: &str) -> Result<Value, FetchError> {
        let transport_error = |source: reqwest::Error| {
            if source.is_timeout() {
                FetchError::Timeout { url: url.to_string() }
            } else {
                FetchError::Transport { url: url.to_string(), source }
            }
        };
        let response = self.client.get(url).send().await.map_err(transport_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: url.to_string(), status });
        }
        response.json::<Value>().await.map_err(|source| {
            if source.is_timeout() {
                FetchError::Timeout { url: url.to_string() }
            } else {
                FetchError::Decode { url: url.to_string(), source }
            }
        })
    }
}
