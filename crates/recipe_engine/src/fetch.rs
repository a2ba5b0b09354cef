use std::time::Duration;

use bytes::BytesMut;
use futures_util::StreamExt;
use recipe_logging::{recipe_debug, recipe_trace};
use reqwest::header::{ACCEPT, CACHE_CONTROL, CONTENT_TYPE, PRAGMA};
use url::Url;

use crate::{FaultKind, FetchOutput, TransportFault};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// One HTTP GET per call, returning the body of a 2xx response.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<FetchOutput, TransportFault>;
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, TransportFault> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| TransportFault::new(FaultKind::Network, err.to_string()))
    }

    fn too_large(&self, actual: u64) -> TransportFault {
        TransportFault::new(
            FaultKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            format!(
                "The response is too large ({actual} bytes, limit {} bytes).",
                self.settings.max_bytes
            ),
        )
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchOutput, TransportFault> {
        let client = self.build_client()?;

        // Every call must reach the origin; ask intermediaries not to serve a cached copy.
        let response = client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        recipe_debug!("GET {} -> {}", url, status);
        if !status.is_success() {
            return Err(TransportFault::new(
                FaultKind::HttpStatus(status.as_u16()),
                format!("The server responded with HTTP {status}."),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let mut body = BytesMut::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            body.extend_from_slice(&chunk);
            recipe_trace!("GET {} received {} bytes", url, body.len());
        }

        Ok(FetchOutput {
            body: body.freeze(),
            content_type,
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportFault {
    if err.is_timeout() {
        return TransportFault::new(FaultKind::Timeout, "The request timed out.");
    }
    if err.is_connect() {
        return TransportFault::new(
            FaultKind::Connect,
            format!("Could not connect to the server: {err}"),
        );
    }
    TransportFault::new(FaultKind::Network, err.to_string())
}
