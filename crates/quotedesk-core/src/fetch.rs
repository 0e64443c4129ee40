//! Fetch adapter for the backend test endpoint.
//!
//! One `GET {base_url}/api/test_yfinance`, no retry, no backoff. The body is
//! expected to look like `{ "results": ["line", ...] }`; a JSON body whose
//! `results` is missing or is not an array of strings yields no lines rather
//! than an error.

use std::future::Future;
use std::pin::Pin;

use serde_json::Value;
use thiserror::Error;

use crate::config::ClientConfig;
use crate::http_client::{HttpClient, HttpError, HttpRequest};

pub const TEST_ENDPOINT_PATH: &str = "/api/test_yfinance";

/// Why a test invocation produced no lines.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Transport(#[from] HttpError),

    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },

    #[error("response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything the debug view can ask for a fresh set of result lines.
pub trait TestSource: Send + Sync {
    fn run_test<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<String>, FetchError>> + Send + 'a>>;
}

/// [`TestSource`] that calls the backend test endpoint over an [`HttpClient`].
#[derive(Debug)]
pub struct TestEndpoint<C> {
    client: C,
    config: ClientConfig,
}

impl<C: HttpClient> TestEndpoint<C> {
    pub fn new(client: C, config: ClientConfig) -> Self {
        Self { client, config }
    }

    pub fn url(&self) -> String {
        self.config.endpoint(TEST_ENDPOINT_PATH)
    }

    async fn fetch_results(&self) -> Result<Vec<String>, FetchError> {
        let request = HttpRequest::get(self.url())
            .with_header("accept", "application/json")
            .with_timeout_ms(self.config.timeout_ms);

        tracing::debug!(url = %request.url, "running backend test");
        let response = self.client.execute(request).await?;
        if !response.is_success() {
            return Err(FetchError::Status {
                status: response.status,
            });
        }

        let body: Value = serde_json::from_str(&response.body)?;
        Ok(extract_results(&body))
    }
}

impl<C: HttpClient> TestSource for TestEndpoint<C> {
    fn run_test<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<String>, FetchError>> + Send + 'a>> {
        Box::pin(self.fetch_results())
    }
}

/// Pull the `results` lines out of a decoded body.
pub fn extract_results(body: &Value) -> Vec<String> {
    let Some(results) = body.get("results") else {
        tracing::debug!("test response carries no results field");
        return Vec::new();
    };

    let lines = results.as_array().and_then(|items| {
        items
            .iter()
            .map(|item| item.as_str().map(str::to_owned))
            .collect::<Option<Vec<_>>>()
    });

    match lines {
        Some(lines) => lines,
        None => {
            tracing::warn!("test response results is not an array of strings; ignoring it");
            Vec::new()
        }
    }
}
