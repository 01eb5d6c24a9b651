use futures::future::BoxFuture;
use serde_json::Value;
use thiserror::Error;

/// Reasons a single request can fail.
///
/// The panel collapses every variant into the same error marker; the
/// distinction only shows up in logs.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Failed to decode JSON body: {0}")]
    Decode(String),
    #[error("Request task failed: {0}")]
    TaskFailed(String),
}

/// Issues one GET and decodes the body as JSON.
///
/// The returned future owns everything it needs, so callers can spawn it.
/// Calling `fetch_json` is what submits a request: burst mode calls it in
/// submission order before awaiting anything.
pub trait Fetcher: Send + Sync + 'static {
    fn fetch_json(&self, url: String) -> BoxFuture<'static, Result<Value, FetchError>>;
}
