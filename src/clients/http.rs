use std::time::Duration;

use futures::{FutureExt, future::BoxFuture};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::fetcher::{FetchError, Fetcher};

/// reqwest-backed fetcher sharing one connection pool across requests.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Without a timeout a hung backend keeps the request pending forever.
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch_json(&self, url: String) -> BoxFuture<'static, Result<Value, FetchError>> {
        let client = self.client.clone();
        async move {
            // Status is not checked: any JSON body counts, error pages included.
            let response = client.get(&url).send().await?;
            let status = response.status();
            let body = response.bytes().await?;

            debug!(
                url = url.as_str(),
                status_code = status.as_u16(),
                body_len = body.len(),
                "Response received"
            );

            serde_json::from_slice::<Value>(&body).map_err(|e| FetchError::Decode(e.to_string()))
        }
        .boxed()
    }
}
