//! The request panel: endpoint text, last result and the loading flag,
//! plus the two dispatch operations that drive them.

use std::{fmt, str::FromStr, sync::Arc};

use thiserror::Error;
use tokio::{
    sync::{Mutex, MutexGuard},
    task::JoinHandle,
};
use tracing::info;

use crate::{
    clients::{FetchError, Fetcher, HttpFetcher, fetch_burst, fetch_single},
    config::PanelConfig,
    models::{PanelState, PanelView},
    utils::join_url,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DispatchMode {
    #[default]
    Single,
    Burst,
}

#[derive(Debug, Error)]
#[error("Invalid dispatch mode: '{0}'. Expected 'single' or 'burst'.")]
pub struct InvalidDispatchMode(String);

impl FromStr for DispatchMode {
    type Err = InvalidDispatchMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" => Ok(DispatchMode::Single),
            "burst" => Ok(DispatchMode::Burst),
            _ => Err(InvalidDispatchMode(s.to_string())),
        }
    }
}

impl fmt::Display for DispatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchMode::Single => write!(f, "single"),
            DispatchMode::Burst => write!(f, "burst"),
        }
    }
}

/// Shared handle to the panel state.
///
/// Cloning is cheap and every clone sees the same state. Nothing guards
/// against overlapping dispatches: each one writes its own outcome when it
/// settles, so the last dispatch to settle owns the result area.
#[derive(Clone)]
pub struct RequestPanel {
    state: Arc<Mutex<PanelState>>,
    fetcher: Arc<dyn Fetcher>,
    base_url: String,
    burst_size: usize,
}

impl RequestPanel {
    pub fn new(config: &PanelConfig, fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            state: Arc::new(Mutex::new(PanelState::new(config.endpoint.clone()))),
            fetcher,
            base_url: config.base_url.clone(),
            burst_size: config.burst_size,
        }
    }

    /// Panel backed by a real HTTP client built from `config`.
    pub fn with_http(config: &PanelConfig) -> Result<Self, FetchError> {
        let fetcher = HttpFetcher::new(config.request_timeout)?;
        Ok(Self::new(config, Arc::new(fetcher)))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn burst_size(&self) -> usize {
        self.burst_size
    }

    pub async fn lock(&self) -> MutexGuard<'_, PanelState> {
        self.state.lock().await
    }

    pub async fn snapshot(&self) -> PanelState {
        self.state.lock().await.clone()
    }

    pub async fn view(&self) -> PanelView {
        self.state.lock().await.view()
    }

    pub async fn endpoint(&self) -> String {
        self.state.lock().await.endpoint.clone()
    }

    /// Stored verbatim; no trimming or validation.
    pub async fn set_endpoint(&self, endpoint: impl Into<String>) {
        self.state.lock().await.endpoint = endpoint.into();
    }

    pub async fn push_char(&self, c: char) {
        self.state.lock().await.endpoint.push(c);
    }

    pub async fn pop_char(&self) {
        self.state.lock().await.endpoint.pop();
    }

    pub async fn dispatch_single(&self) -> JoinHandle<()> {
        self.dispatch(DispatchMode::Single).await
    }

    pub async fn dispatch_burst(&self) -> JoinHandle<()> {
        self.dispatch(DispatchMode::Burst).await
    }

    /// Starts a dispatch and returns once loading is visible.
    ///
    /// The returned handle completes after the outcome has been written to
    /// the state. Dropping it detaches the dispatch; it still settles.
    pub async fn dispatch(&self, mode: DispatchMode) -> JoinHandle<()> {
        let endpoint = {
            let mut state = self.state.lock().await;
            state.begin_dispatch();
            state.endpoint.clone()
        };
        let url = join_url(&self.base_url, &endpoint);

        info!(mode = %mode, url = url.as_str(), "Dispatch started");

        let state = self.state.clone();
        let fetcher = self.fetcher.clone();
        let burst_size = self.burst_size;

        tokio::spawn(async move {
            let result = match mode {
                DispatchMode::Single => fetch_single(fetcher.as_ref(), &url).await,
                DispatchMode::Burst => fetch_burst(fetcher.as_ref(), &url, burst_size).await,
            };

            info!(
                mode = %mode,
                url = url.as_str(),
                failed = result.is_failed(),
                "Dispatch settled"
            );

            state.lock().await.settle(result);
        })
    }
}
