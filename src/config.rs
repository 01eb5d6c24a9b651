use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::{
    clients::BURST_SIZE, models::panel_state::DEFAULT_ENDPOINT, panel::DispatchMode,
    utils::normalize_base_url,
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Terminal request panel for a JSON backend.
#[derive(Parser, Debug, Clone)]
#[command(name = "rusty-xapi")]
#[command(about = "Call a backend endpoint once or in a burst of 20 and inspect the JSON")]
pub struct Args {
    /// Backend origin every endpoint is appended to
    #[arg(short, long, env = "XAPI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Initial endpoint path
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Per-request timeout in seconds (requests wait forever when unset)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Write tracing output to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Run a single dispatch ('single' or 'burst'), print the result and exit
    #[arg(long)]
    pub once: Option<DispatchMode>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PanelConfig {
    pub base_url: String,
    pub endpoint: String,
    pub burst_size: usize,
    pub request_timeout: Option<Duration>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl PanelConfig {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.as_ref()),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            burst_size: BURST_SIZE,
            request_timeout: None,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

impl From<&Args> for PanelConfig {
    fn from(args: &Args) -> Self {
        let config = PanelConfig::new(&args.base_url).with_endpoint(args.endpoint.clone());
        match args.timeout_secs {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = PanelConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.endpoint, "/api/hello");
        assert_eq!(config.burst_size, 20);
        assert_eq!(config.request_timeout, None);
    }

    #[test]
    fn args_map_onto_config() {
        let args = Args::parse_from([
            "rusty-xapi",
            "--base-url",
            "http://127.0.0.1:8080/",
            "--endpoint",
            "/status",
            "--timeout-secs",
            "3",
            "--once",
            "burst",
        ]);
        assert_eq!(args.once, Some(DispatchMode::Burst));

        let config = PanelConfig::from(&args);
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.endpoint, "/status");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn bad_once_mode_is_rejected() {
        assert!(Args::try_parse_from(["rusty-xapi", "--once", "twice"]).is_err());
    }
}
