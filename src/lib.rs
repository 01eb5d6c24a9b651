//! rusty_xapi: a terminal request panel for JSON backends.
//!
//! Type an endpoint path, call it once or fire a burst of 20 concurrent
//! requests, and read the pretty-printed JSON (or the
//! `{"error": "API request failed"}` marker) in a scrollable panel.
//!
//! ```text
//!   keys ──► App ──► RequestPanel ──► Fetcher (reqwest) ──► backend
//!                         │
//!                    PanelState ──► ui::render
//! ```
//!
//! A burst waits for every request to settle. Any failure among them
//! replaces the whole batch with the error marker; otherwise the bodies are
//! shown in submission order.

pub mod app;
pub mod clients;
pub mod config;
pub mod models;
pub mod panel;
pub mod ui;
pub mod utils;

pub use app::{App, AppMode};
pub use clients::{FetchError, Fetcher, HttpFetcher};
pub use config::{Args, PanelConfig};
pub use models::{ErrorMarker, PanelState, PanelView, RequestResult};
pub use panel::{DispatchMode, RequestPanel};
pub use utils::init_tracing;
