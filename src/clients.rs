pub mod base;
pub mod fetcher;
pub mod http;

pub use base::{BURST_SIZE, aggregate_burst, fetch_burst, fetch_single};
pub use fetcher::{FetchError, Fetcher};
pub use http::HttpFetcher;
