pub mod helpers;
pub mod logger;

pub use helpers::{join_url, normalize_base_url};
pub use logger::init_tracing;
