//! TUI rendering.
//!
//! - `layout.rs`: the whole panel, top to bottom
//! - `widgets/`: overlays

mod layout;

pub mod widgets;

pub use layout::render;
