pub mod panel_state;
pub mod request_result;

pub use panel_state::{PanelState, PanelView};
pub use request_result::{ErrorMarker, RequestResult};
