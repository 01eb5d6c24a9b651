use super::RequestResult;

pub const DEFAULT_ENDPOINT: &str = "/api/hello";
pub const LOADING_TEXT: &str = "Calling API...";
pub const PLACEHOLDER_TEXT: &str = "API Response will appear here...";

/// The three view-state cells of the request panel.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelState {
    pub endpoint: String,
    pub result: Option<RequestResult>,
    pub loading: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl PanelState {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            result: None,
            loading: false,
        }
    }

    /// Dispatch prelude: loading on, previous result gone.
    pub(crate) fn begin_dispatch(&mut self) {
        self.loading = true;
        self.result = None;
    }

    pub(crate) fn settle(&mut self, result: RequestResult) {
        self.result = Some(result);
        self.loading = false;
    }

    pub fn view(&self) -> PanelView {
        PanelView::from(self)
    }
}

/// What the result area shows for a given state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelView {
    Loading,
    Response(String),
    Placeholder,
}

impl From<&PanelState> for PanelView {
    fn from(state: &PanelState) -> Self {
        if state.loading {
            PanelView::Loading
        } else if let Some(result) = &state.result
            && !result.is_blank()
        {
            PanelView::Response(result.to_pretty_json())
        } else {
            PanelView::Placeholder
        }
    }
}

impl PanelView {
    pub fn text(&self) -> &str {
        match self {
            PanelView::Loading => LOADING_TEXT,
            PanelView::Response(body) => body,
            PanelView::Placeholder => PLACEHOLDER_TEXT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fresh_state_shows_placeholder() {
        let state = PanelState::default();
        assert_eq!(state.endpoint, "/api/hello");
        assert_eq!(state.view(), PanelView::Placeholder);
        assert_eq!(state.view().text(), PLACEHOLDER_TEXT);
    }

    #[test]
    fn falsy_single_body_shows_placeholder() {
        for body in [json!(null), json!(false), json!(0), json!("")] {
            let mut state = PanelState::default();
            state.settle(RequestResult::Single(body));
            assert!(state.result.is_some());
            assert_eq!(state.view(), PanelView::Placeholder);
        }

        let mut state = PanelState::default();
        state.settle(RequestResult::Burst(vec![json!(null), json!(0)]));
        assert_eq!(
            state.view(),
            PanelView::Response("[\n  null,\n  0\n]".to_string())
        );
    }

    #[test]
    fn loading_wins_over_a_stale_result() {
        let mut state = PanelState::default();
        state.result = Some(RequestResult::Single(json!({ "ok": true })));
        state.loading = true;
        assert_eq!(state.view(), PanelView::Loading);
    }

    #[test]
    fn begin_then_settle_walks_the_lifecycle() {
        let mut state = PanelState::default();
        state.settle(RequestResult::Single(json!(1)));

        state.begin_dispatch();
        assert!(state.loading);
        assert!(state.result.is_none());

        state.settle(RequestResult::failed());
        assert!(!state.loading);
        assert_eq!(
            state.view(),
            PanelView::Response("{\n  \"error\": \"API request failed\"\n}".to_string())
        );
    }
}
