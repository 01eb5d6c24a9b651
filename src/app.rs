//! Terminal-side state wrapped around the request panel.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::panel::RequestPanel;

const PAGE: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Panel,
    Help,
    Quit,
}

pub struct App {
    pub mode: AppMode,
    /// First visible row of the result area.
    pub scroll: u16,
    /// Last useful value of `scroll`, refreshed on every draw.
    pub max_scroll: u16,
    pub panel: RequestPanel,
}

impl App {
    pub fn new(panel: RequestPanel) -> Self {
        Self {
            mode: AppMode::Panel,
            scroll: 0,
            // Unknown until the first draw
            max_scroll: u16::MAX,
            panel,
        }
    }

    pub async fn handle_key(&mut self, key: KeyEvent) {
        match self.mode {
            // Any key closes help
            AppMode::Help => self.mode = AppMode::Panel,
            AppMode::Panel => self.handle_panel_key(key).await,
            AppMode::Quit => {}
        }
    }

    async fn handle_panel_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.mode = AppMode::Quit,
            KeyCode::Char('c') if ctrl => self.mode = AppMode::Quit,
            KeyCode::F(1) => self.mode = AppMode::Help,
            KeyCode::Enter => {
                self.scroll = 0;
                // Detached: the dispatch settles on its own.
                drop(self.panel.dispatch_single().await);
            }
            KeyCode::Char('b') if ctrl => {
                self.scroll = 0;
                drop(self.panel.dispatch_burst().await);
            }
            KeyCode::Char(c) if !ctrl => self.panel.push_char(c).await,
            KeyCode::Backspace => self.panel.pop_char().await,
            KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::Down => self.scroll = self.scroll.saturating_add(1).min(self.max_scroll),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(PAGE),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(PAGE).min(self.max_scroll),
            KeyCode::Home => self.scroll = 0,
            _ => {}
        }
    }

    pub fn should_quit(&self) -> bool {
        self.mode == AppMode::Quit
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use futures::{FutureExt, future::BoxFuture};
    use serde_json::{Value, json};

    use super::*;
    use crate::{
        clients::{FetchError, Fetcher},
        config::PanelConfig,
        models::RequestResult,
    };

    struct EchoFetcher;

    impl Fetcher for EchoFetcher {
        fn fetch_json(&self, url: String) -> BoxFuture<'static, Result<Value, FetchError>> {
            async move { Ok(json!({ "url": url })) }.boxed()
        }
    }

    fn app() -> App {
        let config = PanelConfig::new("http://backend");
        App::new(RequestPanel::new(&config, Arc::new(EchoFetcher)))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[tokio::test]
    async fn typing_edits_the_endpoint() {
        let mut app = app();
        for _ in 0.."hello".len() {
            app.handle_key(key(KeyCode::Backspace)).await;
        }
        for c in "ping?x=1".chars() {
            app.handle_key(key(KeyCode::Char(c))).await;
        }
        assert_eq!(app.panel.endpoint().await, "/api/ping?x=1");
    }

    #[tokio::test]
    async fn enter_dispatches_and_resets_scroll() {
        let mut app = app();
        app.handle_key(key(KeyCode::PageDown)).await;
        assert_eq!(app.scroll, 10);

        app.handle_key(key(KeyCode::Enter)).await;
        assert_eq!(app.scroll, 0);

        // The echo fetcher settles without I/O; poll until it does.
        loop {
            let state = app.panel.snapshot().await;
            if !state.loading {
                assert_eq!(
                    state.result,
                    Some(RequestResult::Single(json!({ "url": "http://backend/api/hello" })))
                );
                break;
            }
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn ctrl_b_starts_a_burst() {
        let mut app = app();
        app.handle_key(ctrl('b')).await;
        loop {
            let state = app.panel.snapshot().await;
            if !state.loading {
                let Some(RequestResult::Burst(values)) = state.result else {
                    panic!("expected burst result");
                };
                assert_eq!(values.len(), 20);
                break;
            }
            tokio::task::yield_now().await;
        }
        // Ctrl+B must not type a 'b'
        assert_eq!(app.panel.endpoint().await, "/api/hello");
    }

    #[tokio::test]
    async fn help_and_quit_keys() {
        let mut app = app();
        app.handle_key(key(KeyCode::F(1))).await;
        assert_eq!(app.mode, AppMode::Help);

        app.handle_key(key(KeyCode::Char('x'))).await;
        assert_eq!(app.mode, AppMode::Panel);
        assert_eq!(app.panel.endpoint().await, "/api/hello");

        app.handle_key(ctrl('c')).await;
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn scroll_stops_at_the_rendered_limit() {
        let mut app = app();
        app.max_scroll = 12;
        app.handle_key(key(KeyCode::PageDown)).await;
        app.handle_key(key(KeyCode::PageDown)).await;
        assert_eq!(app.scroll, 12);
        app.handle_key(key(KeyCode::Down)).await;
        assert_eq!(app.scroll, 12);

        // One press moves the view again after hitting the bottom.
        app.handle_key(key(KeyCode::Up)).await;
        assert_eq!(app.scroll, 11);
    }

    #[tokio::test]
    async fn scroll_saturates_at_top() {
        let mut app = app();
        app.handle_key(key(KeyCode::Up)).await;
        app.handle_key(key(KeyCode::PageUp)).await;
        assert_eq!(app.scroll, 0);
        app.handle_key(key(KeyCode::Down)).await;
        app.handle_key(key(KeyCode::Down)).await;
        app.handle_key(key(KeyCode::Home)).await;
        assert_eq!(app.scroll, 0);
    }
}
