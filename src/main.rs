//! rusty-xapi: terminal request panel.

use std::io;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use rusty_xapi::{App, Args, DispatchMode, PanelConfig, RequestPanel, init_tracing, ui};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(log_file) = &args.log_file {
        init_tracing(log_file)?;
    }

    let config = PanelConfig::from(&args);
    let panel = RequestPanel::with_http(&config).context("Failed to create HTTP client")?;

    info!(
        base_url = config.base_url.as_str(),
        endpoint = config.endpoint.as_str(),
        "Request panel ready"
    );

    if let Some(mode) = args.once {
        return run_once(&panel, mode).await;
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, App::new(panel)).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Headless mode: one dispatch, print what the panel would show.
async fn run_once(panel: &RequestPanel, mode: DispatchMode) -> anyhow::Result<()> {
    panel
        .dispatch(mode)
        .await
        .await
        .context("Dispatch task failed")?;
    println!("{}", panel.view().await.text());
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> anyhow::Result<()> {
    loop {
        let state = app.panel.snapshot().await;
        terminal.draw(|frame| ui::render(frame, &mut app, &state))?;

        // Poll with a timeout so settled dispatches show up without input
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key).await;
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
