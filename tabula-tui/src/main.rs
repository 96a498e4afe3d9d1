//! Tabula TUI entry point.

use crossterm::{
    event::{self, Event as CrosstermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tabula_tui::config::TuiConfig;
use tabula_tui::data;
use tabula_tui::error::TuiError;
use tabula_tui::events::TuiEvent;
use tabula_tui::keys::{map_key, map_prompt_key, Action};
use tabula_tui::logging;
use tabula_tui::notifications::NotificationLevel;
use tabula_tui::persistence;
use tabula_tui::state::App;
use tabula_tui::views::render_view;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config_path = TuiConfig::locate()?;
    let config = TuiConfig::load(&config_path)?;
    logging::init_tracing(&config.log_path)?;
    tracing::info!(
        path = %config_path.display(),
        tables = config.tables.len(),
        "Loaded TUI configuration"
    );
    let mut app = App::new(config)?;

    match persistence::load(&app.config.persistence_path) {
        Ok(Some(state)) => app.restore(state),
        Ok(None) => {}
        Err(err) => {
            tracing::warn!(error = %err, "Ignoring unreadable UI state file");
            app.notify(
                NotificationLevel::Warning,
                format!("Saved state ignored: {}", err),
            );
        }
    }
    reload_all(&mut app).await;

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard;

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    spawn_input_reader(event_tx);

    let tick_rate = Duration::from_millis(app.config.refresh_interval_ms);
    let mut ticker = tokio::time::interval(tick_rate);
    ticker.tick().await;

    loop {
        terminal.draw(|f| render_view(f, &mut app))?;

        tokio::select! {
            _ = ticker.tick() => reload_all(&mut app).await,
            Some(event) = event_rx.recv() => {
                if handle_event(&mut app, event).await {
                    break;
                }
            }
        }
    }

    if let Err(err) = persistence::save(&app.config.persistence_path, &app.persisted_state()) {
        tracing::warn!(error = %err, "Failed to save UI state");
    }
    tracing::info!("Exiting");

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            let sent = match event::read() {
                Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                    sender.blocking_send(TuiEvent::Input(key))
                }
                Ok(CrosstermEvent::Resize(width, height)) => {
                    sender.blocking_send(TuiEvent::Resize { width, height })
                }
                _ => Ok(()),
            };
            if sent.is_err() {
                break;
            }
        }
    });
}

/// Returns true when the app should exit.
async fn handle_event(app: &mut App, event: TuiEvent) -> bool {
    match event {
        TuiEvent::Input(key) => {
            if app.prompt.is_some() {
                if let Some(action) = map_prompt_key(key) {
                    app.apply_prompt(action);
                }
            } else if app.modal.is_some() {
                app.modal = None;
            } else if let Some(action) = map_key(key) {
                return handle_action(app, action).await;
            }
        }
        TuiEvent::Resize { width, height } => {
            tracing::debug!(width, height, "Terminal resized");
        }
    }
    false
}

async fn handle_action(app: &mut App, action: Action) -> bool {
    match action {
        Action::Quit => return true,
        Action::Refresh => {
            reload_all(app).await;
            let failed = app.panes.iter().filter(|p| p.load.error.is_some()).count();
            if failed == 0 {
                app.notify(
                    NotificationLevel::Info,
                    format!("Reloaded {} tables", app.panes.len()),
                );
            }
        }
        other => app.apply(other),
    }
    false
}

async fn reload_all(app: &mut App) {
    for index in 0..app.panes.len() {
        let path = app.panes[index].spec.data_path.clone();
        let result = data::load_records(&path).await;
        app.apply_records(index, result);
    }
}
