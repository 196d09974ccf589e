use anyhow::Context;
use counter_config::AppConfig;
use numbers_client::{FactClient, HttpFactClient};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        cursor::Show,
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{self, UnboundedReceiver};

mod actions;
mod dispatcher;
mod effect;
mod keymap;
mod logger;
mod middleware;
mod reducer;
mod runner;
mod state;
mod store;
#[cfg(test)]
mod testing;
mod views;

use actions::Action;
use dispatcher::Dispatcher;
use keymap::Command;
use middleware::logging::LoggingMiddleware;
use runner::EffectRunner;
use state::CounterState;
use store::Store;

fn main() -> anyhow::Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting counter-tca, logging to {}", log_file.display());

    let config = AppConfig::load();
    log::debug!("Using config: {:?}", config);

    // Effects run here; the store itself stays on the UI thread
    let runtime = Runtime::new().context("Failed to create tokio runtime")?;

    let (action_tx, action_rx) = mpsc::unbounded_channel();
    let client: Arc<dyn FactClient> = Arc::new(HttpFactClient::new(config.fact_base_url.clone()));
    let runner = EffectRunner::new(
        runtime.handle().clone(),
        client,
        config.fact_delay(),
        Dispatcher::new(action_tx),
    );

    let mut store = Store::new(CounterState::default(), runner);
    store.add_middleware(Box::new(LoggingMiddleware::new()));

    let needs_redraw = Arc::new(AtomicBool::new(true));
    let redraw_flag = Arc::clone(&needs_redraw);
    store.subscribe(move |_| redraw_flag.store(true, Ordering::Relaxed));

    enable_raw_mode()?;
    let result = run_then_restore(
        || run_in_terminal(&mut store, action_rx, &needs_redraw),
        restore_terminal,
    );

    if let Err(err) = &result {
        log::error!("Event loop failed: {}", err);
    }

    // In-flight fetches are dropped with the runtime
    runtime.shutdown_timeout(Duration::from_millis(100));
    log::info!("Exiting counter-tca");

    result.map_err(Into::into)
}

/// Run `body`, then always run `restore`
///
/// An error from `body` takes precedence; a restore error is logged in that case.
fn run_then_restore<T>(
    body: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    let result = body();
    let restored = restore();
    match (result, restored) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(e)) => Err(e),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(restore_err)) => {
            log::error!("Failed to restore terminal: {}", restore_err);
            Err(e)
        }
    }
}

/// Enter the alternate screen and run the event loop
fn run_in_terminal(
    store: &mut Store,
    action_rx: UnboundedReceiver<Action>,
    needs_redraw: &AtomicBool,
) -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    run_app(&mut terminal, store, action_rx, needs_redraw)
}

/// Leave raw mode and the alternate screen, showing the cursor again
///
/// Safe to call when setup only got partway.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen, Show)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
    mut action_rx: UnboundedReceiver<Action>,
    needs_redraw: &AtomicBool,
) -> io::Result<()> {
    loop {
        // Apply effect results in the order they arrived
        while let Ok(action) = action_rx.try_recv() {
            store.dispatch(action);
        }

        if needs_redraw.swap(false, Ordering::Relaxed) {
            terminal.draw(|frame| views::render(store.state(), frame))?;
        }

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }

        match event::read()? {
            // Only process key press events (ignore key release)
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match keymap::command_for_key(key) {
                    Some(Command::Quit) => break,
                    Some(Command::Dispatch(action)) => store.dispatch(action),
                    None => {}
                }
            }
            Event::Resize(_, _) => needs_redraw.store(true, Ordering::Relaxed),
            _ => {}
        }
    }

    Ok(())
}
