//! # Window Chat (`chatrs window`)
//!
//! File: cli/src/commands/window/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A full-screen terminal window for the chatbot, drawn with `ratatui`:
//! a scrollable transcript pane, a single-line message field, a `[ Send ]`
//! button and a status line. The greeting is shown as soon as the window
//! opens.
//!
//! - **Enter** or a left click on `[ Send ]` sends the message.
//! - **Esc** or **Ctrl+C** closes the window.
//! - **↑/↓/PgUp/PgDn** (or the mouse wheel) scroll the transcript.
//!
//! After an exit phrase the farewell stays on screen for a grace period
//! (`--grace-ms`, or `[window] exit_grace_ms` in config) before the window
//! closes; input is ignored meanwhile. SIGHUP and SIGTERM close the window
//! like Esc does. However the window closes, the terminal is restored and the
//! transcript is saved.
//!
//! ## Architecture
//!
//! - **`app`**: window state and key handling, independent of the terminal.
//! - **`event`**: crossterm reader thread feeding a channel.
//! - **`widgets`**: layout (shared with mouse hit-testing) and drawing.
//!
mod app;
mod event;
mod widgets;

use self::app::App;
use self::event::WindowEvent;
use super::session::{self, FrontEnd, SessionArgs, SessionSettings, TerminationSignals};
use crate::bot::engine::Chatbot;
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Args;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture, MouseButton, MouseEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::future::Future;
use std::io::{self, Write};
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, error, info};

#[derive(Args, Debug)]
pub struct WindowArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Milliseconds the farewell stays visible before the window closes.
    #[arg(long, value_parser = clap::value_parser!(u64).range(..=10_000))]
    pub grace_ms: Option<u64>,
}

pub async fn handle_window(args: WindowArgs) -> Result<()> {
    let config = config::load_config()?;
    let settings = SessionSettings::resolve(&args.session, &config, FrontEnd::Window);
    let grace = Duration::from_millis(args.grace_ms.unwrap_or(config.window.exit_grace_ms));
    let mut bot = session::build_chatbot(&settings)?;
    let mut signals = TerminationSignals::install()?;

    let outcome = run(&mut bot, grace, &mut signals).await;
    if let Err(e) = &outcome {
        error!("Window session aborted: {:?}", e);
    }

    // The terminal guard has been dropped by now. After a hangup stdout may
    // be gone, so a failed write is only logged.
    if session::persist_transcript(&bot, &settings.transcript) {
        let path = settings.transcript.display();
        if let Err(e) = writeln!(io::stdout(), "📝 Chat history saved to {}", path) {
            debug!("Could not report the transcript path: {}", e);
        }
    }
    outcome
}

/// Restores the terminal when dropped, including on error paths.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw terminal mode")?;
        let guard = TerminalGuard;
        crossterm::execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter the alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = crossterm::execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

async fn run(bot: &mut Chatbot, grace: Duration, signals: &mut TerminationSignals) -> Result<()> {
    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
        .context("Failed to initialize the terminal")?;

    let stop = Arc::new(AtomicBool::new(false));
    let mut events = event::spawn(stop.clone());
    let mut app = App::new(bot.greeting(), grace);
    info!("Window opened");

    let shutdown = signals.recv();
    tokio::pin!(shutdown);
    let result = event_loop(&mut terminal, &mut app, bot, &mut events, shutdown).await;
    stop.store(true, Ordering::Relaxed);
    info!("Window closed after {} turns", bot.log().len());
    result
}

/// Redraws after every event until the app asks to exit, the event channel
/// closes or `shutdown` (a termination signal) completes.
async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    bot: &mut Chatbot,
    events: &mut mpsc::UnboundedReceiver<WindowEvent>,
    mut shutdown: Pin<&mut impl Future<Output = &'static str>>,
) -> Result<()> {
    terminal.draw(|f| widgets::draw(f, app))?;

    while !app.should_exit {
        tokio::select! {
            _ = wait_until(app.closing_at) => {
                debug!("Grace period elapsed");
                app.should_exit = true;
            }
            name = shutdown.as_mut() => {
                info!("Received {}, closing the window", name);
                app.should_exit = true;
                // The terminal may be gone; skip the final redraw.
                break;
            }
            evt = events.recv() => {
                let Some(evt) = evt else { break };
                match evt {
                    WindowEvent::Key(key) => app.handle_key(key, bot),
                    WindowEvent::Mouse(mouse) => {
                        let size = terminal.size()?;
                        let regions = widgets::layout(Rect::new(0, 0, size.width, size.height));
                        match mouse.kind {
                            MouseEventKind::Down(MouseButton::Left)
                                if regions.is_send(mouse.column, mouse.row) =>
                            {
                                app.submit(bot)
                            }
                            MouseEventKind::ScrollUp => {
                                app.scroll_offset = app.scroll_offset.saturating_add(1)
                            }
                            MouseEventKind::ScrollDown => {
                                app.scroll_offset = app.scroll_offset.saturating_sub(1)
                            }
                            _ => {}
                        }
                    }
                    WindowEvent::Resize => {}
                }
            }
        }
        terminal.draw(|f| widgets::draw(f, app))?;
    }
    Ok(())
}

/// Completes at `deadline`, or never when there is none.
async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}
