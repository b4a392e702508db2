//! Terminal event reader for the window front end.

use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Events consumed by the window loop.
#[derive(Debug)]
pub enum WindowEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize,
}

/// Spawns the crossterm reader on a dedicated thread. The thread exits when
/// `stop` is set or the receiver is dropped.
pub fn spawn(stop: Arc<AtomicBool>) -> mpsc::UnboundedReceiver<WindowEvent> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        while !stop.load(Ordering::Relaxed) {
            if !event::poll(Duration::from_millis(50)).unwrap_or(false) {
                continue;
            }
            let forwarded = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => WindowEvent::Key(key),
                Ok(Event::Mouse(mouse)) => WindowEvent::Mouse(mouse),
                Ok(Event::Resize(_, _)) => WindowEvent::Resize,
                _ => continue,
            };
            if tx.send(forwarded).is_err() {
                break;
            }
        }
    });
    rx
}
