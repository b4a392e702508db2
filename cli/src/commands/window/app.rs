//! Window state: the visible conversation, the input field and the close
//! countdown. Key handling is kept free of terminal I/O so it can be tested
//! directly.

use crate::bot::engine::Chatbot;
use crate::core::error::ChatError;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use tokio::time::Instant;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    You,
    Bot,
}

impl Speaker {
    pub fn label(self) -> &'static str {
        match self {
            Speaker::You => "👤 You",
            Speaker::Bot => "🤖 Bot",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
}

pub struct App {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    /// Byte offset into `input`.
    pub cursor: usize,
    /// Rows scrolled up from the bottom of the transcript pane.
    pub scroll_offset: u16,
    /// Set once the farewell is shown; the window closes at this instant.
    pub closing_at: Option<Instant>,
    pub should_exit: bool,
    grace: Duration,
}

impl App {
    pub fn new(greeting: String, grace: Duration) -> Self {
        Self {
            messages: vec![ChatMessage {
                speaker: Speaker::Bot,
                text: greeting,
            }],
            input: String::new(),
            cursor: 0,
            scroll_offset: 0,
            closing_at: None,
            should_exit: false,
            grace,
        }
    }

    pub fn is_closing(&self) -> bool {
        self.closing_at.is_some()
    }

    pub fn status_line(&self) -> &'static str {
        if self.is_closing() {
            " Closing... "
        } else {
            " Enter or [ Send ] to send · Esc to close · ↑/↓ to scroll "
        }
    }

    /// Sends the input field to `bot`. Blank input is left untouched and not
    /// recorded; input is ignored entirely while the window is closing.
    pub fn submit(&mut self, bot: &mut Chatbot) {
        if self.is_closing() {
            return;
        }
        let text = self.input.trim().to_owned();
        match bot.try_respond(&text) {
            Ok(exchange) => {
                let ends = exchange.ends_session();
                self.input.clear();
                self.cursor = 0;
                self.scroll_offset = 0;
                self.messages.push(ChatMessage {
                    speaker: Speaker::You,
                    text,
                });
                self.messages.push(ChatMessage {
                    speaker: Speaker::Bot,
                    text: exchange.reply,
                });
                if ends {
                    self.closing_at = Some(Instant::now() + self.grace);
                }
            }
            Err(ChatError::EmptyInput) => {}
            Err(e) => warn!("Input not handled: {}", e),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, bot: &mut Chatbot) {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) | (_, KeyCode::Esc) => {
                self.should_exit = true;
            }
            (_, KeyCode::Enter) => self.submit(bot),
            (_, KeyCode::Up) => self.scroll_up(1),
            (_, KeyCode::Down) => self.scroll_down(1),
            (_, KeyCode::PageUp) => self.scroll_up(10),
            (_, KeyCode::PageDown) => self.scroll_down(10),
            _ if self.is_closing() => {}
            (_, KeyCode::Backspace) => self.delete_char_before_cursor(),
            (_, KeyCode::Left) => self.move_cursor_left(),
            (_, KeyCode::Right) => self.move_cursor_right(),
            (_, KeyCode::Home) => self.cursor = 0,
            (_, KeyCode::End) => self.cursor = self.input.len(),
            (_, KeyCode::Char(c)) => self.insert_char(c),
            _ => {}
        }
    }

    fn scroll_up(&mut self, rows: u16) {
        self.scroll_offset = self.scroll_offset.saturating_add(rows);
    }

    fn scroll_down(&mut self, rows: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(rows);
    }

    fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    fn previous_boundary(&self) -> usize {
        self.input[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn delete_char_before_cursor(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = self.previous_boundary();
        self.input.drain(prev..self.cursor);
        self.cursor = prev;
    }

    fn move_cursor_left(&mut self) {
        self.cursor = self.previous_boundary();
    }

    fn move_cursor_right(&mut self) {
        if self.cursor >= self.input.len() {
            return;
        }
        self.cursor = self.input[self.cursor..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor + i)
            .unwrap_or(self.input.len());
    }
}
