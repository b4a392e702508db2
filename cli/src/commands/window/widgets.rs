//! Layout and rendering for the window front end.

use super::app::{App, Speaker};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

pub const SEND_LABEL: &str = "[ Send ]";
const SEND_WIDTH: u16 = SEND_LABEL.len() as u16 + 2;

/// Screen regions of the window. Shared by drawing and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowLayout {
    pub transcript: Rect,
    pub input: Rect,
    pub send: Rect,
    pub status: Rect,
}

impl WindowLayout {
    pub fn is_send(&self, column: u16, row: u16) -> bool {
        self.send.contains(Position::new(column, row))
    }
}

pub fn layout(area: Rect) -> WindowLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);
    let input_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(SEND_WIDTH)])
        .split(rows[1]);

    WindowLayout {
        transcript: rows[0],
        input: input_row[0],
        send: input_row[1],
        status: rows[2],
    }
}

pub fn draw(f: &mut Frame, app: &App) {
    let regions = layout(f.area());
    draw_transcript(f, app, regions.transcript);
    draw_input(f, app, regions.input);
    draw_send(f, app, regions.send);
    draw_status(f, app, regions.status);
}

fn draw_transcript(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    for msg in &app.messages {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        let label_style = match msg.speaker {
            Speaker::You => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            Speaker::Bot => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", msg.speaker.label()), label_style),
            Span::raw(msg.text.as_str()),
        ]));
    }

    // Row count comes from the same word wrapper that renders the text, so the
    // bottom of the last reply is never scrolled out of view.
    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    let inner_w = area.width.saturating_sub(2);
    let wrapped_total = u16::try_from(para.line_count(inner_w)).unwrap_or(u16::MAX);
    let visible = area.height.saturating_sub(2);
    let scroll = wrapped_total
        .saturating_sub(visible)
        .saturating_sub(app.scroll_offset);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Portfolio Chatbot ");
    f.render_widget(para.block(block).scroll((scroll, 0)), area);
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let inner_w = area.width.saturating_sub(2) as usize;
    let before_cursor = &app.input[..app.cursor];
    let cursor_w = before_cursor.width();
    // Keep the cursor visible on a single-line field by scrolling horizontally.
    let h_scroll = cursor_w.saturating_sub(inner_w.saturating_sub(1));

    let block = Block::default().borders(Borders::ALL).title(" Message ");
    let para = Paragraph::new(app.input.as_str())
        .block(block)
        .scroll((0, h_scroll as u16));
    f.render_widget(para, area);

    if !app.is_closing() {
        f.set_cursor_position(Position::new(
            area.x + 1 + (cursor_w - h_scroll) as u16,
            area.y + 1,
        ));
    }
}

fn draw_send(f: &mut Frame, app: &App, area: Rect) {
    let style = if app.is_closing() {
        Style::default().dim()
    } else {
        Style::default().fg(Color::Black).bg(Color::Green).bold()
    };
    let para = Paragraph::new(Span::styled(SEND_LABEL, style))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(para, area);
}

fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let para = Paragraph::new(Line::from(Span::styled(
        app.status_line(),
        Style::default().fg(Color::DarkGray),
    )));
    f.render_widget(para, area);
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Duration;

    #[test]
    fn test_layout_places_send_right_of_input() {
        let regions = layout(Rect::new(0, 0, 80, 24));
        assert_eq!(regions.status.height, 1);
        assert_eq!(regions.input.height, 3);
        assert_eq!(regions.send.width, SEND_WIDTH);
        assert_eq!(regions.send.x, regions.input.x + regions.input.width);
        assert_eq!(regions.transcript.height, 20);
    }

    #[test]
    fn test_send_hit_test() {
        let regions = layout(Rect::new(0, 0, 80, 24));
        let s = regions.send;
        assert!(regions.is_send(s.x, s.y));
        assert!(regions.is_send(s.x + s.width - 1, s.y + s.height - 1));
        assert!(!regions.is_send(s.x - 1, s.y));
        assert!(!regions.is_send(0, 0));
    }

    fn rendered_rows(app: &App, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn test_last_reply_stays_visible_at_narrow_widths() {
        let mut app = App::new("Hello! How can I help you today?".into(), Duration::ZERO);
        for (speaker, text) in [
            (Speaker::You, "what skills do you have?"),
            (
                Speaker::Bot,
                "I work mostly with Python, machine learning frameworks and \
                 building web applications with modern tooling.",
            ),
            (Speaker::You, "and your projects?"),
            (
                Speaker::Bot,
                "My projects include a sentiment aware chatbot, a portfolio \
                 site and several data analysis notebooks.",
            ),
            (Speaker::You, "bye"),
            (Speaker::Bot, crate::bot::responder::FAREWELL),
        ] {
            app.messages.push(super::super::app::ChatMessage {
                speaker,
                text: text.to_string(),
            });
        }

        for width in 24..=90 {
            let rows = rendered_rows(&app, width, 14);
            // Transcript rows only; the input box and status line follow.
            let transcript = rows[..rows.len() - 4].join("");
            assert!(
                transcript.contains("day!"),
                "farewell tail cut off at width {width}:\n{}",
                rows.join("\n")
            );
        }
    }

    #[test]
    fn test_draw_renders_greeting_and_button() {
        let app = App::new("Hello! Welcome.".into(), Duration::ZERO);
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Hello! Welcome."));
        assert!(text.contains(SEND_LABEL));
    }
}
