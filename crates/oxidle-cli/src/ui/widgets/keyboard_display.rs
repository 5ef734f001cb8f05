use oxidle_engine::KeyHints;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::Widget,
};

use super::verdict_color;

const KEY_ROWS: [&str; 4] = ["1234567890", "qwertyuiop", "asdfghjkl", "zxcvbnm- "];

/// On-screen keyboard colored by the session's hint memory.
///
/// Every typeable character appears once (digits, letters, hyphen, and
/// space, drawn as `␣`). Keys keep the strongest verdict color they have
/// earned; unguessed keys stay neutral.
#[derive(Debug)]
pub struct KeyboardDisplay<'a> {
    hints: &'a KeyHints,
}

impl<'a> KeyboardDisplay<'a> {
    pub fn new(hints: &'a KeyHints) -> Self {
        Self { hints }
    }

    /// Rendered height in terminal rows.
    #[must_use]
    pub fn height(&self) -> u16 {
        KEY_ROWS.len().try_into().unwrap_or(u16::MAX)
    }

    fn key(&self, ch: char) -> Span<'static> {
        let label = if ch == ' ' {
            " \u{2423} ".to_string()
        } else {
            format!(" {} ", ch.to_ascii_uppercase())
        };
        let style = match self.hints.hint(ch) {
            Some(verdict) => Style::default()
                .fg(Color::Black)
                .bg(verdict_color(verdict))
                .add_modifier(Modifier::BOLD),
            None => Style::default().fg(Color::Gray).bg(Color::Black),
        };
        Span::styled(label, style)
    }
}

impl Widget for KeyboardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line<'_>> = KEY_ROWS
            .iter()
            .map(|row| {
                let mut spans = Vec::new();
                for (i, ch) in row.chars().enumerate() {
                    if i > 0 {
                        spans.push(Span::raw(" "));
                    }
                    spans.push(self.key(ch));
                }
                Line::from(spans)
            })
            .collect();
        Text::from(lines).centered().render(area, buf);
    }
}
