use oxidle_engine::GameSession;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::Widget,
};

use super::verdict_color;

/// The attempt grid: one line per try, one three-character tile per slot.
///
/// Submitted rows are colored by their feedback. The most recently
/// submitted row honors `revealed`, the number of tiles whose verdict the
/// stagger animation has uncovered so far; tiles past that point show the
/// letter without its color yet.
#[derive(Debug)]
pub struct GridDisplay<'a> {
    session: &'a GameSession,
    revealed: usize,
}

impl<'a> GridDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self {
            session,
            revealed: usize::MAX,
        }
    }

    /// Limits verdict coloring of the latest submitted row to its first
    /// `revealed` tiles.
    #[must_use]
    pub fn revealed(self, revealed: usize) -> Self {
        Self { revealed, ..self }
    }

    /// Rendered height in terminal rows (one per try, plus spacing).
    #[must_use]
    pub fn height(&self) -> u16 {
        u16::try_from(self.session.max_tries() * 2 - 1).unwrap_or(u16::MAX)
    }

    fn tile(&self, row: usize, col: usize) -> Span<'static> {
        let slot = self.session.grid().row(row)[col];
        let label = format!(" {} ", slot.map_or(' ', |ch| ch.to_ascii_uppercase()));

        let submitted = self.session.feedback_rows();
        let style = if row < submitted.len() {
            let concealed = row + 1 == submitted.len() && col >= self.revealed;
            if concealed {
                Style::default().fg(Color::White).bg(Color::Black)
            } else {
                Style::default()
                    .fg(Color::Black)
                    .bg(verdict_color(submitted[row][col]))
                    .add_modifier(Modifier::BOLD)
            }
        } else if slot.is_some() {
            Style::default()
                .fg(Color::White)
                .bg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray).bg(Color::Black)
        };

        Span::styled(label, style)
    }
}

impl Widget for GridDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let word_len = self.session.secret_len();
        let mut lines = Vec::new();
        for row in 0..self.session.max_tries() {
            let mut spans = Vec::new();
            for col in 0..word_len {
                if col > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(self.tile(row, col));
            }
            lines.push(Line::from(spans));
            // Blank line between tries keeps the grid readable.
            if row + 1 < self.session.max_tries() {
                lines.push(Line::default());
            }
        }
        Text::from(lines).centered().render(area, buf);
    }
}
