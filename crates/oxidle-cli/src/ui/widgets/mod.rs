use oxidle_engine::Verdict;
use ratatui::style::Color;

pub use self::{grid_display::GridDisplay, keyboard_display::KeyboardDisplay};

mod grid_display;
mod keyboard_display;

/// Shared verdict coloring for tiles and keyboard keys.
fn verdict_color(verdict: Verdict) -> Color {
    match verdict {
        Verdict::Correct => Color::Green,
        Verdict::Present => Color::Yellow,
        Verdict::Absent => Color::DarkGray,
    }
}
