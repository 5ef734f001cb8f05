use crossterm::event::Event;
use ratatui::Frame;

use crate::tui::Tui;

/// Trait for applications driven by [`Tui::run`].
pub trait App {
    /// Called once before the event loop starts; configure the tick rate
    /// here.
    fn init(&mut self, tui: &mut Tui);

    /// Returns whether the event loop should stop.
    fn should_exit(&self) -> bool;

    /// Handles one terminal event.
    fn handle_event(&mut self, tui: &mut Tui, event: &Event);

    /// Draws the screen.
    fn draw(&self, frame: &mut Frame);

    /// Advances time-based state (animations, message timeouts).
    fn update(&mut self, tui: &mut Tui);
}
