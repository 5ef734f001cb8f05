use crossterm::event::Event as CrosstermEvent;

/// Events delivered to the application by the event loop.
#[derive(Debug, Clone)]
pub(super) enum TuiEvent {
    /// Periodic timing event for animations and timeouts.
    Tick,
    /// The screen should be redrawn.
    Render,
    /// Terminal input (keys, resize, ...).
    Input(CrosstermEvent),
}

impl From<CrosstermEvent> for TuiEvent {
    fn from(event: CrosstermEvent) -> Self {
        TuiEvent::Input(event)
    }
}
