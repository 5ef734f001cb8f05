use crossterm::event::Event;
use oxidle_engine::{RandomPicker, WordList};
use ratatui::Frame;

use crate::{
    command::play::screen::PlayScreen,
    record::GameRecord,
    tui::{App, Tui},
};

/// Ticks per second; drives the reveal stagger and message expiry.
const TICK_RATE: f64 = 10.0;

#[derive(Debug)]
pub struct PlayApp {
    screen: PlayScreen,
}

impl PlayApp {
    pub fn new(words: WordList, max_tries: usize, picker: RandomPicker) -> Self {
        Self {
            screen: PlayScreen::new(words, max_tries, picker),
        }
    }

    pub fn into_record(self) -> GameRecord {
        self.screen.into_record()
    }
}

impl App for PlayApp {
    fn init(&mut self, tui: &mut Tui) {
        tui.set_tick_rate(TICK_RATE);
    }

    fn should_exit(&self) -> bool {
        self.screen.is_exiting()
    }

    fn handle_event(&mut self, _tui: &mut Tui, event: &Event) {
        self.screen.handle_event(event);
    }

    fn draw(&self, frame: &mut Frame) {
        self.screen.draw(frame);
    }

    fn update(&mut self, _tui: &mut Tui) {
        self.screen.update();
    }
}
