use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use oxidle_engine::{
    GameSeed, GameSession, RandomPicker, SessionStatus, SubmitError, WordList,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::Text,
};

use crate::{
    record::GameRecord,
    ui::widgets::{GridDisplay, KeyboardDisplay},
};

/// Ticks a transient message stays visible (~3s at the 10 Hz tick rate).
const MESSAGE_TICKS: u32 = 30;
/// Ticks a reveal-answer message stays visible.
const REVEAL_MESSAGE_TICKS: u32 = 80;
/// Ticks between uncovering consecutive tiles of a submitted row.
const TICKS_PER_TILE: u32 = 2;

#[derive(Debug)]
struct Message {
    text: String,
    /// `None` keeps the message until the next state change (end of game).
    ttl: Option<u32>,
}

/// The interactive game screen: owns the session and everything cosmetic
/// around it (stagger animation, transient messages, key dispatch).
///
/// Every input event maps to at most one session call; the session is
/// always fully up to date the moment the call returns, and the stagger
/// only affects what is drawn.
#[derive(Debug)]
pub struct PlayScreen {
    words: WordList,
    max_tries: usize,
    seed: GameSeed,
    session: GameSession,
    revealed: usize,
    reveal_tick: u32,
    message: Option<Message>,
    is_exiting: bool,
}

impl PlayScreen {
    pub fn new(words: WordList, max_tries: usize, mut picker: RandomPicker) -> Self {
        let seed = picker.seed();
        let session = GameSession::new(words.clone(), max_tries, &mut picker);
        Self {
            words,
            max_tries,
            seed,
            session,
            revealed: 0,
            reveal_tick: 0,
            message: None,
            is_exiting: false,
        }
    }

    pub fn is_exiting(&self) -> bool {
        self.is_exiting
    }

    pub fn into_record(self) -> GameRecord {
        GameRecord::from_session(&self.session, self.seed)
    }

    fn new_game(&mut self) {
        let mut picker = RandomPicker::new();
        self.seed = picker.seed();
        self.session = GameSession::new(self.words.clone(), self.max_tries, &mut picker);
        self.revealed = 0;
        self.reveal_tick = 0;
        self.message = None;
    }

    fn show_message(&mut self, text: impl Into<String>, ttl: Option<u32>) {
        self.message = Some(Message {
            text: text.into(),
            ttl,
        });
    }

    fn submit(&mut self) {
        match self.session.submit_guess() {
            Ok(outcome) => {
                self.revealed = 0;
                self.reveal_tick = 0;
                match outcome.status {
                    SessionStatus::Won => self.show_message("Correct, you win!", None),
                    SessionStatus::Lost => {
                        let answer = self.session.reveal().to_uppercase();
                        self.show_message(format!("Out of tries, the answer was: {answer}"), None);
                    }
                    SessionStatus::InProgress => self.message = None,
                }
            }
            Err(SubmitError::GameOver) => {}
            Err(err) => self.show_message(err.to_string(), Some(MESSAGE_TICKS)),
        }
    }

    pub fn handle_event(&mut self, event: &Event) {
        let Some(key) = event.as_key_event() else {
            return;
        };
        if key.kind == KeyEventKind::Release {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.is_exiting = true,
            KeyCode::Char('c') if ctrl => self.is_exiting = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Char('r') if ctrl => {
                let answer = self.session.reveal().to_uppercase();
                self.show_message(format!("Answer: {answer}"), Some(REVEAL_MESSAGE_TICKS));
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => self.session.backspace(),
            KeyCode::Char(ch) if !ctrl => self.session.input_char(ch),
            _ => {}
        }
    }

    pub fn update(&mut self) {
        if !self.session.feedback_rows().is_empty() && self.revealed < self.session.secret_len() {
            self.reveal_tick += 1;
            if self.reveal_tick >= TICKS_PER_TILE {
                self.reveal_tick = 0;
                self.revealed += 1;
            }
        }

        if let Some(message) = &mut self.message
            && let Some(ttl) = &mut message.ttl
        {
            *ttl = ttl.saturating_sub(1);
            if *ttl == 0 {
                self.message = None;
            }
        }
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let header = Text::from(format!(
            "oxidle | length: {} | tries: {} | seed: {}",
            self.session.secret_len(),
            self.session.max_tries(),
            self.seed,
        ))
        .style(Style::default().fg(Color::Cyan))
        .centered();

        let grid = GridDisplay::new(&self.session).revealed(self.revealed);
        let keyboard = KeyboardDisplay::new(self.session.hints());

        let message = self.message.as_ref().map_or_else(Text::default, |m| {
            let style = match self.session.status() {
                SessionStatus::Won => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                SessionStatus::Lost => Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
                SessionStatus::InProgress => Style::default().fg(Color::Yellow),
            };
            Text::from(m.text.clone()).style(style).centered()
        });

        let help_text = if self.session.status().is_in_progress() {
            "Type to guess | Enter (Submit) | Backspace | Ctrl-N (New) | Ctrl-R (Reveal) | Esc (Quit)"
        } else {
            "Ctrl-N (New game) | Esc (Quit)"
        };
        let help = Text::from(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .centered();

        let [header_area, grid_area, message_area, keyboard_area, help_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(grid.height()),
                Constraint::Length(1),
                Constraint::Length(keyboard.height()),
                Constraint::Length(1),
            ])
            .spacing(1)
            .areas::<5>(frame.area());

        frame.render_widget(header, header_area);
        frame.render_widget(grid, grid_area);
        frame.render_widget(message, message_area);
        frame.render_widget(keyboard, keyboard_area);
        frame.render_widget(help, help_area);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEvent;
    use oxidle_engine::{Alphabet, Cursor};

    use super::*;

    fn screen(words: &[&str], seed: u64) -> PlayScreen {
        let words = WordList::new(words, Alphabet::standard()).unwrap();
        PlayScreen::new(words, 6, RandomPicker::with_seed(GameSeed::new(seed)))
    }

    fn press(screen: &mut PlayScreen, code: KeyCode) {
        screen.handle_event(&Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn press_ctrl(screen: &mut PlayScreen, ch: char) {
        screen.handle_event(&Event::Key(KeyEvent::new(
            KeyCode::Char(ch),
            KeyModifiers::CONTROL,
        )));
    }

    fn type_word(screen: &mut PlayScreen, word: &str) {
        for ch in word.chars() {
            press(screen, KeyCode::Char(ch));
        }
    }

    #[test]
    fn typing_and_backspace_drive_the_session() {
        let mut screen = screen(&["crane"], 1);
        type_word(&mut screen, "cra");
        assert_eq!(screen.session.cursor(), Cursor { row: 0, col: 3 });
        press(&mut screen, KeyCode::Backspace);
        assert_eq!(screen.session.cursor(), Cursor { row: 0, col: 2 });
    }

    #[test]
    fn incomplete_submit_shows_a_transient_message() {
        let mut screen = screen(&["crane"], 1);
        type_word(&mut screen, "cr");
        press(&mut screen, KeyCode::Enter);
        let message = screen.message.as_ref().unwrap();
        assert_eq!(message.text, "not enough characters");
        assert_eq!(message.ttl, Some(MESSAGE_TICKS));
        assert!(screen.session.status().is_in_progress());
    }

    #[test]
    fn messages_expire_after_their_ttl() {
        let mut screen = screen(&["crane"], 1);
        screen.show_message("hello", Some(2));
        screen.update();
        assert!(screen.message.is_some());
        screen.update();
        assert!(screen.message.is_none());
    }

    #[test]
    fn winning_shows_a_sticky_message() {
        let mut screen = screen(&["crane"], 1);
        type_word(&mut screen, "crane");
        press(&mut screen, KeyCode::Enter);
        assert_eq!(screen.session.status(), SessionStatus::Won);
        assert!(screen.message.as_ref().unwrap().ttl.is_none());
        // Sticky messages survive ticks.
        for _ in 0..100 {
            screen.update();
        }
        assert!(screen.message.is_some());
    }

    #[test]
    fn reveal_stagger_uncovers_one_tile_at_a_time() {
        let mut screen = screen(&["crane", "slate"], 1);
        let other = if screen.session.reveal() == "crane" {
            "slate"
        } else {
            "crane"
        };
        type_word(&mut screen, other);
        press(&mut screen, KeyCode::Enter);
        assert_eq!(screen.revealed, 0);
        for _ in 0..TICKS_PER_TILE {
            screen.update();
        }
        assert_eq!(screen.revealed, 1);
        for _ in 0..5 * TICKS_PER_TILE {
            screen.update();
        }
        // Fully revealed, then stays put.
        assert_eq!(screen.revealed, screen.session.secret_len());
    }

    #[test]
    fn escape_exits() {
        let mut screen = screen(&["crane"], 1);
        assert!(!screen.is_exiting());
        press(&mut screen, KeyCode::Esc);
        assert!(screen.is_exiting());
    }

    #[test]
    fn ctrl_n_starts_a_fresh_game() {
        let mut screen = screen(&["crane"], 1);
        type_word(&mut screen, "crane");
        press(&mut screen, KeyCode::Enter);
        assert_eq!(screen.session.status(), SessionStatus::Won);

        press_ctrl(&mut screen, 'n');
        assert!(screen.session.status().is_in_progress());
        assert_eq!(screen.session.cursor(), Cursor { row: 0, col: 0 });
        assert!(screen.message.is_none());
    }

    #[test]
    fn keys_after_game_over_are_ignored() {
        let mut screen = screen(&["crane"], 1);
        type_word(&mut screen, "crane");
        press(&mut screen, KeyCode::Enter);

        press(&mut screen, KeyCode::Char('x'));
        press(&mut screen, KeyCode::Enter);
        assert_eq!(screen.session.status(), SessionStatus::Won);
        assert_eq!(screen.session.feedback_rows().len(), 1);
    }
}
