use crate::{
    core::{AttemptGrid, Cursor, Feedback, Verdict, WordList, evaluate, normalize_char},
    engine::{KeyHints, SecretPicker},
};

/// Overall outcome state of a session. `Won` and `Lost` are terminal: the
/// grid and cursor freeze and no further guesses are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionStatus {
    InProgress,
    Won,
    Lost,
}

/// Why a submit was rejected. All variants are recoverable: the grid,
/// cursor, and status are exactly as they were before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SubmitError {
    #[display("not enough characters")]
    IncompleteGuess,
    #[display("not in the word list")]
    NotInWordList,
    #[display("the game is already over")]
    GameOver,
}

/// Result of an accepted guess: the feedback for the submitted row and the
/// status the session moved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub feedback: Feedback,
    pub status: SessionStatus,
}

/// One game: the secret, the attempt grid, the per-character hints, and the
/// win/loss state machine.
///
/// The session is driven synchronously by a presentation layer; every
/// operation either fully applies or (on validation failure) leaves the
/// session untouched. There is no restart operation: a new game is a new
/// `GameSession`.
#[derive(Debug, Clone)]
pub struct GameSession {
    words: WordList,
    secret: String,
    grid: AttemptGrid,
    feedback_rows: Vec<Feedback>,
    hints: KeyHints,
    status: SessionStatus,
}

impl GameSession {
    /// Starts a game: picks a secret from `words` and sizes the grid to
    /// `max_tries` rows of the secret's length.
    ///
    /// # Panics
    ///
    /// Panics if `max_tries` is zero or the picker returns an out-of-range
    /// index.
    #[must_use]
    pub fn new(words: WordList, max_tries: usize, picker: &mut dyn SecretPicker) -> Self {
        assert!(max_tries > 0, "a game needs at least one try");
        let secret = words.word(picker.pick(words.len())).to_owned();
        let grid = AttemptGrid::new(max_tries, secret.chars().count());
        Self {
            words,
            secret,
            grid,
            feedback_rows: Vec::new(),
            hints: KeyHints::new(),
            status: SessionStatus::InProgress,
        }
    }

    #[must_use]
    pub fn words(&self) -> &WordList {
        &self.words
    }

    #[must_use]
    pub fn grid(&self) -> &AttemptGrid {
        &self.grid
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.grid.cursor()
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn secret_len(&self) -> usize {
        self.grid.word_len()
    }

    #[must_use]
    pub fn max_tries(&self) -> usize {
        self.grid.max_tries()
    }

    #[must_use]
    pub fn hints(&self) -> &KeyHints {
        &self.hints
    }

    /// Feedback for each submitted row, in submission order.
    #[must_use]
    pub fn feedback_rows(&self) -> &[Feedback] {
        &self.feedback_rows
    }

    /// The secret, available once the game is over.
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&str> {
        (!self.status.is_in_progress()).then_some(self.secret.as_str())
    }

    /// The secret, unconditionally. This is the explicit "give up and show
    /// me" accessor; prefer [`revealed_secret`](Self::revealed_secret)
    /// everywhere else.
    #[must_use]
    pub fn reveal(&self) -> &str {
        &self.secret
    }

    /// Types one character into the current row.
    ///
    /// Silently ignored when the game is over, the row is full, or the
    /// character is outside the word list's alphabet. Input is lowercased
    /// here so the grid only ever holds canonical characters.
    pub fn input_char(&mut self, ch: char) {
        if !self.status.is_in_progress() {
            return;
        }
        let ch = normalize_char(ch);
        if !self.words.alphabet().is_allowed(ch) {
            return;
        }
        let _ = self.grid.push_char(ch);
    }

    /// Removes the last typed character of the current row, if any.
    pub fn backspace(&mut self) {
        if !self.status.is_in_progress() {
            return;
        }
        let _ = self.grid.pop_char();
    }

    /// Submits the current row as a guess.
    ///
    /// Rejected (leaving the session untouched) when the row is not full or
    /// the assembled word is not in the word list. On acceptance the row is
    /// scored, the hints updated, and the session either stays in progress,
    /// is won on an all-correct guess, or is lost when the last try is used
    /// up. The win check runs first, so the final try can still win.
    pub fn submit_guess(&mut self) -> Result<GuessOutcome, SubmitError> {
        if !self.status.is_in_progress() {
            return Err(SubmitError::GameOver);
        }
        let guess = self
            .grid
            .current_word()
            .ok_or(SubmitError::IncompleteGuess)?;
        if !self.words.contains(&guess) {
            return Err(SubmitError::NotInWordList);
        }

        let feedback = evaluate(&self.secret, &guess);
        self.hints.record(&guess, &feedback);
        self.feedback_rows.push(feedback.clone());

        if feedback.iter().all(|&v| v == Verdict::Correct) {
            self.status = SessionStatus::Won;
        } else if self.grid.commit_row() == self.grid.max_tries() {
            self.status = SessionStatus::Lost;
        }

        Ok(GuessOutcome {
            feedback,
            status: self.status,
        })
    }
}
