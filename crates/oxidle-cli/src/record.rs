use oxidle_engine::{Feedback, GameSeed, GameSession, SessionStatus};
use serde::{Deserialize, Serialize};

/// How a recorded game ended. `Abandoned` means the player quit while the
/// session was still in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Won,
    Lost,
    Abandoned,
}

impl From<SessionStatus> for Outcome {
    fn from(status: SessionStatus) -> Self {
        match status {
            SessionStatus::Won => Outcome::Won,
            SessionStatus::Lost => Outcome::Lost,
            SessionStatus::InProgress => Outcome::Abandoned,
        }
    }
}

/// One submitted guess and the feedback it received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub word: String,
    pub feedback: Feedback,
}

/// JSON export of a finished (or abandoned) game, written by `--record`.
///
/// The seed plus the same word list reproduce the game exactly, so a record
/// doubles as a replay recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub seed: GameSeed,
    pub max_tries: usize,
    pub secret: String,
    pub guesses: Vec<GuessRecord>,
    pub outcome: Outcome,
}

impl GameRecord {
    pub fn from_session(session: &GameSession, seed: GameSeed) -> Self {
        let guesses = session
            .feedback_rows()
            .iter()
            .enumerate()
            .map(|(row, feedback)| GuessRecord {
                word: session.grid().row(row).iter().flatten().collect(),
                feedback: feedback.clone(),
            })
            .collect();
        Self {
            seed,
            max_tries: session.max_tries(),
            secret: session.reveal().to_owned(),
            guesses,
            outcome: session.status().into(),
        }
    }
}
