//! Stateful game layer on top of the pure core types.
//!
//! - [`GameSession`] - one game: secret, attempt grid, hints, win/loss state
//! - [`SecretPicker`] - pluggable secret selection (random, seeded, fixed)
//! - [`GameSeed`] - hex-serialized seed for reproducible games
//! - [`KeyHints`] - strongest verdict seen per guessed character
//!
//! A presentation layer owns a [`GameSession`] and drives it with
//! [`input_char`](GameSession::input_char),
//! [`backspace`](GameSession::backspace), and
//! [`submit_guess`](GameSession::submit_guess); each call either fully
//! applies or leaves the session untouched. Starting a new game means
//! constructing a new session.

pub use self::{game_session::*, key_hints::*, secret_picker::*};

mod game_session;
mod key_hints;
mod secret_picker;
