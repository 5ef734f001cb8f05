use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod daily;
mod play;
mod words;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play a game with a randomly (or explicitly) seeded secret
    Play(#[clap(flatten)] play::PlayArg),
    /// Play the deterministic word of the day
    Daily(#[clap(flatten)] daily::DailyArg),
    /// Print the active candidate word list
    Words(#[clap(flatten)] words::WordsArg),
}

/// Options shared by every game mode.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GameArg {
    /// Maximum number of guesses per game
    #[clap(long, default_value_t = 6)]
    max_tries: usize,
    /// Candidate word file, one word per line (defaults to the built-in list)
    #[clap(long)]
    word_list: Option<PathBuf>,
    /// Write a JSON record of the game here when the session ends ("-" for stdout)
    #[clap(long)]
    record: Option<PathBuf>,
}

impl Default for GameArg {
    // Must agree with the clap default values above; `Mode` falls back to
    // `Play(PlayArg::default())` when no subcommand is given.
    fn default() -> Self {
        Self {
            max_tries: 6,
            word_list: None,
            record: None,
        }
    }
}

impl GameArg {
    pub(crate) fn max_tries(&self) -> usize {
        self.max_tries
    }

    pub(crate) fn word_list(&self) -> Option<&std::path::Path> {
        self.word_list.as_deref()
    }

    pub(crate) fn record(&self) -> Option<&std::path::Path> {
        self.record.as_deref()
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(play::PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Daily(arg) => daily::run(&arg)?,
        Mode::Words(arg) => words::run(&arg)?,
    }
    Ok(())
}
