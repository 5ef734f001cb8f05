use chrono::{Local, NaiveDate};
use oxidle_engine::GameSeed;

use crate::command::{GameArg, play};

#[derive(Debug, Clone, Default, clap::Args)]
pub(crate) struct DailyArg {
    /// Play the word of this date instead of today (YYYY-MM-DD)
    #[clap(long)]
    date: Option<NaiveDate>,
    #[clap(flatten)]
    game: GameArg,
}

/// Daily mode: everyone playing the same date (against the same word list)
/// gets the same secret. The date string is hashed into a [`GameSeed`]; the
/// exact mapping only has to be stable, not clever.
pub(crate) fn run(arg: &DailyArg) -> anyhow::Result<()> {
    let date = arg.date.unwrap_or_else(|| Local::now().date_naive());
    let seed = GameSeed::from_key(&date.format("%Y-%m-%d").to_string());
    play::run_seeded(&arg.game, Some(seed))
}
