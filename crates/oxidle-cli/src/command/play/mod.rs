use oxidle_engine::{GameSeed, RandomPicker};

use crate::{
    command::{GameArg, play::app::PlayApp},
    tui::Tui,
    util::{self, Output},
};

mod app;
mod screen;

#[derive(Debug, Clone, Default, clap::Args)]
pub(crate) struct PlayArg {
    /// Seed of a previous game to replay (16 hex characters)
    #[clap(long)]
    seed: Option<GameSeed>,
    #[clap(flatten)]
    game: GameArg,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    run_seeded(&arg.game, arg.seed)
}

/// Runs one interactive game, optionally from a fixed seed, and writes the
/// record afterwards if requested.
pub(crate) fn run_seeded(game: &GameArg, seed: Option<GameSeed>) -> anyhow::Result<()> {
    let words = util::load_word_list(game.word_list())?;
    let picker = seed.map_or_else(RandomPicker::new, RandomPicker::with_seed);

    let mut app = PlayApp::new(words, game.max_tries(), picker);
    Tui::new().run(&mut app)?;

    if let Some(path) = game.record() {
        Output::from_path(path)?.write_json(&app.into_record())?;
    }
    Ok(())
}
