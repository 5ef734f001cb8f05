use std::path::PathBuf;

use crate::util;

#[derive(Debug, Clone, Default, clap::Args)]
pub(crate) struct WordsArg {
    /// Candidate word file, one word per line (defaults to the built-in list)
    #[clap(long)]
    word_list: Option<PathBuf>,
}

pub(crate) fn run(arg: &WordsArg) -> anyhow::Result<()> {
    let words = util::load_word_list(arg.word_list.as_deref())?;
    for word in words.words() {
        println!("{word}");
    }
    println!("({} candidates)", words.len());
    Ok(())
}
