mod command;
mod record;
mod tui;
mod ui;
mod util;
mod words;

fn main() -> anyhow::Result<()> {
    command::run()
}
