use clap::{Parser, Subcommand};

use self::{advise::AdviseArg, self_play::SelfPlayArg};

mod advise;
mod self_play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Suggest the best next move for a board position
    Advise(#[clap(flatten)] AdviseArg),
    /// Let the advisor play both sides of a game
    SelfPlay(#[clap(flatten)] SelfPlayArg),
}

pub fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = CommandArgs::parse();
    match args.mode {
        Mode::Advise(arg) => advise::run(&arg)?,
        Mode::SelfPlay(arg) => self_play::run(&arg)?,
    }
    Ok(())
}
