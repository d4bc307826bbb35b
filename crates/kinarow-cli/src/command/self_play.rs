use std::io::{self, BufRead as _, Write as _};

use kinarow_engine::{BoardConfig, BoardState, Cell, Peg};
use kinarow_evaluator::selector::{DEFAULT_DEFENSIVENESS, MoveSelector};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SelfPlayArg {
    /// Board side length
    #[clap(long, default_value_t = 5)]
    board_size: usize,
    /// Marks in a row needed to win
    #[clap(long, default_value_t = 4)]
    win_size: usize,
    /// Weight given to blocking the opponent relative to advancing
    #[clap(long, default_value_t = DEFAULT_DEFENSIVENESS)]
    defensiveness: f64,
    /// Open with a uniformly random placement instead of the advised one
    #[clap(long)]
    random_opening: bool,
    /// Seed for the random opening (random when omitted)
    #[clap(long)]
    seed: Option<u64>,
    /// Wait for Enter between moves
    #[clap(long)]
    step: bool,
}

pub(crate) fn run(arg: &SelfPlayArg) -> anyhow::Result<()> {
    let SelfPlayArg {
        board_size,
        win_size,
        defensiveness,
        random_opening,
        seed,
        step,
    } = arg;

    let config = BoardConfig::new(*board_size, *win_size)?;
    let selector = MoveSelector::new(config).with_defensiveness(*defensiveness);

    let mut board = BoardState::new(config);
    let mut mover = Peg::Nought;
    println!("{board}");

    if *random_opening {
        let opening = random_cell(config, *seed);
        board.place(opening, mover)?;
        println!("\n{mover} opens at {opening}.\n\n{board}");
        mover = mover.opponent();
    }

    loop {
        if *step {
            pause()?;
        }
        let advice = selector.best_slot(&board, mover);
        let Some(cell) = advice.cell() else {
            println!("\n{advice}");
            break;
        };
        board.place(cell, mover)?;
        println!("\n{mover} plays at {cell}.\n\n{board}");
        mover = mover.opponent();
    }
    Ok(())
}

fn random_cell(config: BoardConfig, seed: Option<u64>) -> Cell {
    let mut rng = match seed {
        Some(seed) => Pcg32::seed_from_u64(seed),
        None => Pcg32::from_rng(&mut rand::rng()),
    };
    let row = rng.random_range(0..config.board_size());
    let col = rng.random_range(0..config.board_size());
    Cell::new(row, col)
}

fn pause() -> anyhow::Result<()> {
    print!("press Enter for the next move...");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
