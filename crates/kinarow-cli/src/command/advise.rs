use anyhow::anyhow;
use kinarow_engine::{BoardConfig, Cell, Peg, TextFormat};
use kinarow_evaluator::selector::{DEFAULT_DEFENSIVENESS, MoveSelector};
use serde::Serialize;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AdviseArg {
    /// Board text in row-major order, e.g. "..X|.O.|..."
    board: String,
    /// Side to advise
    #[clap(long, default_value_t = 'X')]
    peg: char,
    /// Board side length
    #[clap(long, default_value_t = 3)]
    board_size: usize,
    /// Marks in a row needed to win
    #[clap(long, default_value_t = 3)]
    win_size: usize,
    /// Weight given to blocking the opponent relative to advancing
    #[clap(long, default_value_t = DEFAULT_DEFENSIVENESS)]
    defensiveness: f64,
    /// Print the advice as JSON
    #[clap(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct AdviceRecord {
    cell: Option<Cell>,
    message: String,
}

pub(crate) fn run(arg: &AdviseArg) -> anyhow::Result<()> {
    let AdviseArg {
        board,
        peg,
        board_size,
        win_size,
        defensiveness,
        json,
    } = arg;

    let config = BoardConfig::new(*board_size, *win_size)?;
    let mover =
        Peg::from_char(*peg).ok_or_else(|| anyhow!("unknown peg {peg:?}, expected 'X' or 'O'"))?;
    let state = TextFormat::default().parse(config, board)?;

    let selector = MoveSelector::new(config).with_defensiveness(*defensiveness);
    let advice = selector.best_slot(&state, mover);

    if *json {
        let record = AdviceRecord {
            cell: advice.cell(),
            message: advice.to_string(),
        };
        println!("{}", serde_json::to_string(&record)?);
    } else {
        println!("{advice}");
    }
    Ok(())
}
