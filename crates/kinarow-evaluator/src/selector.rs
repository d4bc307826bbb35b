//! Move selection: blending two offensive evaluations into one
//! recommendation.

use kinarow_engine::{BoardConfig, BoardState, Cell, LineSet, Peg, SlotLineIndex};
use tracing::debug;

use crate::offense::OffensiveEvaluator;

/// Default blend factor: interrupting the opponent's progress is worth five
/// times advancing one's own.
pub const DEFAULT_DEFENSIVENESS: f64 = 5.0;

/// Verdict of a [`MoveSelector::best_slot`] call.
///
/// Terminal verdicts are ordinary values, not errors; `Display` renders the
/// human-readable message for each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Advice {
    /// Recommended placement for the mover.
    #[display("play {_0}")]
    Play(Cell),
    /// That peg already completed a line; there is nothing left to advise.
    #[display("{_0} has already won")]
    Won(Peg),
    /// No empty cell remains.
    #[display("draw, the board is full")]
    Full,
    /// Neither side can complete a line anymore.
    #[display("draw, neither side can complete a line")]
    Dead,
}

impl Advice {
    /// The recommended cell, when there is one.
    #[must_use]
    pub const fn cell(self) -> Option<Cell> {
        match self {
            Self::Play(cell) => Some(cell),
            Self::Won(_) | Self::Full | Self::Dead => None,
        }
    }

    /// Whether the game is over (no placement left to recommend).
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Play(_))
    }
}

/// Picks the best next cell for a mover on a given board.
///
/// The winning lines and the per-cell line index are built once here and
/// reused by every call; [`best_slot`](Self::best_slot) only reads them, so
/// one selector can serve any number of boards of its shape, concurrently
/// included. The selector carries no turn history; each call starts fresh
/// from the supplied board snapshot.
#[derive(Debug, Clone)]
pub struct MoveSelector {
    lines: LineSet,
    index: SlotLineIndex,
    defensiveness: f64,
}

impl MoveSelector {
    /// Builds the derived line structures for a board shape.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        let lines = LineSet::new(config);
        let index = SlotLineIndex::new(&lines);
        Self {
            lines,
            index,
            defensiveness: DEFAULT_DEFENSIVENESS,
        }
    }

    /// Overrides how strongly blocking the opponent outweighs advancing the
    /// mover's own lines.
    #[must_use]
    pub fn with_defensiveness(mut self, defensiveness: f64) -> Self {
        self.defensiveness = defensiveness;
        self
    }

    #[must_use]
    pub fn config(&self) -> BoardConfig {
        self.lines.config()
    }

    /// Best next cell for `mover`, or a terminal verdict.
    ///
    /// Evaluates the mover's and the opponent's offensive pressure on the
    /// same position and ranks every empty cell by
    /// `own + defensiveness · theirs`. Ties break to the lowest row, then
    /// the lowest column.
    ///
    /// # Panics
    ///
    /// Panics if `board` was built for a different shape than this selector.
    #[must_use]
    pub fn best_slot(&self, board: &BoardState, mover: Peg) -> Advice {
        assert_eq!(board.config(), self.config(), "board shape mismatch");

        let empty: Vec<Cell> = board.empty_cells().collect();
        if empty.is_empty() {
            return Advice::Full;
        }
        let mover_cells: Vec<Cell> = board.cells_of(mover).collect();
        let opponent_cells: Vec<Cell> = board.cells_of(mover.opponent()).collect();

        let offense = OffensiveEvaluator::new(&self.lines, &self.index);
        let own = offense.evaluate(&mover_cells, &opponent_cells);
        let theirs = offense.evaluate(&opponent_cells, &mover_cells);
        debug!("offensive weights for {mover}:\n{}", own.weights());
        debug!(
            "offensive weights for {}:\n{}",
            mover.opponent(),
            theirs.weights()
        );

        // A completed line outranks a simultaneous blocked reading for the
        // other side, so the Won checks come first.
        if own.status().is_won() {
            return Advice::Won(mover);
        }
        if theirs.status().is_won() {
            return Advice::Won(mover.opponent());
        }
        if own.status().is_blocked() && theirs.status().is_blocked() {
            return Advice::Dead;
        }

        let mut best_cell = empty[0];
        let mut best_score = f64::MIN;
        for &cell in &empty {
            let score =
                own.weights().get(cell) + self.defensiveness * theirs.weights().get(cell);
            // Strictly greater keeps the first maximum; empty cells come in
            // row-major order, so ties resolve to the lowest row, then the
            // lowest column.
            if score > best_score {
                best_score = score;
                best_cell = cell;
            }
        }
        debug!("picked {best_cell} with score {best_score}");
        Advice::Play(best_cell)
    }
}

#[cfg(test)]
mod tests {
    use kinarow_engine::TextFormat;

    use super::*;

    fn board(text: &str) -> BoardState {
        let config = BoardConfig::new(3, 3).unwrap();
        TextFormat::default().parse(config, text).unwrap()
    }

    fn selector() -> MoveSelector {
        MoveSelector::new(BoardConfig::new(3, 3).unwrap())
    }

    #[test]
    fn opening_move_takes_the_center() {
        // On an empty board the combined weight is proportional to the
        // number of lines through each cell, which peaks at the center.
        let advice = selector().best_slot(&board("...|...|..."), Peg::Cross);
        assert_eq!(advice, Advice::Play(Cell::new(1, 1)));
    }

    #[test]
    fn blocks_an_immediate_threat() {
        let advice = selector().best_slot(&board("XX.|...|..."), Peg::Nought);
        assert_eq!(advice, Advice::Play(Cell::new(0, 2)));
    }

    #[test]
    fn reports_a_mover_win_before_anything_else() {
        let advice = selector().best_slot(&board("XXX|.O.|O.."), Peg::Cross);
        assert_eq!(advice, Advice::Won(Peg::Cross));
        assert_eq!(advice.cell(), None);
        assert!(advice.is_terminal());
    }

    #[test]
    fn reports_an_opponent_win() {
        let advice = selector().best_slot(&board("XXX|.O.|O.."), Peg::Nought);
        assert_eq!(advice, Advice::Won(Peg::Cross));
    }

    #[test]
    fn full_board_is_a_draw_without_evaluation() {
        let advice = selector().best_slot(&board("XOX|XOO|OXO"), Peg::Cross);
        assert_eq!(advice, Advice::Full);
    }

    #[test]
    fn mutual_blockade_is_a_dead_draw() {
        // Every one of the eight lines holds both pegs, with one cell
        // still open.
        let advice = selector().best_slot(&board("XXO|OOX|X.O"), Peg::Cross);
        assert_eq!(advice, Advice::Dead);
    }

    #[test]
    fn repeated_calls_agree() {
        let selector = selector();
        let board = board("X..|.O.|...");
        let first = selector.best_slot(&board, Peg::Cross);
        let second = selector.best_slot(&board, Peg::Cross);
        assert_eq!(first, second);
    }

    #[test]
    fn default_blend_blocks_instead_of_winning() {
        // Both sides are one move from completion; the default blend values
        // the opponent's near-win five times an own near-win, so the advisor
        // interrupts instead of finishing.
        let position = board("XX.|...|OO.");
        let advice = selector().best_slot(&position, Peg::Nought);
        assert_eq!(advice, Advice::Play(Cell::new(0, 2)));
    }

    #[test]
    fn low_defensiveness_prefers_the_own_win() {
        let position = board("XX.|...|OO.");
        let advice = selector()
            .with_defensiveness(0.0)
            .best_slot(&position, Peg::Nought);
        assert_eq!(advice, Advice::Play(Cell::new(2, 2)));
    }
}
