//! Offensive evaluation: per-cell pressure for a single player.
//!
//! Scores how valuable each empty cell is toward completing some winning
//! line for one player, with no regard to the opponent's own chances. The
//! move selector runs this twice with the roles swapped (once for the
//! mover, once for the opponent), and blending those two passes is all the
//! lookahead the advisor has.

use kinarow_engine::{Cell, LineSet, SlotLineIndex};

use crate::weight_grid::WeightGrid;

/// Base of the exponential line score.
///
/// A line already holding `f` attacker pegs adds `WEIGHT_BASE^f` to each of
/// its vacant cells, so near-complete lines dominate the ranking. The value
/// sets how strongly completion proximity outweighs line quantity.
pub const WEIGHT_BASE: f64 = 5.0;

/// Outcome of one offensive pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum OffenseStatus {
    /// The attacker can still complete at least one line.
    Ongoing,
    /// The attacker already occupies every cell of some line.
    Won,
    /// Every line contains a defender peg; the attacker cannot win anymore.
    Blocked,
}

/// Weights and status produced by [`OffensiveEvaluator::evaluate`].
///
/// The weights are meaningful only while the status is
/// [`OffenseStatus::Ongoing`]. A blocked pass leaves the grid at zero; a won
/// pass returns whatever had accumulated around the completed line, and
/// callers must not rank by it.
#[derive(Debug, Clone)]
pub struct OffenseReport {
    weights: WeightGrid,
    status: OffenseStatus,
}

impl OffenseReport {
    #[must_use]
    pub fn weights(&self) -> &WeightGrid {
        &self.weights
    }

    #[must_use]
    pub fn status(&self) -> OffenseStatus {
        self.status
    }
}

/// Scores one player's winning chances against the precomputed line
/// structures.
///
/// Borrows the shared immutable [`LineSet`] and [`SlotLineIndex`]; a pass
/// reads them and the supplied occupancy partitions without writing
/// anything, so passes are independent of each other.
#[derive(Debug, Clone, Copy)]
pub struct OffensiveEvaluator<'a> {
    lines: &'a LineSet,
    index: &'a SlotLineIndex,
}

impl<'a> OffensiveEvaluator<'a> {
    #[must_use]
    pub fn new(lines: &'a LineSet, index: &'a SlotLineIndex) -> Self {
        Self { lines, index }
    }

    /// Scores every cell the attacker could still use.
    ///
    /// Lines containing a defender peg are dead and contribute nothing. Each
    /// remaining line adds `WEIGHT_BASE^filled` to its unoccupied cells,
    /// `filled` being the attacker pegs already on the line. A line with no
    /// vacancy at all means the attacker has already won; that outcome
    /// dominates the whole pass no matter what later lines report.
    ///
    /// The occupancy partitions are taken as given; inconsistent or
    /// impossible distributions are evaluated like any other.
    #[must_use]
    pub fn evaluate(&self, attacker_cells: &[Cell], defender_cells: &[Cell]) -> OffenseReport {
        let config = self.lines.config();

        let mut alive = vec![true; self.lines.len()];
        for &cell in defender_cells {
            for &id in self.index.lines_at(cell) {
                alive[id] = false;
            }
        }

        let mut attacker_holds = vec![false; config.cell_count()];
        for &cell in attacker_cells {
            attacker_holds[config.index_of(cell)] = true;
        }

        let mut weights = WeightGrid::zeroed(config);
        let mut any_alive = false;
        let mut won = false;
        for (id, line) in self.lines.iter() {
            if !alive[id] {
                continue;
            }
            any_alive = true;

            let vacancy = line
                .cells()
                .iter()
                .filter(|&&cell| !attacker_holds[config.index_of(cell)])
                .count();
            if vacancy == 0 {
                won = true;
                continue;
            }

            let filled = config.win_size() - vacancy;
            let score = WEIGHT_BASE.powi(filled as i32);
            for &cell in line.cells() {
                if !attacker_holds[config.index_of(cell)] {
                    weights.add(cell, score);
                }
            }
        }

        let status = if won {
            OffenseStatus::Won
        } else if any_alive {
            OffenseStatus::Ongoing
        } else {
            OffenseStatus::Blocked
        };
        OffenseReport { weights, status }
    }
}
