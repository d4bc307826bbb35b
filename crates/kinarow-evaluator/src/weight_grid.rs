use std::fmt;

use kinarow_engine::{BoardConfig, Cell};

/// Per-cell pressure accumulator for one evaluation pass.
///
/// Dense over the whole board; cells no alive line passes through stay at
/// zero. `Display` renders the grid row by row, which is what the selector
/// logs at debug level.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightGrid {
    config: BoardConfig,
    weights: Vec<f64>,
}

impl WeightGrid {
    #[must_use]
    pub fn zeroed(config: BoardConfig) -> Self {
        Self {
            config,
            weights: vec![0.0; config.cell_count()],
        }
    }

    #[must_use]
    pub fn config(&self) -> BoardConfig {
        self.config
    }

    #[must_use]
    pub fn get(&self, cell: Cell) -> f64 {
        self.weights[self.config.index_of(cell)]
    }

    pub(crate) fn add(&mut self, cell: Cell, amount: f64) {
        self.weights[self.config.index_of(cell)] += amount;
    }
}

impl fmt::Display for WeightGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.config.board_size();
        for row in 0..n {
            for col in 0..n {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:>8}", self.get(Cell::new(row, col)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
