use crate::core::{cell::Cell, config::BoardConfig};

/// Index of a line within its [`LineSet`].
pub type LineId = usize;

/// An ordered run of `win_size` distinct cells that ends the game when
/// uniformly occupied by one peg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    cells: Vec<Cell>,
}

impl Line {
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

/// Every winning line of a board shape.
///
/// Lines come in four families (horizontal, vertical, descending diagonal,
/// ascending diagonal), one per sliding window of length `win_size` within
/// the board. Generation order is fixed, so two sets built from the same
/// config are identical. The collection is immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSet {
    config: BoardConfig,
    lines: Vec<Line>,
}

impl LineSet {
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        let n = config.board_size();
        let m = config.win_size();
        let k = config.window_count();

        let mut lines = Vec::with_capacity(config.line_count());
        // Horizontal: fixed row, sliding column window.
        for row in 0..n {
            for start in 0..k {
                lines.push(Line {
                    cells: (0..m).map(|i| Cell::new(row, start + i)).collect(),
                });
            }
        }
        // Vertical: fixed column, sliding row window.
        for col in 0..n {
            for start in 0..k {
                lines.push(Line {
                    cells: (0..m).map(|i| Cell::new(start + i, col)).collect(),
                });
            }
        }
        // Descending diagonal: every pairing of a row window with a column
        // window, advancing in lockstep.
        for row_start in 0..k {
            for col_start in 0..k {
                lines.push(Line {
                    cells: (0..m)
                        .map(|i| Cell::new(row_start + i, col_start + i))
                        .collect(),
                });
            }
        }
        // Ascending diagonal: same windows with the columns reversed.
        for row_start in 0..k {
            for col_start in 0..k {
                lines.push(Line {
                    cells: (0..m)
                        .map(|i| Cell::new(row_start + i, col_start + m - 1 - i))
                        .collect(),
                });
            }
        }

        debug_assert_eq!(lines.len(), config.line_count());
        Self { config, lines }
    }

    #[must_use]
    pub fn config(&self) -> BoardConfig {
        self.config
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn line(&self, id: LineId) -> &Line {
        &self.lines[id]
    }

    pub fn iter(&self) -> impl Iterator<Item = (LineId, &Line)> {
        self.lines.iter().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(n: usize, m: usize) -> BoardConfig {
        BoardConfig::new(n, m).unwrap()
    }

    #[test]
    fn line_count_matches_closed_form() {
        for (n, m) in [(1, 1), (3, 3), (3, 2), (4, 3), (5, 4), (5, 5), (6, 3), (7, 5)] {
            let cfg = config(n, m);
            assert_eq!(LineSet::new(cfg).len(), cfg.line_count(), "n={n} m={m}");
        }
    }

    #[test]
    fn classic_board_has_eight_lines() {
        // 3 rows + 3 columns + 2 diagonals
        assert_eq!(LineSet::new(config(3, 3)).len(), 8);
    }

    #[test]
    fn lines_hold_win_size_distinct_cells_on_the_board() {
        let cfg = config(5, 4);
        for (_, line) in LineSet::new(cfg).iter() {
            assert_eq!(line.cells().len(), cfg.win_size());
            let mut cells = line.cells().to_vec();
            cells.sort_unstable();
            cells.dedup();
            assert_eq!(cells.len(), cfg.win_size());
            for &cell in line.cells() {
                assert!(cfg.contains(cell));
            }
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let cfg = config(4, 3);
        assert_eq!(LineSet::new(cfg), LineSet::new(cfg));
    }

    #[test]
    fn both_diagonal_families_are_present() {
        let set = LineSet::new(config(3, 3));
        let descending = vec![Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 2)];
        let ascending = vec![Cell::new(0, 2), Cell::new(1, 1), Cell::new(2, 0)];
        assert!(set.iter().any(|(_, line)| line.cells() == descending));
        assert!(set.iter().any(|(_, line)| line.cells() == ascending));
    }
}
