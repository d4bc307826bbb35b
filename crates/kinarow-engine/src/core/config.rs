use crate::{ConfigError, core::cell::Cell};

/// Board shape: side length and the number of consecutive marks that win.
///
/// Validated once at construction. Everything derived from the shape (the
/// winning lines, the per-cell line index) is keyed by this value and built
/// exactly once per shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    board_size: usize,
    win_size: usize,
}

impl BoardConfig {
    pub fn new(board_size: usize, win_size: usize) -> Result<Self, ConfigError> {
        if win_size == 0 {
            return Err(ConfigError::ZeroWinLength);
        }
        if win_size > board_size {
            return Err(ConfigError::WinTooLong {
                board_size,
                win_size,
            });
        }
        Ok(Self {
            board_size,
            win_size,
        })
    }

    #[must_use]
    pub fn board_size(self) -> usize {
        self.board_size
    }

    #[must_use]
    pub fn win_size(self) -> usize {
        self.win_size
    }

    /// Number of cells on the board.
    #[must_use]
    pub fn cell_count(self) -> usize {
        self.board_size * self.board_size
    }

    /// Number of sliding-window start positions along one axis.
    pub(crate) fn window_count(self) -> usize {
        self.board_size - self.win_size + 1
    }

    /// Closed-form count of winning lines: `2(2n - m + 1)(n - m + 1)`.
    ///
    /// The line generator is checked against this value.
    #[must_use]
    pub fn line_count(self) -> usize {
        let n = self.board_size;
        let m = self.win_size;
        2 * (2 * n - m + 1) * (n - m + 1)
    }

    /// Whether the cell lies on this board.
    #[must_use]
    pub fn contains(self, cell: Cell) -> bool {
        cell.row() < self.board_size && cell.col() < self.board_size
    }

    /// Dense index of a cell in row-major order.
    #[must_use]
    pub fn index_of(self, cell: Cell) -> usize {
        cell.row() * self.board_size + cell.col()
    }

    /// All cells in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let n = self.board_size;
        (0..n).flat_map(move |row| (0..n).map(move |col| Cell::new(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_win_length_longer_than_board() {
        assert!(matches!(
            BoardConfig::new(3, 4),
            Err(ConfigError::WinTooLong {
                board_size: 3,
                win_size: 4
            })
        ));
    }

    #[test]
    fn rejects_zero_win_length() {
        assert!(matches!(
            BoardConfig::new(3, 0),
            Err(ConfigError::ZeroWinLength)
        ));
    }

    #[test]
    fn cells_iterate_row_major() {
        let config = BoardConfig::new(2, 2).unwrap();
        let cells: Vec<_> = config.cells().collect();
        assert_eq!(
            cells,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(1, 0),
                Cell::new(1, 1),
            ]
        );
        for (i, cell) in cells.into_iter().enumerate() {
            assert_eq!(config.index_of(cell), i);
        }
    }

    #[test]
    fn line_count_closed_form() {
        let config = BoardConfig::new(3, 3).unwrap();
        assert_eq!(config.line_count(), 8);
        let config = BoardConfig::new(5, 4).unwrap();
        assert_eq!(config.line_count(), 28);
    }
}
