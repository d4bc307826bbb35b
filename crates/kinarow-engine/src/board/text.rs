use crate::{
    CellCountError,
    board::board_state::BoardState,
    core::{config::BoardConfig, peg::Peg},
};

/// Character mapping for the textual board representation.
///
/// Decoding scans the text in row-major order: the marker characters become
/// pegs, any character in the empty set becomes an empty cell, and every
/// other character is a delimiter and is skipped. The default maps 'X' and
/// 'O', with '.' or ' ' for empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFormat {
    cross: char,
    nought: char,
    empty: Vec<char>,
}

impl Default for TextFormat {
    fn default() -> Self {
        Self::new('X', 'O', vec!['.', ' '])
    }
}

impl TextFormat {
    /// # Panics
    ///
    /// Panics if the two markers coincide or if `empty` is empty; the first
    /// entry of `empty` is the rendering character for empty cells.
    #[must_use]
    pub fn new(cross: char, nought: char, empty: Vec<char>) -> Self {
        assert_ne!(cross, nought);
        assert!(!empty.is_empty());
        Self {
            cross,
            nought,
            empty,
        }
    }

    fn decode_char(&self, c: char) -> Option<Option<Peg>> {
        if c == self.cross {
            Some(Some(Peg::Cross))
        } else if c == self.nought {
            Some(Some(Peg::Nought))
        } else if self.empty.contains(&c) {
            Some(None)
        } else {
            None
        }
    }

    fn encode(&self, peg: Option<Peg>) -> char {
        match peg {
            Some(Peg::Cross) => self.cross,
            Some(Peg::Nought) => self.nought,
            None => self.empty[0],
        }
    }

    /// Decodes a row-major board text into a state.
    ///
    /// Fails unless the text holds exactly `board_size²` cells after
    /// delimiters are dropped.
    pub fn parse(&self, config: BoardConfig, text: &str) -> Result<BoardState, CellCountError> {
        let cells: Vec<Option<Peg>> = text.chars().filter_map(|c| self.decode_char(c)).collect();
        let mut board = BoardState::new(config);
        board.replace_all(cells)?;
        Ok(board)
    }

    /// Multi-line rendering, one row per line.
    #[must_use]
    pub fn render(&self, board: &BoardState) -> String {
        self.render_with(board, '\n')
    }

    /// Single-line rendering with '|' between rows.
    #[must_use]
    pub fn compact(&self, board: &BoardState) -> String {
        self.render_with(board, '|')
    }

    fn render_with(&self, board: &BoardState, separator: char) -> String {
        let n = board.config().board_size();
        let mut out = String::with_capacity(board.config().cell_count() + n);
        for (i, cell) in board.config().cells().enumerate() {
            if i > 0 && i % n == 0 {
                out.push(separator);
            }
            out.push(self.encode(board.get(cell)));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cell::Cell;

    fn config() -> BoardConfig {
        BoardConfig::new(3, 3).unwrap()
    }

    #[test]
    fn parse_skips_delimiters() {
        let board = TextFormat::default()
            .parse(config(), "..X | .O. | ...")
            .unwrap();
        assert_eq!(board.get(Cell::new(0, 2)), Some(Peg::Cross));
        assert_eq!(board.get(Cell::new(1, 1)), Some(Peg::Nought));
        assert_eq!(board.empty_cells().count(), 7);
    }

    #[test]
    fn parse_rejects_wrong_cell_count() {
        let err = TextFormat::default()
            .parse(config(), "..X|.O.")
            .unwrap_err();
        assert_eq!(err.expected, 9);
        assert_eq!(err.actual, 6);
    }

    #[test]
    fn render_parse_round_trip() {
        let format = TextFormat::default();
        let board = format.parse(config(), "X.O|.X.|O..").unwrap();

        assert_eq!(format.render(&board), "X.O\n.X.\nO..");
        assert_eq!(format.compact(&board), "X.O|.X.|O..");
        assert_eq!(format.parse(config(), &format.render(&board)).unwrap(), board);
    }

    #[test]
    fn custom_marker_characters() {
        let format = TextFormat::new('#', 'o', vec!['_']);
        let board = format.parse(config(), "#o_ _#_ __o").unwrap();
        assert_eq!(board.get(Cell::new(0, 0)), Some(Peg::Cross));
        assert_eq!(board.get(Cell::new(0, 1)), Some(Peg::Nought));
        assert_eq!(format.compact(&board), "#o_|_#_|__o");
    }
}
