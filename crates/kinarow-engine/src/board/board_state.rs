use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    CellCountError, OccupiedCellError,
    board::text::TextFormat,
    core::{cell::Cell, config::BoardConfig, peg::Peg},
};

/// Occupancy of every cell on one board.
///
/// Total over all `board_size²` cells. Carries no turn history and checks no
/// legality beyond "the target of a placement must be empty": arbitrary peg
/// distributions are accepted, so one state object can be reused across
/// unrelated positions of the same shape. Evaluation only reads this;
/// mutation happens through [`place`](Self::place) and
/// [`replace_all`](Self::replace_all) alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    config: BoardConfig,
    cells: Vec<Option<Peg>>,
}

impl BoardState {
    /// An empty board of the given shape.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            cells: vec![None; config.cell_count()],
        }
    }

    #[must_use]
    pub fn config(&self) -> BoardConfig {
        self.config
    }

    /// Occupant of `cell`, or `None` when empty.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<Peg> {
        self.cells[self.config.index_of(cell)]
    }

    /// Places `peg` on an empty cell.
    ///
    /// Fails without mutating when the cell is already occupied.
    pub fn place(&mut self, cell: Cell, peg: Peg) -> Result<(), OccupiedCellError> {
        let slot = &mut self.cells[self.config.index_of(cell)];
        if slot.is_some() {
            return Err(OccupiedCellError { cell });
        }
        *slot = Some(peg);
        Ok(())
    }

    /// Replaces the whole occupancy at once.
    ///
    /// Fails without mutating when the cardinality does not match the board
    /// shape.
    pub fn replace_all(&mut self, cells: Vec<Option<Peg>>) -> Result<(), CellCountError> {
        if cells.len() != self.config.cell_count() {
            return Err(CellCountError {
                expected: self.config.cell_count(),
                actual: cells.len(),
            });
        }
        self.cells = cells;
        Ok(())
    }

    /// Cells currently empty, in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.config.cells().filter(|&cell| self.get(cell).is_none())
    }

    /// Cells currently occupied by `peg`, in row-major order.
    pub fn cells_of(&self, peg: Peg) -> impl Iterator<Item = Cell> + '_ {
        self.config
            .cells()
            .filter(move |&cell| self.get(cell) == Some(peg))
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&TextFormat::default().render(self))
    }
}

impl Serialize for BoardState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Format: "board_size:win_size:cells" (e.g. "3:3:X..|.O.|...")
        let s = format!(
            "{}:{}:{}",
            self.config.board_size(),
            self.config.win_size(),
            TextFormat::default().compact(self)
        );
        serializer.serialize_str(&s)
    }
}

impl<'de> Deserialize<'de> for BoardState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        // Parse format: "board_size:win_size:cells" (e.g. "3:3:X..|.O.|...")
        let mut parts = s.splitn(3, ':');
        let (Some(board_size), Some(win_size), Some(cells)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(serde::de::Error::custom(format!(
                "expected format 'board_size:win_size:cells', got '{s}'"
            )));
        };
        let board_size: usize = board_size.parse().map_err(|e| {
            serde::de::Error::custom(format!("invalid board size: {board_size} ({e})"))
        })?;
        let win_size: usize = win_size.parse().map_err(|e| {
            serde::de::Error::custom(format!("invalid win length: {win_size} ({e})"))
        })?;
        let config = BoardConfig::new(board_size, win_size).map_err(serde::de::Error::custom)?;
        TextFormat::default()
            .parse(config, cells)
            .map_err(serde::de::Error::custom)
    }
}
