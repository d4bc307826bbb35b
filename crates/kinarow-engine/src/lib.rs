pub use self::{board::*, core::*};

pub mod board;
pub mod core;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("win length {win_size} exceeds board size {board_size}")]
    WinTooLong { board_size: usize, win_size: usize },
    #[display("win length must be at least 1")]
    ZeroWinLength,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("cell {cell} is already occupied")]
pub struct OccupiedCellError {
    pub cell: Cell,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("expected {expected} cells, got {actual}")]
pub struct CellCountError {
    pub expected: usize,
    pub actual: usize,
}
