use crate::core::{
    cell::Cell,
    config::BoardConfig,
    line_set::{LineId, LineSet},
};

/// Inverted index from each cell to the lines passing through it.
///
/// Built once per [`LineSet`] and never written afterwards; any number of
/// evaluation passes may consult it freely, concurrently included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotLineIndex {
    config: BoardConfig,
    entries: Vec<Vec<LineId>>,
}

impl SlotLineIndex {
    #[must_use]
    pub fn new(lines: &LineSet) -> Self {
        let config = lines.config();
        let mut entries = vec![Vec::new(); config.cell_count()];
        for (id, line) in lines.iter() {
            for &cell in line.cells() {
                entries[config.index_of(cell)].push(id);
            }
        }
        Self { config, entries }
    }

    #[must_use]
    pub fn config(&self) -> BoardConfig {
        self.config
    }

    /// Ids of the lines containing `cell`.
    #[must_use]
    pub fn lines_at(&self, cell: Cell) -> &[LineId] {
        &self.entries[self.config.index_of(cell)]
    }
}
