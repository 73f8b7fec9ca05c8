use serde::{Deserialize, Serialize};

use crate::*;

/// Player-visible state of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Hidden,
    Revealed,
    Flagged,
}

impl Default for CellState {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_mine: bool,
    /// Number of mines among the neighbors, only meaningful when `is_mine` is false.
    pub adjacent_mine_count: u8,
    pub state: CellState,
}

impl Cell {
    /// The count a presentation layer may show: only revealed safe cells have one.
    pub const fn visible_count(&self) -> Option<u8> {
        match (self.state, self.is_mine) {
            (CellState::Revealed, false) => Some(self.adjacent_mine_count),
            _ => None,
        }
    }

    pub const fn update(&self, index: CellIndex) -> CellUpdate {
        CellUpdate {
            index,
            state: self.state,
            adjacent_mine_count: self.visible_count(),
        }
    }
}
