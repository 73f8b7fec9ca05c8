use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Player-visible snapshot of a whole game, for rendering from scratch.
///
/// Mine positions are not part of the view until the game reveals them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub size: Coord,
    pub status: GameStatus,
    pub flags_remaining: CellCount,
    pub score: CellCount,
    /// One entry per cell in index order.
    pub cells: Vec<CellUpdate>,
}

impl BoardView {
    pub fn from_engine<G>(engine: &Sweeper<G>) -> Self {
        let cells = engine
            .board()
            .iter()
            .map(|(index, cell)| cell.update(index))
            .collect();

        Self {
            size: engine.size(),
            status: engine.status(),
            flags_remaining: engine.flags_remaining(),
            score: engine.score(),
            cells,
        }
    }

    pub fn cell(&self, index: CellIndex) -> Option<&CellUpdate> {
        self.cells.get(usize::from(index))
    }
}
