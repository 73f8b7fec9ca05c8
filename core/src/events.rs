use serde::{Deserialize, Serialize};

use crate::*;

/// New state of a single cell, as handed to the presentation layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellUpdate {
    pub index: CellIndex,
    pub state: CellState,
    /// Present only for revealed safe cells.
    pub adjacent_mine_count: Option<u8>,
}

/// Notifications emitted by the engine, in the order they happened.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    CellChanged(CellUpdate),
    FlagsRemaining(CellCount),
    Finished { status: GameStatus, score: CellCount },
    /// A new board replaced the old one, every cell is hidden again.
    Reset {
        size: Coord,
        flags_remaining: CellCount,
    },
}

/// Receives engine notifications, typically a rendering shell.
pub trait Presenter {
    fn present(&mut self, event: &GameEvent);
}

impl<F: FnMut(&GameEvent)> Presenter for F {
    fn present(&mut self, event: &GameEvent) {
        self(event)
    }
}
