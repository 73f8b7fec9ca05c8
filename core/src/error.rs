use alloc::string::String;
use thiserror::Error;

use crate::{CellCount, CellIndex};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid cell index {index}, board has {total} cells")]
    InvalidIndex { index: CellIndex, total: CellCount },
    #[error("Board size must be at least 1")]
    EmptyBoard,
    #[error("At least one mine is required")]
    NoMines,
    #[error("Too many mines, requested {mines} but board has {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Mine layout does not match the game configuration")]
    LayoutMismatch,
    #[error("Malformed configuration: {0}")]
    MalformedConfig(String),
}

pub type Result<T> = core::result::Result<T, GameError>;
