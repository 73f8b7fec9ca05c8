#![no_std]

extern crate alloc;

use alloc::string::ToString;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use events::*;
pub use generator::*;
pub use gesture::*;
pub use types::*;
pub use view::*;

mod board;
mod cell;
mod engine;
mod error;
mod events;
mod generator;
mod gesture;
mod types;
mod view;

/// Side length and mine count of a square board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub size: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const DEFAULT_SIZE: Coord = 9;
    pub const DEFAULT_MINES: CellCount = 10;

    pub const fn new_unchecked(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Builds a validated config, requires `size > 0` and `0 < mines < size²`.
    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        config.validate()?;
        Ok(config)
    }

    /// Parses a config from JSON, missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|err| GameError::MalformedConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(GameError::EmptyBoard);
        }
        if self.mines == 0 {
            return Err(GameError::NoMines);
        }
        let cells = self.total_cells();
        if self.mines >= cells {
            return Err(GameError::TooManyMines {
                mines: self.mines,
                cells,
            });
        }
        Ok(())
    }

    pub const fn board_size(&self) -> Coord2 {
        (self.size, self.size)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::DEFAULT_SIZE, Self::DEFAULT_MINES)
    }
}

/// Immutable mine placement for one game.
///
/// Only the mask is serialized, size and count are always derived from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MineMask", into = "MineMask")]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    size: Coord2,
    mine_count: CellCount,
}

impl MineLayout {
    /// Wraps a `(rows, cols)` mask, `true` marks a mine.
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        let size: Coord2 = (
            rows.try_into().map_err(|_| GameError::InvalidBoardShape)?,
            cols.try_into().map_err(|_| GameError::InvalidBoardShape)?,
        );
        let mine_count = mine_mask
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .map_err(|_| GameError::InvalidBoardShape)?;
        Ok(Self {
            mine_mask,
            size,
            mine_count,
        })
    }

    /// Builds a layout from row-major indices, duplicates count once.
    pub fn from_mine_indices(size: Coord2, mine_indices: &[CellIndex]) -> Result<Self> {
        let total = mult(size.0, size.1);
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &index in mine_indices {
            if index >= total {
                return Err(GameError::InvalidIndex { index, total });
            }
            mine_mask[index_to_coords(index, size).to_nd_index()] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    /// Whether this layout can be played under `config`.
    pub fn matches(&self, config: &GameConfig) -> bool {
        self.size == config.board_size() && self.mine_count == config.mines
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most 8 neighbors, fits in u8
        self.iter_neighbors(coords).filter(|&pos| self[pos]).count() as u8
    }

    pub fn mine_indices(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((row, col), _)| coords_to_index((row as Coord, col as Coord), self.size))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size)
    }
}

#[derive(Serialize, Deserialize)]
struct MineMask {
    mine_mask: Array2<bool>,
}

impl TryFrom<MineMask> for MineLayout {
    type Error = GameError;

    fn try_from(mask: MineMask) -> Result<Self> {
        Self::from_mine_mask(mask.mine_mask)
    }
}

impl From<MineLayout> for MineMask {
    fn from(layout: MineLayout) -> Self {
        Self {
            mine_mask: layout.mine_mask,
        }
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlagOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

impl FlagOutcome {
    /// Whether this outcome changed the board
    pub const fn has_update(self) -> bool {
        use FlagOutcome::*;
        match self {
            NoChange => false,
            Flagged => true,
            Unflagged => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    /// Whether this outcome changed the board
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}
