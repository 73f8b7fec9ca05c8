use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Grid of cells with adjacency counts fixed at creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    size: Coord2,
    mine_count: CellCount,
}

impl Board {
    pub fn from_layout(layout: &MineLayout) -> Self {
        let size = layout.size();
        let cells = Array2::from_shape_fn(size.to_nd_index(), |(row, col)| {
            let coords = (row as Coord, col as Coord);
            let is_mine = layout.contains_mine(coords);
            Cell {
                is_mine,
                adjacent_mine_count: if is_mine {
                    0
                } else {
                    layout.adjacent_mine_count(coords)
                },
                state: CellState::Hidden,
            }
        });
        log::trace!(
            "Built {}x{} board with {} mines",
            size.0,
            size.1,
            layout.mine_count()
        );
        Self {
            cells,
            size,
            mine_count: layout.mine_count(),
        }
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<Coord2> {
        let total = self.total_cells();
        if index < total {
            Ok(index_to_coords(index, self.size))
        } else {
            Err(GameError::InvalidIndex { index, total })
        }
    }

    pub fn cell(&self, index: CellIndex) -> Result<Cell> {
        let coords = self.validate_index(index)?;
        Ok(self.cell_at(coords))
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    pub(crate) fn set_state(&mut self, coords: Coord2, state: CellState) {
        self.cells[coords.to_nd_index()].state = state;
    }

    /// Cells in row-major index order.
    pub fn iter(&self) -> impl Iterator<Item = (CellIndex, Cell)> + '_ {
        self.cells.indexed_iter().map(|((row, col), &cell)| {
            let index = coords_to_index((row as Coord, col as Coord), self.size);
            (index, cell)
        })
    }

    pub fn count_in_state(&self, state: CellState) -> CellCount {
        // bounded by total_cells
        self.cells.iter().filter(|cell| cell.state == state).count() as CellCount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: Coord2, mines: &[CellIndex]) -> Board {
        Board::from_layout(&MineLayout::from_mine_indices(size, mines).unwrap())
    }

    #[test]
    fn counts_are_computed_for_every_safe_cell() {
        // . * .
        // . . .
        // * . *
        let board = board((3, 3), &[1, 6, 8]);

        let counts: alloc::vec::Vec<_> = board
            .iter()
            .map(|(_, cell)| (cell.is_mine, cell.adjacent_mine_count))
            .collect();
        assert_eq!(
            counts,
            [
                (false, 1),
                (true, 0),
                (false, 1),
                (false, 2),
                (false, 3),
                (false, 2),
                (true, 0),
                (false, 2),
                (true, 0),
            ]
        );
        assert_eq!(board.count_in_state(CellState::Hidden), 9);
    }

    #[test]
    fn corner_and_edge_counts_on_default_board() {
        // surround the (0, 0) corner and the (0, 4) edge cell with mines
        let board = board((9, 9), &[1, 9, 10, 3, 5, 12, 13, 14]);

        assert_eq!(board.cell(0).unwrap().adjacent_mine_count, 3);
        assert_eq!(board.cell(4).unwrap().adjacent_mine_count, 5);
        assert_eq!(board.cell(80).unwrap().adjacent_mine_count, 0);
        // end of the first row does not see the mine starting the second row
        assert_eq!(board.cell(8).unwrap().adjacent_mine_count, 0);
    }

    #[test]
    fn validate_index_rejects_past_the_end() {
        let board = board((9, 9), &[0]);

        assert_eq!(board.validate_index(80), Ok((8, 8)));
        assert_eq!(
            board.validate_index(81),
            Err(GameError::InvalidIndex {
                index: 81,
                total: 81
            })
        );
        assert!(board.cell(200).is_err());
    }
}
