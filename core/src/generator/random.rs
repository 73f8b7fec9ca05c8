use alloc::vec;
use ndarray::Array2;

use super::*;

/// Uniform placement by Fisher-Yates shuffle over a seeded `SmallRng`.
///
/// The generator keeps its RNG between calls, so every new game continues the
/// same stream: layouts differ from game to game but replay identically for
/// the same seed.
#[derive(Clone, Debug)]
pub struct RandomLayoutGenerator {
    seed: u64,
    rng: rand::rngs::SmallRng,
}

impl RandomLayoutGenerator {
    pub fn new(seed: u64) -> Self {
        use rand::prelude::*;

        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(&mut self, config: GameConfig) -> Result<MineLayout> {
        use rand::prelude::*;

        config.validate()?;

        let mut cells = vec![false; usize::from(config.total_cells())];
        cells[..usize::from(config.mines)].fill(true);
        cells.shuffle(&mut self.rng);

        let mine_mask = Array2::from_shape_vec(config.board_size().to_nd_index(), cells)
            .map_err(|_| GameError::InvalidBoardShape)?;
        let layout = MineLayout::from_mine_mask(mine_mask)?;

        debug_assert_eq!(layout.mine_count(), config.mines);

        log::trace!(
            "Generated layout from seed {}: mines at {:?}",
            self.seed,
            layout.mine_indices().collect::<alloc::vec::Vec<_>>()
        );
        Ok(layout)
    }
}
