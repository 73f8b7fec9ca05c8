use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Source of mine layouts, consulted once per game.
pub trait LayoutGenerator {
    fn generate(&mut self, config: GameConfig) -> Result<MineLayout>;
}
