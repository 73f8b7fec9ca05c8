use super::*;

/// Hands out the same layout for every game, for replays and known boards.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedLayoutGenerator {
    layout: MineLayout,
}

impl FixedLayoutGenerator {
    pub fn new(layout: MineLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &MineLayout {
        &self.layout
    }
}

impl LayoutGenerator for FixedLayoutGenerator {
    fn generate(&mut self, config: GameConfig) -> Result<MineLayout> {
        config.validate()?;
        if !self.layout.matches(&config) {
            log::warn!(
                "Fixed layout has {} mines on {:?}, config asks for {} on {:?}",
                self.layout.mine_count(),
                self.layout.size(),
                config.mines,
                config.board_size()
            );
            return Err(GameError::LayoutMismatch);
        }
        Ok(self.layout.clone())
    }
}
