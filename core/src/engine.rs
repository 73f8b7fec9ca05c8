use alloc::vec::{Drain, Vec};
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
///
/// Only a reset leaves `Won` or `Lost`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Counters and status for the game in progress.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    flags_remaining: CellCount,
    revealed_safe_count: CellCount,
    status: GameStatus,
}

impl GameSession {
    pub fn new(mines: CellCount) -> Self {
        Self {
            flags_remaining: mines,
            revealed_safe_count: 0,
            status: Default::default(),
        }
    }

    pub fn flags_remaining(&self) -> CellCount {
        self.flags_remaining
    }

    pub fn revealed_safe_count(&self) -> CellCount {
        self.revealed_safe_count
    }

    /// Safe cells revealed so far, frozen once the game ends.
    pub fn score(&self) -> CellCount {
        self.revealed_safe_count
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealResult {
    pub outcome: RevealOutcome,
    /// State of the targeted cell after the call.
    pub cell: CellUpdate,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagResult {
    pub outcome: FlagOutcome,
    pub cell: CellUpdate,
    pub flags_remaining: CellCount,
}

/// Owns one board at a time and applies player moves to it.
///
/// Moves that make no sense in the current state (revealing a revealed cell,
/// flagging past the mine count, anything after the game ended) are no-ops
/// reported as `NoChange`. Only out-of-range indices are errors.
#[derive(Clone, Debug)]
pub struct Sweeper<G = RandomLayoutGenerator> {
    config: GameConfig,
    generator: G,
    board: Board,
    session: GameSession,
    events: Vec<GameEvent>,
}

impl Sweeper<RandomLayoutGenerator> {
    /// Starts a game with uniformly random layouts drawn from `seed`.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(config, RandomLayoutGenerator::new(seed))
    }
}

impl<G: LayoutGenerator> Sweeper<G> {
    pub fn new(config: GameConfig, mut generator: G) -> Result<Self> {
        config.validate()?;
        let board = Self::build_board(config, &mut generator)?;
        log::debug!(
            "New {}x{} game with {} mines",
            config.size,
            config.size,
            config.mines
        );
        Ok(Self {
            config,
            generator,
            board,
            session: GameSession::new(config.mines),
            events: Vec::new(),
        })
    }

    /// Replaces the board with a fresh layout under the same configuration.
    ///
    /// Undelivered events of the previous game are dropped.
    pub fn reset(&mut self) -> Result<()> {
        self.board = Self::build_board(self.config, &mut self.generator)?;
        self.session = GameSession::new(self.config.mines);
        self.events.clear();
        self.events.push(GameEvent::Reset {
            size: self.config.size,
            flags_remaining: self.session.flags_remaining,
        });
        log::debug!("Game reset");
        Ok(())
    }

    fn build_board(config: GameConfig, generator: &mut G) -> Result<Board> {
        let layout = generator.generate(config)?;
        if !layout.matches(&config) {
            return Err(GameError::LayoutMismatch);
        }
        Ok(Board::from_layout(&layout))
    }

    pub fn reveal(&mut self, index: CellIndex) -> Result<RevealResult> {
        use RevealOutcome::*;

        let coords = self.board.validate_index(index)?;
        let cell = self.board.cell_at(coords);

        if self.session.is_finished() || cell.state != CellState::Hidden {
            return Ok(RevealResult {
                outcome: NoChange,
                cell: cell.update(index),
            });
        }

        let update = self.change_state(index, coords, CellState::Revealed);

        if cell.is_mine {
            log::debug!("Revealed mine at {index}");
            self.reveal_mines();
            self.end_game(GameStatus::Lost);
            return Ok(RevealResult {
                outcome: HitMine,
                cell: update,
            });
        }

        self.session.revealed_safe_count += 1;
        log::debug!(
            "Revealed cell {index}, adjacent mines: {}",
            cell.adjacent_mine_count
        );

        let outcome = if self.session.revealed_safe_count == self.board.safe_cell_count() {
            self.end_game(GameStatus::Won);
            Won
        } else {
            Revealed
        };

        Ok(RevealResult {
            outcome,
            cell: update,
        })
    }

    pub fn toggle_flag(&mut self, index: CellIndex) -> Result<FlagResult> {
        use FlagOutcome::*;

        let coords = self.board.validate_index(index)?;

        let outcome = if self.session.is_finished() {
            NoChange
        } else {
            match self.board.cell_at(coords).state {
                CellState::Revealed => NoChange,
                CellState::Hidden if self.session.flags_remaining == 0 => {
                    log::debug!("No flags left for cell {index}");
                    NoChange
                }
                CellState::Hidden => {
                    self.change_state(index, coords, CellState::Flagged);
                    self.session.flags_remaining -= 1;
                    Flagged
                }
                CellState::Flagged => {
                    self.change_state(index, coords, CellState::Hidden);
                    self.session.flags_remaining += 1;
                    Unflagged
                }
            }
        };

        if outcome.has_update() {
            log::debug!(
                "{outcome:?} cell {index}, flags left: {}",
                self.session.flags_remaining
            );
            self.events
                .push(GameEvent::FlagsRemaining(self.session.flags_remaining));
        }

        Ok(FlagResult {
            outcome,
            cell: self.board.cell_at(coords).update(index),
            flags_remaining: self.session.flags_remaining,
        })
    }

    fn change_state(&mut self, index: CellIndex, coords: Coord2, state: CellState) -> CellUpdate {
        self.board.set_state(coords, state);
        let update = self.board.cell_at(coords).update(index);
        self.events.push(GameEvent::CellChanged(update));
        update
    }

    /// Exposes every mine not yet revealed, flagged ones included.
    fn reveal_mines(&mut self) {
        let size = self.board.size();
        for index in 0..self.board.total_cells() {
            let coords = index_to_coords(index, size);
            let cell = self.board.cell_at(coords);
            if cell.is_mine && cell.state != CellState::Revealed {
                self.change_state(index, coords, CellState::Revealed);
            }
        }
    }

    fn end_game(&mut self, status: GameStatus) {
        if self.session.is_finished() {
            return;
        }

        self.session.status = status;
        log::info!(
            "Game ended: {status:?}, score {}",
            self.session.revealed_safe_count
        );
        self.events.push(GameEvent::Finished {
            status,
            score: self.session.revealed_safe_count,
        });
    }
}

impl<G> Sweeper<G> {
    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord {
        self.config.size
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn status(&self) -> GameStatus {
        self.session.status
    }

    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    pub fn flags_remaining(&self) -> CellCount {
        self.session.flags_remaining
    }

    pub fn score(&self) -> CellCount {
        self.session.score()
    }

    pub fn cell(&self, index: CellIndex) -> Result<Cell> {
        self.board.cell(index)
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Hands out queued notifications in emission order.
    pub fn drain_events(&mut self) -> Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    /// Delivers queued notifications to `presenter`.
    pub fn publish<P: Presenter + ?Sized>(&mut self, presenter: &mut P) {
        for event in self.events.drain(..) {
            presenter.present(&event);
        }
    }
}
