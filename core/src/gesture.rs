use serde::{Deserialize, Serialize};

use crate::*;

/// Pointer input forwarded by the presentation layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gesture {
    /// Reveal a cell
    PrimaryClick(CellIndex),
    /// Toggle a flag on a cell
    SecondaryClick(CellIndex),
    ResetRequested,
}

impl<G: LayoutGenerator> Sweeper<G> {
    /// Applies a gesture, returning whether the board changed.
    ///
    /// Follow up with [`Sweeper::publish`] or [`Sweeper::drain_events`] to
    /// pick up the resulting notifications.
    pub fn apply(&mut self, gesture: Gesture) -> Result<bool> {
        let result = match gesture {
            Gesture::PrimaryClick(index) => self.reveal(index).map(|r| r.outcome.has_update()),
            Gesture::SecondaryClick(index) => {
                self.toggle_flag(index).map(|r| r.outcome.has_update())
            }
            Gesture::ResetRequested => self.reset().map(|()| true),
        };

        if let Err(err) = &result {
            log::warn!("Rejected {gesture:?}: {err}");
        }
        result
    }
}
