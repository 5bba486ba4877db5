//! Player identity and win tracking.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player: an immutable name plus a mutable win counter.
///
/// Players are owned by the flow machine and live for the whole
/// process run, carrying their cumulative win counts across rounds.
/// The machine, not this type, enforces that names are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct Player {
    /// Display name, fixed at creation.
    name: String,
    /// Number of rounds won.
    #[new(default)]
    wins: u32,
}

impl Player {
    /// Records a win and returns the new count.
    #[instrument(skip(self), fields(name = %self.name))]
    pub fn add_win(&mut self) -> u32 {
        self.wins += 1;
        self.wins
    }
}
