//! Screen states for the game flow machine.

use serde::{Deserialize, Serialize};

/// The screens the flow machine can be in.
///
/// Reachable flow: `Start → AddPlayer → InGame → EndGame → InGame → …`.
/// `EndGame` only ever returns to `InGame`; nothing leads back to
/// `Start` within a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum ScreenState {
    /// Mode selection (1 player / 2 players).
    Start,
    /// Name entry for the next player slot.
    AddPlayer,
    /// A round is being played.
    InGame,
    /// The round ended; awaiting "play again".
    EndGame,
    /// Declared for completeness but unreachable: no transition in the
    /// table produces it, and none is invented here.
    Exit,
}
