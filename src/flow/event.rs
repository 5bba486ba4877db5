//! Logical input events consumed by the flow machine.

use tracing::instrument;

/// Number of human players chosen on the start screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum GameMode {
    /// One human versus the stand-in opponent.
    OnePlayer,
    /// Two humans.
    TwoPlayers,
}

impl GameMode {
    /// Returns the display label for this mode.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::OnePlayer => "1 Player",
            Self::TwoPlayers => "2 Players",
        }
    }
}

/// An input event, already translated from the raw UI surface.
///
/// The UI layer filters raw clicks and keypresses down to these; the
/// machine additionally ignores any event that does not apply to the
/// current screen, so stray events are no-ops rather than errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    /// A player-count option was selected on the start screen.
    ModeSelected(GameMode),
    /// A name was submitted on the add-player screen.
    NameSubmitted(String),
    /// A board cell was chosen during a round.
    CellChosen(usize),
    /// The "play again" control was confirmed.
    PlayAgain,
}
