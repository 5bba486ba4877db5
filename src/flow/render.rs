//! Rendering boundary between the flow machine and the UI surface.

use crate::game::{Mark, Player, WinLine};

/// Surface the flow machine paints screens onto.
///
/// The machine calls these synchronously while handling an event; an
/// implementation must not dispatch new [`FlowEvent`]s from inside a
/// render call, or it would re-enter the machine mid-transition.
/// Input travels the other way: the UI layer turns clicks and
/// keypresses into events and feeds them to the machine.
///
/// [`FlowEvent`]: crate::flow::FlowEvent
pub trait Renderer {
    /// Removes everything currently rendered.
    fn clear_screen(&mut self);

    /// Shows the start screen with its player-count options.
    fn render_start_screen(&mut self);

    /// Shows a text-entry prompt for the `prompt_index`-th player
    /// (1-based).
    fn render_add_player_prompt(&mut self, prompt_index: usize);

    /// Shows the 9 empty, addressable cells of a fresh board.
    fn render_board(&mut self);

    /// Paints a mark into the cell at `index`.
    fn mark_cell(&mut self, index: usize, mark: Mark);

    /// Visually marks the winning triple.
    fn highlight_winning_line(&mut self, line: WinLine);

    /// Shows the scoreboard with each player's name and win count.
    fn render_scoreboard(&mut self, players: &[Player]);

    /// Updates the already-rendered scoreboard in place.
    fn update_scoreboard(&mut self, players: &[Player]);

    /// Shows the single "play again" confirm control.
    fn render_play_again_prompt(&mut self);
}
