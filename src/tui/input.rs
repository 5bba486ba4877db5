//! Translation of raw key and mouse events into flow events.
//!
//! Each view accepts its own small set of inputs; everything else is a
//! no-op. This is where the per-screen input filtering lives, so the
//! flow machine only ever sees events that were plausibly meant.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::view::{TuiRenderer, View};
use crate::flow::{FlowEvent, GameMode};

/// Application-level outcome of a key press.
pub(crate) enum KeyAction {
    /// Leave the event loop and restore the terminal.
    Quit,
    /// Hand a logical event to the flow machine.
    Flow(FlowEvent),
    /// Nothing to do (ignored key, or view-local state change).
    None,
}

/// Translates a key press according to the current view.
pub(crate) fn translate_key(view: &mut TuiRenderer, key: KeyEvent) -> KeyAction {
    match view.view() {
        View::Start => match key.code {
            KeyCode::Left | KeyCode::Up => {
                view.menu_previous();
                KeyAction::None
            }
            KeyCode::Right | KeyCode::Down => {
                view.menu_next();
                KeyAction::None
            }
            KeyCode::Enter => KeyAction::Flow(FlowEvent::ModeSelected(view.selected_mode())),
            KeyCode::Char('1') => KeyAction::Flow(FlowEvent::ModeSelected(GameMode::OnePlayer)),
            KeyCode::Char('2') => KeyAction::Flow(FlowEvent::ModeSelected(GameMode::TwoPlayers)),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        },
        // Name entry swallows printable keys, so quitting is Esc only.
        View::AddPlayer { .. } => match key.code {
            KeyCode::Char(c) => {
                view.push_input(c);
                KeyAction::None
            }
            KeyCode::Backspace => {
                view.pop_input();
                KeyAction::None
            }
            KeyCode::Enter => KeyAction::Flow(FlowEvent::NameSubmitted(view.take_input())),
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        },
        View::Round => match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                view.move_cursor(key.code);
                KeyAction::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                KeyAction::Flow(FlowEvent::CellChosen(view.cursor()))
            }
            KeyCode::Char(c) if c.is_ascii_digit() => match c.to_digit(10) {
                Some(digit) if (1..=9).contains(&digit) => {
                    KeyAction::Flow(FlowEvent::CellChosen(digit as usize - 1))
                }
                _ => KeyAction::None,
            },
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        },
        View::PlayAgain => match key.code {
            KeyCode::Enter => KeyAction::Flow(FlowEvent::PlayAgain),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        },
        View::Blank => match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        },
    }
}

/// Translates a left-button press into a flow event by hit-testing the
/// current view's interactive rectangles.
pub(crate) fn translate_mouse(view: &TuiRenderer, mouse: MouseEvent) -> Option<FlowEvent> {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return None;
    }
    match view.view() {
        View::Start => view
            .option_at(mouse.column, mouse.row)
            .map(FlowEvent::ModeSelected),
        View::Round => view
            .cell_at(mouse.column, mouse.row)
            .map(FlowEvent::CellChosen),
        View::PlayAgain if view.again_at(mouse.column, mouse.row) => Some(FlowEvent::PlayAgain),
        _ => None,
    }
}

/// Moves the board cursor with an arrow key, clamped to the grid.
pub(crate) fn move_cursor(cursor: usize, key: KeyCode) -> usize {
    let (row, col) = (cursor / 3, cursor % 3);
    let (row, col) = match key {
        KeyCode::Left if col > 0 => (row, col - 1),
        KeyCode::Right if col < 2 => (row, col + 1),
        KeyCode::Up if row > 0 => (row - 1, col),
        KeyCode::Down if row < 2 => (row + 1, col),
        _ => (row, col),
    };
    row * 3 + col
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_grid() {
        assert_eq!(move_cursor(4, KeyCode::Left), 3);
        assert_eq!(move_cursor(4, KeyCode::Right), 5);
        assert_eq!(move_cursor(4, KeyCode::Up), 1);
        assert_eq!(move_cursor(4, KeyCode::Down), 7);
    }

    #[test]
    fn test_cursor_clamped_at_edges() {
        assert_eq!(move_cursor(0, KeyCode::Left), 0);
        assert_eq!(move_cursor(0, KeyCode::Up), 0);
        assert_eq!(move_cursor(8, KeyCode::Right), 8);
        assert_eq!(move_cursor(8, KeyCode::Down), 8);
    }

    #[test]
    fn test_other_keys_do_not_move_cursor() {
        assert_eq!(move_cursor(4, KeyCode::Enter), 4);
        assert_eq!(move_cursor(4, KeyCode::Char('x')), 4);
    }
}
