//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating board state. Rules are separated
//! from board storage so the flow machine composes them explicitly:
//! win is always checked before tie, on every move.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WIN_LINES, WinLine, detect_win};
