//! Two-player tic-tac-toe for the terminal.
//!
//! A small screen-flow state machine drives the whole application:
//! start screen → add-player screen → in-game → end-game → in-game → …
//!
//! # Architecture
//!
//! - **Game**: board storage, win/tie rules, and player records
//! - **Flow**: the state machine owning all mutable state, painting
//!   through an abstract [`Renderer`] boundary
//! - **Tui**: the terminal implementation of that boundary plus the
//!   event loop translating keys and mouse clicks into flow events
//!
//! Everything is single-threaded and synchronous: one input event is
//! processed to completion before the next is read.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod flow;
pub mod game;
pub mod tui;

pub use cli::Cli;
pub use flow::{FlowEvent, GameFlow, GameMode, Renderer, STAND_IN_NAME, ScreenState};
pub use game::{Board, Cell, Mark, PlaceError, Player, WIN_LINES, WinLine, detect_win, is_full};
