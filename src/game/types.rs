//! Core board types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's symbol on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Mark of the first player slot.
    X,
    /// Mark of the second player slot.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Returns the mark assigned to a player slot (0 or 1).
    ///
    /// Slots outside {0, 1} cannot occur through the flow transition
    /// table, so this fails fast on them.
    #[instrument]
    pub fn for_slot(slot: usize) -> Self {
        match slot {
            0 => Mark::X,
            1 => Mark::O,
            _ => unreachable!("player slot {slot} out of range"),
        }
    }

    /// Returns the display label for this mark.
    pub fn label(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed yet.
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
///
/// Cells are indexed 0-8 in row-major order (rows: 0-2, 3-5, 6-8).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [Cell; 9],
}

/// Error returned when a mark cannot be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// The index does not address a cell on the board.
    #[display("Cell index {_0} is out of range")]
    IndexOutOfRange(usize),
    /// The cell at the index is already occupied.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(usize),
}

impl std::error::Error for PlaceError {}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at the given index is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells as a fixed-size slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Places a mark at the given index.
    ///
    /// This is the only mutator besides [`Board::reset`]. A rejected
    /// placement leaves the board unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::IndexOutOfRange`] if `index` is not in 0-8,
    /// or [`PlaceError::CellOccupied`] if the cell already holds a mark.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, index: usize, mark: Mark) -> Result<(), PlaceError> {
        match self.get(index) {
            None => Err(PlaceError::IndexOutOfRange(index)),
            Some(Cell::Occupied(_)) => Err(PlaceError::CellOccupied(index)),
            Some(Cell::Empty) => {
                self.cells[index] = Cell::Occupied(mark);
                Ok(())
            }
        }
    }

    /// Sets all cells back to empty.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
