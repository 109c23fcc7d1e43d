//! Core domain types for gomoku.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Board side length. The board is always 15×15.
pub const BOARD_SIZE: usize = 15;

/// Number of aligned stones required to win. Longer runs also win.
pub const WIN_LENGTH: usize = 5;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// The black player (moves first by default).
    #[strum(serialize = "BLACK")]
    Black,
    /// The white player.
    #[strum(serialize = "WHITE")]
    White,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player's stone.
    Occupied(Player),
}

/// 15×15 gomoku board.
///
/// Rows are independent arrays; the board is owned by the engine and only
/// ever handed out by shared reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed as `cells[row][col]`.
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, position: Position) -> Cell {
        self.cells[position.row()][position.col()]
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, position: Position, cell: Cell) {
        self.cells[position.row()][position.col()] = cell;
    }

    /// Checks if the cell at the given position is empty.
    pub fn is_empty(&self, position: Position) -> bool {
        self.get(position) == Cell::Empty
    }

    /// Returns the full grid, indexed as `cells[row][col]`.
    pub fn cells(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Counts the cells occupied by the given player.
    pub fn stones(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }

    /// Counts all occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| **c != Cell::Empty)
            .count()
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (i, row) in self.cells.iter().enumerate() {
            for cell in row {
                result.push(match cell {
                    Cell::Empty => '.',
                    Cell::Occupied(Player::Black) => 'B',
                    Cell::Occupied(Player::White) => 'W',
                });
            }
            if i < BOARD_SIZE - 1 {
                result.push('\n');
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game.
///
/// There is no draw state: a full board with no five-in-a-row stays
/// `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner. Terminal until reset.
    Won(Player),
}
