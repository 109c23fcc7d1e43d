//! First-class move actions for gomoku.
//!
//! Moves are domain events, not side effects: they can be validated,
//! serialized for replay, and logged independently of execution.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move: a player placing their stone at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the stone is placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Error that can occur when validating or applying a move.
///
/// All three are recoverable by the caller; the engine state is untouched
/// when any of them is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// A coordinate lies outside the board.
    #[display("position ({}, {}) is outside the board", row, col)]
    OutOfBounds {
        /// Requested row index.
        row: usize,
        /// Requested column index.
        col: usize,
    },

    /// The target cell already holds a stone.
    #[display("cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The game already has a winner; no moves are accepted until reset.
    #[display("game is already won by {}", _0)]
    GameAlreadyWon(Player),
}

impl std::error::Error for MoveError {}
