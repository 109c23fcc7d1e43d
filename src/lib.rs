//! Pure gomoku (five-in-a-row) game logic.
//!
//! The crate models a single game on a fixed 15×15 board: alternating
//! BLACK/WHITE turns, move validation, win detection that reports the exact
//! winning line, an append-only move history with a formatted transcript,
//! and a reset lifecycle. There is no rendering, AI, or networking here —
//! [`GameEngine`] is a plain library type for a presentation layer to drive.
//!
//! ```
//! use strictly_gomoku::{GameEngine, GameStatus, Player};
//!
//! let mut game = GameEngine::new();
//! assert_eq!(game.current_player(), Player::Black);
//! game.apply_move(7, 7).expect("empty cell");
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

pub mod action;
pub mod engine;
pub mod history;
pub mod invariants;
pub mod position;
pub mod rules;
pub mod types;

pub use action::{Move, MoveError};
pub use engine::GameEngine;
pub use history::Record;
pub use position::Position;
pub use rules::{Axis, WinningLine};
pub use types::{BOARD_SIZE, Board, Cell, GameStatus, Player, WIN_LENGTH};
