//! The game engine: one explicit instance per game.
//!
//! The engine owns the board, the turn, the win result, and the move
//! history. A presentation layer drives it through [`GameEngine::apply_move`]
//! and reads state back through the accessors; nothing here is global.

use crate::action::{Move, MoveError};
use crate::history::Record;
use crate::invariants;
use crate::position::Position;
use crate::rules::{WinningLine, winning_line};
use crate::types::{Board, Cell, GameStatus, Player};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Gomoku game state and rules, behind a local call interface.
///
/// The board is never handed out mutably; callers read it through
/// [`GameEngine::board`] and mutate only via [`GameEngine::apply_move`] or
/// [`GameEngine::place`]. All state is replaced wholesale by
/// [`GameEngine::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    opening_player: Player,
    win: Option<WinningLine>,
    history: Vec<Move>,
}

impl GameEngine {
    /// Creates a new game with BLACK to move.
    pub fn new() -> Self {
        Self::with_first_player(Player::Black)
    }

    /// Creates a new game with the given opening player.
    pub fn with_first_player(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: first_player,
            opening_player: first_player,
            win: None,
            history: Vec::new(),
        }
    }

    /// Creates a new game with a randomly chosen opening player.
    ///
    /// Takes the RNG by reference so callers can seed deterministically.
    pub fn with_random_first_player<R: Rng>(rng: &mut R) -> Self {
        let first = if rng.gen_bool(0.5) {
            Player::Black
        } else {
            Player::White
        };
        Self::with_first_player(first)
    }

    /// Applies the current player's move at raw grid coordinates.
    ///
    /// On success the stone is placed, one history entry is appended, the
    /// win scan runs rooted at the move, and the turn flips. Returns the
    /// status after the move.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if either coordinate is ≥ 15.
    /// - [`MoveError::GameAlreadyWon`] if a winner is already set.
    /// - [`MoveError::CellOccupied`] if the cell holds a stone.
    ///
    /// Any error leaves the engine untouched: no board change, no history
    /// entry, no turn flip.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<GameStatus, MoveError> {
        let position = Position::new(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        self.place(position)
    }

    /// Typed equivalent of [`GameEngine::apply_move`] for callers that
    /// already hold a bounds-checked [`Position`].
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn place(&mut self, position: Position) -> Result<GameStatus, MoveError> {
        if let Some(line) = &self.win {
            return Err(MoveError::GameAlreadyWon(line.player()));
        }
        if !self.board.is_empty(position) {
            return Err(MoveError::CellOccupied(position));
        }

        let mover = self.current_player;
        self.board.set(position, Cell::Occupied(mover));
        self.history.push(Move::new(mover, position));
        self.win = winning_line(&self.board, position);

        // The turn flips even on the winning move; after a win the marker
        // points at the winner's opponent.
        self.current_player = mover.opponent();

        if let Some(line) = &self.win {
            debug!(winner = %line.player(), moves = self.history.len(), "game won");
        }

        invariants::assert_invariants(self);
        Ok(self.status())
    }

    /// Restores an empty board, empty history, no winner, and the opening
    /// player. Always succeeds, from any state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::with_first_player(self.opening_player);
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is.
    ///
    /// After a winning move this is the winner's opponent — the turn flip
    /// happens regardless of the win.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The player configured to open the game (and each reset).
    pub fn opening_player(&self) -> Player {
        self.opening_player
    }

    /// Current status: in progress, or won and frozen until reset.
    pub fn status(&self) -> GameStatus {
        match &self.win {
            Some(line) => GameStatus::Won(line.player()),
            None => GameStatus::InProgress,
        }
    }

    /// The winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.win.as_ref().map(|line| line.player())
    }

    /// The winning line, if any.
    pub fn win_result(&self) -> Option<&WinningLine> {
        self.win.as_ref()
    }

    /// The move history, in play order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The formatted transcript, one record per move, 1-based.
    pub fn records(&self) -> impl Iterator<Item = Record> + '_ {
        self.history
            .iter()
            .enumerate()
            .map(|(i, mov)| Record::new(i + 1, *mov))
    }

    /// Whether the cell at `(row, col)` belongs to the winning line.
    ///
    /// Exact coordinate membership; always false while the game is in
    /// progress or the coordinates are out of bounds.
    pub fn is_winning_cell(&self, row: usize, col: usize) -> bool {
        match (&self.win, Position::new(row, col)) {
            (Some(line), Some(position)) => line.contains(position),
            _ => false,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
