//! Formatted move-history records.

use crate::action::Move;
use serde::{Deserialize, Serialize};

/// One entry of the formatted game transcript.
///
/// Displays as `"3. [5, C]: BLACK"` — the 1-based move number, the
/// position (1-based row, column letter), and the player who moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    index: usize,
    mov: Move,
}

impl Record {
    /// Creates a record for the `index`-th move (1-based).
    pub fn new(index: usize, mov: Move) -> Self {
        Self { index, mov }
    }

    /// 1-based move number.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The recorded move.
    pub fn mov(&self) -> Move {
        self.mov
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}: {}", self.index, self.mov.position, self.mov.player)
    }
}
