//! Bounds-checked board coordinates.

use crate::types::BOARD_SIZE;
use serde::{Deserialize, Serialize};

/// A position on the 15×15 board.
///
/// Construction is bounds-checked, so a `Position` always names a real
/// cell; deserialization routes through the same check, so a corrupt
/// snapshot cannot smuggle one in. Displayed as `[row, column]` with a
/// 1-based row number and a column letter (`A` + column), e.g. `[5, C]`
/// for row 4, column 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: u8,
    col: u8,
}

/// Unchecked wire form of [`Position`], converted with a bounds check.
#[derive(Debug, Clone, Copy, Deserialize)]
struct RawPosition {
    row: u8,
    col: u8,
}

impl TryFrom<RawPosition> for Position {
    type Error = String;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.row as usize, raw.col as usize).ok_or_else(|| {
            format!("position ({}, {}) is outside the board", raw.row, raw.col)
        })
    }
}

impl Position {
    /// Creates a position, returning `None` if either coordinate is
    /// outside `[0, BOARD_SIZE)`.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Zero-based row index.
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Zero-based column index.
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Steps by the given row/column deltas, returning `None` when the
    /// step leaves the board.
    pub fn step(self, dr: i32, dc: i32) -> Option<Self> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        if row >= 0 && col >= 0 {
            Self::new(row as usize, col as usize)
        } else {
            None
        }
    }

    /// Column letter for display: `A` for column 0 through `O` for 14.
    pub fn column_letter(self) -> char {
        (b'A' + self.col) as char
    }

    /// Row number for display (1-based).
    pub fn row_number(self) -> usize {
        self.row as usize + 1
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.row_number(), self.column_letter())
    }
}
