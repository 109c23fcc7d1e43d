//! Win detection rooted at the most recent move.
//!
//! A move can only complete a line through its own cell, so the scan walks
//! outward from that cell along each of the four axes instead of sweeping
//! the whole board.

use crate::position::Position;
use crate::types::{Board, Cell, Player, WIN_LENGTH};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// One of the four axes a winning line can lie on.
///
/// Scan order matters when a single move completes lines on more than one
/// axis: the first qualifying axis in declaration order is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Axis {
    /// Left-right.
    Horizontal,
    /// Up-down.
    Vertical,
    /// Top-left to bottom-right (↘).
    DiagonalDown,
    /// Bottom-left to top-right (↙).
    DiagonalUp,
}

impl Axis {
    /// Unit step `(row delta, column delta)` in the axis's positive
    /// direction.
    pub fn step(self) -> (i32, i32) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::DiagonalDown => (1, 1),
            Axis::DiagonalUp => (-1, 1),
        }
    }
}

/// A run of five or more same-colored stones on one axis.
///
/// `cells` holds exactly the contiguous run through the triggering move,
/// ordered from the negative end of the axis to the positive end — never
/// the whole board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    player: Player,
    axis: Axis,
    cells: Vec<Position>,
}

impl WinningLine {
    /// The winner.
    pub fn player(&self) -> Player {
        self.player
    }

    /// The axis the line lies on.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The cells of the line, in axis order.
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Exact membership test for a cell, used to highlight winning stones.
    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }
}

/// Searches for a winning line through `last`, the cell just played.
///
/// Returns `None` if the cell is empty or no axis reaches [`WIN_LENGTH`].
/// Runs longer than five count as wins; there is no overline restriction.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, last: Position) -> Option<WinningLine> {
    let Cell::Occupied(player) = board.get(last) else {
        return None;
    };

    for axis in Axis::iter() {
        let (dr, dc) = axis.step();
        let mut cells = Vec::new();

        // Walk toward the negative end, then reverse so the line reads in
        // axis order.
        let mut cursor = last.step(-dr, -dc);
        while let Some(pos) = cursor {
            if board.get(pos) != Cell::Occupied(player) {
                break;
            }
            cells.push(pos);
            cursor = pos.step(-dr, -dc);
        }
        cells.reverse();
        cells.push(last);

        let mut cursor = last.step(dr, dc);
        while let Some(pos) = cursor {
            if board.get(pos) != Cell::Occupied(player) {
                break;
            }
            cells.push(pos);
            cursor = pos.step(dr, dc);
        }

        if cells.len() >= WIN_LENGTH {
            debug!(?axis, ?player, length = cells.len(), "winning line found");
            return Some(WinningLine {
                player,
                axis,
                cells,
            });
        }
    }

    None
}
