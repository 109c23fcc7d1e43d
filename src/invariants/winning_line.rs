//! Winning-line well-formedness invariant.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::{Cell, WIN_LENGTH};

/// Invariant: a recorded winning line is well-formed.
///
/// When a win result is present, its cells form a contiguous run of at
/// least [`WIN_LENGTH`] stones of the winner's color along the recorded
/// axis. Holds trivially while the game is in progress.
pub struct WinningLineInvariant;

impl Invariant<GameEngine> for WinningLineInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let Some(line) = engine.win_result() else {
            return true;
        };

        if line.cells().len() < WIN_LENGTH {
            return false;
        }

        let same_color = line
            .cells()
            .iter()
            .all(|&pos| engine.board().get(pos) == Cell::Occupied(line.player()));

        let (dr, dc) = line.axis().step();
        let contiguous = line
            .cells()
            .windows(2)
            .all(|pair| pair[0].step(dr, dc) == Some(pair[1]));

        same_color && contiguous
    }

    fn description() -> &'static str {
        "Winning line is a contiguous run of at least five stones of one color on one axis"
    }
}
