//! History consistency invariant: history matches occupied cells.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::Cell;

/// Invariant: history length equals the number of occupied cells, and
/// every recorded move matches the stone on its cell.
///
/// No moves are missing, no cells are filled without a move, and no
/// record contradicts the board.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        if engine.history().len() != engine.board().occupied() {
            return false;
        }

        engine
            .history()
            .iter()
            .all(|mov| engine.board().get(mov.position()) == Cell::Occupied(mov.player()))
    }

    fn description() -> &'static str {
        "History length matches occupied cells and every record matches its stone"
    }
}
