//! Turn alternation invariant: stone counts stay balanced.

use super::Invariant;
use crate::engine::GameEngine;

/// Invariant: turns alternate starting from the opening player.
///
/// The opening player always has either the same number of stones as the
/// opponent or exactly one more; the opponent can never be ahead.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let opener = engine.board().stones(engine.opening_player());
        let other = engine.board().stones(engine.opening_player().opponent());

        opener == other || opener == other + 1
    }

    fn description() -> &'static str {
        "Opening player's stone count equals or exceeds the opponent's by at most one"
    }
}
