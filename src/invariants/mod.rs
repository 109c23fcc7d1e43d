//! Runtime invariants for the gomoku engine.
//!
//! Each invariant names one guarantee the engine upholds after every
//! accepted move. They are checked as a set in debug builds and can be
//! asserted directly in tests.

use crate::engine::GameEngine;
use tracing::warn;

/// A property of a state `S` that must always hold.
pub trait Invariant<S> {
    /// Whether the property holds for `state`.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the property.
    fn description() -> &'static str;
}

/// A broken invariant, carrying its description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A group of invariants checked in one step.
///
/// Implemented for tuples of [`Invariant`]s; checking never short-circuits,
/// so every violated member is reported.
pub trait InvariantSet<S> {
    /// Returns `Ok(())` when every member holds, or the full list of
    /// violations otherwise.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);

pub mod alternating_turn;
pub mod history_consistent;
pub mod winning_line;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use winning_line::WinningLineInvariant;

/// All gomoku engine invariants as a composable set.
pub type GomokuInvariants = (
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
    WinningLineInvariant,
);

/// Asserts that all engine invariants hold (debug builds only).
pub fn assert_invariants(engine: &GameEngine) {
    if cfg!(debug_assertions) {
        if let Err(violations) = GomokuInvariants::check_all(engine) {
            for violation in &violations {
                warn!(description = %violation.description, "invariant violated");
            }
            debug_assert!(violations.is_empty(), "engine invariants violated");
        }
    }
}
