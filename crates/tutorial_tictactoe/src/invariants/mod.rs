//! First-class invariants over a game's snapshot history.
//!
//! Invariants are logical properties that must hold for every
//! [`GameState`]. They are testable independently and are checked as
//! postconditions of every move in debug builds.

use crate::GameState;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
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

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

pub mod alternating_turn;
pub mod monotonic_board;
pub mod non_empty_history;

pub use alternating_turn::AlternatingTurnInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use non_empty_history::NonEmptyHistoryInvariant;

/// All tic-tac-toe invariants as a composable set.
pub type TicTacToeInvariants = (
    NonEmptyHistoryInvariant,
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
);

/// Checks every invariant on `state`.
pub fn check_state(state: &GameState) -> Result<(), Vec<InvariantViolation>> {
    TicTacToeInvariants::check_all(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, MoveController, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_initial_state() {
        assert!(check_state(&GameState::initial()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let state = MoveController::replay(&[0, 4, 2]).unwrap();
        assert!(check_state(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut state = MoveController::replay(&[4]).unwrap();
        // Overwrite X's mark with O.
        state.history[1] = Board::new().with_mark(Position::Center, Player::O);

        let violations = check_state(&state).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            AlternatingTurnInvariant::description()
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (NonEmptyHistoryInvariant, MonotonicBoardInvariant);
        assert!(TwoInvariants::check_all(&GameState::initial()).is_ok());
    }
}
