//! Move controller: validates a move against the current state and
//! produces the next one.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::position::Position;
use super::state::GameState;
use tracing::{debug, error, info, instrument};

/// Mediates attempted moves.
///
/// Stateless: every call takes the current [`GameState`] by reference and
/// returns a fresh one. On error the caller keeps the state it already has,
/// so a rejected move leaves the history exactly as it was.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveController;

impl MoveController {
    /// Attempts to place the current player's mark at cell `index` (0-8).
    ///
    /// Rejections ([`MoveError::is_rejection`]): the cell is occupied or the
    /// game is already won or drawn. An index outside 0-8 is a contract
    /// violation and is logged at error level.
    #[instrument(skip(state), fields(moves = state.move_count()))]
    pub fn attempt_move(state: &GameState, index: usize) -> Result<GameState, MoveError> {
        let Some(position) = Position::from_index(index) else {
            error!(index, "Move index outside the board");
            return Err(MoveError::OutOfRange(index));
        };
        Self::play(state, position)
    }

    /// Attempts to place the current player's mark at `position`.
    #[instrument(skip(state), fields(moves = state.move_count()))]
    pub fn play(state: &GameState, position: Position) -> Result<GameState, MoveError> {
        let action = Move::new(state.turn(), position);

        if let Err(e) = MoveContract::pre(state, &action) {
            if e.is_rejection() {
                debug!(%action, reason = %e, "Move rejected");
            } else {
                error!(%action, error = %e, "Move precondition violated");
            }
            return Err(e);
        }

        let board = state.current_board().with_mark(position, action.player);
        let next = state.push(board);

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(state, &next) {
            error!(%action, error = %e, "Move postcondition violated");
            return Err(e);
        }

        info!(%action, status = %next.status(), "Move accepted");
        Ok(next)
    }

    /// Builds a state by applying `indices` in order from the initial board.
    ///
    /// Stops at the first failing move and returns its error.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<GameState, MoveError> {
        indices
            .iter()
            .try_fold(GameState::initial(), |state, &index| {
                Self::attempt_move(&state, index)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, GameStatus, Player};

    #[test]
    fn test_first_move_is_x() {
        let state = MoveController::attempt_move(&GameState::initial(), 0).unwrap();
        assert_eq!(state.history().len(), 2);
        assert_eq!(
            state.current_board().get(Position::TopLeft),
            Cell::Occupied(Player::X)
        );
        assert_eq!(state.turn(), Player::O);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let state = MoveController::attempt_move(&GameState::initial(), 0).unwrap();
        let err = MoveController::attempt_move(&state, 0).unwrap_err();
        assert_eq!(err, MoveError::SquareOccupied(Position::TopLeft));
        assert_eq!(state.history().len(), 2);
    }

    #[test]
    fn test_out_of_range_is_contract_violation() {
        let err = MoveController::attempt_move(&GameState::initial(), 9).unwrap_err();
        assert_eq!(err, MoveError::OutOfRange(9));
        assert!(err.is_contract_violation());
    }

    #[test]
    fn test_drawn_game_rejects() {
        // X O X / O X X / O X O, filled in a legal order.
        let state = MoveController::replay(&[0, 1, 2, 3, 4, 6, 5, 8, 7]).unwrap();
        assert_eq!(state.status(), GameStatus::Drawn);
        assert!(Position::valid_moves(state.current_board()).is_empty());
        assert_eq!(
            MoveController::attempt_move(&state, 4),
            Err(MoveError::GameOver(GameStatus::Drawn))
        );
    }

    #[test]
    fn test_replay_stops_at_first_error() {
        assert_eq!(
            MoveController::replay(&[4, 4, 0]),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }
}
