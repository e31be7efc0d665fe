//! Tutorial tic-tac-toe - pure game logic
//!
//! The game is modelled as an append-only history of immutable board
//! snapshots. A host (terminal, GUI, test) holds a [`GameState`] value and
//! replaces it with whatever [`MoveController`] hands back.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Cell`], [`Board`], [`Position`]
//! - **Rules**: pure win/draw evaluation over the eight fixed lines
//! - **State**: [`GameState`], the snapshot history plus derived turn/status
//! - **Controller**: [`MoveController`], validates and applies moves
//! - **Invariants / Contracts**: checkable properties of every transition
//!
//! # Example
//!
//! ```
//! use tutorial_tictactoe::{GameState, MoveController, Player};
//!
//! let state = GameState::initial();
//! let state = MoveController::attempt_move(&state, 4).unwrap();
//! assert_eq!(state.turn(), Player::O);
//!
//! // Clicking an occupied square has no effect.
//! assert!(MoveController::attempt_move(&state, 4).unwrap_err().is_rejection());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod position;
mod state;
mod status;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use controller::MoveController;
pub use position::Position;
pub use state::GameState;
pub use status::GameStatus;
pub use types::{Board, BoardParseError, Cell, Player};
