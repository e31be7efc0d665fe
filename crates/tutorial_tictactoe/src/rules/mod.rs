//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](crate::Board) snapshot. They know
//! nothing about history or turns, so contracts and hosts can call them on
//! any board.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{evaluate, winning_line, LINES};
