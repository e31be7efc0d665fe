//! Tutorial games - terminal host
//!
//! Stands in for the GUI host of the tutorial: it renders the current
//! board and status, turns typed cell names into moves, and keeps the
//! [`GameState`](tutorial_tictactoe::GameState) value the core hands back.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod host;
mod render;

pub use config::{ConfigError, DEFAULT_CONFIG_FILE, HostConfig};
pub use host::{Command, Session, Step};
pub use render::{evaluation_report, render_board, render_history, render_state, replay_report};
