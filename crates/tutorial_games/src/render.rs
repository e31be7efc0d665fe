//! Text rendering of boards, status and history.

use crate::HostConfig;
use serde_json::{Value, json};
use tutorial_tictactoe::{Board, Cell, GameState, GameStatus, Player, rules};

/// Formats the board as a 3x3 grid.
///
/// Empty cells show their index when `show_coordinates` is set, a blank
/// otherwise.
pub fn render_board(board: &Board, show_coordinates: bool) -> String {
    let mut result = String::new();
    for row in 0..3 {
        for col in 0..3 {
            let index = row * 3 + col;
            let symbol = match board.cells()[index] {
                Cell::Empty if show_coordinates => index.to_string(),
                Cell::Empty => " ".to_string(),
                Cell::Occupied(Player::X) => "X".to_string(),
                Cell::Occupied(Player::O) => "O".to_string(),
            };
            result.push_str(&symbol);
            if col < 2 {
                result.push('|');
            }
        }
        if row < 2 {
            result.push_str("\n-+-+-\n");
        }
    }
    result
}

/// Status line, board, and the winning line once there is one.
pub fn render_state(state: &GameState, config: &HostConfig) -> String {
    let board = state.current_board();
    let mut out = format!(
        "{}\n\n{}\n",
        state.status_line(),
        render_board(board, *config.show_coordinates())
    );

    if let Some(line) = rules::winning_line(board) {
        let labels = line
            .iter()
            .map(|p| p.label())
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("Winning line: {}\n", labels));
    }
    out
}

/// Numbered move list over `timeline`; `current` reads "You are at ...".
pub fn render_history(timeline: &GameState, current: usize) -> String {
    timeline
        .move_descriptions()
        .into_iter()
        .enumerate()
        .map(|(step, description)| {
            if step != current {
                format!("{}. {}\n", step, description)
            } else if step == 0 {
                format!("{}. You are at game start\n", step)
            } else {
                format!("{}. You are at move #{}\n", step, step)
            }
        })
        .collect()
}

/// JSON printed by `replay --json`.
pub fn replay_report(state: &GameState) -> Value {
    json!({
        "status": state.status(),
        "status_line": state.status_line(),
        "state": state,
    })
}

/// JSON printed by `evaluate --json`.
pub fn evaluation_report(board: &Board) -> Value {
    json!({
        "board": board.to_string(),
        "winner": rules::evaluate(board),
        "winning_line": rules::winning_line(board),
        "status": GameStatus::of(board),
    })
}
