//! Interactive session: one typed line in, one re-render out.

use crate::HostConfig;
use crate::render::{render_history, render_state};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};
use tutorial_tictactoe::{GameState, MoveController, Position};

const HELP: &str = "\
Commands:
  0-8 or a cell name   place the next mark (e.g. 4, center, top left)
  jump <n>             go back to the board after move n (0 = start)
  history              list the moves so far
  new                  start a new game
  help                 show this message
  quit                 leave
";

/// A parsed line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Click a cell.
    Play(Position),
    /// Time travel to a history step.
    Jump(usize),
    /// Print the move list.
    History,
    /// Restart from the empty board.
    New,
    /// Print usage.
    Help,
    /// End the session.
    Quit,
}

impl Command {
    /// Parses one line; `None` for anything unrecognised.
    #[instrument]
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        let lower = line.to_lowercase();

        match lower.as_str() {
            "history" | "h" => return Some(Command::History),
            "new" | "restart" => return Some(Command::New),
            "help" | "?" => return Some(Command::Help),
            "quit" | "exit" | "q" => return Some(Command::Quit),
            _ => {}
        }

        if let Some(rest) = lower.strip_prefix("jump") {
            return rest.trim().parse().ok().map(Command::Jump);
        }

        Position::from_label_or_number(line).map(Command::Play)
    }
}

/// What the host should do after handling a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Print the text (possibly empty) and keep reading.
    Continue(String),
    /// Stop the session.
    Quit,
}

/// A terminal game session.
///
/// `timeline` is the longest history played so far; `state` is the prefix
/// being viewed. Jumping only moves the view, so a later jump can go forward
/// again. The abandoned future is dropped when a move is accepted.
#[derive(Debug, Clone)]
pub struct Session {
    timeline: GameState,
    state: GameState,
    config: HostConfig,
}

impl Session {
    /// Creates a session at the initial board.
    #[instrument]
    pub fn new(config: HostConfig) -> Self {
        Self {
            timeline: GameState::initial(),
            state: GameState::initial(),
            config,
        }
    }

    /// The state being viewed and played from.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Every snapshot reachable with `jump`, including moves after the view.
    pub fn timeline(&self) -> &GameState {
        &self.timeline
    }

    fn history(&self) -> String {
        render_history(&self.timeline, self.state.move_count())
    }

    /// Renders the current board and status.
    pub fn render(&self) -> String {
        render_state(&self.state, &self.config)
    }

    /// Handles one line of input.
    ///
    /// Rejected moves produce no output: the click simply has no effect.
    #[instrument(skip(self), fields(moves = self.state.move_count()))]
    pub fn handle(&mut self, line: &str) -> Step {
        if line.trim().is_empty() {
            return Step::Continue(String::new());
        }

        let Some(command) = Command::parse(line) else {
            debug!(line, "Unrecognised input");
            return Step::Continue(format!(
                "Unrecognised input {:?}; type 'help'\n",
                line.trim()
            ));
        };

        match command {
            Command::Play(position) => match MoveController::play(&self.state, position) {
                Ok(next) => {
                    if self.state.move_count() < self.timeline.move_count() {
                        debug!(
                            dropped = self.timeline.move_count() - self.state.move_count(),
                            "Branching from an earlier move"
                        );
                    }
                    self.timeline = next.clone();
                    self.state = next;
                    let mut out = self.render();
                    if *self.config.show_history() {
                        out.push_str(&self.history());
                    }
                    if self.state.status().is_terminal() {
                        info!(status = %self.state.status(), "Game finished");
                    }
                    Step::Continue(out)
                }
                Err(e) if e.is_rejection() => Step::Continue(String::new()),
                Err(e) => {
                    warn!(error = %e, "Move failed");
                    Step::Continue(format!("Error: {}\n", e))
                }
            },
            Command::Jump(step) => match self.timeline.jump_to(step) {
                Ok(earlier) => {
                    self.state = earlier;
                    Step::Continue(self.render())
                }
                Err(e) => Step::Continue(format!("Error: {}\n", e)),
            },
            Command::History => Step::Continue(self.history()),
            Command::New => {
                self.timeline = GameState::initial();
                self.state = GameState::initial();
                Step::Continue(self.render())
            }
            Command::Help => Step::Continue(HELP.to_string()),
            Command::Quit => Step::Quit,
        }
    }

    /// Drives the session until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, mut writer: W) -> std::io::Result<()> {
        write!(writer, "{}", self.render())?;
        writer.flush()?;

        for line in reader.lines() {
            match self.handle(&line?) {
                Step::Continue(out) => {
                    write!(writer, "{}", out)?;
                    writer.flush()?;
                }
                Step::Quit => break,
            }
        }

        info!(moves = self.state.move_count(), "Session ended");
        Ok(())
    }
}
