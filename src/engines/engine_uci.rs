//! External UCI engine adapter.
//!
//! Spawns the engine executable with piped stdio, performs the `uci` /
//! `uciok` handshake, and asks for one `bestmove` per turn. Only the
//! commands needed to pick a move are spoken; options, pondering, and
//! `info` output are ignored.

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use tracing::{debug, warn};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::engines::engine_trait::{Engine, SearchBudget, DEFAULT_MOVETIME_MS};
use crate::game_state::game_state::GameState;

pub struct UciEngine {
    name: String,
    child: Child,
    stdin: ChildStdin,
    reader: BufReader<ChildStdout>,
}

impl UciEngine {
    /// Starts `command` and waits for `uciok`.
    pub fn spawn(command: &str) -> ChessResult<Self> {
        let mut child = Command::new(command)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| ChessErrors::Engine(format!("{command}: stdin unavailable")))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| ChessErrors::Engine(format!("{command}: stdout unavailable")))?;

        let mut engine = Self {
            name: command.to_owned(),
            child,
            stdin,
            reader: BufReader::new(stdout),
        };

        engine.send("uci")?;
        let handshake = engine.wait_for("uciok")?;
        if let Some(id_name) = handshake.id_name {
            engine.name = id_name;
        }
        debug!(engine = %engine.name, "uci handshake complete");
        Ok(engine)
    }

    fn send(&mut self, command: &str) -> ChessResult<()> {
        debug!(engine = %self.name, %command, "uci >");
        writeln!(self.stdin, "{command}")?;
        self.stdin.flush()?;
        Ok(())
    }

    /// Reads lines until one starts with `prefix`.
    fn wait_for(&mut self, prefix: &str) -> ChessResult<UciReply> {
        let mut id_name = None;
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(ChessErrors::Engine(format!(
                    "{} closed its output while waiting for '{prefix}'",
                    self.name
                )));
            }
            let trimmed = line.trim();
            debug!(engine = %self.name, line = trimmed, "uci <");

            if let Some(name) = trimmed.strip_prefix("id name ") {
                id_name = Some(name.to_owned());
            }
            if trimmed.starts_with(prefix) {
                return Ok(UciReply {
                    line: trimmed.to_owned(),
                    id_name,
                });
            }
        }
    }
}

struct UciReply {
    line: String,
    id_name: Option<String>,
}

impl Engine for UciEngine {
    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(&mut self) -> ChessResult<()> {
        self.send("ucinewgame")?;
        self.send("isready")?;
        self.wait_for("readyok")?;
        Ok(())
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        budget: &SearchBudget,
    ) -> ChessResult<Option<String>> {
        self.send(&format!("position fen {}", game_state.to_fen()))?;
        self.send(&go_command(budget))?;
        let reply = self.wait_for("bestmove")?;
        Ok(parse_bestmove(&reply.line))
    }
}

impl Drop for UciEngine {
    fn drop(&mut self) {
        if self.send("quit").is_err() {
            warn!(engine = %self.name, "could not send quit to engine");
        }
        if let Err(err) = self.child.kill() {
            debug!(engine = %self.name, %err, "engine already exited");
        }
        let _ = self.child.wait();
    }
}

fn go_command(budget: &SearchBudget) -> String {
    match (budget.depth, budget.movetime_ms) {
        (Some(depth), None) => format!("go depth {depth}"),
        (_, Some(movetime)) => format!("go movetime {movetime}"),
        (None, None) => format!("go movetime {DEFAULT_MOVETIME_MS}"),
    }
}

/// Extracts the move from a `bestmove` line. UCI sends promotions in
/// lowercase (`e7e8q`); the notation parser expects an uppercase piece letter.
pub fn parse_bestmove(line: &str) -> Option<String> {
    let mv = line.split_whitespace().nth(1)?;
    if matches!(mv, "(none)" | "0000") {
        return None;
    }

    let mut notation: String = mv.chars().take(4).collect();
    if let Some(promotion) = mv.chars().nth(4) {
        notation.push(promotion.to_ascii_uppercase());
    }
    Some(notation)
}
