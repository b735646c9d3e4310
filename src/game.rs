//! Interactive game loop
//!
//! Alternates turns between a human reading moves from `input` and the AI
//! engine, printing the board to `output` after every committed move.
//! `Player::One` always moves first.

use std::fmt;
use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::board::{Board, Player, Pos};
use crate::engine::AIEngine;
use crate::error::{GameError, Result};

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

/// Parse a `"<row> <col>"` line into a board position.
pub fn parse_move(line: &str) -> Result<Pos> {
    let invalid = || GameError::InvalidInput {
        input: line.trim().to_string(),
    };
    let mut parts = line.split_whitespace();
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };
    let row: i64 = row.parse().map_err(|_| invalid())?;
    let col: i64 = col.parse().map_err(|_| invalid())?;
    Pos::try_new(row, col)
}

/// One game between a human (or nobody) and the engine.
pub struct GameSession<R, W> {
    input: R,
    output: W,
    board: Board,
    engine: AIEngine,
    /// Side typed in by the human; `None` lets the engine play both sides
    human: Option<Player>,
}

impl<R: BufRead, W: Write> GameSession<R, W> {
    pub fn new(input: R, output: W, engine: AIEngine, human: Option<Player>) -> Self {
        Self {
            input,
            output,
            board: Board::new(),
            engine,
            human,
        }
    }

    /// Current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run the game to completion and announce the result.
    pub fn play(&mut self) -> Result<Outcome> {
        info!(human = ?self.human, "game started");
        self.say(format_args!("Game starts now\n"))?;

        let mut player = Player::One;
        while !self.board.is_terminal() {
            let pos = if self.human == Some(player) {
                self.human_move()?
            } else {
                self.engine_move(player)?
            };
            self.board.apply_move(player, pos);
            let rendered = self.board.render();
            self.say(format_args!("Game board:\n{rendered}"))?;
            player = player.opponent();
        }

        let outcome = match self.board.winner() {
            Ok(winner) => Outcome::Winner(winner),
            Err(GameError::NoWinner) => Outcome::Draw,
            Err(e) => return Err(e),
        };
        match outcome {
            Outcome::Winner(winner) => self.say(format_args!("The winner is {winner}\n"))?,
            Outcome::Draw => self.say(format_args!("It's a draw\n"))?,
        }
        info!(?outcome, "game finished");
        Ok(outcome)
    }

    /// Prompt until the human enters a free cell on the board.
    fn human_move(&mut self) -> Result<Pos> {
        loop {
            self.say(format_args!("It's your turn\nEnter position (row col): "))?;
            self.output
                .flush()
                .map_err(|e| GameError::io("flush output", e))?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|e| GameError::io("read move", e))?;
            if read == 0 {
                return Err(GameError::UnexpectedEof);
            }

            match parse_move(&line).and_then(|pos| self.board.check_move(pos).map(|()| pos)) {
                Ok(pos) => return Ok(pos),
                Err(e) => {
                    warn!(error = %e, "rejected move");
                    self.say(format_args!("{e}\n"))?;
                }
            }
        }
    }

    fn engine_move(&mut self, player: Player) -> Result<Pos> {
        self.say(format_args!("AI's turn\n"))?;
        let result = self.engine.get_move_with_stats(&self.board, player);
        let pos = result.best_move.ok_or(GameError::NoMove { player })?;
        self.say(format_args!(
            "The AI moved on position {pos} with score {}\n",
            result.score
        ))?;
        Ok(pos)
    }

    fn say(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.output
            .write_fmt(args)
            .map_err(|e| GameError::io("write output", e))
    }
}
