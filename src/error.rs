//! Error types for the tic-tac-toe engine

use thiserror::Error;

use crate::board::Player;

/// Errors surfaced to drivers of the engine.
///
/// Illegal `apply_move`/`undo_move` calls are not represented here: they are
/// programming errors and panic. Untrusted input is screened with
/// [`Pos::try_new`](crate::board::Pos::try_new) and
/// [`Board::check_move`](crate::board::Board::check_move) before it reaches
/// the board.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GameError {
    #[error("the game doesn't have a winner")]
    NoWinner,

    #[error("position ({row}, {col}) is outside the 3x3 board")]
    OutOfBounds { row: i64, col: i64 },

    #[error("position ({row}, {col}) is already occupied")]
    Occupied { row: u8, col: u8 },

    #[error("invalid input '{input}' (expected: '<row> <col>')")]
    InvalidInput { input: String },

    #[error("input ended before the game was over")]
    UnexpectedEof,

    #[error("the engine found no move for {player}")]
    NoMove { player: Player },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

impl GameError {
    /// Wrap an I/O failure with the operation that hit it
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        GameError::Io {
            operation: operation.into(),
            source,
        }
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, GameError>;
