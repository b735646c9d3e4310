//! Tic-tac-toe AI engine with alpha-beta search
//!
//! A small game engine for 3x3 tic-tac-toe:
//! - Two players, `Player::One` moving first
//! - Three marks in a row, column or diagonal wins
//! - A full board without a line is a draw
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board state with incremental line counters and reversible moves
//! - [`eval`]: Line-based position evaluation
//! - [`search`]: Alpha-beta search and the plain minimax reference
//! - [`engine`]: Driver-facing AI engine
//! - [`game`]: Interactive game loop used by the binary
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{AIEngine, Board, EngineConfig, Player, Pos};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::with_config(EngineConfig {
//!     seed: Some(42),
//!     ..EngineConfig::default()
//! });
//!
//! board.apply_move(Player::One, Pos::new(1, 1));
//!
//! // AI responds as Player::Zero
//! if let Some(pos) = engine.get_move(&board, Player::Zero) {
//!     board.apply_move(Player::Zero, pos);
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! assert!(!board.is_terminal());
//! ```
//!
//! # Search
//!
//! The search always runs to the end of the game unless a depth limit is
//! configured. Each candidate move is applied to the one shared board and
//! undone before the next, so the search allocates no boards.

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod search;

#[cfg(test)]
mod testing;

// Re-export commonly used types for convenience
pub use board::{Board, Player, Pos, BOARD_SIZE};
pub use engine::{AIEngine, EngineConfig, MoveResult};
pub use error::GameError;
pub use game::{GameSession, Outcome};
pub use search::{SearchResult, Searcher, INF};
