//! Main AI engine wrapping the alpha-beta searcher
//!
//! This module provides the driver-facing entry point: given the committed
//! board and the side the AI plays, pick a move. The engine searches a private
//! copy of the board, so the caller's board is never touched.
//!
//! # Example
//!
//! ```
//! use tictactoe::{AIEngine, Board, EngineConfig, Player, Pos};
//!
//! let config = EngineConfig { seed: Some(7), ..EngineConfig::default() };
//! let mut engine = AIEngine::with_config(config);
//! let mut board = Board::new();
//! board.apply_move(Player::One, Pos::new(1, 1));
//!
//! // Get best move for Player::Zero
//! let result = engine.get_move_with_stats(&board, Player::Zero);
//! println!("Best move: {:?}", result.best_move);
//! println!("Nodes: {}", result.nodes);
//! ```

use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::board::{Board, Player, Pos};
use crate::search::{SearchResult, SearchStats, Searcher};

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Depth limit in plies; `None` searches to the end of the game
    pub max_depth: Option<u8>,
    /// Shuffle candidate moves so equal moves vary between games
    pub shuffle: bool,
    /// Seed for the shuffle; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            shuffle: true,
            seed: None,
        }
    }
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Value of the position under optimal play (positive favours `Player::One`)
    pub score: i32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    /// Cutoff counters from the search
    pub stats: SearchStats,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            time_ms,
            nodes: result.stats.nodes,
            stats: result.stats,
        }
    }
}

/// Main AI engine for tic-tac-toe.
///
/// Picks `search_max` when playing `Player::One` and `search_min` when playing
/// `Player::Zero`, always with a full window.
pub struct AIEngine {
    searcher: Searcher<ChaCha20Rng>,
}

impl AIEngine {
    /// Create a new AI engine with default settings.
    ///
    /// Default configuration:
    /// - No depth limit
    /// - Shuffled move order, seeded from the OS
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an AI engine with custom configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use tictactoe::{AIEngine, EngineConfig};
    ///
    /// // Deterministic engine, index-ordered moves
    /// let engine = AIEngine::with_config(EngineConfig {
    ///     shuffle: false,
    ///     ..EngineConfig::default()
    /// });
    /// ```
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let searcher = if config.shuffle {
            let rng = match config.seed {
                Some(seed) => ChaCha20Rng::seed_from_u64(seed),
                None => ChaCha20Rng::from_entropy(),
            };
            Searcher::with_rng(rng)
        } else {
            Searcher::new()
        };
        let searcher = match config.max_depth {
            Some(depth) => searcher.with_max_depth(depth),
            None => searcher,
        };
        Self { searcher }
    }

    /// Get the best move for `player`, or `None` if the game is over.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, player: Player) -> Option<Pos> {
        self.get_move_with_stats(board, player).best_move
    }

    /// Get the best move with detailed search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, player: Player) -> MoveResult {
        let start = Instant::now();

        let mut work_board = board.clone();
        let result = self.searcher.best_move(&mut work_board, player);
        debug_assert_eq!(&work_board, board, "search must restore the board");

        let time_ms = start.elapsed().as_millis() as u64;
        debug!(
            %player,
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.stats.nodes,
            beta_cutoffs = result.stats.beta_cutoffs,
            alpha_cutoffs = result.stats.alpha_cutoffs,
            time_ms,
            "engine move"
        );
        MoveResult::from_search(result, time_ms)
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
