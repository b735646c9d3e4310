//! Alpha-Beta search over the full game tree
//!
//! This module implements the core search algorithm for the tic-tac-toe AI.
//! `Player::One` is the maximizing side and `Player::Zero` the minimizing
//! side; the two plies are written as separate mutually recursive functions.
//!
//! # Features
//!
//! - Fail-hard beta cutoffs in the maximizing ply, alpha cutoffs in the
//!   minimizing ply
//! - In-place search: each candidate is applied through a
//!   [`MoveGuard`](crate::board::MoveGuard) and undone before the next one
//! - Optional move-order shuffling from an injected random source
//! - Optional depth limit, with the line heuristic as the leaf value
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Player};
//! use tictactoe::search::{Searcher, INF};
//!
//! let mut board = Board::new();
//! let mut searcher = Searcher::new();
//!
//! let result = searcher.search_max(&mut board, -INF, INF);
//! assert_eq!(result.score, 0); // perfect play is a draw
//! if let Some(best_move) = result.best_move {
//!     board.apply_move(Player::One, best_move);
//! }
//! ```

use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha20Rng;
use tracing::trace;

use crate::board::{Board, Player, Pos, TOTAL_CELLS};
use crate::eval::patterns::MAX_SCORE;

/// Infinity score for alpha-beta bounds, above any evaluation
pub const INF: i32 = MAX_SCORE + 1;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Total nodes visited, root included
    pub nodes: u64,
    /// Cutoffs in the maximizing ply (`best >= beta`)
    pub beta_cutoffs: u64,
    /// Cutoffs in the minimizing ply (`best <= alpha`)
    pub alpha_cutoffs: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found; `None` only when the root is terminal
    pub best_move: Option<Pos>,
    /// Value of the root position under optimal play
    pub score: i32,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Candidate moves of one node, kept on the stack
#[derive(Clone, Copy)]
struct MoveList {
    cells: [Pos; TOTAL_CELLS],
    len: usize,
}

impl MoveList {
    fn as_slice(&self) -> &[Pos] {
        &self.cells[..self.len]
    }

    fn as_mut_slice(&mut self) -> &mut [Pos] {
        &mut self.cells[..self.len]
    }
}

/// Alpha-beta searcher.
///
/// Without a random source candidates are tried in cell-index order, which
/// makes the chosen move deterministic. With one, candidates are shuffled at
/// every node; the returned score is the same either way.
pub struct Searcher<R = ChaCha20Rng> {
    rng: Option<R>,
    max_depth: Option<u8>,
    stats: SearchStats,
}

impl Searcher<ChaCha20Rng> {
    /// Create a searcher that tries moves in index order.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: None,
            max_depth: None,
            stats: SearchStats::default(),
        }
    }
}

impl Default for Searcher<ChaCha20Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Searcher<R> {
    /// Create a searcher that shuffles candidate moves with `rng`.
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng: Some(rng),
            max_depth: None,
            stats: SearchStats::default(),
        }
    }

    /// Stop `depth` plies below the root and score the leaf heuristically.
    ///
    /// The root itself is always expanded, so a limit of 0 behaves like 1.
    #[must_use]
    pub fn with_max_depth(mut self, depth: u8) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Search a position where the maximizing player (`Player::One`) moves.
    ///
    /// The board is mutated during the search and restored before returning.
    pub fn search_max(&mut self, board: &mut Board, alpha: i32, beta: i32) -> SearchResult {
        self.stats = SearchStats::default();
        let (score, best_move) = self.max_value(board, alpha, beta, 0);
        self.finish(score, best_move)
    }

    /// Search a position where the minimizing player (`Player::Zero`) moves.
    pub fn search_min(&mut self, board: &mut Board, alpha: i32, beta: i32) -> SearchResult {
        self.stats = SearchStats::default();
        let (score, best_move) = self.min_value(board, alpha, beta, 0);
        self.finish(score, best_move)
    }

    /// Full-window search for whichever ply `player` plays.
    pub fn best_move(&mut self, board: &mut Board, player: Player) -> SearchResult {
        match player {
            Player::One => self.search_max(board, -INF, INF),
            Player::Zero => self.search_min(board, -INF, INF),
        }
    }

    fn finish(&self, score: i32, best_move: Option<Pos>) -> SearchResult {
        trace!(
            score,
            best_move = ?best_move,
            nodes = self.stats.nodes,
            "search complete"
        );
        SearchResult {
            best_move,
            score,
            stats: self.stats.clone(),
        }
    }

    /// Leaf test: game over, or depth limit reached below the root
    #[inline]
    fn is_leaf(&self, board: &Board, depth: u8) -> bool {
        board.is_terminal() || self.max_depth.is_some_and(|limit| depth > 0 && depth >= limit)
    }

    fn max_value(
        &mut self,
        board: &mut Board,
        mut alpha: i32,
        beta: i32,
        depth: u8,
    ) -> (i32, Option<Pos>) {
        self.stats.nodes += 1;
        if self.is_leaf(board, depth) {
            return (board.utility(), None);
        }

        let mut best = -INF;
        let mut best_move = None;

        let moves = self.generate_moves(board);
        for &pos in moves.as_slice() {
            let (value, _) = {
                let mut child = board.scoped_move(Player::One, pos);
                self.min_value(&mut child, alpha, beta, depth + 1)
            };

            if value > best {
                best = value;
                best_move = Some(pos);
                alpha = alpha.max(best);
            }

            if best >= beta {
                self.stats.beta_cutoffs += 1;
                return (best, best_move);
            }
        }

        (best, best_move)
    }

    fn min_value(
        &mut self,
        board: &mut Board,
        alpha: i32,
        mut beta: i32,
        depth: u8,
    ) -> (i32, Option<Pos>) {
        self.stats.nodes += 1;
        if self.is_leaf(board, depth) {
            return (board.utility(), None);
        }

        let mut best = INF;
        let mut best_move = None;

        let moves = self.generate_moves(board);
        for &pos in moves.as_slice() {
            let (value, _) = {
                let mut child = board.scoped_move(Player::Zero, pos);
                self.max_value(&mut child, alpha, beta, depth + 1)
            };

            if value < best {
                best = value;
                best_move = Some(pos);
                beta = beta.min(best);
            }

            if best <= alpha {
                self.stats.alpha_cutoffs += 1;
                return (best, best_move);
            }
        }

        (best, best_move)
    }

    /// Free cells of `board`, shuffled when a random source is set.
    fn generate_moves(&mut self, board: &Board) -> MoveList {
        let mut moves = MoveList {
            cells: [Pos::new(0, 0); TOTAL_CELLS],
            len: 0,
        };
        for pos in board.legal_moves() {
            moves.cells[moves.len] = pos;
            moves.len += 1;
        }
        if let Some(rng) = self.rng.as_mut() {
            moves.as_mut_slice().shuffle(rng);
        }
        moves
    }
}
