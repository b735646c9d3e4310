//! Evaluation module for tic-tac-toe positions
//!
//! Scores each of the eight lines from its pair of mark counts and sums
//! them. Positive totals favour `Player::One`, negative totals `Player::Zero`.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, score_line};
pub use patterns::LineScore;
