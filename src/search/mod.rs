//! Search module for the tic-tac-toe AI
//!
//! Contains:
//! - Alpha-beta search with separate maximizing and minimizing plies
//! - Plain minimax, the unpruned reference the pruned search must agree with

pub mod alphabeta;
pub mod minimax;

pub use alphabeta::{SearchResult, SearchStats, Searcher, INF};
pub use minimax::minimax;
