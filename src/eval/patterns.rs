//! Line scores for tic-tac-toe evaluation

/// Per-line weights, from the point of view of the player owning the marks
pub struct LineScore;

impl LineScore {
    /// Three in a line - the game is won
    pub const THREE: i32 = 100;
    /// Two marks with the third cell still open
    pub const OPEN_TWO: i32 = 10;
    /// A single mark on an otherwise empty line
    pub const SINGLE: i32 = 1;
}

/// Bound on the absolute evaluation of any position.
///
/// A winning move completes at most two lines (a player never has more than
/// five marks), and every other line scores at most an open two.
pub const MAX_SCORE: i32 = 2 * LineScore::THREE + 6 * LineScore::OPEN_TWO;
