//! Board representation for tic-tac-toe

pub mod board;
pub mod free;
pub mod guard;


// Re-exports
pub use board::Board;
pub use free::FreeCells;
pub use guard::MoveGuard;

use crate::error::GameError;

/// Board size (3x3)
pub const BOARD_SIZE: usize = 3;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 9

/// Number of winning lines: 3 rows, 3 columns, 2 diagonals
pub const LINE_COUNT: usize = 8;

/// Line index of the main diagonal (0,0)-(2,2)
const DIAG: usize = 6;
/// Line index of the anti-diagonal (0,2)-(2,0)
const ANTI_DIAG: usize = 7;

/// Cell indices of every line, rows first, then columns, then diagonals.
pub const LINES: [[usize; 3]; LINE_COUNT] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// The two sides. `One` moves first and is the maximizing player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Zero,
    One,
}

impl Player {
    /// Get opponent
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Zero => Player::One,
            Player::One => Player::Zero,
        }
    }

    /// Slot of this player in a line counter pair
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::Zero => 0,
            Player::One => 1,
        }
    }

    /// Mark used when rendering the board
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Player::Zero => 'O',
            Player::One => 'X',
        }
    }

    /// Player number as typed on the command line (0 or 1)
    pub fn from_number(n: u8) -> Option<Player> {
        match n {
            0 => Some(Player::Zero),
            1 => Some(Player::One),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player {} ({})", self.index(), self.symbol())
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    /// Checked constructor for untrusted coordinates
    pub fn try_new(row: i64, col: i64) -> Result<Self, GameError> {
        if Self::is_valid(row, col) {
            Ok(Self::new(row as u8, col as u8))
        } else {
            Err(GameError::OutOfBounds { row, col })
        }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        debug_assert!(idx < TOTAL_CELLS);
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i64, col: i64) -> bool {
        row >= 0 && row < BOARD_SIZE as i64 && col >= 0 && col < BOARD_SIZE as i64
    }

    /// Indices into [`LINES`] of every line passing through this cell.
    ///
    /// Yields the row, the column, and whichever diagonals contain the cell.
    pub fn lines(self) -> impl Iterator<Item = usize> {
        let row = self.row as usize;
        let col = self.col as usize;
        let diag = (row == col).then_some(DIAG);
        let anti = (row + col == BOARD_SIZE - 1).then_some(ANTI_DIAG);
        [Some(row), Some(BOARD_SIZE + col), diag, anti]
            .into_iter()
            .flatten()
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
