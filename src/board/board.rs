//! Board structure with incremental line tracking

use std::fmt;

use super::free::FreeCells;
use super::guard::MoveGuard;
use super::{Player, Pos, BOARD_SIZE, LINE_COUNT, TOTAL_CELLS};
use crate::error::GameError;
use crate::eval::evaluate;

/// Game board with per-line occupancy counters.
///
/// Every move updates the counters of the lines through the played cell, so
/// winner and terminal checks are O(1). Moves are reversible: `undo_move`
/// called in reverse order of `apply_move` restores the exact prior state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Player>; BOARD_SIZE]; BOARD_SIZE],
    free: FreeCells,
    /// Marks per line, indexed by `Player::index()`
    lines: [[u8; 2]; LINE_COUNT],
    winner: Option<Player>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
            free: FreeCells::full(),
            lines: [[0; 2]; LINE_COUNT],
            winner: None,
        }
    }

    /// Get the mark at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Player> {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.free.contains(pos)
    }

    /// Place `player`'s mark on a free cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is occupied. Callers only play moves taken from
    /// [`legal_moves`](Self::legal_moves) or screened with
    /// [`check_move`](Self::check_move).
    pub fn apply_move(&mut self, player: Player, pos: Pos) {
        assert!(self.free.contains(pos), "apply_move on occupied cell {pos}");

        self.cells[pos.row as usize][pos.col as usize] = Some(player);
        self.free.remove(pos);

        let slot = player.index();
        let mut completed = false;
        for line in pos.lines() {
            self.lines[line][slot] += 1;
            completed |= self.lines[line][slot] == 3;
        }
        if completed {
            self.winner = Some(player);
        }
    }

    /// Take back the most recent move on `pos`.
    ///
    /// Undo must mirror apply in stack order: the last applied move is the
    /// first undone.
    ///
    /// # Panics
    ///
    /// Panics if `pos` does not hold `player`'s mark.
    pub fn undo_move(&mut self, player: Player, pos: Pos) {
        assert_eq!(
            self.get(pos),
            Some(player),
            "undo_move of {player} at {pos} that was never applied"
        );

        let slot = player.index();
        let mut was_complete = false;
        for line in pos.lines() {
            was_complete |= self.lines[line][slot] == 3;
            self.lines[line][slot] -= 1;
        }

        self.cells[pos.row as usize][pos.col as usize] = None;
        self.free.insert(pos);

        if was_complete {
            self.winner = self.scan_winner();
        }
    }

    /// Apply a move that is undone when the returned guard drops.
    #[must_use = "the move is undone as soon as the guard is dropped"]
    pub fn scoped_move(&mut self, player: Player, pos: Pos) -> MoveGuard<'_> {
        MoveGuard::new(self, player, pos)
    }

    /// Validate an untrusted move before applying it.
    pub fn check_move(&self, pos: Pos) -> Result<(), GameError> {
        if self.is_empty(pos) {
            Ok(())
        } else {
            Err(GameError::Occupied {
                row: pos.row,
                col: pos.col,
            })
        }
    }

    /// Board is full or someone has three in a line
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.free.is_empty() || self.winner.is_some()
    }

    #[inline]
    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }

    /// The winning player, or [`GameError::NoWinner`] while the game is
    /// undecided or drawn.
    pub fn winner(&self) -> Result<Player, GameError> {
        self.winner.ok_or(GameError::NoWinner)
    }

    /// Free cells, in index order. Search may reorder them.
    #[inline]
    pub fn legal_moves(&self) -> FreeCells {
        self.free
    }

    /// Per-line mark counts, in [`LINES`](super::LINES) order
    #[inline]
    pub fn line_counts(&self) -> &[[u8; 2]; LINE_COUNT] {
        &self.lines
    }

    /// Heuristic value of the position: positive favours `Player::One`.
    #[inline]
    pub fn utility(&self) -> i32 {
        evaluate(self)
    }

    /// Total marks on board
    #[inline]
    pub fn mark_count(&self) -> usize {
        TOTAL_CELLS - self.free.len()
    }

    /// Player whose turn it is, assuming `Player::One` moved first.
    pub fn side_to_move(&self) -> Player {
        let count = |player: Player| {
            self.cells
                .iter()
                .flatten()
                .filter(|cell| **cell == Some(player))
                .count()
        };
        let ones = count(Player::One);
        let zeros = count(Player::Zero);
        if ones > zeros {
            Player::Zero
        } else {
            Player::One
        }
    }

    /// Text form of the board for display
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn scan_winner(&self) -> Option<Player> {
        self.lines.iter().find_map(|counts| match counts {
            [3, _] => Some(Player::Zero),
            [_, 3] => Some(Player::One),
            _ => None,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row
                .iter()
                .map(|cell| cell.map_or('.', Player::symbol).to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
