//! Scoped move application

use std::ops::{Deref, DerefMut};

use super::{Board, Player, Pos};

/// A move applied to a borrowed board, undone when the guard drops.
///
/// Search recurses through the guard so that every exit path, including a
/// pruning cutoff in the middle of the move loop, leaves the board as it
/// found it.
pub struct MoveGuard<'a> {
    board: &'a mut Board,
    player: Player,
    pos: Pos,
}

impl<'a> MoveGuard<'a> {
    pub(super) fn new(board: &'a mut Board, player: Player, pos: Pos) -> Self {
        board.apply_move(player, pos);
        Self { board, player, pos }
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.board.undo_move(self.player, self.pos);
    }
}
