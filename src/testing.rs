//! Shared fixtures for unit tests

use std::collections::HashSet;

use crate::board::Board;

/// Every distinct state reachable from the empty board by legal play,
/// with `Player::One` moving first.
pub(crate) fn reachable_states() -> Vec<Board> {
    fn walk(board: &mut Board, seen: &mut HashSet<Board>, out: &mut Vec<Board>) {
        if !seen.insert(board.clone()) {
            return;
        }
        out.push(board.clone());
        if board.is_terminal() {
            return;
        }
        let player = board.side_to_move();
        for pos in board.legal_moves() {
            let mut child = board.scoped_move(player, pos);
            walk(&mut child, seen, out);
        }
    }

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    walk(&mut Board::new(), &mut seen, &mut out);
    out
}
