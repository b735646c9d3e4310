//! Plain minimax without pruning
//!
//! Visits the whole game tree below the given position. Slower than
//! [`Searcher`](super::Searcher) but trivially correct, so it serves as the
//! reference the pruned search is checked against.

use crate::board::{Board, Player};

/// Game value of `board` with `to_move` to play, both sides playing optimally.
///
/// `Player::One` maximizes and `Player::Zero` minimizes, matching
/// [`Searcher::search_max`](super::Searcher::search_max) and
/// [`Searcher::search_min`](super::Searcher::search_min).
#[must_use]
pub fn minimax(board: &mut Board, to_move: Player) -> i32 {
    if board.is_terminal() {
        return board.utility();
    }

    let mut best = match to_move {
        Player::One => i32::MIN,
        Player::Zero => i32::MAX,
    };
    for pos in board.legal_moves() {
        let mut child = board.scoped_move(to_move, pos);
        let value = minimax(&mut child, to_move.opponent());
        best = match to_move {
            Player::One => best.max(value),
            Player::Zero => best.min(value),
        };
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    #[test]
    fn test_minimax_terminal() {
        let mut board = Board::new();
        for (row, col) in [(0, 0), (0, 1), (0, 2)] {
            board.apply_move(Player::Zero, Pos::new(row, col));
        }
        assert_eq!(minimax(&mut board, Player::One), board.utility());
    }

    #[test]
    fn test_minimax_forced_win() {
        // One completes column 0 at (1, 0) before Zero completes a line
        let mut board = Board::new();
        board.apply_move(Player::One, Pos::new(0, 0));
        board.apply_move(Player::Zero, Pos::new(1, 1));
        board.apply_move(Player::One, Pos::new(0, 1));
        board.apply_move(Player::Zero, Pos::new(0, 2));
        board.apply_move(Player::One, Pos::new(2, 0));
        board.apply_move(Player::Zero, Pos::new(1, 2));

        let before = board.clone();
        assert!(minimax(&mut board, Player::One) > 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_minimax_double_line_win() {
        let mut board = Board::new();
        for (player, row, col) in [
            (Player::One, 0, 0),
            (Player::Zero, 0, 1),
            (Player::One, 0, 2),
            (Player::Zero, 1, 0),
            (Player::One, 1, 1),
            (Player::Zero, 2, 0),
            (Player::One, 1, 2),
            (Player::Zero, 2, 1),
        ] {
            board.apply_move(player, Pos::new(row, col));
        }
        assert_eq!(minimax(&mut board, Player::One), 200);
    }
}
