//! Heuristic evaluation function for tic-tac-toe board positions
//!
//! A line contributes only while one side owns it exclusively: a completed
//! line, an open two and a lone mark are worth `THREE`, `OPEN_TWO` and
//! `SINGLE`. Mixed or empty lines are worth nothing.

use crate::board::{Board, Player};

use super::patterns::LineScore;

/// Evaluate the board. Positive values favour `Player::One`.
///
/// Works from the incremental line counters, so it never scans cells.
/// A completed line always outweighs every other line on the board, which
/// keeps the sign of a won position on the winner's side.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    board
        .line_counts()
        .iter()
        .map(|&[zero, one]| score_line(zero, one))
        .sum()
}

/// Score one line from `Player::Zero`'s and `Player::One`'s mark counts.
#[inline]
#[must_use]
pub fn score_line(zero: u8, one: u8) -> i32 {
    let (owner, count) = match (zero, one) {
        (3, _) => return sign(Player::Zero) * LineScore::THREE,
        (_, 3) => return sign(Player::One) * LineScore::THREE,
        (n, 0) if n > 0 => (Player::Zero, n),
        (0, n) if n > 0 => (Player::One, n),
        // Empty or blocked line
        _ => return 0,
    };
    let magnitude = match count {
        2 => LineScore::OPEN_TWO,
        _ => LineScore::SINGLE,
    };
    sign(owner) * magnitude
}

#[inline]
fn sign(player: Player) -> i32 {
    match player {
        Player::Zero => -1,
        Player::One => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;
    use crate::eval::patterns::MAX_SCORE;
    use crate::testing::reachable_states;

    #[test]
    fn test_score_line_table() {
        assert_eq!(score_line(0, 0), 0);
        assert_eq!(score_line(1, 0), -1);
        assert_eq!(score_line(0, 1), 1);
        assert_eq!(score_line(2, 0), -10);
        assert_eq!(score_line(0, 2), 10);
        assert_eq!(score_line(3, 0), -100);
        assert_eq!(score_line(0, 3), 100);
        // Blocked lines
        assert_eq!(score_line(1, 1), 0);
        assert_eq!(score_line(2, 1), 0);
        assert_eq!(score_line(1, 2), 0);
    }

    #[test]
    fn test_evaluate_empty_board() {
        assert_eq!(evaluate(&Board::new()), 0);
    }

    #[test]
    fn test_evaluate_center_beats_corner() {
        let mut center = Board::new();
        center.apply_move(Player::One, Pos::new(1, 1));
        let mut corner = Board::new();
        corner.apply_move(Player::One, Pos::new(0, 0));
        let mut edge = Board::new();
        edge.apply_move(Player::One, Pos::new(0, 1));

        // Lines through the cell: 4 for center, 3 for a corner, 2 for an edge
        assert_eq!(evaluate(&center), 4);
        assert_eq!(evaluate(&corner), 3);
        assert_eq!(evaluate(&edge), 2);
    }

    #[test]
    fn test_evaluate_is_antisymmetric() {
        let mut a = Board::new();
        a.apply_move(Player::One, Pos::new(0, 0));
        a.apply_move(Player::Zero, Pos::new(1, 1));
        a.apply_move(Player::One, Pos::new(0, 1));

        let mut b = Board::new();
        b.apply_move(Player::Zero, Pos::new(0, 0));
        b.apply_move(Player::One, Pos::new(1, 1));
        b.apply_move(Player::Zero, Pos::new(0, 1));

        assert_eq!(evaluate(&a), -evaluate(&b));
    }

    #[test]
    fn test_evaluate_open_two() {
        let mut board = Board::new();
        board.apply_move(Player::Zero, Pos::new(0, 0));
        board.apply_move(Player::Zero, Pos::new(0, 1));
        // Row 0 open two (-10), columns 0 and 1 singles (-2), main diagonal single (-1)
        assert_eq!(evaluate(&board), -13);
    }

    #[test]
    fn test_winning_line_dominates() {
        let mut board = Board::new();
        board.apply_move(Player::Zero, Pos::new(0, 0));
        board.apply_move(Player::Zero, Pos::new(0, 1));
        board.apply_move(Player::Zero, Pos::new(0, 2));
        board.apply_move(Player::One, Pos::new(1, 0));
        board.apply_move(Player::One, Pos::new(1, 1));
        assert!(board.has_winner());
        let score = evaluate(&board);
        assert!(score < 0, "Zero's win must score negative, got {score}");
        assert!(score.abs() <= MAX_SCORE);
    }

    #[test]
    fn test_double_line_win() {
        // X O X / O X X / O O X: the last X at (2, 2) completes column 2 and the diagonal
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
            (Player::One, 2, 2),
        ] {
            board.apply_move(player, Pos::new(row, col));
        }
        assert_eq!(evaluate(&board), 200);
        assert!(evaluate(&board) < MAX_SCORE);
    }

    #[test]
    fn test_max_score_bounds_every_position() {
        let worst = reachable_states()
            .iter()
            .map(|board| evaluate(board).abs())
            .max()
            .unwrap();
        assert_eq!(worst, 200);
        assert!(worst <= MAX_SCORE);
    }
}
