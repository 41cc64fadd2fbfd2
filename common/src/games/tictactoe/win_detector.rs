use super::board::Board;
use super::types::{Mark, WinningLine};

/// Rows, then columns, then diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// First line in `WIN_LINES` order fully held by `mark`.
pub fn check_win(board: &Board, mark: Mark) -> Option<WinningLine> {
    if mark == Mark::Empty {
        return None;
    }

    WIN_LINES
        .iter()
        .find(|line| line.iter().all(|&index| board.get(index) == mark))
        .map(|&cells| WinningLine::new(mark, cells))
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    check_win(board, Mark::X).or_else(|| check_win(board, Mark::O))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::CELL_COUNT;

    fn board_with(x_cells: &[usize], o_cells: &[usize]) -> Board {
        let mut board = Board::new();
        for &i in x_cells {
            board.set(i, Mark::X);
        }
        for &i in o_cells {
            board.set(i, Mark::O);
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::new();
        assert_eq!(check_win(&board, Mark::X), None);
        assert_eq!(check_win(&board, Mark::O), None);
        assert_eq!(check_win(&board, Mark::Empty), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in WIN_LINES {
            let board = board_with(&line, &[]);
            assert_eq!(check_win(&board, Mark::X), Some(WinningLine::new(Mark::X, line)));
            assert_eq!(check_win(&board, Mark::O), None);
        }
    }

    #[test]
    fn test_reports_first_line_in_order() {
        // X holds both the top row and the left column.
        let board = board_with(&[0, 1, 2, 3, 6], &[4, 5, 7, 8]);
        assert_eq!(check_win(&board, Mark::X).map(|l| l.cells), Some([0, 1, 2]));
    }

    #[test]
    fn test_check_win_with_line_finds_o() {
        let board = board_with(&[0, 1, 5], &[2, 4, 6]);
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.mark, Mark::O);
        assert_eq!(line.cells, [2, 4, 6]);
    }

    fn visit_reachable(board: &mut Board, to_move: Mark, visited: &mut usize) {
        *visited += 1;
        let x_wins = check_win(board, Mark::X).is_some();
        let o_wins = check_win(board, Mark::O).is_some();
        assert!(!(x_wins && o_wins), "both marks won on {:?}", board.cells());
        if x_wins || o_wins || board.is_full() {
            return;
        }
        let next = to_move.opponent().unwrap();
        for index in 0..CELL_COUNT {
            if board.is_empty(index) {
                board.set(index, to_move);
                visit_reachable(board, next, visited);
                board.set(index, Mark::Empty);
            }
        }
    }

    #[test]
    fn test_no_reachable_board_has_two_winners() {
        let mut board = Board::new();
        let mut visited = 0;
        visit_reachable(&mut board, Mark::X, &mut visited);
        // Number of nodes in the full game tree, counting terminal positions.
        assert_eq!(visited, 549_946);
    }
}
