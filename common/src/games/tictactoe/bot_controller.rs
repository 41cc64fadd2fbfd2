use super::board::{Board, CELL_COUNT};
use super::game_state::TicTacToeGameState;
use super::types::Mark;
use super::win_detector::check_win;

const WIN_SCORE: i32 = 10;

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            current_mark: state.current_mark(),
        }
    }
}

pub fn calculate_move(input: BotInput) -> Option<usize> {
    let opponent_mark = input.current_mark.opponent()?;
    calculate_minimax_move(&input.board, input.current_mark, opponent_mark)
}

/// Exhaustive minimax over every empty cell in ascending order. Only a strictly
/// better score replaces the current choice, so ties go to the lowest index.
///
/// The search places and removes marks on a single scratch board, depth first.
/// It must stay single-threaded; a parallel search needs a board per branch.
pub fn calculate_minimax_move(board: &Board, bot_mark: Mark, opponent_mark: Mark) -> Option<usize> {
    let mut board = *board;

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in 0..CELL_COUNT {
        if !board.is_empty(index) {
            continue;
        }

        board.set(index, bot_mark);
        let score = minimax(&mut board, 0, false, bot_mark, opponent_mark);
        board.set(index, Mark::Empty);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

fn minimax(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
) -> i32 {
    if check_win(board, bot_mark).is_some() {
        return WIN_SCORE - depth;
    }
    if check_win(board, opponent_mark).is_some() {
        return depth - WIN_SCORE;
    }
    if board.is_full() {
        return 0;
    }

    let mover = if is_maximizing { bot_mark } else { opponent_mark };
    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

    for index in 0..CELL_COUNT {
        if !board.is_empty(index) {
            continue;
        }

        board.set(index, mover);
        let eval = minimax(board, depth + 1, !is_maximizing, bot_mark, opponent_mark);
        board.set(index, Mark::Empty);

        best = if is_maximizing { best.max(eval) } else { best.min(eval) };
    }

    best
}
