use super::board::{Board, CELL_COUNT};
use super::types::{GameStatus, Mark, MoveRejection};
use super::win_detector::check_win;

/// Board, turn and outcome of one game. Knows nothing about who controls a side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
    move_count: usize,
    last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            move_count: 0,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    /// Places the current mark at `index`. On a win or draw the turn stays
    /// with the mover.
    pub fn place_mark(&mut self, index: usize) -> Result<Mark, MoveRejection> {
        if self.status != GameStatus::InProgress {
            return Err(MoveRejection::GameInactive);
        }

        if !self.board.is_empty(index) {
            return Err(MoveRejection::CellOccupied);
        }

        let mark = self.current_mark;
        self.board.set(index, mark);
        self.move_count += 1;
        self.last_move = Some(index);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(mark)
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    fn check_game_over(&mut self) {
        if let Some(line) = check_win(&self.board, self.current_mark) {
            self.status = GameStatus::Won(line);
            return;
        }

        if self.move_count == CELL_COUNT {
            self.status = GameStatus::Draw;
        }
    }
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}
