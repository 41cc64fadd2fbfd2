mod board;
mod bot_controller;
mod game_state;
mod session;
mod types;
mod win_detector;

pub use board::{BOARD_SIDE, Board, CELL_COUNT};
pub use bot_controller::{BotInput, calculate_minimax_move, calculate_move};
pub use game_state::TicTacToeGameState;
pub use session::TicTacToeSession;
pub use types::{GameStatus, Mark, MoveOrigin, MoveRejection, PlayerType, PlayerTypes, WinningLine};
pub use win_detector::{WIN_LINES, check_win, check_win_with_line};
