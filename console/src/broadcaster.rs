use tictactoe_common::games::GameBroadcaster;
use tictactoe_common::games::tictactoe::{GameStatus, Mark};

use crate::render::describe_result;

/// Prints game notifications; the board itself is redrawn by the event loop.
pub struct ConsoleBroadcaster;

impl GameBroadcaster for ConsoleBroadcaster {
    fn broadcast_move(&mut self, index: usize, mark: Mark) {
        println!("{} takes cell {}", mark, index);
    }

    fn broadcast_game_over(&mut self, status: GameStatus) {
        println!("{}", describe_result(&status));
    }
}
