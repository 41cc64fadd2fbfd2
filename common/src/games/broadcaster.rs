use crate::games::tictactoe::{GameStatus, Mark};

/// Presentation-side listener for a running game.
pub trait GameBroadcaster {
    fn broadcast_move(&mut self, index: usize, mark: Mark);

    /// Called exactly once per finished game with the terminal status.
    fn broadcast_game_over(&mut self, status: GameStatus);
}

impl GameBroadcaster for () {
    fn broadcast_move(&mut self, _index: usize, _mark: Mark) {}

    fn broadcast_game_over(&mut self, _status: GameStatus) {}
}
