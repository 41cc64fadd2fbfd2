use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Empty => write!(f, " "),
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerType {
    Human,
    Automated,
}

/// Control assignment for both sides of one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerTypes {
    pub x: PlayerType,
    pub o: PlayerType,
}

impl PlayerTypes {
    pub fn new(x: PlayerType, o: PlayerType) -> Self {
        Self { x, o }
    }

    pub fn for_mark(&self, mark: Mark) -> Option<PlayerType> {
        match mark {
            Mark::X => Some(self.x),
            Mark::O => Some(self.o),
            Mark::Empty => None,
        }
    }
}

impl Default for PlayerTypes {
    fn default() -> Self {
        Self::new(PlayerType::Human, PlayerType::Human)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOrigin {
    Human,
    Automated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(WinningLine),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won(line) => Some(line.mark),
            _ => None,
        }
    }
}

/// Why a move was not applied. Rejections never change game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveRejection {
    GameInactive,
    CellOccupied,
    NotYourTurn,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::GameInactive => write!(f, "Game is not active"),
            MoveRejection::CellOccupied => write!(f, "Cell is already marked"),
            MoveRejection::NotYourTurn => write!(f, "Not your turn"),
        }
    }
}

impl std::error::Error for MoveRejection {}
