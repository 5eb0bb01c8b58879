use super::types::{Player, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    GameOver,
    NotYourTurn { expected: Player },
    CellOccupied(Position),
    OutOfBounds { row: usize, col: usize },
    InvalidBoard(String),
    BoardFull,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::GameOver => write!(f, "Game is already over"),
            GameError::NotYourTurn { expected } => {
                write!(f, "Not your turn: {} is to move", expected)
            }
            GameError::CellOccupied(pos) => write!(f, "Cell {} is already marked", pos),
            GameError::OutOfBounds { row, col } => {
                write!(f, "Position ({}, {}) is out of bounds", row, col)
            }
            GameError::InvalidBoard(reason) => write!(f, "Invalid board: {}", reason),
            GameError::BoardFull => write!(f, "No empty cells left"),
        }
    }
}

impl std::error::Error for GameError {}
