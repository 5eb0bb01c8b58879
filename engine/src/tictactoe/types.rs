use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;

pub type Score = i32;

pub const WIN_SCORE: Score = 10;
pub const LOSS_SCORE: Score = -10;
pub const DRAW_SCORE: Score = 0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn player(&self) -> Option<Player> {
        match self {
            Mark::X => Some(Player::X),
            Mark::O => Some(Player::O),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn mark(&self) -> Mark {
        match self {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }

    pub fn opponent(&self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mark().symbol())
    }
}

/// A cell coordinate. Construction is checked, so every `Position` in hand
/// addresses a real cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BestMove {
    pub position: Position,
    pub score: Score,
}

impl BestMove {
    pub fn new(position: Position, score: Score) -> Self {
        Self { position, score }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won(player) => write!(f, "{} won", player),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayerMode {
    #[default]
    Human,
    Bot,
    Random,
}
