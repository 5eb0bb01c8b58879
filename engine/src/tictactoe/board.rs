use std::str::FromStr;

use super::error::GameError;
use super::types::{BOARD_SIZE, Mark, Position};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.row()][pos.col()]
    }

    pub fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.row()][pos.col()] = mark;
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == Mark::Empty
    }

    /// Empty cells in row-major order.
    pub fn available_moves(&self) -> Vec<Position> {
        Position::all().filter(|&pos| self.is_empty_at(pos)).collect()
    }

    pub fn has_moves_left(&self) -> bool {
        self.cells
            .iter()
            .any(|row| row.iter().any(|&cell| cell == Mark::Empty))
    }

    pub fn is_full(&self) -> bool {
        !self.has_moves_left()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == mark)
            .count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

/// Accepts nine cell characters: `X`/`O` (any case) for marks and `.`, `_`
/// or `-` for empty cells. Whitespace, `|` and `/` are separators.
impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut marks = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for ch in s.chars() {
            let mark = match ch {
                'X' | 'x' => Mark::X,
                'O' | 'o' => Mark::O,
                '.' | '_' | '-' => Mark::Empty,
                '|' | '/' => continue,
                c if c.is_whitespace() => continue,
                c => {
                    return Err(GameError::InvalidBoard(format!(
                        "unexpected character '{}'",
                        c
                    )));
                }
            };
            marks.push(mark);
        }

        if marks.len() != BOARD_SIZE * BOARD_SIZE {
            return Err(GameError::InvalidBoard(format!(
                "expected {} cells, found {}",
                BOARD_SIZE * BOARD_SIZE,
                marks.len()
            )));
        }

        let mut board = Board::new();
        for (pos, mark) in Position::all().zip(marks) {
            board.set(pos, mark);
        }
        Ok(board)
    }
}
