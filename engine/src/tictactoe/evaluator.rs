use super::board::Board;
use super::types::{DRAW_SCORE, GameStatus, LOSS_SCORE, Mark, Player, Score, WIN_SCORE};

/// Cell coordinates `(row, col)` of every line that wins when filled by one mark.
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Returns the owner of the first uniformly filled line, scanning rows,
/// then columns, then diagonals.
pub fn winner(board: &Board) -> Option<Player> {
    let cells = board.cells();
    for [a, b, c] in WINNING_LINES {
        let mark = cells[a.0][a.1];
        if mark != Mark::Empty && mark == cells[b.0][b.1] && mark == cells[c.0][c.1] {
            return mark.player();
        }
    }
    None
}

/// Scores a board from `bot`'s point of view: `WIN_SCORE` if `bot` owns a
/// line, `LOSS_SCORE` if the opponent does, `DRAW_SCORE` otherwise.
pub fn evaluate(board: &Board, bot: Player) -> Score {
    match winner(board) {
        Some(player) if player == bot => WIN_SCORE,
        Some(_) => LOSS_SCORE,
        None => DRAW_SCORE,
    }
}

pub fn game_status(board: &Board) -> GameStatus {
    if let Some(player) = winner(board) {
        return GameStatus::Won(player);
    }
    if board.has_moves_left() {
        GameStatus::InProgress
    } else {
        GameStatus::Draw
    }
}
