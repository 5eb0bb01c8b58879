mod board;
mod error;
mod evaluator;
mod game_state;
mod search;
mod types;

pub use board::Board;
pub use error::GameError;
pub use evaluator::{WINNING_LINES, evaluate, game_status, winner};
pub use game_state::{TicTacToeGameState, TurnOutcome};
pub use search::{find_best_move, minimax};
pub use types::{
    BOARD_SIZE, BestMove, DRAW_SCORE, FirstPlayerMode, GameStatus, LOSS_SCORE, Mark, Player,
    Position, Score, WIN_SCORE,
};
