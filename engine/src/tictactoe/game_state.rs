use rand::Rng;

use crate::config::GameConfig;
use crate::log;
use super::board::Board;
use super::error::GameError;
use super::evaluator::game_status;
use super::search::find_best_move;
use super::types::{BestMove, FirstPlayerMode, GameStatus, Player, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    pub bot_move: Option<BestMove>,
    pub status: GameStatus,
}

/// One game between a human and the minimax bot.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    bot: Player,
    current_player: Player,
    status: GameStatus,
    last_move: Option<Position>,
    move_count: usize,
}

impl TicTacToeGameState {
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let bot = config.bot;
        let current_player = match config.first_player {
            FirstPlayerMode::Human => bot.opponent(),
            FirstPlayerMode::Bot => bot,
            FirstPlayerMode::Random => {
                if rng.random_bool(0.5) {
                    bot
                } else {
                    bot.opponent()
                }
            }
        };

        log!("New game: bot plays {}, {} moves first", bot, current_player);

        Self {
            board: Board::new(),
            bot,
            current_player,
            status: GameStatus::InProgress,
            last_move: None,
            move_count: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn bot(&self) -> Player {
        self.bot
    }

    pub fn human(&self) -> Player {
        self.bot.opponent()
    }

    pub fn is_bot_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.current_player == self.bot
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn place_mark(&mut self, player: Player, pos: Position) -> Result<(), GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }

        if player != self.current_player {
            return Err(GameError::NotYourTurn {
                expected: self.current_player,
            });
        }

        if !self.board.is_empty_at(pos) {
            return Err(GameError::CellOccupied(pos));
        }

        self.board.set(pos, player.mark());
        self.last_move = Some(pos);
        self.move_count += 1;
        self.status = game_status(&self.board);

        log!("{} placed at {} (move {})", player, pos, self.move_count);

        if self.status.is_over() {
            log!("Game over: {}", self.status);
        } else {
            self.current_player = self.current_player.opponent();
        }

        Ok(())
    }

    pub fn play_bot_move(&mut self) -> Result<BestMove, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }

        if self.current_player != self.bot {
            return Err(GameError::NotYourTurn {
                expected: self.current_player,
            });
        }

        let mut scratch = self.board;
        let best = find_best_move(&mut scratch, self.bot).ok_or(GameError::BoardFull)?;
        log!("Bot chose {} with score {}", best.position, best.score);

        self.place_mark(self.bot, best.position)?;
        Ok(best)
    }

    /// Places the human's mark and, if the game goes on, answers with the
    /// bot's move.
    pub fn handle_human_move(&mut self, pos: Position) -> Result<TurnOutcome, GameError> {
        self.place_mark(self.human(), pos)?;

        let bot_move = if self.is_bot_turn() {
            Some(self.play_bot_move()?)
        } else {
            None
        };

        Ok(TurnOutcome {
            bot_move,
            status: self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::types::Mark;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    fn config(first_player: FirstPlayerMode) -> GameConfig {
        GameConfig {
            first_player,
            ..GameConfig::default()
        }
    }

    fn new_game(first_player: FirstPlayerMode) -> TicTacToeGameState {
        let mut rng = StdRng::seed_from_u64(1);
        TicTacToeGameState::new(&config(first_player), &mut rng)
    }

    #[test]
    fn test_default_config_human_moves_first_as_x() {
        let game = new_game(FirstPlayerMode::Human);
        assert_eq!(game.bot(), Player::O);
        assert_eq!(game.human(), Player::X);
        assert_eq!(game.current_player(), Player::X);
        assert!(!game.is_bot_turn());
    }

    #[test]
    fn test_bot_first() {
        let mut game = new_game(FirstPlayerMode::Bot);
        assert!(game.is_bot_turn());
        let best = game.play_bot_move().unwrap();
        assert_eq!(best.position, pos(0, 0));
        assert_eq!(game.board().get(pos(0, 0)), Mark::O);
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_random_first_player_picks_one_side() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen_bot = false;
        let mut seen_human = false;
        for _ in 0..32 {
            let game = TicTacToeGameState::new(&config(FirstPlayerMode::Random), &mut rng);
            if game.is_bot_turn() {
                seen_bot = true;
            } else {
                seen_human = true;
            }
        }
        assert!(seen_bot && seen_human);
    }

    #[test]
    fn test_human_move_gets_bot_reply() {
        let mut game = new_game(FirstPlayerMode::Human);
        let outcome = game.handle_human_move(pos(1, 1)).unwrap();
        let reply = outcome.bot_move.unwrap();
        assert_ne!(reply.position, pos(1, 1));
        assert_eq!(outcome.status, GameStatus::InProgress);
        assert_eq!(game.move_count(), 2);
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.last_move(), Some(reply.position));
    }

    #[test]
    fn test_rejects_occupied_cell() {
        let mut game = new_game(FirstPlayerMode::Human);
        let outcome = game.handle_human_move(pos(0, 0)).unwrap();
        let taken = outcome.bot_move.unwrap().position;
        let result = game.handle_human_move(taken);
        assert_eq!(result, Err(GameError::CellOccupied(taken)));
        assert_eq!(game.move_count(), 2);
    }

    #[test]
    fn test_rejects_wrong_turn() {
        let mut game = new_game(FirstPlayerMode::Human);
        assert_eq!(
            game.play_bot_move(),
            Err(GameError::NotYourTurn { expected: Player::X })
        );
        assert_eq!(
            game.place_mark(Player::O, pos(0, 0)),
            Err(GameError::NotYourTurn { expected: Player::X })
        );
    }

    #[test]
    fn test_bot_never_loses_and_game_ends() {
        let mut game = new_game(FirstPlayerMode::Human);
        // Human always takes the first free cell.
        while !game.status().is_over() {
            let next = game.board().available_moves()[0];
            game.handle_human_move(next).unwrap();
        }
        assert_ne!(game.status(), GameStatus::Won(Player::X));
        assert_eq!(game.handle_human_move(pos(0, 0)), Err(GameError::GameOver));
        assert_eq!(game.play_bot_move(), Err(GameError::GameOver));
    }

    #[test]
    fn test_bot_wins_when_human_blunders() {
        let mut game = new_game(FirstPlayerMode::Bot);
        game.play_bot_move().unwrap(); // O at (0,0)
        let mut status = GameStatus::InProgress;
        // Human keeps playing along the bottom row, ignoring every threat.
        for col in [2, 1, 0] {
            let cell = pos(2, col);
            if !game.board().is_empty_at(cell) {
                continue;
            }
            status = game.handle_human_move(cell).unwrap().status;
            if status.is_over() {
                break;
            }
        }
        assert_eq!(status, GameStatus::Won(Player::O));
    }
}
