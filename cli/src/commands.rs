use std::error::Error;
use std::io::{BufRead, Write};

use rand::Rng;
use tictactoe_engine::GameConfig;
use tictactoe_engine::log;
use tictactoe_engine::tictactoe::{
    Board, GameError, GameStatus, Player, Position, TicTacToeGameState, find_best_move,
    game_status,
};

pub fn parse_move(line: &str) -> Result<Position, String> {
    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect();

    let [row, col] = parts.as_slice() else {
        return Err("Enter a move as `row col`, for example `1 1`".to_string());
    };

    let row: usize = row.parse().map_err(|_| format!("Invalid row '{}'", row))?;
    let col: usize = col.parse().map_err(|_| format!("Invalid column '{}'", col))?;

    Position::new(row, col).ok_or_else(|| GameError::OutOfBounds { row, col }.to_string())
}

fn result_message(status: GameStatus, bot: Player) -> &'static str {
    match status {
        GameStatus::Won(player) if player == bot => "Bot won!",
        GameStatus::Won(_) => "You won!",
        GameStatus::Draw => "Cat's game!",
        GameStatus::InProgress => "Game abandoned.",
    }
}

pub fn play<R, I, W>(
    config: &GameConfig,
    rng: &mut R,
    input: I,
    out: &mut W,
) -> Result<GameStatus, Box<dyn Error>>
where
    R: Rng + ?Sized,
    I: BufRead,
    W: Write,
{
    let mut game = TicTacToeGameState::new(config, rng);
    writeln!(out, "You are {}, the bot is {}.", game.human(), game.bot())?;

    if game.is_bot_turn() {
        let best = game.play_bot_move()?;
        writeln!(out, "Bot plays {}", best.position)?;
    }

    let mut lines = input.lines();
    while !game.status().is_over() {
        writeln!(out, "{}", game.board())?;
        write!(out, "Your move (row col, q to quit): ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().eq_ignore_ascii_case("q") {
            break;
        }

        let pos = match parse_move(&line) {
            Ok(pos) => pos,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        match game.handle_human_move(pos) {
            Ok(outcome) => {
                if let Some(best) = outcome.bot_move {
                    writeln!(out, "Bot plays {}", best.position)?;
                }
            }
            Err(e) => writeln!(out, "{}", e)?,
        }
    }

    writeln!(out, "{}", game.board())?;
    writeln!(out, "{}", result_message(game.status(), game.bot()))?;
    log!("Session finished after {} moves: {}", game.move_count(), game.status());

    Ok(game.status())
}

pub fn analyze<W: Write>(board: &str, bot: Player, out: &mut W) -> Result<(), Box<dyn Error>> {
    let mut board: Board = board.parse()?;
    writeln!(out, "{}", board)?;

    let status = game_status(&board);
    if status.is_over() {
        writeln!(out, "Board is already decided: {}", status)?;
        return Ok(());
    }

    let best = find_best_move(&mut board, bot).ok_or(GameError::BoardFull)?;
    writeln!(
        out,
        "Best move for {}: {} (score {})",
        bot, best.position, best.score
    )?;
    Ok(())
}

pub fn self_play<W: Write>(out: &mut W) -> Result<GameStatus, Box<dyn Error>> {
    let mut board = Board::new();
    let mut to_move = Player::X;

    while game_status(&board) == GameStatus::InProgress {
        let best = find_best_move(&mut board, to_move).ok_or(GameError::BoardFull)?;
        board.set(best.position, to_move.mark());
        writeln!(out, "{} plays {} (score {})", to_move, best.position, best.score)?;
        to_move = to_move.opponent();
    }

    let status = game_status(&board);
    writeln!(out, "{}", board)?;
    writeln!(out, "Result: {}", status)?;
    Ok(status)
}
