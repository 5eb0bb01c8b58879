use super::board::Board;
use super::evaluator::evaluate;
use super::types::{BestMove, DRAW_SCORE, LOSS_SCORE, Mark, Player, Position, Score, WIN_SCORE};

/// Exhaustive minimax from `bot`'s point of view.
///
/// Terminal wins are scored `WIN_SCORE - depth` and losses `LOSS_SCORE + depth`,
/// so quicker wins and slower losses are preferred. Every cell placed while
/// exploring is cleared again before returning; the board comes back unchanged.
pub fn minimax(board: &mut Board, depth: usize, is_maximizing: bool, bot: Player) -> Score {
    let score = evaluate(board, bot);
    if score == WIN_SCORE {
        return score - depth as Score;
    }
    if score == LOSS_SCORE {
        return score + depth as Score;
    }
    if !board.has_moves_left() {
        return DRAW_SCORE;
    }

    let mark = if is_maximizing {
        bot.mark()
    } else {
        bot.opponent().mark()
    };

    let mut best = if is_maximizing { Score::MIN } else { Score::MAX };
    for pos in Position::all() {
        if !board.is_empty_at(pos) {
            continue;
        }

        board.set(pos, mark);
        let eval = minimax(board, depth + 1, !is_maximizing, bot);
        board.set(pos, Mark::Empty);

        best = if is_maximizing {
            best.max(eval)
        } else {
            best.min(eval)
        };
    }

    best
}

/// Picks `bot`'s highest scoring move, keeping the first one found in
/// row-major order on ties. Returns `None` when the board is full.
pub fn find_best_move(board: &mut Board, bot: Player) -> Option<BestMove> {
    let mut best: Option<BestMove> = None;

    for pos in Position::all() {
        if !board.is_empty_at(pos) {
            continue;
        }

        board.set(pos, bot.mark());
        let score = minimax(board, 0, false, bot);
        board.set(pos, Mark::Empty);

        if best.is_none_or(|b| score > b.score) {
            best = Some(BestMove::new(pos, score));
        }
    }

    best
}
