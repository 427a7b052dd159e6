use super::board::{Board, get_available_moves};
use super::types::{Difficulty, GameStatus, Mark};
use super::win_detector::evaluate_outcome;
use crate::games::SessionRng;

pub struct BotInput {
    pub board: Board,
    pub ai_mark: Mark,
    pub human_mark: Mark,
}

pub fn calculate_move(
    difficulty: Difficulty,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(input, rng),
        Difficulty::Hard => calculate_minimax_move(input),
    }
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = get_available_moves(&input.board);
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}

pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    let available_moves = get_available_moves(&input.board);
    if available_moves.is_empty() {
        return None;
    }

    // Search runs on a private copy so the caller's board stays untouched.
    let mut scratch = input.board;
    let (_, best_move) = minimax(
        &mut scratch,
        input.ai_mark,
        input.ai_mark,
        input.human_mark,
        i32::MIN,
        i32::MAX,
    );
    best_move
}

/// Exhaustive minimax with alpha-beta pruning. Scores are from the AI's
/// perspective: +1 forced win, -1 forced loss, 0 forced draw.
///
/// Ties are broken by keeping the first candidate examined, so with moves
/// enumerated in ascending order the lowest index always wins. The board is
/// mutated place/recurse/undo and is back in its original state on return.
pub fn minimax(
    board: &mut Board,
    to_move: Mark,
    ai_mark: Mark,
    human_mark: Mark,
    mut alpha: i32,
    mut beta: i32,
) -> (i32, Option<usize>) {
    let status = evaluate_outcome(board);
    match status.winner() {
        Some(winner) if winner == ai_mark => return (1, None),
        Some(_) => return (-1, None),
        None => {}
    }
    if status == GameStatus::Draw {
        return (0, None);
    }

    if to_move == ai_mark {
        let mut best_score = i32::MIN;
        let mut best_move = None;

        for index in get_available_moves(board) {
            board.set(index, ai_mark);
            let (score, _) = minimax(board, human_mark, ai_mark, human_mark, alpha, beta);
            board.set(index, Mark::Empty);

            if score > best_score {
                best_score = score;
                best_move = Some(index);
            }
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }

        (best_score, best_move)
    } else {
        let mut best_score = i32::MAX;
        let mut best_move = None;

        for index in get_available_moves(board) {
            board.set(index, human_mark);
            let (score, _) = minimax(board, ai_mark, ai_mark, human_mark, alpha, beta);
            board.set(index, Mark::Empty);

            if score < best_score {
                best_score = score;
                best_move = Some(index);
            }
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }

        (best_score, best_move)
    }
}
