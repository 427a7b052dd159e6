use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use engine::games::tictactoe::{
    Board, BotInput, GameStatus, Mark, calculate_minimax_move, evaluate_outcome,
};

fn input(board: Board, ai_mark: Mark) -> BotInput {
    BotInput {
        board,
        ai_mark,
        human_mark: ai_mark.opponent().unwrap(),
    }
}

fn bench_first_move_empty_board() {
    let best = calculate_minimax_move(&input(Board::new(), Mark::X));
    black_box(best);
}

fn bench_reply_to_center_opening() {
    let mut board = Board::new();
    board.set(4, Mark::X);

    let best = calculate_minimax_move(&input(board, Mark::O));
    black_box(best);
}

fn bench_full_self_play_game() {
    let mut board = Board::new();
    let mut to_move = Mark::X;

    while evaluate_outcome(&board) == GameStatus::InProgress {
        let best = calculate_minimax_move(&input(board, to_move));
        match best {
            Some(index) => board.set(index, to_move),
            None => break,
        }
        to_move = to_move.opponent().unwrap();
    }
    black_box(board);
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.bench_function("first_move_empty_board", |b| {
        b.iter(bench_first_move_empty_board)
    });

    group.bench_function("reply_to_center_opening", |b| {
        b.iter(bench_reply_to_center_opening)
    });

    group.bench_function("full_self_play_game", |b| {
        b.iter(bench_full_self_play_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
