use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_common::games::tictactoe::{Board, Mark, calculate_minimax_move, check_win_with_line};

fn bench_minimax_empty_board(c: &mut Criterion) {
    c.bench_function("minimax_3x3_empty", |b| {
        let board = Board::new();
        b.iter(|| calculate_minimax_move(black_box(&board), Mark::X, Mark::O));
    });
}

fn bench_minimax_reply_to_center(c: &mut Criterion) {
    c.bench_function("minimax_3x3_reply_to_center", |b| {
        let mut board = Board::new();
        board.set(4, Mark::X);
        b.iter(|| calculate_minimax_move(black_box(&board), Mark::O, Mark::X));
    });
}

fn bench_minimax_mid_game(c: &mut Criterion) {
    c.bench_function("minimax_3x3_midgame", |b| {
        let mut board = Board::new();
        for (index, mark) in [(0, Mark::X), (4, Mark::O), (8, Mark::X)] {
            board.set(index, mark);
        }
        b.iter(|| calculate_minimax_move(black_box(&board), Mark::O, Mark::X));
    });
}

fn bench_self_play(c: &mut Criterion) {
    c.bench_function("minimax_3x3_full_self_play", |b| {
        b.iter(|| {
            let mut board = Board::new();
            let mut mark = Mark::X;
            while check_win_with_line(&board).is_none() {
                let Some(opponent) = mark.opponent() else {
                    break;
                };
                let Some(index) = calculate_minimax_move(&board, mark, opponent) else {
                    break;
                };
                board.set(index, mark);
                mark = opponent;
            }
            board
        });
    });
}

criterion_group!(
    benches,
    bench_minimax_empty_board,
    bench_minimax_reply_to_center,
    bench_minimax_mid_game,
    bench_self_play
);
criterion_main!(benches);
