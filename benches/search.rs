//! Criterion benchmarks: move generation, perft and the minimax search.

use criterion::{criterion_group, criterion_main, Criterion};
use dama::checkers::board::Board;
use dama::checkers::core::Player;
use dama::checkers::movegen::{legal_moves, perft};
use dama::evaluation::material::material_advantage;
use dama::search::minimax::minimax;

/// A red king surrounded by black men; legal-move generation has to explode
/// a heavily branching set of jump chains.
const KING_FORK: &str = "|- - - - - - - -|\
                         |- - - o - o - -|\
                         |- - - - - - - -|\
                         |- o - o - o - -|\
                         |X - - - - - - -|\
                         |- o - o - o - -|\
                         |- - - - - - - -|\
                         |- - - - - - - -|";

fn movegen_bench(c: &mut Criterion) {
    let starting = Board::starting();
    c.bench_function("legal_moves_starting", |b| {
        b.iter(|| std::hint::black_box(legal_moves(&starting, Player::Black)));
    });
    let forked = Board::try_from(KING_FORK).unwrap();
    c.bench_function("legal_moves_chain_explosion", |b| {
        b.iter(|| std::hint::black_box(legal_moves(&forked, Player::Red)));
    });
}

fn perft_bench(c: &mut Criterion) {
    let starting = Board::starting();
    c.bench_function("perft_depth_5", |b| {
        b.iter(|| std::hint::black_box(perft(&starting, Player::Black, 5)));
    });
}

fn minimax_bench(c: &mut Criterion) {
    let starting = Board::starting();
    c.bench_function("minimax_depth_4", |b| {
        b.iter(|| std::hint::black_box(minimax(&starting, Player::Black, 4, &material_advantage)));
    });
}

criterion_group!(benches, movegen_bench, perft_bench, minimax_bench);
criterion_main!(benches);
