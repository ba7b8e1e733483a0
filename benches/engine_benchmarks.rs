//! Benchmarks for move generation, legality checks and search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_bot::board::{Color, Minimax, Position};

const START: &str = "b2k3b/8/8/8/8/8/8/1R3K2 w 0 1";
const CROWDED: &str = "r2k3r/8/2b2b2/8/8/2B2B2/8/R2K3R w 0 1";

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    for (name, fen) in [("start", START), ("crowded", CROWDED)] {
        let pos = Position::from_fen(fen);
        group.bench_function(BenchmarkId::new("raw", name), |b| {
            b.iter(|| {
                pos.find_pieces(Some(Color::White), None)
                    .into_iter()
                    .map(|sq| black_box(pos.raw_moves(sq)).len())
                    .sum::<usize>()
            })
        });

        let mut pos = Position::from_fen(fen);
        group.bench_function(BenchmarkId::new("legal", name), |b| {
            b.iter(|| black_box(pos.generate_moves(Color::White)))
        });
    }

    group.finish();
}

fn bench_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("rules");

    let mut pos = Position::from_fen(CROWDED);
    group.bench_function("is_in_check", |b| {
        b.iter(|| black_box(pos.is_in_check(Color::White, None)))
    });
    group.bench_function("update_outcome", |b| b.iter(|| black_box(pos.update_outcome())));

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10); // Fewer samples for slower benchmarks

    for depth in [2, 3, 4] {
        group.bench_with_input(BenchmarkId::new("start", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut pos = Position::new_game(START).unwrap();
                Minimax::new(Color::White, depth).best_move(&mut pos)
            })
        });
    }

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    for (name, fen) in [("start", START), ("crowded", CROWDED)] {
        let pos = Position::from_fen(fen);
        group.bench_with_input(BenchmarkId::new("position", name), &pos, |b, pos| {
            b.iter(|| black_box(pos.evaluate(Color::White)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_movegen, bench_rules, bench_search, bench_eval);
criterion_main!(benches);
