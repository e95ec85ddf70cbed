use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quill_board::Position;

pub fn benchmark_ser(c: &mut Criterion) {
    let mut group = c.benchmark_group("fen_ser");

    group.bench_function("start_pos", |b| {
        let start = Position::starting();
        b.iter(|| black_box(quill_fen::to_string(black_box(&start)).ok()));
    });

    group.bench_function("empty", |b| {
        let empty = Position::default();
        b.iter(|| black_box(quill_fen::to_string(black_box(&empty)).ok()));
    });
}

criterion_group!(benches, benchmark_ser);
criterion_main!(benches);
