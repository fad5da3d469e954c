use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lotto_core::QuickPick;

fn bench_tally(c: &mut Criterion) {
    let mut qp = QuickPick::from_seed(42);
    let w = qp.draw_winning();
    let mut g = c.benchmark_group("lotto_core_tally");
    for &n in &[10_000usize, 1_000_000usize] {
        let tickets = qp.tickets(n);
        g.bench_with_input(BenchmarkId::new("sequential", n), &tickets, |b, t| {
            b.iter(|| black_box(w.tally(t)))
        });
        g.bench_with_input(BenchmarkId::new("rayon", n), &tickets, |b, t| {
            b.iter(|| black_box(w.tally_par(t)))
        });
        g.bench_with_input(BenchmarkId::new("streamed", n), &n, |b, &n| {
            b.iter(|| black_box(w.tally_chunked(QuickPick::from_seed(9).take(n), 1 << 16)))
        });
    }
    g.finish();
}

fn bench_quick_pick(c: &mut Criterion) {
    c.bench_function("lotto_core_quick_pick_1000", |b| {
        let mut qp = QuickPick::from_seed(7);
        b.iter(|| black_box(qp.tickets(1_000)))
    });
}

criterion_group!(benches, bench_tally, bench_quick_pick);
criterion_main!(benches);
