use criterion::{black_box, criterion_group, criterion_main, Criterion};
use knights_tour::{SolveParams, Square, TourSolver};
use knights_tour::board::VisitedSet;
use knights_tour::search::degree::{candidates, min_degree_subset};

fn bench_solve(c: &mut Criterion) {
    for &n in &[8usize, 32] {
        c.bench_function(&format!("solve_{n}x{n}_corner"), |ben| {
            ben.iter(|| {
                let mut s = TourSolver::new(SolveParams { seed: Some(1), max_attempts: 1000, ..SolveParams::default() });
                let t = s.solve(black_box(n), Square::new(0, 0));
                black_box(t.is_ok())
            })
        });
    }
}

fn bench_degree(c: &mut Criterion) {
    let v = VisitedSet::new(16);
    c.bench_function("min_degree_center_16x16", |ben| {
        ben.iter(|| {
            let cands = candidates(black_box(Square::new(8, 8)), &v);
            black_box(min_degree_subset(&cands, &v))
        })
    });
}

criterion_group!(benches, bench_solve, bench_degree);
criterion_main!(benches);
