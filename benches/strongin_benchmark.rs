use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use strongin::{
    algorithms::strongin::{Distributed, Strongin, StronginConfig},
    distributed::ThreadGroup,
    test_functions::Rastrigin,
    traits::Algorithm,
};

fn strongin_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Strongin");
    for epsilon in [1e-3, 1e-4, 1e-5] {
        group.bench_with_input(
            BenchmarkId::new("Rastrigin", epsilon),
            &epsilon,
            |b, &epsilon| {
                let cfg = StronginConfig::new(-5.12, 5.12).with_epsilon(epsilon);
                b.iter_batched(
                    || (Strongin::new(), Strongin::default_callbacks()),
                    |(mut solver, cbs)| {
                        let result = solver.process(&Rastrigin, &(), cfg, cbs).unwrap();
                        black_box(result);
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
    for workers in [1, 2, 4] {
        group.bench_with_input(
            BenchmarkId::new("Rastrigin (distributed)", workers),
            &workers,
            |b, &workers| {
                let cfg = StronginConfig::new(-5.12, 5.12);
                b.iter(|| {
                    let results = ThreadGroup::run(workers, |comm| {
                        Strongin::with_reduction(Distributed::new(comm))
                            .process(&Rastrigin, &(), cfg, Strongin::default_callbacks())
                            .unwrap()
                    });
                    black_box(results);
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, strongin_benchmark);
criterion_main!(benches);
