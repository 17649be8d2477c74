use criterion::{criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use workpool::ThreadPool;

fn submit_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("submit");

    for workers in [1usize, 2, 4, 8] {
        group.bench_function(format!("workers_{workers}"), |b| {
            let pool = ThreadPool::new(workers).unwrap();
            b.iter(|| {
                let handles: Vec<_> = (0..100).map(|i| pool.submit(move |_| i * 2)).collect();
                for handle in handles {
                    handle.wait().unwrap();
                }
            });
        });
    }

    group.finish();
}

fn sort_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_sort");
    group.sample_size(10);

    for workers in [1usize, 4] {
        group.bench_function(format!("workers_{workers}"), |b| {
            let pool = ThreadPool::new(workers).unwrap();
            b.iter_batched(
                || {
                    let mut rng = thread_rng();
                    (0..8)
                        .map(|_| (0..10_000).map(|_| rng.gen::<i32>()).collect::<Vec<_>>())
                        .collect::<Vec<_>>()
                },
                |vectors| {
                    let handles: Vec<_> = vectors
                        .into_iter()
                        .map(|mut vec| {
                            pool.submit(move |_| {
                                vec.sort_unstable();
                                vec
                            })
                        })
                        .collect();
                    for handle in handles {
                        handle.wait().unwrap();
                    }
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, submit_bench, sort_bench);
criterion_main!(benches);
