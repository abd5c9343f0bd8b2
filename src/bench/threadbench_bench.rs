use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use threadbench::counter::SharedCounter;
use threadbench::counter::transactions::run_concurrent;
use threadbench::matrix::naive_ijk::matmul_naive_ijk;
use threadbench::{Matrix, Strategy, multiply_parallel};

fn bench_matmul(c: &mut Criterion) {
    let n = 256;
    let a = Matrix::ones(n);
    let b = Matrix::ones(n);
    let mut out = Matrix::zeros(n);

    let mut group = c.benchmark_group("matmul_256");
    group.sample_size(10);

    group.bench_function("single_threaded", |bench| {
        bench.iter(|| {
            out.reset();
            matmul_naive_ijk(black_box(a.as_slice()), black_box(b.as_slice()), out.as_mut_slice(), n);
        })
    });

    for threads in [2, 4, 8] {
        group.bench_with_input(BenchmarkId::new("parallel", threads), &threads, |bench, &threads| {
            bench.iter(|| {
                out.reset();
                multiply_parallel(black_box(&a), black_box(&b), &mut out, threads).unwrap();
            })
        });
    }

    group.finish();
}

fn bench_counter(c: &mut Criterion) {
    let mut group = c.benchmark_group("counter_1000_tx");

    for strategy in Strategy::ALL {
        for threads in [2, 4, 8] {
            let mut counter = SharedCounter::new(strategy);
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", strategy), threads),
                &threads,
                |bench, &threads| {
                    bench.iter(|| {
                        counter.reset();
                        run_concurrent(&counter, threads, 1000, 42).unwrap()
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_matmul, bench_counter);
criterion_main!(benches);
