//! Multi-thread benchmarks - blocking hand-off under producer/consumer contention.

use std::thread;

use bounded_ring::BoundedRing;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

const PER_PRODUCER: u64 = 20_000;

/// N producers, one consumer, small ring so both sides block regularly.
fn mpsc_blocking(c: &mut Criterion) {
    let mut group = c.benchmark_group("mpsc_blocking");

    for producers in [1, 2, 4, 8] {
        let total = PER_PRODUCER * producers as u64;
        group.throughput(Throughput::Elements(total));

        group.bench_with_input(
            BenchmarkId::new("producers", producers),
            &producers,
            |b, &n| {
                b.iter(|| {
                    let ring = BoundedRing::<u64, 64>::new();
                    thread::scope(|s| {
                        for _ in 0..n {
                            s.spawn(|| {
                                for i in 0..PER_PRODUCER {
                                    ring.push(black_box(i));
                                }
                            });
                        }

                        let mut sum = 0u64;
                        for _ in 0..total {
                            sum = sum.wrapping_add(ring.pop());
                        }
                        black_box(sum)
                    })
                });
            },
        );
    }
    group.finish();
}

/// N producers, N consumers.
fn mpmc_blocking(c: &mut Criterion) {
    let mut group = c.benchmark_group("mpmc_blocking");

    for threads in [2, 4] {
        let total = PER_PRODUCER * threads as u64;
        group.throughput(Throughput::Elements(total));

        group.bench_with_input(
            BenchmarkId::new("pairs", threads),
            &threads,
            |b, &n| {
                b.iter(|| {
                    let (tx, rx) = BoundedRing::<u64, 256>::new_heap().split();
                    thread::scope(|s| {
                        for _ in 0..n {
                            let tx = tx.clone();
                            s.spawn(move || {
                                for i in 0..PER_PRODUCER {
                                    tx.push(black_box(i));
                                }
                            });
                            let rx = rx.clone();
                            s.spawn(move || {
                                for _ in 0..PER_PRODUCER {
                                    black_box(rx.pop());
                                }
                            });
                        }
                    });
                });
            },
        );
    }
    group.finish();
}

/// Capacity effect on a single producer/consumer pair.
fn spsc_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("spsc_capacity");
    group.throughput(Throughput::Elements(PER_PRODUCER));

    for capacity in [1, 16, 1024] {
        group.bench_with_input(
            BenchmarkId::from_parameter(capacity),
            &capacity,
            |b, &cap| match cap {
                1 => b.iter(|| spsc(&BoundedRing::<u64, 1>::new())),
                16 => b.iter(|| spsc(&BoundedRing::<u64, 16>::new())),
                1024 => b.iter(|| spsc(&BoundedRing::<u64, 1024>::new())),
                _ => unreachable!(),
            },
        );
    }
    group.finish();
}

fn spsc<const N: usize>(ring: &BoundedRing<u64, N>) {
    thread::scope(|s| {
        s.spawn(|| {
            for i in 0..PER_PRODUCER {
                ring.push(i);
            }
        });
        for _ in 0..PER_PRODUCER {
            black_box(ring.pop());
        }
    });
}

/// Lossy producer racing a consumer; never blocks the producer.
fn overwrite_vs_consumer(c: &mut Criterion) {
    let mut group = c.benchmark_group("overwrite_vs_consumer");
    group.throughput(Throughput::Elements(PER_PRODUCER));

    group.bench_function("capacity_64", |b| {
        b.iter(|| {
            let ring = BoundedRing::<Option<u64>, 64>::new();
            thread::scope(|s| {
                s.spawn(|| while black_box(ring.pop()).is_some() {});
                for i in 0..PER_PRODUCER {
                    black_box(ring.push_overwrite(Some(i)));
                }
                ring.push(None);
            });
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    mpsc_blocking,
    mpmc_blocking,
    spsc_capacity,
    overwrite_vs_consumer,
);
criterion_main!(benches);
