//! Append and insert benchmarks.
//!
//! Compares `SimpleVec::push_back` against `Vec::push` so the cost of the
//! grow-and-swap reallocation strategy stays visible.

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use simple_vec::SimpleVec;
use simple_vec::reserve;

fn bench_push_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back");

    for size in [10u32, 100, 1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::new("simple_vec", size), size, |b, &size| {
            b.iter(|| {
                let mut vec = SimpleVec::new();
                for i in 0..size {
                    vec.push_back(black_box(i)).unwrap();
                }
                black_box(vec.len());
            });
        });

        group.bench_with_input(BenchmarkId::new("simple_vec_reserved", size), size, |b, &size| {
            b.iter(|| {
                let mut vec = SimpleVec::with_reserve(reserve(size as usize)).unwrap();
                for i in 0..size {
                    vec.push_back(black_box(i)).unwrap();
                }
                black_box(vec.len());
            });
        });

        group.bench_with_input(BenchmarkId::new("std_vec", size), size, |b, &size| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..size {
                    vec.push(black_box(i));
                }
                black_box(vec.len());
            });
        });
    }

    group.finish();
}

fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_front");

    for size in [10u32, 100, 1_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut vec = SimpleVec::new();
                for i in 0..size {
                    vec.insert(0, black_box(i)).unwrap();
                }
                black_box(vec.len());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_push_back, bench_insert_front);
criterion_main!(benches);
