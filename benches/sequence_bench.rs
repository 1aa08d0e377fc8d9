//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lazyseq::*;

fn benchmark_pointer_ranges(c: &mut Criterion) {
    let block: Vec<u64> = (0..4096).collect();

    c.bench_function("slice_iter_sum", |b| {
        b.iter(|| black_box(&block).iter().sum::<u64>());
    });

    c.bench_function("ptr_range_checked_sum", |b| {
        b.iter(|| PtrRange::new(black_box(&block)).iter().sum::<u64>());
    });

    c.bench_function("ptr_range_unchecked_sum", |b| {
        b.iter(|| {
            // SAFETY: drained through `iter`, which stops at the end.
            let range = unsafe { PtrRange::new_unchecked(black_box(&block)) };
            range.iter().sum::<u64>()
        });
    });

    let mut terminated: Vec<u64> = (1..4097).collect();
    terminated.push(0);
    c.bench_function("null_terminated_sum", |b| {
        b.iter(|| NullTerminated::from_slice(black_box(&terminated)).iter().sum::<u64>());
    });
}

fn benchmark_pairwise(c: &mut Criterion) {
    let block: Vec<i64> = (0..4096).collect();

    c.bench_function("pairwise_add_4096", |b| {
        b.iter(|| {
            pairwise(|x: &i64, y: &i64| x + y, PtrRange::new(black_box(&block)))
                .iter()
                .sum::<i64>()
        });
    });

    c.bench_function("windows_add_4096", |b| {
        b.iter(|| black_box(&block).windows(2).map(|w| w[0] + w[1]).sum::<i64>());
    });
}

criterion_group!(benches, benchmark_pointer_ranges, benchmark_pairwise);
criterion_main!(benches);
