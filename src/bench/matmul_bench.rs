//! Criterion benchmarks for every kernel at the default sizes.
//!
//! `cargo bench` for the statistically careful numbers; the binary is the
//! quick side-by-side.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use matmul_loops::harness::{DEFAULT_SEED_A, DEFAULT_SEED_B, DEFAULT_SIZES};
use matmul_loops::{Kernel, multiply, random_matrix_seeded};

fn kernels() -> [Kernel; 6] {
    [
        Kernel::Ijk,
        Kernel::Ikj,
        Kernel::Kij,
        Kernel::IjkTransposed,
        Kernel::blocked(),
        Kernel::Blocked { block_size: 32 },
    ]
}

fn bench_kernels(c: &mut Criterion) {
    for n in DEFAULT_SIZES {
        let mut group = c.benchmark_group(format!("matmul_{}", n));
        group.throughput(Throughput::Elements((n * n * n) as u64));

        // Inputs are built once per size and shared by every kernel.
        let a = random_matrix_seeded(n, DEFAULT_SEED_A);
        let b = random_matrix_seeded(n, DEFAULT_SEED_B);

        for kernel in kernels() {
            group.bench_with_input(BenchmarkId::new(kernel.label(), n), &n, |bench, _| {
                bench.iter(|| multiply(black_box(&a), black_box(&b), kernel))
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_kernels);
criterion_main!(benches);
