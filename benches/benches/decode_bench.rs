use std::{hint::black_box, io::Cursor};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dzt_benchmark::synthetic_dzt;
use dzt_core::{read_dzt_from, DecodeOptions};

fn bench_full_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_decode");

    for scans in [100usize, 1_000, 10_000] {
        let raw = synthetic_dzt(512, 1, scans, 42);
        group.throughput(Throughput::Bytes(raw.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(scans), &raw, |b, raw| {
            b.iter(|| {
                let (matrix, _) =
                    read_dzt_from(Cursor::new(black_box(raw.as_slice())), &DecodeOptions::default())
                        .unwrap();
                black_box(matrix)
            })
        });
    }

    group.finish();
}

fn bench_scan_window(c: &mut Criterion) {
    let raw = synthetic_dzt(512, 2, 10_000, 7);
    let opts = DecodeOptions::new().with_start_scan(5_000).with_scans(100);

    c.bench_function("window_100_of_10000", |b| {
        b.iter(|| {
            let (matrix, _) = read_dzt_from(Cursor::new(black_box(raw.as_slice())), &opts).unwrap();
            black_box(matrix)
        })
    });
}

criterion_group!(benches, bench_full_decode, bench_scan_window);
criterion_main!(benches);
