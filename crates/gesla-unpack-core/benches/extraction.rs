//! Benchmarks for zip extraction.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::cast_possible_truncation,
    missing_docs
)]

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use gesla_unpack_core::DestDir;
use gesla_unpack_core::NoopProgress;
use gesla_unpack_core::formats::ZipExtractor;
use gesla_unpack_core::test_utils::ZipTestBuilder;
use std::hint::black_box;
use std::io::Cursor;
use tempfile::TempDir;

/// Archive shaped like a tide-gauge dump: many small station files.
fn many_station_files(file_count: usize) -> Vec<u8> {
    (0..file_count)
        .fold(ZipTestBuilder::new(), |builder, i| {
            let line = format!("2020/01/01 00:00:00 {i}.000 1 1\n").repeat(8);
            builder.add_file(&format!("stations/station{i:05}"), line.as_bytes())
        })
        .build()
}

/// Archive with a single large DEFLATE-compressed file.
fn large_deflated_file(size_bytes: usize) -> Vec<u8> {
    let data: Vec<u8> = (0..size_bytes).map(|i| (i % 251) as u8).collect();
    ZipTestBuilder::new()
        .add_deflated_file("large.bin", &data)
        .build()
}

fn bench_extract(c: &mut Criterion, name: &str, data: &[u8], throughput: Throughput) {
    let mut group = c.benchmark_group(name);
    group.throughput(throughput);
    group.bench_with_input(BenchmarkId::from_parameter(data.len()), data, |b, data| {
        b.iter(|| {
            let temp = TempDir::new().unwrap();
            let dest = DestDir::ensure(temp.path()).unwrap();
            let mut archive = ZipExtractor::new(Cursor::new(data), "bench.zip").unwrap();
            black_box(archive.extract(&dest, &mut NoopProgress).unwrap());
        });
    });
    group.finish();
}

fn extraction_benchmarks(c: &mut Criterion) {
    for count in [100, 1_000] {
        let data = many_station_files(count);
        bench_extract(
            c,
            &format!("extract_small_files_{count}"),
            &data,
            Throughput::Elements(count as u64),
        );
    }

    let size = 16 * 1024 * 1024;
    let data = large_deflated_file(size);
    bench_extract(c, "extract_large_deflated", &data, Throughput::Bytes(size as u64));
}

criterion_group!(benches, extraction_benchmarks);
criterion_main!(benches);
