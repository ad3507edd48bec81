//! Performance benchmarks for fix-variants
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fix_variants::core::merge_readers;
use fix_variants::formats::{FixedVariantRecord, VariantRecordView};
use std::io::Cursor;

const ROW_MAT: &str =
    "S1,Spike#cds D614G p.Asp614Gly,23403,900,A,G,A>G,0,SNP,1,2,3,nsp12:14408C>T;P323L,99.1%";
const ROW_NONE: &str = "S1,ORF8#cds L84S p.Leu84Ser,28144,1200,T,C,T>C,0,SNP,1,2,3,-,93.4%";

/// Generate a variant table with alternating annotated and placeholder rows
fn generate_table(count: usize) -> String {
    (0..count)
        .map(|i| {
            let row = if i % 2 == 0 { ROW_MAT } else { ROW_NONE };
            format!("{}\n", row)
        })
        .collect()
}

/// Benchmark single row parsing
fn bench_row_parsing(c: &mut Criterion) {
    c.bench_function("parse_view", |b| {
        b.iter(|| {
            let view = VariantRecordView::parse(black_box(ROW_MAT)).unwrap();
            black_box(view.field_count())
        })
    });

    c.bench_function("fixed_from_line", |b| {
        b.iter(|| {
            let rec = FixedVariantRecord::from_line(black_box(ROW_MAT)).unwrap();
            black_box(rec)
        })
    });
}

/// Benchmark whole-table merge throughput
fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_tables");

    for size in [100, 1000, 10000].iter() {
        let variants = generate_table(*size);
        let visualization: String = (0..*size).map(|i| format!("{}\n", i)).collect();
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut out = Vec::with_capacity(variants.len());
                let stats = merge_readers(
                    Cursor::new(variants.as_bytes()),
                    Cursor::new(visualization.as_bytes()),
                    &mut out,
                )
                .unwrap();
                black_box((stats, out))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_row_parsing, bench_merge);
criterion_main!(benches);
