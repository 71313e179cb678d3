use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rotorops_core::types::HazardRecord;
use rotorops_risk::seed::demo_register;
use rotorops_risk::{group_by_category, RiskMatrix, RiskView};

fn large_register() -> Vec<HazardRecord> {
    let demo = demo_register();
    (0..200)
        .flat_map(|i| {
            demo.iter().map(move |r| {
                let mut r = r.clone();
                r.id = format!("{}-{i}", r.id);
                r
            })
        })
        .collect()
}

fn bench_matrix(c: &mut Criterion) {
    let records = large_register();
    c.bench_function("build_inherent_matrix_1800", |b| {
        b.iter(|| RiskMatrix::build(black_box(&records), RiskView::Inherent).band_counts())
    });
    c.bench_function("group_by_category_1800", |b| {
        b.iter(|| group_by_category(black_box(&records)).len())
    });
}

criterion_group!(benches, bench_matrix);
criterion_main!(benches);
