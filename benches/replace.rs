//! Benchmarks for find/replace on the active document.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mailedit::search::replace_all;
use mailedit::store::{DocumentStore, SAMPLE_CONTENT};

fn bench_replace_sample(c: &mut Criterion) {
    c.bench_function("replace_sample_placeholder", |b| {
        b.iter(|| replace_all(black_box(SAMPLE_CONTENT), "[Company Name]", "Acme"))
    });
}

fn bench_replace_dense(c: &mut Criterion) {
    let text = "a".repeat(64 * 1024);
    c.bench_function("replace_dense_64k", |b| {
        b.iter(|| replace_all(black_box(&text), "a", "bb"))
    });
}

fn bench_store_replace(c: &mut Criterion) {
    let body = SAMPLE_CONTENT.repeat(100);
    c.bench_function("store_replace_in_active", |b| {
        b.iter(|| {
            let mut store = DocumentStore::initialize();
            store.edit_active(body.clone());
            store.replace_in_active(black_box("[Company Name]"), "Acme")
        })
    });
}

criterion_group!(benches, bench_replace_sample, bench_replace_dense, bench_store_replace);
criterion_main!(benches);
