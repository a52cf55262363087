use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dxi::{CharText, DocumentStore, DuplicateFinder, SuffixIndex};

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "amet", "consectetur", "adipiscing", "elit", "tempor",
    "incididunt", "labore", "magna", "aliqua", "veniam", "nostrud", "ullamco",
];

/// Deterministic document collection with plenty of cross-document overlap.
fn synthetic_store(doc_count: usize, words_per_doc: usize) -> DocumentStore {
    let mut store = DocumentStore::new();
    for id in 0..doc_count {
        let mut text = String::new();
        for w in 0..words_per_doc {
            let pick = (id * 31 + w * 7 + 13) % WORDS.len();
            if w > 0 {
                text.push(' ');
            }
            text.push_str(WORDS[pick]);
        }
        store.add(&CharText::from(text.as_str()), id as i64);
    }
    store
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("suffix_build");

    for &doc_count in &[8usize, 32, 128] {
        let store = synthetic_store(doc_count, 40);
        let text = store.concatenated().clone();

        group
            .throughput(Throughput::Elements(text.len() as u64))
            .bench_with_input(BenchmarkId::from_parameter(doc_count), &text, |b, text| {
                b.iter(|| {
                    let mut index = SuffixIndex::new();
                    index.build(text).unwrap();
                    index
                });
            });
    }

    group.finish();
}

fn bench_find_duplicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_duplicates");

    for &doc_count in &[8usize, 32, 128] {
        let store = synthetic_store(doc_count, 40);

        group.bench_with_input(BenchmarkId::from_parameter(doc_count), &store, |b, store| {
            b.iter(|| DuplicateFinder::new().find_duplicates(store, 8).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_find_duplicates);
criterion_main!(benches);
