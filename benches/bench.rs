//! Criterion benchmarks for the Orthus spell checker.
//!
//! Covers the two hot paths:
//! - Open-addressing hash map insertion and lookup
//! - Edit-distance suggestion generation against a loaded dictionary

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use orthus::collections::{OpenHashMap, OpenHashSet};
use orthus::spelling::{SpellingDictionary, Suggester};

/// Generate a deterministic word list for benchmarking.
fn generate_words(count: usize) -> Vec<String> {
    let stems = [
        "search", "engine", "word", "table", "probe", "prime", "slot", "entry", "hash", "spell",
        "check", "suggest", "delete", "insert", "letter", "string",
    ];

    let mut words = Vec::with_capacity(count);
    for i in 0..count {
        words.push(format!("{}{}", stems[i % stems.len()], i / stems.len()));
    }
    words
}

/// Benchmark hash map insertion and lookup.
fn bench_open_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("open_map");
    let words = generate_words(10_000);

    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("insert_10k", |b| {
        b.iter(|| {
            let mut map = OpenHashMap::new();
            for (i, word) in words.iter().enumerate() {
                map.insert(black_box(word.clone()), i);
            }
            black_box(map.collision_count())
        })
    });

    let mut map = OpenHashMap::new();
    for (i, word) in words.iter().enumerate() {
        map.insert(word.clone(), i);
    }

    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("get_10k", |b| {
        b.iter(|| {
            for word in &words {
                black_box(map.get(black_box(word.as_str())));
            }
        })
    });

    group.finish();
}

/// Benchmark set membership, the inner loop of suggestion filtering.
fn bench_open_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("open_set");
    let words = generate_words(10_000);
    let set: OpenHashSet<String> = words.iter().cloned().collect();

    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("contains_10k", |b| {
        b.iter(|| {
            for word in &words {
                black_box(set.contains(black_box(word.as_str())));
            }
        })
    });

    group.finish();
}

/// Benchmark suggestion generation.
fn bench_suggestions(c: &mut Criterion) {
    let mut group = c.benchmark_group("suggestions");
    group.sample_size(20); // Distance-2 expansion is costly per iteration

    let dictionary = SpellingDictionary::from_words(generate_words(10_000));
    let suggester = Suggester::new(&dictionary);

    // Misspellings of words present in the generated dictionary
    let misspellings = vec!["serach0", "engin1", "spel2", "tabel3", "prob4"];

    group.bench_function("suggest_single_word", |b| {
        b.iter(|| black_box(suggester.suggest(black_box("serach0"))))
    });

    group.throughput(Throughput::Elements(misspellings.len() as u64));
    group.bench_function("suggest_batch_words", |b| {
        b.iter(|| {
            for word in &misspellings {
                black_box(suggester.suggest(black_box(word)));
            }
        })
    });

    group.bench_function("edit_distance1_expansion", |b| {
        b.iter(|| black_box(suggester.edit_distance1(black_box("suggestion"))))
    });

    group.finish();
}

criterion_group!(benches, bench_open_map, bench_open_set, bench_suggestions);
criterion_main!(benches);
