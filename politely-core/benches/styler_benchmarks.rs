//! Benchmarks for the styling pipeline

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use politely_core::stages::conjugate::conjugate_tokens;
use politely_core::{PolitenessLevel, Pretagged, RuleTables, Styler, Substitutions};
use std::hint::black_box;

const SENTENCE: &str = "나/NP+는/JX 어제/NNG 친구/NNG+와/JKB 밥/NNG+을/JKO 먹/VV+었/EP+어/EF";

/// Build a sentence with the given number of leading noun tokens
fn generate_sentence(words: usize) -> String {
    let mut parts = vec!["나/NP+는/JX"; 1];
    parts.extend(std::iter::repeat("학교/NNG+에서/JKB").take(words));
    parts.push("공부하/VV+어/EF");
    parts.join(" ")
}

/// Full pipeline for each register
fn bench_styler_levels(c: &mut Criterion) {
    let mut group = c.benchmark_group("styler_levels");
    let styler = Styler::new(Pretagged).unwrap();

    for (listener, environment) in [
        ("friend", "comfortable & informal"),
        ("adult family", "comfortable & informal"),
        ("boss at work", "formal"),
    ] {
        group.bench_with_input(
            BenchmarkId::new("process", listener),
            &(listener, environment),
            |b, (listener, environment)| {
                b.iter(|| styler.process(black_box(SENTENCE), listener, environment));
            },
        );
    }

    group.finish();
}

/// Conjugation cost as sentences grow
fn bench_conjugation_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("conjugation_scaling");
    let tables = RuleTables::embedded().unwrap();

    for words in [4, 16, 64, 256] {
        let sentence = generate_sentence(words);
        let tokens = Pretagged::parse(&sentence).unwrap();
        group.throughput(Throughput::Elements(tokens.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(words), &tokens, |b, tokens| {
            b.iter(|| {
                let mut applied = Substitutions::default();
                conjugate_tokens(
                    black_box(tokens),
                    tables.honorifics(),
                    PolitenessLevel::Formal,
                    &mut applied,
                )
            });
        });
    }

    group.finish();
}

/// Loading and validating the embedded rule files
fn bench_rule_parsing(c: &mut Criterion) {
    c.bench_function("rule_tables_from_sources", |b| {
        b.iter(|| RuleTables::from_sources(black_box(politely_core::RuleSources::embedded())));
    });
}

criterion_group!(
    benches,
    bench_styler_levels,
    bench_conjugation_scaling,
    bench_rule_parsing
);
criterion_main!(benches);
