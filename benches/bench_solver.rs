use criterion::{criterion_group, criterion_main, Criterion};
use scrabble_solver::{selections, Config, Marker, Solver};

const WORDS: &[&str] = &[
    "boa", "cobra", "abort", "board", "broad", "tabor", "carbo", "dobra", "cobia",
];

fn config(rack: &str) -> Config {
    Config {
        rack: String::from(rack),
        fragment: String::from("a"),
        squares_before: 5,
        squares_after: 8,
        before_markers: vec![(2, Marker::TripleWord)].into_iter().collect(),
        after_markers: vec![(1, Marker::DoubleLetter), (4, Marker::DoubleLetter)]
            .into_iter()
            .collect(),
    }
}

fn bench_selections(c: &mut Criterion) {
    let letters = ['a', 't', 'b', 'c', 'd', 'r', 'o'];
    c.bench_function("generator.selections", |b| {
        b.iter(|| selections(&letters).count())
    });
}

fn bench_word_scores(c: &mut Criterion, name: &str, rack: &str) {
    let config = config(rack);
    let rack = config.rack().unwrap();
    let solver = Solver::from_config(&config)
        .unwrap()
        .with_wordlist_from_words(WORDS);
    c.bench_function(&format!("solver.{}", name), |b| {
        b.iter(|| solver.word_scores(&rack).unwrap())
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_selections(c);
    bench_word_scores(c, "1", "abcd");
}

fn slow_benchmarks(c: &mut Criterion) {
    bench_word_scores(c, "2", "atbcdro");
    bench_word_scores(c, "3", "aabbcco");
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(60);
    targets = criterion_benchmark
}

criterion_group! {
    name = slow;
    config = Criterion::default()
        .sample_size(10);
    targets = slow_benchmarks
}

criterion_main!(benches, slow);
