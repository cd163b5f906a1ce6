use criterion::{black_box, criterion_group, criterion_main, Criterion};

use concordia::{analyze, correlation_matrix, cronbach_alpha, ScoreMatrix};

/// Build a deterministic survey-shaped matrix without pulling in an RNG:
/// a simple LCG over plausible 1-5 Likert scores.
fn synthetic_matrix(respondents: usize, items: usize) -> ScoreMatrix {
    let mut state: u64 = 0x5DEECE66D;
    let mut next_score = || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((state >> 33) % 5 + 1) as f64
    };

    let names: Vec<String> = (0..items).map(|i| format!("q{}", i + 1)).collect();
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let rows: Vec<Vec<f64>> = (0..respondents)
        .map(|_| (0..items).map(|_| next_score()).collect())
        .collect();

    ScoreMatrix::from_numeric_rows(&name_refs, &rows).unwrap()
}

fn bench_engine(c: &mut Criterion) {
    let matrix = synthetic_matrix(500, 10);

    let mut group = c.benchmark_group("reliability_engine");

    group.bench_function("cronbach_alpha_500x10", |b| {
        b.iter(|| cronbach_alpha(black_box(&matrix)).unwrap());
    });

    group.bench_function("correlation_matrix_500x10", |b| {
        b.iter(|| correlation_matrix(black_box(&matrix)).unwrap());
    });

    group.bench_function("full_report_500x10", |b| {
        b.iter(|| analyze(black_box(&matrix)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_engine);
criterion_main!(benches);
