use criterion::{black_box, criterion_group, criterion_main, Criterion};
use snapdiff_core::{compute_line_diff, MAX_LINES};

fn posting(lines: usize, salt: usize) -> String {
    (0..lines)
        .map(|i| {
            if i % 17 == salt {
                format!("- revised requirement {i}")
            } else {
                format!("- requirement {i}: 5+ years with distributed systems")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_exact(c: &mut Criterion) {
    let old = posting(MAX_LINES, 0);
    let new = posting(MAX_LINES, 3);
    c.bench_function("exact_at_max_lines", |b| {
        b.iter(|| compute_line_diff(black_box(&old), black_box(&new)))
    });
}

fn bench_fallback(c: &mut Criterion) {
    let old = posting(MAX_LINES * 4, 0);
    let new = posting(MAX_LINES * 4, 3);
    c.bench_function("set_fallback", |b| {
        b.iter(|| compute_line_diff(black_box(&old), black_box(&new)))
    });
}

criterion_group!(benches, bench_exact, bench_fallback);
criterion_main!(benches);
