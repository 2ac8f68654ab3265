//! Бенчмарки лексического анализатора shardsql

use criterion::{criterion_group, criterion_main, Criterion};
use shardsql::Lexer;
use std::hint::black_box;

const SIMPLE: &str = "SELECT id, name FROM users WHERE id = ?";

const COMPLEX: &str = r#"
    SELECT u.name, u.email, COUNT(o.id) AS order_count
    FROM users u
    LEFT JOIN orders o ON u.id = o.user_id /* join hint */
    WHERE u.created_at >= '2023-01-01' AND u.status <=> :status
      AND o.total > 1.5e3 AND o.flags & 0x0F <> 0
    GROUP BY u.id
    HAVING COUNT(o.id) > 0
    ORDER BY order_count DESC
    LIMIT 10;
"#;

fn lexer_simple_benchmark(c: &mut Criterion) {
    c.bench_function("lexer_simple_select", |b| {
        b.iter(|| Lexer::new(black_box(SIMPLE)).tokenize());
    });
}

fn lexer_complex_benchmark(c: &mut Criterion) {
    c.bench_function("lexer_complex_select", |b| {
        b.iter(|| Lexer::new(black_box(COMPLEX)).tokenize());
    });
}

fn lexer_with_comments_benchmark(c: &mut Criterion) {
    c.bench_function("lexer_complex_select_comments", |b| {
        b.iter(|| {
            let mut lexer = Lexer::new(black_box(COMPLEX));
            lexer.set_allow_comments(true);
            lexer.tokenize()
        });
    });
}

criterion_group!(
    benches,
    lexer_simple_benchmark,
    lexer_complex_benchmark,
    lexer_with_comments_benchmark
);
criterion_main!(benches);
