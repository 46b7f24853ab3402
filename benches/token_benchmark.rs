use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use workout_tracker::middleware::auth::bearer_token;
use workout_tracker::services::TokenAuthority;

fn benchmark_token_round_trip(c: &mut Criterion) {
    let authority = TokenAuthority::new(b"bench_jwt_key_32_bytes_minimum!!");
    let token = authority.issue("benchuser").expect("Failed to issue token");
    let header = format!("Bearer {}", token);

    let mut group = c.benchmark_group("session_tokens");

    group.bench_function("issue", |b| {
        b.iter(|| authority.issue(black_box("benchuser")))
    });

    group.bench_function("verify_header", |b| {
        b.iter(|| {
            let token = bearer_token(black_box(&header)).expect("valid header");
            authority.verify(token)
        })
    });

    group.bench_function("reject_forged", |b| {
        b.iter(|| authority.verify(black_box("invalid.token.here")))
    });

    group.finish();
}

criterion_group!(benches, benchmark_token_round_trip);
criterion_main!(benches);
