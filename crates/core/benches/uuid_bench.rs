//! Benchmarks for UUID parsing, formatting and construction

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use uuidkit_core::{HYPHENATED_LENGTH, NAMESPACE_DNS, Uuid};

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_canonical", |b| {
        b.iter(|| Uuid::parse_str(black_box("12345678-1234-4234-8888-abcdefabcdef")))
    });
    c.bench_function("parse_braced_urn", |b| {
        b.iter(|| Uuid::parse_str(black_box("{URN:UUID:12345678-1234-4234-8888-ABCDEFABCDEF}")))
    });
    c.bench_function("parse_strict", |b| {
        b.iter(|| Uuid::parse_strict(black_box("12345678-1234-4234-8888-abcdefabcdef")))
    });
}

fn bench_format(c: &mut Criterion) {
    let uuid = Uuid::new_v5(&NAMESPACE_DNS, "example.com");

    c.bench_function("format_canonical", |b| {
        let mut buf = [0u8; HYPHENATED_LENGTH];
        b.iter(|| {
            black_box(uuid).hyphenated().encode_lower(&mut buf);
            black_box(&buf);
        })
    });
    c.bench_function("format_urn_string", |b| {
        b.iter(|| black_box(uuid).urn().to_string())
    });
}

fn bench_construct(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);

    c.bench_function("new_v4_seeded", |b| {
        b.iter(|| Uuid::new_v4_from_rng(&mut rng))
    });
    c.bench_function("new_v4_os", |b| b.iter(Uuid::new_v4));
    c.bench_function("new_v3", |b| {
        b.iter(|| Uuid::new_v3(&NAMESPACE_DNS, black_box("example.com")))
    });
    c.bench_function("new_v5", |b| {
        b.iter(|| Uuid::new_v5(&NAMESPACE_DNS, black_box("example.com")))
    });
}

criterion_group!(benches, bench_parse, bench_format, bench_construct);
criterion_main!(benches);
