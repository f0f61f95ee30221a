use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gradebook_core::parser::{parse_grades, parse_roster_str};
use std::path::PathBuf;

fn bench_parse_grades(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_grades");

    group.bench_function("short", |b| {
        b.iter(|| parse_grades(black_box("85, 92, 78")))
    });

    let long = (0..200)
        .map(|i| ((i * 37) % 120 - 10).to_string())
        .collect::<Vec<_>>()
        .join(", ");
    group.bench_function("200_grades", |b| b.iter(|| parse_grades(black_box(&long))));

    group.bench_function("rejected", |b| {
        b.iter(|| parse_grades(black_box("70, 80, abc, 90")))
    });

    group.finish();
}

fn bench_parse_roster(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_roster");

    let mut toml = String::from("[roster]\nname = \"bench\"\n");
    for i in 0..500 {
        toml.push_str(&format!(
            "\n[[students]]\nname = \"Student {i}\"\ngrades = \"{}, {}, {}\"\n",
            i % 100,
            (i * 3) % 100,
            (i * 7) % 100
        ));
    }
    let path = PathBuf::from("bench.toml");

    group.bench_function("500_students", |b| {
        b.iter(|| parse_roster_str(black_box(&toml), black_box(&path)))
    });

    group.finish();
}

criterion_group!(benches, bench_parse_grades, bench_parse_roster);
criterion_main!(benches);
