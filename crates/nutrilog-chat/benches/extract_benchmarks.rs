//! Benchmarks for the per-request hot path: date extraction and report
//! rendering.

use std::sync::Arc;

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nutrilog_chat::{format_reply, DateExtractor, NutritionAssistant};
use nutrilog_core::{DateKey, FixedClock, NutritionStore};

fn fixed_clock() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2025, 6, 18).unwrap())
}

fn bench_extract(c: &mut Criterion) {
    let extractor = DateExtractor::new(6);
    let clock = fixed_clock();
    let inputs = [
        "6월 18일",
        "6/18",
        "6.18",
        "오늘 영양소 분석 보여줘",
        "그냥 인사하러 왔어요, 별일 없죠? hello there",
    ];

    let mut group = c.benchmark_group("extract_date");
    for input in inputs {
        group.bench_function(input, |b| {
            b.iter(|| extractor.extract_date(black_box(input), &clock))
        });
    }
    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let store = NutritionStore::embedded().expect("embedded dataset");
    let hit = DateKey::new(6, 18);
    let miss = DateKey::new(6, 99);

    c.bench_function("format_reply/hit", |b| {
        b.iter(|| format_reply(black_box(&store), black_box(&hit)))
    });
    c.bench_function("format_reply/miss", |b| {
        b.iter(|| format_reply(black_box(&store), black_box(&miss)))
    });
}

fn bench_respond(c: &mut Criterion) {
    let assistant = NutritionAssistant::new(
        Arc::new(NutritionStore::embedded().expect("embedded dataset")),
        DateExtractor::new(6),
        Arc::new(fixed_clock()),
    );

    c.bench_function("respond/end_to_end", |b| {
        b.iter(|| assistant.respond(black_box("6월 18일 영양소 알려줘")))
    });
}

criterion_group!(benches, bench_extract, bench_format, bench_respond);
criterion_main!(benches);
