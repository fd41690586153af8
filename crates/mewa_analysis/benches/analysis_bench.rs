use chrono::{NaiveDate, TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mewa_analysis::{
    EventType, Gender, Profession, analyze_obstacles, assess_prosperity, cycle_tables,
    derive_profile, full_analysis_at, render_full_analysis,
};

fn obstacle_bench(c: &mut Criterion) {
    let name = derive_profile(1990).unwrap().cycle_name;
    let subject = cycle_tables().unwrap().convert_by_rotation(name).unwrap();

    let mut group = c.benchmark_group("obstacle");
    group.bench_function("analyze_obstacles", |b| {
        b.iter(|| {
            analyze_obstacles(
                black_box(&subject),
                black_box(2025),
                35,
                Gender::Male,
                Profession::General,
            )
        })
    });
    group.finish();
}

fn analysis_bench(c: &mut Criterion) {
    let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

    let mut group = c.benchmark_group("analysis");
    group.bench_function("full_analysis_at", |b| {
        b.iter(|| {
            full_analysis_at(
                black_box(1990),
                black_box(2025),
                35,
                Gender::Male,
                Profession::General,
                at,
            )
        })
    });
    let analysis =
        full_analysis_at(1990, 2025, 35, Gender::Male, Profession::General, at).unwrap();
    group.bench_function("render_full_analysis", |b| {
        b.iter(|| render_full_analysis(black_box(&analysis)))
    });
    group.finish();
}

fn prosperity_bench(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2025, 7, 15).unwrap();
    c.bench_function("assess_prosperity", |b| {
        b.iter(|| assess_prosperity(EventType::Birthday, black_box(date), black_box(14)))
    });
}

criterion_group!(benches, obstacle_bench, analysis_bench, prosperity_bench);
criterion_main!(benches);
