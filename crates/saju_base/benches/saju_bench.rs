use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_base::{
    AdvancedAnalysis, AnalysisBundle, BirthInput, Chart, CompatibilityConfig, Gender,
    LunarFallback, NoLunarConverter, Stem, Branch, analyze, compare, compare_with_analysis,
    compute_chart, generate_calendar, generate_decades, life_stage, ten_gods,
};

fn chart_bench(c: &mut Criterion) {
    let input = BirthInput::solar(1990, 3, 15, 14, 30, Gender::Male);

    let mut group = c.benchmark_group("chart");
    group.bench_function("from_solar", |b| {
        b.iter(|| Chart::from_solar(black_box(1990), black_box(3), black_box(15), black_box(14)))
    });
    group.bench_function("compute_chart", |b| {
        b.iter(|| compute_chart(black_box(&input), &NoLunarConverter, LunarFallback::Reject))
    });
    group.finish();
}

fn mapper_bench(c: &mut Criterion) {
    let chart = Chart::from_solar(1990, 3, 15, 14);

    let mut group = c.benchmark_group("mappers");
    group.bench_function("life_stage", |b| {
        b.iter(|| life_stage(black_box(Stem::Gap), black_box(Branch::Hae)))
    });
    group.bench_function("ten_gods", |b| b.iter(|| ten_gods(black_box(&chart))));
    group.bench_function("advanced_analysis", |b| {
        b.iter(|| AdvancedAnalysis::from_chart(black_box(&chart)))
    });
    group.bench_function("decades", |b| {
        b.iter(|| generate_decades(black_box(&chart), Gender::Female, black_box(34)))
    });
    group.finish();
}

fn fortune_bench(c: &mut Criterion) {
    let chart = Chart::from_solar(1990, 3, 15, 14);
    let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default();

    let mut group = c.benchmark_group("fortune");
    group.bench_function("calendar", |b| {
        b.iter(|| generate_calendar(black_box(&chart), black_box(today)))
    });
    group.finish();
}

fn compatibility_bench(c: &mut Criterion) {
    let a = Chart::from_solar(1990, 3, 15, 14);
    let b2 = Chart::from_solar(1992, 11, 2, 7);
    let aa = AdvancedAnalysis::from_chart(&a);
    let ab = AdvancedAnalysis::from_chart(&b2);
    let cfg = CompatibilityConfig::default();

    let mut group = c.benchmark_group("compatibility");
    group.bench_function("compare", |b| {
        b.iter(|| compare(black_box(&a), black_box(&b2), &cfg))
    });
    group.bench_function("compare_with_analysis", |b| {
        b.iter(|| {
            compare_with_analysis(
                &AnalysisBundle::new(black_box(&a), &aa),
                &AnalysisBundle::new(black_box(&b2), &ab),
                &cfg,
            )
        })
    });
    group.finish();
}

fn name_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("name");
    group.bench_function("analyze_hangul", |b| {
        b.iter(|| analyze(black_box("김민수"), None))
    });
    group.bench_function("analyze_double_surname", |b| {
        b.iter(|| analyze(black_box("남궁민"), None))
    });
    group.finish();
}

criterion_group!(
    benches,
    chart_bench,
    mapper_bench,
    fortune_bench,
    compatibility_bench,
    name_bench
);
criterion_main!(benches);
