use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mewa_base::{
    MewaMethod, SixtyCycleTables, convert_by_offset, convert_by_rotation, convert_mewas,
    cycle_tables, derive_profile,
};

fn profile_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("profile");
    group.bench_function("derive_profile", |b| {
        b.iter(|| derive_profile(black_box(1990)))
    });
    group.finish();
}

fn mewa_bench(c: &mut Criterion) {
    let name = derive_profile(1990).unwrap().cycle_name;
    // Force table construction outside the timed loop.
    cycle_tables().unwrap();

    let mut group = c.benchmark_group("mewa");
    group.bench_function("convert_by_rotation", |b| {
        b.iter(|| convert_by_rotation(black_box(name)))
    });
    group.bench_function("convert_by_offset", |b| {
        b.iter(|| convert_by_offset(black_box(name)))
    });
    group.bench_function("convert_mewas_text", |b| {
        b.iter(|| convert_mewas(black_box("MetalYangHorse"), MewaMethod::Rotation))
    });
    group.finish();
}

fn tables_bench(c: &mut Criterion) {
    c.bench_function("build_cycle_tables", |b| b.iter(SixtyCycleTables::build));
}

criterion_group!(benches, profile_bench, mewa_bench, tables_bench);
criterion_main!(benches);
