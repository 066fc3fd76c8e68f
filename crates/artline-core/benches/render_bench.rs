use artline_core::{Chart, ChartConfig, Record};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn gen_records(groups: usize, per_group: usize) -> Vec<Record> {
    let names = ["glass", "steel", "bronze", "ceramic", "stone", "mosaic"];
    let mut out = Vec::with_capacity(groups * per_group);
    for g in 0..groups {
        let name = names[g % names.len()];
        for i in 0..per_group {
            let year = 1980.0 + i as f64 * (40.0 / per_group as f64);
            let count = (i + 1) as f64 * (g + 1) as f64;
            out.push(Record::new(name, year, count));
        }
    }
    out
}

fn bench_render(c: &mut Criterion) {
    let cfg = ChartConfig::default();
    let mut group = c.benchmark_group("render_svg");
    for &(groups, per_group) in &[(5usize, 100usize), (5, 1_000), (10, 5_000)] {
        let chart = Chart::with_records(gen_records(groups, per_group));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("g{groups}_n{per_group}")),
            &chart,
            |b, ch| {
                b.iter(|| {
                    let markup = ch.render_to_svg_string(&cfg).expect("render");
                    black_box(markup);
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
