use criterion::{criterion_group, criterion_main, Criterion};

use showcard::{og, project, showcase};

fn bench_render_og(c: &mut Criterion) {
    c.bench_function("render_og_card", |b| b.iter(og::render));
}

fn bench_render_showcase(c: &mut Criterion) {
    let fonts = showcase::Fonts::resolve();
    let projects = project::showcase_projects();
    c.bench_function("render_showcase_card", |b| {
        b.iter(|| showcase::render_card(&projects[0], &fonts))
    });
}

criterion_group!(benches, bench_render_og, bench_render_showcase);
criterion_main!(benches);
