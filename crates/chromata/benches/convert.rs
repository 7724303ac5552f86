use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::Rng;

use chromata::{generate_palette, Color, Float, Oklch, OutputFormat, Rgb};

fn random_rgb() -> Rgb {
    let mut rng = rand::rng();
    Rgb::new(
        Float::from(rng.random::<u8>()),
        Float::from(rng.random::<u8>()),
        Float::from(rng.random::<u8>()),
        1.0,
    )
}

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    group.bench_function("parse-hex", |b| {
        b.iter_batched(
            || Color::from_model(&random_rgb()).to_hex(),
            |hex| Color::new(hex.as_str()),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("to-oklch", |b| {
        b.iter_batched(
            || Color::from_model(&random_rgb()),
            |color| color.to_oklch(),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("gamut-map-oklch", |b| {
        b.iter_batched(
            || {
                let mut rng = rand::rng();
                Oklch::new(
                    rng.random_range(0.0..1.0),
                    rng.random_range(0.0..0.4),
                    rng.random_range(0.0..360.0),
                    1.0,
                )
            },
            |oklch| Color::from_model(&oklch),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("delta-e-2000", |b| {
        b.iter_batched(
            || (Color::from_model(&random_rgb()), Color::from_model(&random_rgb())),
            |(color1, color2)| color1.delta(&color2),
            BatchSize::SmallInput,
        )
    });

    group.finish();

    let mut group = c.benchmark_group("palette");
    group.sample_size(20);

    group.bench_function("scale", |b| {
        b.iter_batched(
            || Color::from_model(&random_rgb()).to_hex(),
            |hex| generate_palette(hex.as_str(), OutputFormat::Hex),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
