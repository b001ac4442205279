use criterion::{
    criterion_group, criterion_main, AxisScale, BenchmarkId, Criterion, PlotConfiguration,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

use raytree::prelude::*;

type Vector = Vector3<f32>;

fn random_rays(i: usize) -> Vec<Ray<f32>> {
    let mut rng = StdRng::seed_from_u64(i as u64);
    let mut gen = |range| rng.gen_range(range);

    (0..i)
        .map(|_| {
            // Rays start on a sphere around the unit box and aim somewhere inside it.
            let origin = Vector::new(gen(-1.0..1.0), gen(-1.0..1.0), gen(-1.0..1.0));
            let origin = origin.normalize().unwrap_or(Vector::new(0.0, 0.0, 1.0)) * 4.0
                + Vector::splat(0.5);
            let target = Vector::new(gen(0.0..1.0), gen(0.0..1.0), gen(0.0..1.0));

            Ray::new(origin, target - origin)
        })
        .collect()
}

fn unit_tree() -> Octree<u32, f32> {
    Octree::new(BoundingBox::new(Vector::ZERO, Vector::splat(1.0)))
}

fn built_tree(rays: &[Ray<f32>], power: f32) -> Octree<u32, f32> {
    let mut tree = unit_tree();
    for ray in rays {
        tree.build(ray, power).unwrap();
    }
    tree
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Raytree");
    group
        .plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic))
        .warm_up_time(std::time::Duration::from_secs(1))
        .sample_size(50);

    let power = 1e-3;

    for i in (4..=12).map(|i| 2_usize.pow(i)) {
        let rays = random_rays(i);
        let tree = built_tree(&rays, power);

        group.bench_with_input(BenchmarkId::new("build", i), &rays, |b, input| {
            b.iter(|| built_tree(input, power))
        });

        group.bench_with_input(BenchmarkId::new("cast", i), &rays, |b, input| {
            b.iter(|| {
                input
                    .iter()
                    .map(|ray| tree.cast(ray, power).unwrap().payload)
                    .sum::<u32>()
            })
        });

        group.bench_with_input(BenchmarkId::new("burn", i), &rays, |b, input| {
            b.iter(|| {
                let mut tree = tree.clone();
                for ray in input {
                    tree.burn(ray, power).unwrap();
                }
                tree
            })
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
