use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};
use easel_core::{Color, Point, SceneGraph};

fn gen_scene(n: usize) -> SceneGraph {
    let mut scene = SceneGraph::new();
    for i in 0..n {
        let x = (i % 40) as f64 * 25.0;
        let y = (i / 40) as f64 * 25.0;
        scene.add(30.0, 20.0, x, y, i as f64 * 0.1, Color::RED, format!("r{i}"));
    }
    scene.drain_notifications();
    scene
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test");
    for &n in &[100usize, 1_000usize, 10_000usize] {
        let scene = gen_scene(n);
        group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}")), &scene, |b, scene| {
            // a miss walks the whole list
            b.iter(|| black_box(scene.hit_test(Point::new(-500.0, -500.0))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hit_test);
criterion_main!(benches);
