use criterion::{black_box, criterion_group, criterion_main, Criterion};
use navcam::camera::Camera;
use navcam::engine::{NavCommand, NavEngine};
use navcam::math::Vector3;

fn vector_benchmark(c: &mut Criterion) {
    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(-4.0, 0.5, 7.0);
    c.bench_function("cross_normalize", |bench| {
        bench.iter(|| black_box(black_box(a).cross(black_box(b)).normalize()))
    });
    c.bench_function("rotate_y", |bench| {
        bench.iter(|| black_box(black_box(a).rotate_y(black_box(0.3))))
    });
}

fn camera_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("camera_moves");

    group.bench_function("forward_back", |bench| {
        let mut cam = Camera::default();
        bench.iter(|| {
            cam.forward();
            cam.back();
            black_box(cam.eye)
        })
    });
    group.bench_function("strafe", |bench| {
        let mut cam = Camera::default();
        bench.iter(|| {
            cam.left();
            cam.right();
            black_box(cam.eye)
        })
    });
    group.bench_function("pan", |bench| {
        let mut cam = Camera::default();
        bench.iter(|| {
            cam.pan_left();
            cam.pan_right();
            black_box(cam.at)
        })
    });
    group.finish();
}

fn engine_benchmark(c: &mut Criterion) {
    let mut engine = NavEngine::default();
    c.bench_function("execute_and_view_projection", |bench| {
        bench.iter(|| {
            let _ = engine.execute(NavCommand::PanLeft { degrees: 0.5 });
            black_box(engine.view_projection())
        })
    });
}

criterion_group!(benches, vector_benchmark, camera_benchmark, engine_benchmark);
criterion_main!(benches);
