use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fly_camera::camera::{Camera, MotionMode, Movement};
use fly_camera::field::{FieldSampler, ScalarField, DEFAULT_GRID_SIZE};
use fly_camera::traits::CameraController;
use glam::Vec3;

const DT: f32 = 1.0 / 144.0;

/// Benchmark: one frame of held input plus mouse look, immediate mode
fn bench_immediate_frame(c: &mut Criterion) {
    let mut camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));

    c.bench_function("camera_frame_immediate", |b| {
        b.iter(|| {
            camera.apply_movement(Movement::Forward, black_box(DT));
            camera.apply_movement(Movement::Right, black_box(DT));
            camera.apply_mouse_delta(black_box(3.0), black_box(-1.0), true);
            camera.update(DT);
            black_box(camera.view_matrix())
        })
    });
}

/// Benchmark: same frame with smoothing on
fn bench_smoothed_frame(c: &mut Criterion) {
    let mut camera = Camera::new(Vec3::new(0.0, 0.0, 3.0));
    camera.set_mode(MotionMode::Smoothed);

    c.bench_function("camera_frame_smoothed", |b| {
        b.iter(|| {
            camera.apply_movement(Movement::Forward, black_box(DT));
            camera.apply_mouse_delta(black_box(3.0), black_box(-1.0), true);
            camera.update(DT);
            camera.reset_motion_accumulators();
            black_box(camera.view_matrix())
        })
    });
}

/// Benchmark: resampling the default field grid, as done every frame
fn bench_field_grid(c: &mut Criterion) {
    let mut field = ScalarField::new();
    field.set_time(0.7);
    let mut samples = Vec::new();

    let mut group = c.benchmark_group("field_grid");
    for sampler in FieldSampler::ALL {
        group.bench_function(sampler.name(), |b| {
            b.iter(|| {
                field.sample_grid_into(sampler, DEFAULT_GRID_SIZE, &mut samples);
                black_box(samples.len())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_immediate_frame, bench_smoothed_frame, bench_field_grid);
criterion_main!(benches);
