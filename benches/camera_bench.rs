use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use tankyard::camera::core::Camera;
use tankyard::camera::rig::{FlightRig, Rig};

fn camera() -> Camera {
    Camera {
        position: Vec3::new(15.0, 10.0, 10.0),
        look: Vec3::new(-15.0, -10.0, -10.0).normalize(),
        up: Vec3::Z,
        aspect: 1.5,
        fovy: 45.0,
        znear: 1.0,
        zfar: 200.0,
    }
}

fn view_matrix_benchmark(c: &mut Criterion) {
    let cam = camera();
    c.bench_function("view_projection", |b| {
        b.iter(|| black_box(black_box(&cam).view_projection()))
    });
}

fn rig_rotation_benchmark(c: &mut Criterion) {
    c.bench_function("yaw_pitch_roll", |b| {
        b.iter(|| {
            let mut cam = camera();
            FlightRig.yaw(&mut cam, black_box(0.13));
            FlightRig.pitch(&mut cam, black_box(-0.07));
            FlightRig.roll(&mut cam, black_box(0.05));
            black_box(cam.look)
        })
    });
}

criterion_group!(benches, view_matrix_benchmark, rig_rotation_benchmark);
criterion_main!(benches);
