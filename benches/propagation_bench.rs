use criterion::{black_box, criterion_group, criterion_main, Criterion};
use solarium::camera::CameraState;
use solarium::options::{CameraOptions, RotationLock};
use solarium::scene::{catalog, BodySpec, CelestialBody, SolarSystem};

fn catalog_update_benchmark(c: &mut Criterion) {
    let mut system = catalog::solar_system().unwrap();
    let mut t = 0.0;
    c.bench_function("catalog_update", |b| {
        b.iter(|| {
            t += 16.7;
            system.update(black_box(t));
        })
    });
}

/// A star with `planets` planets, each with `moons` moons.
fn synthetic(planets: usize, moons: usize) -> SolarSystem {
    let satellites = (0..planets)
        .map(|p| {
            let planet = CelestialBody::new(format!("P{p}"), format!("P{p}"))
                .with_radius(5000.0)
                .with_orbit(300.0 + p as f32, 1e8 + p as f32 * 1e7)
                .with_rotation_period(1.0);
            let moons = (0..moons)
                .map(|m| {
                    BodySpec::leaf(
                        CelestialBody::new(format!("M{m}"), format!("M{m}"))
                            .with_radius(1000.0)
                            .with_orbit(20.0 + m as f32, 3e5 + m as f32 * 1e4),
                    )
                })
                .collect();
            BodySpec::with_satellites(planet, moons)
        })
        .collect();
    let star = CelestialBody::new("Star", "Star")
        .with_radius(7e5)
        .with_luminosity(4e26);
    SolarSystem::new(BodySpec::with_satellites(star, satellites)).unwrap()
}

fn synthetic_update_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthetic_update");

    for (planets, moons) in [(8, 2), (32, 8), (128, 16)] {
        let mut system = synthetic(planets, moons);
        group.bench_function(format!("{}_bodies", system.len()), |b| {
            b.iter(|| system.update(black_box(123_456.0)))
        });
    }
    group.finish();
}

fn view_composition_benchmark(c: &mut Criterion) {
    let options = CameraOptions::default();
    let mut system = catalog::solar_system().unwrap();
    system.update(1e6);
    let mut camera = CameraState::new(&options);
    camera.selected = system.resolve("Sun/Earth/Moon");
    camera.rotation_lock = RotationLock::Surface;

    c.bench_function("surface_locked_view", |b| {
        b.iter(|| black_box(camera.view_projection(&system, 16.0 / 9.0, &options)))
    });
}

criterion_group!(
    benches,
    catalog_update_benchmark,
    synthetic_update_benchmark,
    view_composition_benchmark
);
criterion_main!(benches);
