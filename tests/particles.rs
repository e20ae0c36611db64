use eframe::egui::Color32;
use eframe::epaint::Vec2;
use particle_plot::particles::{Particle, ParticleStorage, SimulationParams, collide, update_particles};

fn seeded(seed: u64) -> SimulationParams {
    SimulationParams {
        seed: Some(seed),
        ..Default::default()
    }
}

/// Freshly initialised particles respect the configured ranges for several seeds.
#[test]
fn init_places_every_particle_inside_the_canvas() {
    for seed in [1, 2, 3, 99, 12345] {
        let params = seeded(seed);
        let storage = ParticleStorage::init(&params);
        assert_eq!(storage.len(), 50);
        for p in storage.as_slice() {
            assert!((5.0..=15.0).contains(&p.radius));
            assert!(p.position.x - p.radius >= 0.0 && p.position.x + p.radius <= params.width);
            assert!(p.position.y - p.radius >= 0.0 && p.position.y + p.radius <= params.height);
            assert!([p.color.r(), p.color.g(), p.color.b()].iter().all(|&c| c >= 50));
            assert_eq!(p.color.a(), 255);
        }
    }
}

/// A lone disc bouncing for a long time never strays further than one step
/// past a wall.
#[test]
fn lone_particle_overshoot_is_bounded() {
    let params = SimulationParams::default();
    let mut storage = ParticleStorage::from_particles(vec![Particle::new(
        Vec2::new(400.0, 300.0),
        Vec2::new(3.0, -2.0),
        7.0,
        Color32::WHITE,
    )]);

    for frame in 0..10_000 {
        update_particles(storage.as_mut_slice(), params.bounds());
        let p = storage.as_slice()[0];
        let slack = p.velocity.length();
        assert!(
            p.position.x >= -slack && p.position.x <= params.width + slack,
            "frame {frame}: x = {}",
            p.position.x
        );
        assert!(
            p.position.y >= -slack && p.position.y <= params.height + slack,
            "frame {frame}: y = {}",
            p.position.y
        );
        assert_eq!(p.velocity.x.abs(), 3.0);
        assert_eq!(p.velocity.y.abs(), 2.0);
    }
}

/// Two discs dropped on top of each other in a scripted scene get pushed
/// apart in opposite directions.
#[test]
fn scripted_overlap_pushes_discs_apart() {
    let mut storage = ParticleStorage::from_particles(vec![
        Particle::new(Vec2::new(100.0, 100.0), Vec2::ZERO, 10.0, Color32::RED),
        Particle::new(Vec2::new(110.0, 100.0), Vec2::ZERO, 10.0, Color32::BLUE),
    ]);
    assert_eq!(storage.len(), 2);

    update_particles(storage.as_mut_slice(), SimulationParams::default().bounds());

    let ps = storage.as_slice();
    assert!(ps[0].velocity.x < 0.0 && ps[1].velocity.x > 0.0);
    assert!((ps[0].velocity + ps[1].velocity).length() < 1e-4);
}

/// Radius and colour survive any number of frames untouched.
#[test]
fn radius_and_color_never_change() {
    let mut storage = ParticleStorage::init(&seeded(2024));
    let before: Vec<(f32, Color32)> = storage.as_slice().iter().map(|p| (p.radius, p.color)).collect();

    let bounds = SimulationParams::default().bounds();
    for _ in 0..500 {
        update_particles(storage.as_mut_slice(), bounds);
    }

    let after: Vec<(f32, Color32)> = storage.as_slice().iter().map(|p| (p.radius, p.color)).collect();
    assert_eq!(before, after);
    assert_eq!(storage.len(), 50);
}

/// One pairwise application leaves the summed velocity unchanged.
#[test]
fn pairwise_response_conserves_summed_velocity() {
    let storage = ParticleStorage::init(&seeded(5));
    let ps = storage.as_slice();
    let mut hits = 0;

    for i in 0..ps.len() {
        for j in 0..ps.len() {
            if i == j {
                continue;
            }
            let (mut a, mut b) = (ps[i], ps[j]);
            // Force overlap by moving b next to a.
            b.position = a.position + Vec2::new(1.0, 0.5);
            let sum_before = a.velocity + b.velocity;
            let delta = collide(&mut a, &mut b).expect("forced overlap");
            assert_eq!(a.velocity, ps[i].velocity - delta);
            assert_eq!(b.velocity, ps[j].velocity + delta);
            assert!(((a.velocity + b.velocity) - sum_before).length() < 1e-4);
            hits += 1;
        }
    }
    assert_eq!(hits, 50 * 49);
}
