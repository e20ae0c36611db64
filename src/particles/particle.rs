use eframe::egui::Color32;
use eframe::epaint::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::SimulationParams;

/// A single disc in the simulation.
///
/// `radius` and `color` are fixed at construction; only the update step
/// touches `position` and `velocity`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: Color32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, color: Color32) -> Self {
        Self {
            position,
            velocity,
            radius,
            color,
        }
    }
}

// ===================================================================================
// Particle Storage
// ===================================================================================

/// Owns every particle of a run.
///
/// The collection is filled once and never grows or shrinks afterwards, so
/// callers only get slices and index into them.
#[derive(Clone, Debug)]
pub struct ParticleStorage {
    particles: Vec<Particle>,
}

impl ParticleStorage {
    /// Populates a new storage with `params.num_particles` random particles.
    ///
    /// Radii, positions, velocities and colour channels are all whole numbers,
    /// positions are chosen so that every disc starts fully inside the canvas.
    pub fn init(params: &SimulationParams) -> Self {
        let mut rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut particles = Vec::with_capacity(params.num_particles);
        for _ in 0..params.num_particles {
            let r = rng.random_range(params.min_radius..=params.max_radius);

            // random position, edge to edge
            let x = rng.random_range(r..=(params.width as i32 - r));
            let y = rng.random_range(r..=(params.height as i32 - r));

            // random velocity, per axis
            let vx = rng.random_range(-params.max_speed..=params.max_speed);
            let vy = rng.random_range(-params.max_speed..=params.max_speed);

            let red = rng.random_range(params.min_channel..=u8::MAX);
            let green = rng.random_range(params.min_channel..=u8::MAX);
            let blue = rng.random_range(params.min_channel..=u8::MAX);

            particles.push(Particle::new(
                Vec2::new(x as f32, y as f32),
                Vec2::new(vx as f32, vy as f32),
                r as f32,
                Color32::from_rgb(red, green, blue),
            ));
        }

        log::debug!("initialised {} particles", particles.len());
        Self { particles }
    }

    /// Wraps an existing set of particles, mostly useful for scripted scenes.
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn as_mut_slice(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}
