//! Particle collision demo.

mod app;
mod frame_counter;
mod particle;
mod physics;

pub use app::{ParticleApp, WINDOW_TITLE, draw_particles, native_options, run};
pub use frame_counter::FrameCounter;
pub use particle::{Particle, ParticleStorage};
pub use physics::{collide, update_particles};

use eframe::epaint::Vec2;

// ===================================================================================
// Default Constants
// ===================================================================================

const DEFAULT_WIDTH: f32 = 800.0;
const DEFAULT_HEIGHT: f32 = 600.0;
const DEFAULT_NUM_PARTICLES: usize = 50;
const DEFAULT_MIN_RADIUS: i32 = 5;
const DEFAULT_MAX_RADIUS: i32 = 15;
const DEFAULT_MAX_SPEED: i32 = 3;
const DEFAULT_MIN_CHANNEL: u8 = 50;
const DEFAULT_TARGET_FPS: u32 = 60;

// ===================================================================================
// Simulation Parameters
// ===================================================================================

/// Configuration for one run of the particle demo.
#[derive(Clone, Debug)]
pub struct SimulationParams {
    /// Canvas width, also the right-hand wall.
    pub width: f32,
    /// Canvas height, also the bottom wall.
    pub height: f32,
    pub num_particles: usize,
    /// Radii are drawn as whole numbers from `min_radius..=max_radius`.
    pub min_radius: i32,
    pub max_radius: i32,
    /// Each initial velocity component is a whole number in `-max_speed..=max_speed`.
    pub max_speed: i32,
    /// Lower bound for each of the red, green and blue channels.
    pub min_channel: u8,
    pub target_fps: u32,
    /// Fixed RNG seed; `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl SimulationParams {
    /// The walls as a vector, `(width, height)`.
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        SimulationParams {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            num_particles: DEFAULT_NUM_PARTICLES,
            min_radius: DEFAULT_MIN_RADIUS,
            max_radius: DEFAULT_MAX_RADIUS,
            max_speed: DEFAULT_MAX_SPEED,
            min_channel: DEFAULT_MIN_CHANNEL,
            target_fps: DEFAULT_TARGET_FPS,
            seed: None,
        }
    }
}
