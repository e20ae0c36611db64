use std::time::Duration;

use eframe::egui::{self, Align2, Color32, FontId};
use eframe::epaint::{Pos2, Vec2};

use super::{FrameCounter, Particle, ParticleStorage, SimulationParams, update_particles};
use crate::error::Result;

pub const WINDOW_TITLE: &str = "Particle Collision Simulation";

const BACKGROUND: Color32 = Color32::BLACK;
const FPS_COLOR: Color32 = Color32::from_rgb(0, 158, 47);
const FPS_OFFSET: Vec2 = Vec2::new(5.0, 5.0);
const FPS_FONT_SIZE: f32 = 20.0;

/// Window options for a fixed-size, non-resizable canvas matching `params`.
pub fn native_options(params: &SimulationParams) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([params.width, params.height])
            .with_resizable(false),
        ..Default::default()
    }
}

/// The render loop state: the particles, the parameters they were created
/// with, and the frame-rate estimate shown in the corner.
pub struct ParticleApp {
    params: SimulationParams,
    particles: ParticleStorage,
    frames: FrameCounter,
}

impl ParticleApp {
    pub fn new(params: SimulationParams) -> Self {
        let particles = ParticleStorage::init(&params);
        log::info!(
            "starting with {} particles on a {}x{} canvas",
            particles.len(),
            params.width,
            params.height
        );
        Self {
            params,
            particles,
            frames: FrameCounter::default(),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        self.particles.as_slice()
    }

    fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.params.target_fps.max(1)))
    }
}

/// Draws every particle as a filled circle, offset by the canvas origin.
pub fn draw_particles(painter: &egui::Painter, origin: Pos2, particles: &[Particle]) {
    for p in particles {
        painter.circle_filled(origin + p.position, p.radius, p.color);
    }
}

fn draw_fps(painter: &egui::Painter, origin: Pos2, fps: u32) {
    painter.text(
        origin + FPS_OFFSET,
        Align2::LEFT_TOP,
        format!("{fps} FPS"),
        FontId::monospace(FPS_FONT_SIZE),
        FPS_COLOR,
    );
}

impl eframe::App for ParticleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.frames.push(ctx.input(|i| i.unstable_dt));

        update_particles(self.particles.as_mut_slice(), self.params.bounds());

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND))
            .show(ctx, |ui| {
                let painter = ui.painter();
                let origin = ui.max_rect().min;

                draw_particles(painter, origin, self.particles.as_slice());
                draw_fps(painter, origin, self.frames.fps());
            });

        // Pace the loop; the host wakes us up again after one frame slot.
        ctx.request_repaint_after(self.frame_interval());
    }
}

/// Opens the simulation window and blocks until it is closed.
pub fn run(params: SimulationParams) -> Result<()> {
    let options = native_options(&params);
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(ParticleApp::new(params)))),
    )?;
    Ok(())
}
