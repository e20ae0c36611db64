//! Function plotter demo.

mod app;
mod cli;
mod expression;
mod grid;
mod sample;
mod surface;

pub use app::{PlotterApp, WINDOW_TITLE, native_options, render_surface, run};
pub use cli::{Command, parse_args};
pub use expression::{CompiledExpression, ExpressionCompiler, MevalCompiler};
pub use grid::{draw_axes, draw_grid};
pub use sample::{FREE_VARIABLE, draw_expression, plot_points};
pub use surface::Surface;

use eframe::egui::Color32;

// ===================================================================================
// Default Constants
// ===================================================================================

const DEFAULT_WIDTH: usize = 800;
const DEFAULT_HEIGHT: usize = 600;
const DEFAULT_GRID_SPACING: usize = 50;
const DEFAULT_SCALE: f64 = 50.0;
const DEFAULT_STEP: f64 = 0.1;
const DEFAULT_THICKNESS: u32 = 3;

// ===================================================================================
// Plot Parameters
// ===================================================================================

/// Layout and colours of the rendered plot.
#[derive(Clone, Debug)]
pub struct PlotParams {
    pub width: usize,
    pub height: usize,
    pub grid_spacing: usize,
    /// Pixels per unit on both axes.
    pub scale: f64,
    /// Horizontal distance between samples, in pixels.
    pub step: f64,
    /// Side of the square painted for each sample, in pixels.
    pub thickness: u32,
    pub background: Color32,
    pub grid_color: Color32,
    pub axis_color: Color32,
    pub plot_color: Color32,
}

impl Default for PlotParams {
    fn default() -> Self {
        PlotParams {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            grid_spacing: DEFAULT_GRID_SPACING,
            scale: DEFAULT_SCALE,
            step: DEFAULT_STEP,
            thickness: DEFAULT_THICKNESS,
            background: Color32::WHITE,
            grid_color: Color32::from_rgb(211, 211, 211),
            axis_color: Color32::from_rgb(255, 0, 0),
            plot_color: Color32::BLACK,
        }
    }
}
