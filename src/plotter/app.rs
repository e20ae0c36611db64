use eframe::egui::{self, Color32, Rect, TextureHandle, TextureOptions};
use eframe::epaint::Pos2;

use super::{ExpressionCompiler, MevalCompiler, PlotParams, Surface, draw_axes, draw_expression, draw_grid};
use crate::error::Result;

pub const WINDOW_TITLE: &str = "Function Plotter";

pub fn native_options(params: &PlotParams) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([params.width as f32, params.height as f32])
            .with_resizable(false),
        ..Default::default()
    }
}

/// Rasterizes the whole plot: background, grid, axes, then the expression.
///
/// A bad expression is logged and only the plot itself is left out; the grid
/// and axes are always drawn.
pub fn render_surface(text: &str, compiler: &dyn ExpressionCompiler, params: &PlotParams) -> Surface {
    let mut surface = Surface::new(params.width, params.height);
    surface.fill(params.background);
    draw_grid(&mut surface, params);
    draw_axes(&mut surface, params);

    match draw_expression(&mut surface, compiler, text, params) {
        Ok(points) => log::info!("plotted `{text}` with {points} points"),
        Err(e) => log::error!("{e}"),
    }
    surface
}

/// Shows a pre-rendered plot.
///
/// The image is uploaded once; nothing requests further repaints, so the
/// window sits idle until the host delivers an event such as a close request.
pub struct PlotterApp {
    texture: TextureHandle,
}

impl PlotterApp {
    pub fn new(ctx: &egui::Context, surface: &Surface) -> Self {
        let texture = ctx.load_texture("plot", surface.to_color_image(), TextureOptions::NEAREST);
        Self { texture }
    }
}

impl eframe::App for PlotterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::WHITE))
            .show(ctx, |ui| {
                let origin = ui.max_rect().min;
                let rect = Rect::from_min_size(origin, self.texture.size_vec2());
                let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
                ui.painter().image(self.texture.id(), rect, uv, Color32::WHITE);
            });
    }
}

/// Opens the plot window for `expression` and blocks until it is closed.
pub fn run(expression: String, params: PlotParams) -> Result<()> {
    log::debug!("plotting `{expression}` on a {}x{} canvas", params.width, params.height);
    let options = native_options(&params);

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            let surface = render_surface(&expression, &MevalCompiler, &params);
            Ok(Box::new(PlotterApp::new(&cc.egui_ctx, &surface)))
        }),
    )?;
    Ok(())
}
