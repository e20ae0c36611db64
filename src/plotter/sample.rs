use crate::error::Result;

use super::{CompiledExpression, ExpressionCompiler, PlotParams, Surface};

/// Name of the free variable expressions are written in.
pub const FREE_VARIABLE: &str = "x";

/// Compiles `text` and plots it onto `surface`.
///
/// Returns the number of points painted. A compile failure leaves the surface
/// untouched.
pub fn draw_expression(
    surface: &mut Surface,
    compiler: &dyn ExpressionCompiler,
    text: &str,
    params: &PlotParams,
) -> Result<usize> {
    let expr = compiler.compile(text, FREE_VARIABLE)?;
    Ok(plot_points(surface, &expr, params))
}

/// Samples `expr` across the full width of the canvas and paints a small
/// square for every sample that lands inside the visible rows.
///
/// Samples are not joined, so steep sections show up as a dotted trace.
/// Non-finite values fail the row check and are skipped.
pub fn plot_points(surface: &mut Surface, expr: &CompiledExpression, params: &PlotParams) -> usize {
    let half_w = params.width as f64 / 2.0;
    let half_h = (params.height / 2) as f64;
    let thickness = params.thickness as i64;
    let samples = (params.width as f64 / params.step).round() as usize;

    let mut painted = 0;
    for k in 0..samples {
        let offset = -half_w + k as f64 * params.step;
        let y = expr.evaluate(offset / params.scale);

        let screen_y = half_h - (y * params.scale).trunc();
        if !(screen_y >= 0.0 && screen_y < params.height as f64) {
            continue;
        }
        let screen_x = (offset + half_w).trunc() as i64;
        let screen_y = screen_y as i64;

        surface.fill_rect(
            screen_x - thickness / 2,
            screen_y - thickness / 2,
            thickness,
            thickness,
            params.plot_color,
        );
        painted += 1;
    }

    log::debug!("plotted {painted} of {samples} samples");
    painted
}
