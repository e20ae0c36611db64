use super::{PlotParams, Surface};

/// One-pixel grid lines every `grid_spacing` pixels, starting at the top-left
/// corner.
pub fn draw_grid(surface: &mut Surface, params: &PlotParams) {
    let (w, h) = (params.width as i64, params.height as i64);
    let spacing = params.grid_spacing.max(1);

    for x in (0..w).step_by(spacing) {
        surface.fill_rect(x, 0, 1, h, params.grid_color);
    }
    for y in (0..h).step_by(spacing) {
        surface.fill_rect(0, y, w, 1, params.grid_color);
    }
}

/// X and Y axes through the canvas center.
pub fn draw_axes(surface: &mut Surface, params: &PlotParams) {
    let (w, h) = (params.width as i64, params.height as i64);
    surface.fill_rect(0, h / 2, w, 1, params.axis_color);
    surface.fill_rect(w / 2, 0, 1, h, params.axis_color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::Color32;

    fn blank(params: &PlotParams) -> Surface {
        let mut s = Surface::new(params.width, params.height);
        s.fill(params.background);
        s
    }

    #[test]
    fn grid_lines_every_fifty_pixels() {
        let params = PlotParams::default();
        let mut s = blank(&params);
        draw_grid(&mut s, &params);

        let grid = params.grid_color;
        assert_eq!(s.pixel(0, 17), Some(grid));
        assert_eq!(s.pixel(50, 17), Some(grid));
        assert_eq!(s.pixel(750, 599), Some(grid));
        assert_eq!(s.pixel(17, 550), Some(grid));
        assert_eq!(s.pixel(51, 17), Some(Color32::WHITE));
        assert_eq!(s.pixel(799, 599), Some(Color32::WHITE));
    }

    #[test]
    fn axes_cross_at_center() {
        let params = PlotParams::default();
        let mut s = blank(&params);
        draw_grid(&mut s, &params);
        draw_axes(&mut s, &params);

        let red = params.axis_color;
        assert_eq!(s.pixel(0, 300), Some(red));
        assert_eq!(s.pixel(799, 300), Some(red));
        assert_eq!(s.pixel(400, 0), Some(red));
        assert_eq!(s.pixel(400, 599), Some(red));
        assert_eq!(s.pixel(401, 301), Some(Color32::WHITE));
    }
}
