use eframe::egui::{Color32, ColorImage};

/// An RGB pixel buffer the plot is rasterized into before it is shown.
///
/// Row 0 is the top of the image, matching screen coordinates.
#[derive(Clone, Debug)]
pub struct Surface {
    pub width: usize,
    pub height: usize,
    data: Vec<u8>,
}

impl Surface {
    /// A black surface of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * 3],
        }
    }

    pub fn fill(&mut self, color: Color32) {
        for px in self.data.chunks_exact_mut(3) {
            px.copy_from_slice(&[color.r(), color.g(), color.b()]);
        }
    }

    /// Fills the rectangle with top-left `(x, y)` and size `w` by `h`.
    ///
    /// The rectangle is clipped to the surface; parts outside it are dropped
    /// and a fully outside rectangle is a no-op.
    pub fn fill_rect(&mut self, x: i64, y: i64, w: i64, h: i64, color: Color32) {
        let x0 = x.clamp(0, self.width as i64) as usize;
        let y0 = y.clamp(0, self.height as i64) as usize;
        let x1 = x.saturating_add(w).clamp(0, self.width as i64) as usize;
        let y1 = y.saturating_add(h).clamp(0, self.height as i64) as usize;

        for row in y0..y1 {
            let start = (row * self.width + x0) * 3;
            let end = (row * self.width + x1) * 3;
            for px in self.data[start..end].chunks_exact_mut(3) {
                px.copy_from_slice(&[color.r(), color.g(), color.b()]);
            }
        }
    }

    /// The colour at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 3;
        Some(Color32::from_rgb(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgb([self.width, self.height], &self.data)
    }
}
