const DEFAULT_WINDOW: usize = 30;

/// Rolling frames-per-second estimate over the most recent frame times.
///
/// Frame durations go into a ring buffer; the reported rate is the number of
/// stored frames divided by their total duration.
#[derive(Clone, Debug)]
pub struct FrameCounter {
    ring: Vec<f32>,
    index: usize,
    stored: usize,
}

impl FrameCounter {
    pub fn new(window: usize) -> Self {
        Self {
            ring: vec![0.0; window.max(1)],
            index: 0,
            stored: 0,
        }
    }

    /// Records one frame that took `dt` seconds. Non-positive or non-finite
    /// durations are ignored.
    pub fn push(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.ring[self.index] = dt;
        self.index = (self.index + 1) % self.ring.len();
        if self.stored < self.ring.len() {
            self.stored += 1;
        }
    }

    /// Whole frames per second, 0 until the first frame is recorded.
    pub fn fps(&self) -> u32 {
        let total: f32 = self.ring[..self.stored].iter().sum();
        if total <= 0.0 {
            return 0;
        }
        (self.stored as f32 / total).round() as u32
    }
}

impl Default for FrameCounter {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}
