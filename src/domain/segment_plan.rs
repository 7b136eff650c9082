use super::TimeWindow;

/// Equal-width partition of a clip into `count` windows.
///
/// Width is `floor(units / count)` where `units` is the clip length measured in
/// `unit_ms` steps. Whatever does not fit in `count * width` is dropped from the
/// tail and reported by [`SegmentPlan::dropped_ms`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentPlan {
    total_ms: u64,
    width_ms: u64,
    windows: Vec<TimeWindow>,
}

impl SegmentPlan {
    /// Returns `None` when `count` is zero.
    pub fn new(total_ms: u64, count: usize, unit_ms: u64) -> Option<Self> {
        if count == 0 {
            return None;
        }

        let unit_ms = unit_ms.max(1);
        let width_units = (total_ms / unit_ms) / count as u64;
        let width_ms = width_units * unit_ms;

        let windows = (0..count as u64)
            .map(|i| TimeWindow::new(i * width_ms, (i + 1) * width_ms))
            .collect();

        Some(Self {
            total_ms,
            width_ms,
            windows,
        })
    }

    pub fn windows(&self) -> &[TimeWindow] {
        &self.windows
    }

    pub fn count(&self) -> usize {
        self.windows.len()
    }

    pub fn width_ms(&self) -> u64 {
        self.width_ms
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ms
    }

    pub fn covered_ms(&self) -> u64 {
        self.width_ms * self.windows.len() as u64
    }

    pub fn dropped_ms(&self) -> u64 {
        self.total_ms - self.covered_ms()
    }
}
