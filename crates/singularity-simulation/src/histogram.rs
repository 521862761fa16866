//! Detector screen histogram

use singularity_physics::SCREEN_ROWS;

/// Hit counts per screen row. The length always equals the screen height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionHistogram {
    counts: Vec<u32>,
}

impl Default for DetectionHistogram {
    fn default() -> Self {
        Self::new(SCREEN_ROWS)
    }
}

impl DetectionHistogram {
    pub fn new(rows: usize) -> Self {
        Self {
            counts: vec![0; rows],
        }
    }

    /// Count a hit at height `y`. Returns the row, or `None` if `y` misses
    /// the screen.
    pub fn record(&mut self, y: f32) -> Option<usize> {
        if !y.is_finite() {
            return None;
        }
        let row = y.floor();
        if row < 0.0 || row >= self.counts.len() as f32 {
            return None;
        }
        let row = row as usize;
        self.counts[row] += 1;
        Some(row)
    }

    pub fn reset(&mut self) {
        self.counts.fill(0);
    }

    pub fn rows(&self) -> usize {
        self.counts.len()
    }

    pub fn count(&self, row: usize) -> u32 {
        self.counts.get(row).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Tallest bar, never below 1 so intensities stay finite
    pub fn peak(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0).max(1)
    }

    /// Each row's count relative to the tallest bar, in `[0, 1]`
    pub fn intensities(&self) -> impl Iterator<Item = f32> + '_ {
        let peak = self.peak() as f32;
        self.counts.iter().map(move |&count| count as f32 / peak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_matches_screen() {
        let histogram = DetectionHistogram::default();
        assert_eq!(histogram.rows(), SCREEN_ROWS);
        assert_eq!(histogram.total(), 0);
    }

    #[test]
    fn test_record_floors_and_bounds() {
        let mut histogram = DetectionHistogram::new(10);
        assert_eq!(histogram.record(3.7), Some(3));
        assert_eq!(histogram.record(0.0), Some(0));
        assert_eq!(histogram.record(-0.1), None);
        assert_eq!(histogram.record(10.0), None);
        assert_eq!(histogram.record(f32::NAN), None);
        assert_eq!(histogram.total(), 2);
    }

    #[test]
    fn test_intensity_relative_to_peak() {
        let mut histogram = DetectionHistogram::new(4);
        histogram.record(1.0);
        histogram.record(1.5);
        histogram.record(2.0);
        assert_eq!(histogram.peak(), 2);
        let intensities: Vec<f32> = histogram.intensities().collect();
        assert_eq!(intensities, vec![0.0, 1.0, 0.5, 0.0]);
    }

    #[test]
    fn test_reset_zeroes_counts() {
        let mut histogram = DetectionHistogram::new(4);
        histogram.record(1.0);
        histogram.reset();
        assert_eq!(histogram.total(), 0);
        assert_eq!(histogram.rows(), 4);
        assert!(histogram.intensities().all(|intensity| intensity == 0.0));
    }
}
