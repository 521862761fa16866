//! Slit panel geometry

use crate::constants::*;

/// Number of apertures in the slit panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlitCount {
    Single,
    #[default]
    Double,
}

impl SlitCount {
    pub fn count(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Double => 2,
        }
    }
}

/// One aperture, described by its vertical center and opening height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slit {
    pub center_y: f32,
    pub height: f32,
}

impl Slit {
    pub fn top(&self) -> f32 {
        self.center_y - self.height / 2.0
    }

    /// Open interval, the panel edges absorb
    pub fn contains(&self, y: f32) -> bool {
        y > self.top() && y < self.center_y + self.height / 2.0
    }
}

/// Apertures of the slit panel, ordered top to bottom
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlitLayout {
    slits: [Slit; 2],
    count: SlitCount,
}

impl SlitLayout {
    /// A single slit is centered on the source axis. Two slits sit
    /// `separation` apart, measured between their inner edges.
    pub fn new(count: SlitCount, width: f32, separation: f32) -> Self {
        let center_y = EXPERIMENT_HEIGHT / 2.0;
        let slits = match count {
            SlitCount::Single => {
                let slit = Slit {
                    center_y,
                    height: width,
                };
                [slit, slit]
            }
            SlitCount::Double => [
                Slit {
                    center_y: center_y - separation / 2.0 - width / 2.0,
                    height: width,
                },
                Slit {
                    center_y: center_y + separation / 2.0 + width / 2.0,
                    height: width,
                },
            ],
        };

        Self { slits, count }
    }

    pub fn slits(&self) -> &[Slit] {
        &self.slits[..self.count.count()]
    }

    pub fn count(&self) -> SlitCount {
        self.count
    }

    /// Centers of the two slits, if there are two
    pub fn pair_centers(&self) -> Option<(f32, f32)> {
        match self.count {
            SlitCount::Single => None,
            SlitCount::Double => Some((self.slits[0].center_y, self.slits[1].center_y)),
        }
    }

    /// Index of the aperture containing `y`, if any
    pub fn slit_at(&self, y: f32) -> Option<usize> {
        self.slits().iter().position(|slit| slit.contains(y))
    }
}

/// Whether `x` lies within the slit panel
pub fn within_slit_panel(x: f32) -> bool {
    (SLIT_PANEL_X..=SLIT_PANEL_X + SLIT_PANEL_THICKNESS).contains(&x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_slit_centered() {
        let layout = SlitLayout::new(SlitCount::Single, 20.0, 100.0);
        assert_eq!(layout.slits().len(), 1);
        assert_eq!(layout.slit_at(300.0), Some(0));
        assert_eq!(layout.slit_at(309.9), Some(0));
        assert_eq!(layout.slit_at(310.0), None);
        assert_eq!(layout.pair_centers(), None);
    }

    #[test]
    fn test_double_slit_positions() {
        let layout = SlitLayout::new(SlitCount::Double, 20.0, 100.0);
        assert_eq!(layout.pair_centers(), Some((240.0, 360.0)));
        assert_eq!(layout.slit_at(240.0), Some(0));
        assert_eq!(layout.slit_at(360.0), Some(1));
        // Between the slits is solid panel
        assert_eq!(layout.slit_at(300.0), None);
        assert_eq!(layout.slits()[0].top(), 230.0);
    }

    #[test]
    fn test_panel_extent() {
        assert!(!within_slit_panel(349.9));
        assert!(within_slit_panel(350.0));
        assert!(within_slit_panel(360.0));
        assert!(!within_slit_panel(360.1));
    }
}
