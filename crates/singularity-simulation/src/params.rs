//! Slider-controlled parameters and their ranges

use singularity_physics::{ParticleKind, SlitCount, SlitLayout};

/// Range and granularity of a slider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl ParamRange {
    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

pub const TIME_RANGE: ParamRange = ParamRange::new(0.0, 100.0, 0.1);
pub const MASS_RANGE: ParamRange = ParamRange::new(1.0, 15.0, 0.1);
pub const SLIT_WIDTH_RANGE: ParamRange = ParamRange::new(5.0, 50.0, 1.0);
pub const SLIT_SEPARATION_RANGE: ParamRange = ParamRange::new(50.0, 200.0, 1.0);
pub const PARTICLE_COUNT_RANGE: ParamRange = ParamRange::new(100.0, 5000.0, 100.0);

pub const DEFAULT_TIME: f32 = 50.0;
pub const DEFAULT_MASS: f32 = 5.0;

/// How particles behave at the slits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BehaviorMode {
    /// No which-path information; double slits produce fringes
    #[default]
    Quantum,
    /// The slit is recorded and the particle is deflected; no fringes
    Classical,
}

impl BehaviorMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Quantum => "Quantum",
            Self::Classical => "Classical",
        }
    }
}

/// Controls of the double slit experiment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoubleSlitParams {
    pub particle_kind: ParticleKind,
    pub slit_count: SlitCount,
    pub slit_width: f32,
    /// Gap between the inner edges of the two slits
    pub slit_separation: f32,
    pub particle_count: u32,
    pub mode: BehaviorMode,
}

impl Default for DoubleSlitParams {
    fn default() -> Self {
        Self {
            particle_kind: ParticleKind::Electron,
            slit_count: SlitCount::Double,
            slit_width: 20.0,
            slit_separation: 100.0,
            particle_count: 2000,
            mode: BehaviorMode::Quantum,
        }
    }
}

impl DoubleSlitParams {
    pub fn slit_layout(&self) -> SlitLayout {
        SlitLayout::new(self.slit_count, self.slit_width, self.slit_separation)
    }

    /// Separation only means something with two slits
    pub fn separation_enabled(&self) -> bool {
        self.slit_count == SlitCount::Double
    }

    /// Interference applies only to quantum particles passing two slits
    pub fn interferes(&self) -> bool {
        self.mode == BehaviorMode::Quantum && self.slit_count == SlitCount::Double
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_within_ranges() {
        let params = DoubleSlitParams::default();
        assert!(SLIT_WIDTH_RANGE.contains(params.slit_width));
        assert!(SLIT_SEPARATION_RANGE.contains(params.slit_separation));
        assert!(PARTICLE_COUNT_RANGE.contains(params.particle_count as f32));
        assert!(TIME_RANGE.contains(DEFAULT_TIME));
        assert!(MASS_RANGE.contains(DEFAULT_MASS));
    }

    #[test]
    fn test_interference_needs_quantum_double_slit() {
        let mut params = DoubleSlitParams::default();
        assert!(params.interferes());

        params.mode = BehaviorMode::Classical;
        assert!(!params.interferes());

        params.mode = BehaviorMode::Quantum;
        params.slit_count = SlitCount::Single;
        assert!(!params.interferes());
        assert!(!params.separation_enabled());
    }
}
