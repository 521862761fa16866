//! Parameter store of the black hole scene

use singularity_physics::{FieldEquation, HorizonMetrics};

use crate::params::DEFAULT_MASS;

/// Parameter store of the black hole scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackHoleState {
    mass: f32,
    metrics: HorizonMetrics,
    equation: FieldEquation,
}

impl Default for BlackHoleState {
    fn default() -> Self {
        Self::new(DEFAULT_MASS)
    }
}

impl BlackHoleState {
    pub fn new(mass: f32) -> Self {
        Self {
            mass,
            metrics: HorizonMetrics::new(mass as f64),
            equation: FieldEquation::for_mass(mass),
        }
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn set_mass(&mut self, mass: f32) {
        *self = Self::new(mass);
    }

    pub fn metrics(&self) -> &HorizonMetrics {
        &self.metrics
    }

    pub fn equation(&self) -> FieldEquation {
        self.equation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_mass_recomputes() {
        let mut state = BlackHoleState::default();
        assert_eq!(state.equation(), FieldEquation::Einstein);
        let small_radius = state.metrics().schwarzschild_radius;

        state.set_mass(12.0);
        assert_eq!(state.mass(), 12.0);
        assert_eq!(state.equation(), FieldEquation::Schwarzschild);
        assert!(state.metrics().schwarzschild_radius > small_radius);
    }
}
