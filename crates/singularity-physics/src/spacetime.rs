//! Spacetime around a black hole
//!
//! The funnel depth is a visual heuristic: a flat throat, a steep power-law
//! transition and a gentle outer slope, all scaled linearly with mass. The
//! horizon readouts use real constants.

use crate::constants::*;

/// Depth of the warped grid at radial distance `distance` from the center.
///
/// `extent` is the half-size of the grid; the outer slope is normalized
/// against it so the rim sits at `-0.1 * mass`.
pub fn funnel_depth(mass: f32, distance: f32, extent: f32) -> f32 {
    if distance < THROAT_RADIUS {
        -mass * THROAT_DEPTH
    } else if distance < TRANSITION_RADIUS {
        let normalized = (distance - THROAT_RADIUS) / (TRANSITION_RADIUS - THROAT_RADIUS);
        -mass * (THROAT_DEPTH - 7.0 * normalized.powf(0.6))
    } else {
        let span = extent - TRANSITION_RADIUS;
        let normalized = if span > 0.0 {
            ((distance - TRANSITION_RADIUS) / span).min(1.0)
        } else {
            1.0
        };
        -mass * (1.0 - 0.9 * normalized.sqrt())
    }
}

/// Radius of the marker sphere sitting at the bottom of the funnel
pub fn horizon_marker_radius(mass: f32) -> f32 {
    (mass * 0.15).max(0.3)
}

/// Event horizon radius in metres for `solar_masses`
pub fn schwarzschild_radius(solar_masses: f64) -> f64 {
    2.0 * G * solar_masses * SOLAR_MASS_KG / (C * C)
}

/// Kretschmann-like curvature magnitude (m⁻⁴) just outside the horizon.
///
/// K = 48 G² M² / (c⁴ r⁶), evaluated at 1.1 r_s. Returns 0 when the
/// observation distance degenerates.
pub fn horizon_curvature(solar_masses: f64) -> f64 {
    let mass_kg = solar_masses * SOLAR_MASS_KG;
    let observation_distance = schwarzschild_radius(solar_masses) * OBSERVATION_RADIUS_FACTOR;

    if !observation_distance.is_finite() || observation_distance <= 0.0 {
        return 0.0;
    }

    let curvature = 48.0 * G * G * mass_kg * mass_kg
        / (C.powi(4) * observation_distance.powi(6));

    if curvature.is_finite() {
        curvature
    } else {
        0.0
    }
}

/// Readouts derived from the black hole mass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizonMetrics {
    pub solar_masses: f64,
    /// Schwarzschild radius in metres
    pub schwarzschild_radius: f64,
    /// Curvature at 1.1 r_s in m⁻⁴
    pub curvature: f64,
}

impl HorizonMetrics {
    pub fn new(solar_masses: f64) -> Self {
        Self {
            solar_masses,
            schwarzschild_radius: schwarzschild_radius(solar_masses),
            curvature: horizon_curvature(solar_masses),
        }
    }

    pub fn schwarzschild_radius_km(&self) -> f64 {
        self.schwarzschild_radius / 1000.0
    }

    /// e.g. `"14.8 km"`, at most one fractional digit
    pub fn format_radius(&self) -> String {
        let km = format!("{:.1}", self.schwarzschild_radius_km());
        let km = km.strip_suffix(".0").unwrap_or(&km);
        format!("{km} km")
    }

    /// e.g. `"1.52e-16 m⁻⁴"`
    pub fn format_curvature(&self) -> String {
        format!("{:.2e} m⁻⁴", self.curvature)
    }

    /// Curvature large enough that the field equations stop being useful
    pub fn is_extreme(&self) -> bool {
        self.curvature > EXTREME_CURVATURE
    }
}

/// Equation shown for the current mass bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEquation {
    /// mass <= 5
    Einstein,
    /// 5 < mass <= 10
    CosmologicalConstant,
    /// mass > 10
    Schwarzschild,
}

impl FieldEquation {
    pub fn for_mass(mass: f32) -> Self {
        if mass <= 5.0 {
            Self::Einstein
        } else if mass <= 10.0 {
            Self::CosmologicalConstant
        } else {
            Self::Schwarzschild
        }
    }

    /// TeX source handed to the typesetter
    pub fn latex(self) -> &'static str {
        match self {
            Self::Einstein => {
                r"R_{\mu\nu} - \frac{1}{2}R g_{\mu\nu} = \frac{8\pi G}{c^4}T_{\mu\nu}"
            }
            Self::CosmologicalConstant => {
                r"R_{\mu\nu} - \frac{1}{2}R g_{\mu\nu} + \Lambda g_{\mu\nu} = \frac{8\pi G}{c^4}T_{\mu\nu}"
            }
            Self::Schwarzschild => r"g_{tt} = -\left(1-\frac{2GM}{c^2r}\right)",
        }
    }

    pub fn explanation(self) -> &'static str {
        match self {
            Self::Einstein => "Einstein's Field Equations: Describe how mass curves spacetime",
            Self::CosmologicalConstant => {
                "Field Equations with Cosmological Constant: Increasing curvature effects"
            }
            Self::Schwarzschild => {
                "Schwarzschild Metric: Approaching the event horizon as mass increases"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EXTENT: f32 = GRID_SIZE / 2.0;

    #[test]
    fn test_depth_at_center() {
        for step in 0..=140 {
            let mass = 1.0 + step as f32 * 0.1;
            assert_eq!(funnel_depth(mass, 0.0, EXTENT), -mass * 8.0);
        }
    }

    #[test]
    fn test_depth_continuous_at_zone_boundaries() {
        for mass in [1.0, 5.0, 7.3, 15.0] {
            let inner = -mass * 8.0;
            let at_throat = funnel_depth(mass, THROAT_RADIUS, EXTENT);
            assert_relative_eq!(at_throat, inner, epsilon = 1e-4);

            let below = funnel_depth(mass, TRANSITION_RADIUS - 1e-5, EXTENT);
            let at_transition = funnel_depth(mass, TRANSITION_RADIUS, EXTENT);
            assert_relative_eq!(below, at_transition, epsilon = 1e-3);
            assert_relative_eq!(at_transition, -mass, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_depth_rises_toward_rim() {
        let mass = 5.0;
        let mut previous = funnel_depth(mass, 0.0, EXTENT);
        for step in 1..=200 {
            let depth = funnel_depth(mass, step as f32 * 0.05, EXTENT);
            assert!(depth >= previous - 1e-5);
            previous = depth;
        }
        assert_relative_eq!(funnel_depth(mass, EXTENT, EXTENT), -0.5, epsilon = 1e-5);
        // Corners lie beyond the extent and stay at the rim depth
        assert_relative_eq!(funnel_depth(mass, 14.0, EXTENT), -0.5, epsilon = 1e-5);
    }

    #[test]
    fn test_degenerate_extent_is_finite() {
        let depth = funnel_depth(5.0, 4.0, 2.0);
        assert!(depth.is_finite());
        assert_relative_eq!(depth, -0.5, epsilon = 1e-5);
    }

    #[test]
    fn test_schwarzschild_radius_of_the_sun() {
        // ~2.95 km
        assert_relative_eq!(schwarzschild_radius(1.0), 2954.1, max_relative = 1e-3);
    }

    #[test]
    fn test_schwarzschild_radius_linear_in_mass() {
        for mass in [1.0, 2.5, 7.0] {
            assert_relative_eq!(
                schwarzschild_radius(2.0 * mass),
                2.0 * schwarzschild_radius(mass),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_curvature_falls_with_mass() {
        // K ∝ 1/M⁴ at a fixed multiple of r_s
        let light = horizon_curvature(1.0);
        let heavy = horizon_curvature(2.0);
        assert!(light > 0.0);
        assert_relative_eq!(light / heavy, 16.0, max_relative = 1e-9);
    }

    #[test]
    fn test_curvature_guarded_at_zero_mass() {
        assert_eq!(horizon_curvature(0.0), 0.0);
    }

    #[test]
    fn test_formatting() {
        let metrics = HorizonMetrics::new(5.0);
        assert_eq!(metrics.format_radius(), "14.8 km");
        assert!(metrics.format_curvature().ends_with(" m⁻⁴"));
        assert!(metrics.format_curvature().contains('e'));
        assert!(!metrics.is_extreme());
    }

    #[test]
    fn test_equation_brackets() {
        assert_eq!(FieldEquation::for_mass(1.0), FieldEquation::Einstein);
        assert_eq!(FieldEquation::for_mass(5.0), FieldEquation::Einstein);
        assert_eq!(FieldEquation::for_mass(5.1), FieldEquation::CosmologicalConstant);
        assert_eq!(FieldEquation::for_mass(10.0), FieldEquation::CosmologicalConstant);
        assert_eq!(FieldEquation::for_mass(10.1), FieldEquation::Schwarzschild);
        assert!(FieldEquation::Schwarzschild.latex().starts_with("g_{tt}"));
    }

    #[test]
    fn test_marker_radius_floor() {
        assert_eq!(horizon_marker_radius(1.0), 0.3);
        assert_relative_eq!(horizon_marker_radius(10.0), 1.5);
    }
}
