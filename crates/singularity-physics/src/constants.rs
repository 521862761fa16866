//! Physical constants and scene geometry
//!
//! The SI constants are used for the horizon readouts only. The remaining
//! values are scene units chosen for a readable visualization.

// Physical constants (SI)

/// Gravitational constant (m³ kg⁻¹ s⁻²)
pub const G: f64 = 6.6743e-11;

/// Speed of light (m/s)
pub const C: f64 = 299_792_458.0;

/// Mass of the sun (kg)
pub const SOLAR_MASS_KG: f64 = 1.989e30;

/// Curvature is sampled this many Schwarzschild radii from the center,
/// just outside the horizon.
pub const OBSERVATION_RADIUS_FACTOR: f64 = 1.1;

/// Curvature above this value (m⁻⁴) is reported as extreme
pub const EXTREME_CURVATURE: f64 = 1.0e30;

// Cosmic expansion

/// Last point of the cosmic timeline
pub const TIMELINE_END: f32 = 100.0;

/// Fraction of the half-canvas the universe may fill
pub const MAX_RADIUS_FRACTION: f32 = 0.9;

/// Stars appear from this point of the timeline
pub const STAR_ERA_START: f32 = 70.0;

/// Upper bound on drawn stars
pub const MAX_STARS: usize = 500;

/// Galaxies appear from this point of the timeline
pub const GALAXY_ERA_START: f32 = 80.0;

// Spacetime funnel

/// Side length of the warped grid (scene units)
pub const GRID_SIZE: f32 = 20.0;

/// Grid cells along each side
pub const GRID_DIVISIONS: u32 = 20;

/// Inside this radius the funnel bottoms out
pub const THROAT_RADIUS: f32 = 0.5;

/// End of the steep transition zone
pub const TRANSITION_RADIUS: f32 = 3.0;

/// Depth multiplier at the throat (depth = -mass * THROAT_DEPTH)
pub const THROAT_DEPTH: f32 = 8.0;

// Double slit experiment (canvas units)

pub const EXPERIMENT_WIDTH: f32 = 800.0;
pub const EXPERIMENT_HEIGHT: f32 = 600.0;

/// Rows of the detector screen, one histogram bin per canvas row
pub const SCREEN_ROWS: usize = EXPERIMENT_HEIGHT as usize;

pub const SOURCE_X: f32 = 100.0;
pub const SOURCE_Y: f32 = EXPERIMENT_HEIGHT / 2.0;

/// Left edge of the slit panel
pub const SLIT_PANEL_X: f32 = 350.0;

/// Thickness of the slit panel
pub const SLIT_PANEL_THICKNESS: f32 = 10.0;

/// Detector screen position
pub const SCREEN_X: f32 = EXPERIMENT_WIDTH - 150.0;

/// Wave number for electrons (shorter effective wavelength)
pub const ELECTRON_WAVE_NUMBER: f32 = 0.5;

/// Wave number for photons
pub const PHOTON_WAVE_NUMBER: f32 = 0.2;

/// Gain applied to cos² so fringes show up with few particles.
/// Probabilities above 1 always accept.
pub const INTERFERENCE_GAIN: f32 = 3.0;
