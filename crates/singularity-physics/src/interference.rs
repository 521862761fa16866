//! Two-slit interference
//!
//! The detection probability at a screen point is cos²(Δφ/2), where the phase
//! difference comes from the path-length difference between the two slits.
//! The result is scaled by [`INTERFERENCE_GAIN`], so values above 1 mean
//! "always accept".

use crate::constants::*;

/// Kind of particle fired at the slits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParticleKind {
    #[default]
    Electron,
    Photon,
}

impl ParticleKind {
    /// Effective wave number k (rad per canvas unit)
    pub fn wave_number(self) -> f32 {
        match self {
            Self::Electron => ELECTRON_WAVE_NUMBER,
            Self::Photon => PHOTON_WAVE_NUMBER,
        }
    }

    pub fn wavelength(self) -> f32 {
        std::f32::consts::TAU / self.wave_number()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Electron => "Electron",
            Self::Photon => "Photon",
        }
    }
}

/// Straight-line distance from a slit at height `slit_y` to the screen point
/// at height `screen_y`.
pub fn slit_to_screen_distance(slit_y: f32, screen_y: f32) -> f32 {
    let dx = SCREEN_X - SLIT_PANEL_X;
    let dy = screen_y - slit_y;
    (dx * dx + dy * dy).sqrt()
}

/// Path-length difference d2 - d1 for a screen point
pub fn path_difference(screen_y: f32, slit1_y: f32, slit2_y: f32) -> f32 {
    slit_to_screen_distance(slit2_y, screen_y) - slit_to_screen_distance(slit1_y, screen_y)
}

/// Scaled detection probability for a given path-length difference
pub fn interference_probability(wave_number: f32, path_difference: f32) -> f32 {
    let phase = wave_number * path_difference;
    let amplitude = (phase / 2.0).cos();
    amplitude * amplitude * INTERFERENCE_GAIN
}

/// Scaled detection probability for `kind` landing at `screen_y`
pub fn detection_probability(kind: ParticleKind, screen_y: f32, slit1_y: f32, slit2_y: f32) -> f32 {
    interference_probability(
        kind.wave_number(),
        path_difference(screen_y, slit1_y, slit2_y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_maximal_at_zero_path_difference() {
        for kind in [ParticleKind::Electron, ParticleKind::Photon] {
            assert_eq!(interference_probability(kind.wave_number(), 0.0), 3.0);
        }
    }

    #[test]
    fn test_periodic_in_path_difference() {
        for kind in [ParticleKind::Electron, ParticleKind::Photon] {
            let k = kind.wave_number();
            let period = kind.wavelength();
            for step in 0..50 {
                let delta = step as f32 * 0.37;
                assert_relative_eq!(
                    interference_probability(k, delta),
                    interference_probability(k, delta + period),
                    epsilon = 1e-4
                );
            }
        }
    }

    #[test]
    fn test_dark_fringe_at_half_wavelength() {
        let k = ParticleKind::Electron.wave_number();
        let half = ParticleKind::Electron.wavelength() / 2.0;
        assert_relative_eq!(interference_probability(k, half), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_symmetric_midpoint_is_bright() {
        // Equidistant from both slits
        let probability = detection_probability(ParticleKind::Photon, 300.0, 240.0, 360.0);
        assert_relative_eq!(probability, 3.0, epsilon = 1e-5);
    }

    #[test]
    fn test_path_difference_sign() {
        // Closer to slit 2 means d2 < d1
        assert!(path_difference(400.0, 240.0, 360.0) < 0.0);
        assert!(path_difference(200.0, 240.0, 360.0) > 0.0);
    }
}
