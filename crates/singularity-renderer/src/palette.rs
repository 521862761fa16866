//! Scene colors
//!
//! Chrome (backgrounds, panels, text) comes from Catppuccin Mocha. Particle
//! and histogram colors are fixed per particle kind.

use catppuccin::PALETTE;
use singularity_physics::{ParticleKind, Rgba};

fn mocha(color: &catppuccin::Color) -> Rgba {
    Rgba::opaque(color.rgb.r, color.rgb.g, color.rgb.b)
}

pub fn background() -> Rgba {
    mocha(&PALETTE.mocha.colors.crust)
}

pub fn slit_panel() -> Rgba {
    mocha(&PALETTE.mocha.colors.surface1)
}

pub fn detector_screen() -> Rgba {
    mocha(&PALETTE.mocha.colors.surface0)
}

pub fn label() -> Rgba {
    mocha(&PALETTE.mocha.colors.text)
}

/// Clear color of the 3D scene, in linear space
pub fn clear_color() -> wgpu::Color {
    let [r, g, b, a] = background().to_linear();
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    }
}

pub fn particle(kind: ParticleKind) -> Rgba {
    match kind {
        ParticleKind::Electron => Rgba::from_hex(0x00AAFF, 1.0),
        ParticleKind::Photon => Rgba::from_hex(0xFFAA00, 1.0),
    }
}

/// Bar color for a histogram row at `intensity` in `[0, 1]`
pub fn histogram_bar(kind: ParticleKind, intensity: f32) -> Rgba {
    let ramp = (intensity * 255.0).floor().clamp(0.0, 255.0) as u8;
    match kind {
        ParticleKind::Electron => Rgba::new(0, ramp, 255, 0.8),
        ParticleKind::Photon => Rgba::new(255, ramp, 0, 0.8),
    }
}

pub const FUNNEL_GRID: Rgba = Rgba::from_hex(0x3498db, 0.8);
pub const FUNNEL_RINGS: Rgba = Rgba::from_hex(0x3498db, 0.5);
pub const HORIZON: Rgba = Rgba::from_hex(0xf39c12, 1.0);
pub const HORIZON_GLOW: Rgba = Rgba::from_hex(0xf39c12, 0.3);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_ramp() {
        assert_eq!(
            histogram_bar(ParticleKind::Electron, 1.0),
            Rgba::new(0, 255, 255, 0.8)
        );
        assert_eq!(
            histogram_bar(ParticleKind::Photon, 0.5),
            Rgba::new(255, 127, 0, 0.8)
        );
    }

    #[test]
    fn test_chrome_is_opaque() {
        assert_eq!(background().a, 1.0);
        assert_ne!(background(), label());
    }
}
