//! Colors and gradient stops produced by the geometry functions

/// sRGB color with 8-bit channels and a fractional alpha, matching how the
/// scenes specify their palettes (`rgba(255, 100, 50, 0.8)`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0.0)
    }

    /// Build from a `0xRRGGBB` literal
    pub const fn from_hex(hex: u32, a: f32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
            a,
        )
    }

    /// Linear-space RGBA for GPU vertex colors on an sRGB surface
    pub fn to_linear(self) -> [f32; 4] {
        fn srgb_to_linear(c: u8) -> f32 {
            let x = c as f32 / 255.0;
            if x <= 0.04045 {
                x / 12.92
            } else {
                ((x + 0.055) / 1.055).powf(2.4)
            }
        }

        [
            srgb_to_linear(self.r),
            srgb_to_linear(self.g),
            srgb_to_linear(self.b),
            self.a.clamp(0.0, 1.0),
        ]
    }
}

/// One stop of a radial gradient. `offset` runs from 0 (center) to 1 (rim).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

impl ColorStop {
    pub const fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let c = Rgba::from_hex(0x3498db, 0.5);
        assert_eq!((c.r, c.g, c.b), (0x34, 0x98, 0xdb));
        assert_eq!(c.a, 0.5);
    }

    #[test]
    fn test_linear_endpoints() {
        assert_eq!(Rgba::opaque(0, 0, 0).to_linear(), [0.0, 0.0, 0.0, 1.0]);

        let white = Rgba::opaque(255, 255, 255).to_linear();
        for channel in &white[..3] {
            assert!((channel - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_linear_darkens_midtones() {
        let gray = Rgba::opaque(128, 128, 128).to_linear();
        assert!(gray[0] < 0.5);
    }
}
