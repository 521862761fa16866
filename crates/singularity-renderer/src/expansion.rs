//! Expanding universe painter

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use singularity_physics::{
    galaxy_count, max_render_radius, star_count, universe_radius, ColorStop, CosmicEra, Rgba,
    GALAXY_GRADIENT, MAX_STARS,
};

use crate::canvas::Canvas;
use crate::palette;

const STAR_SEED: u64 = 0x5741_5253;
const GALAXY_SEED: u64 = 0x4741_4c41;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Galaxy {
    pub position: Vec2,
    pub radius: f32,
}

/// Everything needed to paint the universe at one point on the timeline
#[derive(Debug, Clone, PartialEq)]
pub struct ExpansionFrame {
    pub center: Vec2,
    pub radius: f32,
    pub gradient: &'static [ColorStop],
    pub stars: Vec<Star>,
    pub galaxies: Vec<Galaxy>,
}

impl ExpansionFrame {
    /// Lay out the universe for `time` on a canvas of `size`.
    ///
    /// Stars and galaxies come from fixed seeds, so the `n`th star sits at the
    /// same relative spot in every frame and only the visible count grows.
    pub fn compute(time: f32, size: Vec2) -> Self {
        let center = size / 2.0;
        let radius = universe_radius(time, max_render_radius(size.x, size.y));

        let mut rng = StdRng::seed_from_u64(STAR_SEED);
        let stars = (0..star_count(time).min(MAX_STARS))
            .map(|_| {
                let position = center + polar(&mut rng, radius * 0.9);
                let star_radius = rng.random::<f32>() * 1.5 + 0.5;
                let brightness = rng.random::<f32>() * 55.0 + 200.0;
                let blue_shift = rng.random::<f32>() * 55.0;
                let alpha = rng.random::<f32>() * 0.5 + 0.5;
                Star {
                    position,
                    radius: star_radius,
                    color: Rgba::new(
                        brightness as u8,
                        brightness as u8,
                        (brightness + blue_shift).min(255.0) as u8,
                        alpha,
                    ),
                }
            })
            .collect();

        let mut rng = StdRng::seed_from_u64(GALAXY_SEED);
        let galaxies = (0..galaxy_count(time))
            .map(|_| Galaxy {
                position: center + polar(&mut rng, radius * 0.7),
                radius: rng.random::<f32>() * 15.0 + 10.0,
            })
            .collect();

        Self {
            center,
            radius,
            gradient: CosmicEra::at(time).gradient(),
            stars,
            galaxies,
        }
    }

    pub fn paint(&self, canvas: &mut impl Canvas) {
        if !canvas.is_drawable() {
            return;
        }

        canvas.clear(palette::background());
        canvas.fill_radial_gradient(self.center, self.radius, self.gradient);

        for star in &self.stars {
            canvas.fill_circle(star.position, star.radius, star.color);
        }
        for galaxy in &self.galaxies {
            canvas.fill_radial_gradient(galaxy.position, galaxy.radius, &GALAXY_GRADIENT);
        }
    }
}

/// Random offset at most `max_distance` from the origin
fn polar(rng: &mut StdRng, max_distance: f32) -> Vec2 {
    let angle = rng.random::<f32>() * std::f32::consts::TAU;
    let distance = rng.random::<f32>() * max_distance;
    Vec2::from_angle(angle) * distance
}

/// Clear and repaint the universe at `time`
pub fn paint_expansion(canvas: &mut impl Canvas, time: f32) {
    ExpansionFrame::compute(time, canvas.size()).paint(canvas);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{CommandList, DrawCommand};

    #[test]
    fn test_early_universe_has_no_stars() {
        let frame = ExpansionFrame::compute(10.0, Vec2::new(800.0, 600.0));
        assert!(frame.stars.is_empty());
        assert!(frame.galaxies.is_empty());
        assert_eq!(frame.radius, 10.0);
        assert_eq!(frame.center, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_late_universe_bounded() {
        let size = Vec2::new(800.0, 600.0);
        let frame = ExpansionFrame::compute(100.0, size);
        assert_eq!(frame.stars.len(), 500);
        assert_eq!(frame.galaxies.len(), 13);
        assert_eq!(frame.radius, 270.0);

        for star in &frame.stars {
            assert!(star.position.distance(frame.center) <= frame.radius * 0.9 + 1e-3);
        }
        for galaxy in &frame.galaxies {
            assert!(galaxy.position.distance(frame.center) <= frame.radius * 0.7 + 1e-3);
        }
    }

    #[test]
    fn test_star_field_grows_without_reshuffling() {
        let size = Vec2::new(800.0, 600.0);
        let earlier = ExpansionFrame::compute(75.0, size);
        let later = ExpansionFrame::compute(75.5, size);
        assert_eq!(earlier.radius, later.radius - 1.5);
        assert!(later.stars.len() > earlier.stars.len());
        for (a, b) in earlier.stars.iter().zip(&later.stars) {
            assert_eq!(a.radius, b.radius);
            assert_eq!(a.color, b.color);
        }
    }

    #[test]
    fn test_repaint_is_idempotent() {
        let mut first = CommandList::new(800.0, 600.0);
        let mut second = CommandList::new(800.0, 600.0);
        paint_expansion(&mut first, 90.0);
        paint_expansion(&mut second, 90.0);
        paint_expansion(&mut second, 90.0);
        assert_eq!(first, second);
        assert!(matches!(first.commands()[0], DrawCommand::Clear(_)));
    }

    #[test]
    fn test_zero_sized_canvas_is_noop() {
        let mut canvas = CommandList::new(0.0, 0.0);
        paint_expansion(&mut canvas, 50.0);
        assert!(canvas.commands().is_empty());
    }
}
