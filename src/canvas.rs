//! egui-backed drawing surface for the 2D scenes

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape};
use glam::Vec2;
use singularity_physics::{ColorStop, Rgba};
use singularity_renderer::{sample_gradient, Canvas};

const GRADIENT_RINGS: usize = 24;
const CIRCLE_SEGMENTS: usize = 64;

/// Maps logical canvas coordinates onto a screen rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub origin: Pos2,
    pub scale: f32,
    pub logical: Vec2,
}

impl Viewport {
    /// One logical unit per point, covering `rect`
    pub fn filling(rect: Rect) -> Self {
        Self {
            origin: rect.min,
            scale: 1.0,
            logical: Vec2::new(rect.width(), rect.height()),
        }
    }

    /// Largest uniform scaling of `logical` that fits in `rect`, centered
    pub fn fitted(rect: Rect, logical: Vec2) -> Self {
        if logical.x <= 0.0 || logical.y <= 0.0 {
            return Self {
                origin: rect.min,
                scale: 0.0,
                logical: Vec2::ZERO,
            };
        }

        let scale = (rect.width() / logical.x).min(rect.height() / logical.y).max(0.0);
        let used = egui::vec2(logical.x * scale, logical.y * scale);
        Self {
            origin: rect.center() - used / 2.0,
            scale,
            logical,
        }
    }

    pub fn to_screen(&self, point: Vec2) -> Pos2 {
        self.origin + egui::vec2(point.x, point.y) * self.scale
    }

    /// Logical size as seen by painters; empty when nothing can be shown
    pub fn size(&self) -> Vec2 {
        if self.scale > 0.0 {
            self.logical
        } else {
            Vec2::ZERO
        }
    }

    pub fn screen_rect(&self) -> Rect {
        Rect::from_min_max(self.origin, self.to_screen(self.logical))
    }
}

fn color32(color: Rgba) -> Color32 {
    let alpha = (color.a.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, alpha)
}

pub struct EguiCanvas<'a> {
    painter: &'a Painter,
    viewport: Viewport,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a Painter, viewport: Viewport) -> Self {
        Self { painter, viewport }
    }
}

impl Canvas for EguiCanvas<'_> {
    fn size(&self) -> Vec2 {
        self.viewport.size()
    }

    fn clear(&mut self, color: Rgba) {
        self.painter
            .rect_filled(self.viewport.screen_rect(), 0.0, color32(color));
    }

    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Rgba) {
        let rect = Rect::from_min_max(
            self.viewport.to_screen(min),
            self.viewport.to_screen(min + size),
        );
        self.painter.rect_filled(rect, 0.0, color32(color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.painter.circle_filled(
            self.viewport.to_screen(center),
            radius * self.viewport.scale,
            color32(color),
        );
    }

    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, stops: &[ColorStop]) {
        if radius <= 0.0 || stops.is_empty() {
            return;
        }

        let center_pos = self.viewport.to_screen(center);
        let radius = radius * self.viewport.scale;
        let mut mesh = egui::Mesh::default();

        mesh.colored_vertex(center_pos, color32(sample_gradient(stops, 0.0)));
        for ring in 1..=GRADIENT_RINGS {
            let t = ring as f32 / GRADIENT_RINGS as f32;
            let color = color32(sample_gradient(stops, t));
            for segment in 0..CIRCLE_SEGMENTS {
                let angle = segment as f32 / CIRCLE_SEGMENTS as f32 * std::f32::consts::TAU;
                let offset = egui::vec2(angle.cos(), angle.sin()) * radius * t;
                mesh.colored_vertex(center_pos + offset, color);
            }
        }

        let index = |ring: usize, segment: usize| {
            (1 + (ring - 1) * CIRCLE_SEGMENTS + segment % CIRCLE_SEGMENTS) as u32
        };
        for segment in 0..CIRCLE_SEGMENTS {
            mesh.add_triangle(0, index(1, segment), index(1, segment + 1));
        }
        for ring in 2..=GRADIENT_RINGS {
            for segment in 0..CIRCLE_SEGMENTS {
                let (a, b) = (index(ring - 1, segment), index(ring - 1, segment + 1));
                let (c, d) = (index(ring, segment), index(ring, segment + 1));
                mesh.add_triangle(a, c, d);
                mesh.add_triangle(a, d, b);
            }
        }

        self.painter.add(Shape::mesh(mesh));
    }

    fn text(&mut self, position: Vec2, text: &str, font_size: f32, color: Rgba) {
        self.painter.text(
            self.viewport.to_screen(position),
            Align2::LEFT_BOTTOM,
            text,
            FontId::proportional(font_size * self.viewport.scale.max(0.5)),
            color32(color),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fitted_letterboxes_and_centers() {
        let rect = Rect::from_min_size(Pos2::new(10.0, 20.0), egui::vec2(1000.0, 600.0));
        let viewport = Viewport::fitted(rect, Vec2::new(800.0, 600.0));

        assert_relative_eq!(viewport.scale, 1.0);
        assert_eq!(viewport.to_screen(Vec2::ZERO), Pos2::new(110.0, 20.0));
        assert_eq!(viewport.screen_rect().center(), rect.center());
    }

    #[test]
    fn test_fitted_scales_down() {
        let rect = Rect::from_min_size(Pos2::ZERO, egui::vec2(400.0, 600.0));
        let viewport = Viewport::fitted(rect, Vec2::new(800.0, 600.0));
        assert_relative_eq!(viewport.scale, 0.5);
        assert_eq!(viewport.to_screen(Vec2::new(800.0, 600.0)), Pos2::new(400.0, 450.0));
    }

    #[test]
    fn test_collapsed_rect_has_no_size() {
        let rect = Rect::from_min_size(Pos2::ZERO, egui::vec2(0.0, 300.0));
        assert_eq!(Viewport::fitted(rect, Vec2::new(800.0, 600.0)).size(), Vec2::ZERO);
        assert_eq!(Viewport::filling(rect).size(), Vec2::new(0.0, 300.0));
    }

    #[test]
    fn test_color_conversion() {
        assert_eq!(
            color32(Rgba::new(10, 20, 30, 1.0)),
            Color32::from_rgb(10, 20, 30)
        );
        assert_eq!(color32(Rgba::transparent()).a(), 0);
    }
}
