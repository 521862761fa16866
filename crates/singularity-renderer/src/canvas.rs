//! Immediate-mode 2D drawing surface
//!
//! Painters clear the whole canvas and draw every primitive again on each
//! frame. The app backs [`Canvas`] with an egui painter; tests use the
//! recording [`CommandList`].

use glam::Vec2;
use singularity_physics::{ColorStop, Rgba};

pub trait Canvas {
    /// Logical size of the drawing area
    fn size(&self) -> Vec2;

    fn clear(&mut self, color: Rgba);

    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Rgba);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Disc of `radius` shaded with `stops` from the center outward
    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, stops: &[ColorStop]);

    /// Text with its baseline starting at `position`
    fn text(&mut self, position: Vec2, text: &str, font_size: f32, color: Rgba);

    /// Whether anything can be drawn at all
    fn is_drawable(&self) -> bool {
        let size = self.size();
        size.is_finite() && size.x > 0.0 && size.y > 0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rgba),
    Rect {
        min: Vec2,
        size: Vec2,
        color: Rgba,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    RadialGradient {
        center: Vec2,
        radius: f32,
        stops: Vec<ColorStop>,
    },
    Text {
        position: Vec2,
        text: String,
        font_size: f32,
        color: Rgba,
    },
}

/// Canvas that records what was drawn
#[derive(Debug, Clone, PartialEq)]
pub struct CommandList {
    size: Vec2,
    commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Canvas for CommandList {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self, color: Rgba) {
        // Everything before a clear is invisible
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Rgba) {
        self.commands.push(DrawCommand::Rect { min, size, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_radial_gradient(&mut self, center: Vec2, radius: f32, stops: &[ColorStop]) {
        self.commands.push(DrawCommand::RadialGradient {
            center,
            radius,
            stops: stops.to_vec(),
        });
    }

    fn text(&mut self, position: Vec2, text: &str, font_size: f32, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            position,
            text: text.to_owned(),
            font_size,
            color,
        });
    }
}

/// Color of a gradient at `t` in `[0, 1]`, interpolating between stops
pub fn sample_gradient(stops: &[ColorStop], t: f32) -> Rgba {
    let Some(first) = stops.first() else {
        return Rgba::transparent();
    };
    if t <= first.offset {
        return first.color;
    }

    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            let f = if span > 0.0 { (t - a.offset) / span } else { 1.0 };
            let lerp = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * f).round() as u8;
            return Rgba::new(
                lerp(a.color.r, b.color.r),
                lerp(a.color.g, b.color.g),
                lerp(a.color.b, b.color.b),
                a.color.a + (b.color.a - a.color.a) * f,
            );
        }
    }

    stops[stops.len() - 1].color
}
