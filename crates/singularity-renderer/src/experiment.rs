//! Double slit experiment painter
//!
//! Draws in fixed experiment coordinates (800 x 600, y down). The canvas is
//! expected to map that space onto whatever area it occupies.

use glam::Vec2;
use singularity_physics::{
    Particle, SlitLayout, EXPERIMENT_HEIGHT, SCREEN_X, SLIT_PANEL_THICKNESS, SLIT_PANEL_X,
    SOURCE_X, SOURCE_Y,
};
use singularity_simulation::{DetectionHistogram, DoubleSlitParams, DoubleSlitSession, UniformSource};

use crate::canvas::Canvas;
use crate::palette;

const SOURCE_RADIUS: f32 = 8.0;
const PARTICLE_RADIUS: f32 = 2.0;
const SCREEN_WIDTH: f32 = 5.0;
const MAX_BAR_LENGTH: f32 = 50.0;
const LABEL_SIZE: f32 = 16.0;
const COUNTER_SIZE: f32 = 14.0;

/// Borrowed view of the experiment for one repaint
#[derive(Debug, Clone, Copy)]
pub struct ExperimentFrame<'a> {
    pub params: &'a DoubleSlitParams,
    pub layout: SlitLayout,
    pub particles: &'a [Particle],
    pub histogram: Option<&'a DetectionHistogram>,
    pub completed: u32,
}

impl<'a> ExperimentFrame<'a> {
    /// Apparatus only, before any session has run
    pub fn idle(params: &'a DoubleSlitParams) -> Self {
        Self {
            params,
            layout: params.slit_layout(),
            particles: &[],
            histogram: None,
            completed: 0,
        }
    }

    pub fn from_session<S: UniformSource>(session: &'a DoubleSlitSession<S>) -> Self {
        Self {
            params: session.params(),
            layout: *session.layout(),
            particles: session.particles(),
            histogram: Some(session.histogram()),
            completed: session.completed(),
        }
    }

    pub fn progress_label(&self) -> String {
        format!(
            "Particles: {}/{}",
            self.completed, self.params.particle_count
        )
    }

    pub fn paint(&self, canvas: &mut impl Canvas) {
        if !canvas.is_drawable() {
            return;
        }

        let kind = self.params.particle_kind;
        canvas.clear(palette::background());

        canvas.fill_circle(
            Vec2::new(SOURCE_X, SOURCE_Y),
            SOURCE_RADIUS,
            palette::particle(kind),
        );

        // Panel, then cut the apertures back out
        canvas.fill_rect(
            Vec2::new(SLIT_PANEL_X, 0.0),
            Vec2::new(SLIT_PANEL_THICKNESS, EXPERIMENT_HEIGHT),
            palette::slit_panel(),
        );
        for slit in self.layout.slits() {
            canvas.fill_rect(
                Vec2::new(SLIT_PANEL_X, slit.top()),
                Vec2::new(SLIT_PANEL_THICKNESS, slit.height),
                palette::background(),
            );
        }

        canvas.fill_rect(
            Vec2::new(SCREEN_X, 0.0),
            Vec2::new(SCREEN_WIDTH, EXPERIMENT_HEIGHT),
            palette::detector_screen(),
        );

        if let Some(histogram) = self.histogram {
            for (row, intensity) in histogram.intensities().enumerate() {
                if intensity > 0.0 {
                    canvas.fill_rect(
                        Vec2::new(SCREEN_X + SCREEN_WIDTH + 1.0, row as f32),
                        Vec2::new(MAX_BAR_LENGTH * intensity, 1.0),
                        palette::histogram_bar(kind, intensity),
                    );
                }
            }
        }

        let text = palette::label();
        canvas.text(
            Vec2::new(SOURCE_X - 20.0, SOURCE_Y + 30.0),
            "Source",
            LABEL_SIZE,
            text,
        );
        canvas.text(Vec2::new(SLIT_PANEL_X - 10.0, 30.0), "Slits", LABEL_SIZE, text);
        canvas.text(
            Vec2::new(SCREEN_X + 10.0, 30.0),
            "Detector Screen",
            LABEL_SIZE,
            text,
        );
        canvas.text(
            Vec2::new(20.0, 30.0),
            &self.progress_label(),
            COUNTER_SIZE,
            text,
        );

        let color = palette::particle(kind);
        for particle in self.particles.iter().filter(|p| !p.detected) {
            canvas.fill_circle(particle.position, PARTICLE_RADIUS, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{CommandList, DrawCommand};
    use singularity_physics::{ParticleKind, SlitCount, EXPERIMENT_WIDTH};
    use singularity_simulation::{seeded_source, Animation};

    fn canvas() -> CommandList {
        CommandList::new(EXPERIMENT_WIDTH, EXPERIMENT_HEIGHT)
    }

    fn rect_count(canvas: &CommandList) -> usize {
        canvas
            .commands()
            .iter()
            .filter(|command| matches!(command, DrawCommand::Rect { .. }))
            .count()
    }

    #[test]
    fn test_idle_apparatus() {
        let params = DoubleSlitParams::default();
        let mut canvas = canvas();
        ExperimentFrame::idle(&params).paint(&mut canvas);

        // Panel, two apertures, screen
        assert_eq!(rect_count(&canvas), 4);
        let texts: Vec<_> = canvas.texts().collect();
        assert_eq!(
            texts,
            ["Source", "Slits", "Detector Screen", "Particles: 0/2000"]
        );
    }

    #[test]
    fn test_single_slit_has_one_aperture() {
        let params = DoubleSlitParams {
            slit_count: SlitCount::Single,
            ..Default::default()
        };
        let mut canvas = canvas();
        ExperimentFrame::idle(&params).paint(&mut canvas);
        assert_eq!(rect_count(&canvas), 3);
    }

    #[test]
    fn test_source_color_follows_particle_kind() {
        let params = DoubleSlitParams {
            particle_kind: ParticleKind::Photon,
            ..Default::default()
        };
        let mut canvas = canvas();
        ExperimentFrame::idle(&params).paint(&mut canvas);

        let source = canvas.commands().iter().find_map(|command| match command {
            DrawCommand::Circle { color, .. } => Some(*color),
            _ => None,
        });
        assert_eq!(source, Some(palette::particle(ParticleKind::Photon)));
    }

    #[test]
    fn test_session_frame_draws_bars_and_particles() {
        let params = DoubleSlitParams {
            particle_count: 200,
            slit_count: SlitCount::Single,
            ..Default::default()
        };
        let mut session = DoubleSlitSession::new(params, seeded_source(5));
        for _ in 0..400 {
            session.advance();
        }

        let frame = ExperimentFrame::from_session(&session);
        let mut canvas = canvas();
        frame.paint(&mut canvas);

        let bars = session
            .histogram()
            .counts()
            .iter()
            .filter(|&&count| count > 0)
            .count();
        assert_eq!(rect_count(&canvas), 3 + bars);

        let circles = canvas
            .commands()
            .iter()
            .filter(|command| matches!(command, DrawCommand::Circle { .. }))
            .count();
        assert_eq!(circles, 1 + session.in_flight().count());
        assert!(canvas
            .texts()
            .any(|text| text == format!("Particles: {}/200", session.completed())));
    }

    #[test]
    fn test_repaint_is_idempotent() {
        let params = DoubleSlitParams {
            particle_count: 100,
            ..Default::default()
        };
        let mut session = DoubleSlitSession::new(params, seeded_source(9));
        for _ in 0..300 {
            session.advance();
        }

        let frame = ExperimentFrame::from_session(&session);
        let mut once = canvas();
        let mut twice = canvas();
        frame.paint(&mut once);
        frame.paint(&mut twice);
        frame.paint(&mut twice);
        assert_eq!(once, twice);
    }
}
