//! Double slit particle session
//!
//! A session owns every piece of mutable experiment state: the particles in
//! flight, the detector histogram and the random source. It is built when the
//! user presses start and dropped on reset, so nothing survives a restart.

use glam::Vec2;
use singularity_physics::{
    detection_probability, within_slit_panel, Particle, SlitLayout, SlitPassage, SCREEN_X,
};

use crate::driver::{Animation, StepOutcome};
use crate::histogram::DetectionHistogram;
use crate::params::{BehaviorMode, DoubleSlitParams};
use crate::sampler::UniformSource;

/// How the particles of a session ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DetectionStats {
    /// Stopped by the slit panel
    pub absorbed: u32,
    /// Counted in the histogram
    pub recorded: u32,
    /// Reached the screen but failed the interference draw
    pub rejected: u32,
    /// Reached the screen line above or below the screen
    pub off_screen: u32,
}

impl DetectionStats {
    pub fn completed(&self) -> u32 {
        self.absorbed + self.recorded + self.rejected + self.off_screen
    }
}

pub struct DoubleSlitSession<S: UniformSource> {
    params: DoubleSlitParams,
    layout: SlitLayout,
    particles: Vec<Particle>,
    histogram: DetectionHistogram,
    stats: DetectionStats,
    source: S,
}

impl<S: UniformSource> DoubleSlitSession<S> {
    /// Emit `params.particle_count` particles from the source
    pub fn new(params: DoubleSlitParams, mut source: S) -> Self {
        let particles = (0..params.particle_count)
            .map(|_| {
                let vx = source.next_unit() * 1.5 + 0.8;
                let vy = (source.next_unit() - 0.5) * 1.6;
                Particle::emitted(Vec2::new(vx, vy))
            })
            .collect();

        log::info!(
            "Starting double slit session: {} {}s, {:?} slit, {} mode",
            params.particle_count,
            params.particle_kind.label(),
            params.slit_count,
            params.mode.label()
        );

        Self {
            params,
            layout: params.slit_layout(),
            particles,
            histogram: DetectionHistogram::default(),
            stats: DetectionStats::default(),
            source,
        }
    }

    pub fn params(&self) -> &DoubleSlitParams {
        &self.params
    }

    pub fn layout(&self) -> &SlitLayout {
        &self.layout
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Particles that are still travelling
    pub fn in_flight(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter().filter(|particle| !particle.detected)
    }

    pub fn histogram(&self) -> &DetectionHistogram {
        &self.histogram
    }

    pub fn stats(&self) -> &DetectionStats {
        &self.stats
    }

    pub fn completed(&self) -> u32 {
        self.stats.completed()
    }

    pub fn total(&self) -> u32 {
        self.particles.len() as u32
    }

    pub fn is_complete(&self) -> bool {
        self.completed() >= self.total()
    }

    /// Move every particle one step and resolve panel and screen crossings
    pub fn step(&mut self) {
        let interferes = self.params.interferes();

        for index in 0..self.particles.len() {
            let particle = &mut self.particles[index];
            if particle.detected {
                continue;
            }

            particle.advance();

            if within_slit_panel(particle.position.x) && particle.slit == SlitPassage::Undetermined
            {
                match self.layout.slit_at(particle.position.y) {
                    None => {
                        particle.absorb();
                        self.stats.absorbed += 1;
                        continue;
                    }
                    Some(slit) => match self.params.mode {
                        BehaviorMode::Quantum => particle.slit = SlitPassage::Superposed,
                        BehaviorMode::Classical => {
                            particle.slit = SlitPassage::Through(slit);
                            particle.velocity.y = (self.source.next_unit() - 0.5) * 2.0;
                        }
                    },
                }
            }

            if particle.position.x >= SCREEN_X {
                particle.detected = true;
                let y = particle.position.y;
                self.land(y, interferes);
            }
        }
    }

    fn land(&mut self, y: f32, interferes: bool) {
        if interferes {
            if let Some((slit1, slit2)) = self.layout.pair_centers() {
                let probability = detection_probability(self.params.particle_kind, y, slit1, slit2);
                if self.source.next_unit() >= probability {
                    self.stats.rejected += 1;
                    return;
                }
            }
        }

        match self.histogram.record(y) {
            Some(_) => self.stats.recorded += 1,
            None => self.stats.off_screen += 1,
        }
    }
}

impl<S: UniformSource> Animation for DoubleSlitSession<S> {
    fn advance(&mut self) -> StepOutcome {
        if !self.is_complete() {
            self.step();
        }

        if self.is_complete() {
            log::debug!(
                "Double slit session complete: {} recorded, {} absorbed, {} rejected, {} off screen",
                self.stats.recorded,
                self.stats.absorbed,
                self.stats.rejected,
                self.stats.off_screen
            );
            StepOutcome::Finished
        } else {
            StepOutcome::Continue
        }
    }
}
