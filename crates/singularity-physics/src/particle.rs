//! Particles of the double slit experiment

use glam::Vec2;

use crate::constants::{SOURCE_X, SOURCE_Y};

/// What the particle did at the slit panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlitPassage {
    /// Has not reached the panel yet
    #[default]
    Undetermined,
    /// Went through the slit with this index (which-path known)
    Through(usize),
    /// Went through "both" slits, no which-path information
    Superposed,
}

/// A particle in flight from the source to the detector screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Set once the particle hit the screen or was absorbed by the panel
    pub detected: bool,
    pub slit: SlitPassage,
}

impl Particle {
    /// A particle leaving the source with `velocity`
    pub fn emitted(velocity: Vec2) -> Self {
        Self {
            position: Vec2::new(SOURCE_X, SOURCE_Y),
            velocity,
            detected: false,
            slit: SlitPassage::Undetermined,
        }
    }

    pub fn advance(&mut self) {
        self.position += self.velocity;
    }

    /// Stopped by the slit panel
    pub fn absorb(&mut self) {
        self.velocity = Vec2::ZERO;
        self.detected = true;
    }
}
