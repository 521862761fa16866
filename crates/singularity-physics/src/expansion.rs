//! Cosmic expansion: universe radius, era palettes and the event timeline
//!
//! `time` is a position on a 0..=100 timeline rather than a physical age.
//! The mapping to real ages lives in [`COSMIC_EVENTS`].

use crate::color::{ColorStop, Rgba};
use crate::constants::*;

/// Radius of the universe disc at `time`, clamped to `max_radius`.
///
/// Three regimes: slow growth before inflation, quadratic inflation between
/// 20 and 30, and steady linear expansion afterwards. The pieces meet at the
/// boundaries so the radius never shrinks as time advances.
pub fn universe_radius(time: f32, max_radius: f32) -> f32 {
    let radius = if time < 20.0 {
        5.0 + time * 0.5
    } else if time < 30.0 {
        let inflation = (time - 20.0) / 10.0;
        15.0 + inflation * inflation * 100.0
    } else {
        115.0 + (time - 30.0) * 3.0
    };

    radius.min(max_radius).max(0.0)
}

/// Largest radius that fits a `width` x `height` drawing surface
pub fn max_render_radius(width: f32, height: f32) -> f32 {
    (width / 2.0).min(height / 2.0).max(0.0) * MAX_RADIUS_FRACTION
}

/// Visual era used to pick the universe gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CosmicEra {
    /// Intense white/purple
    Planck,
    /// Hot, red
    EarlyUniverse,
    /// Orange/yellow
    Recombination,
    /// Blue hint as the first stars ignite
    FirstStars,
    /// Blue fading to black
    Modern,
}

impl CosmicEra {
    pub fn at(time: f32) -> Self {
        if time < 20.0 {
            Self::Planck
        } else if time < 40.0 {
            Self::EarlyUniverse
        } else if time < 60.0 {
            Self::Recombination
        } else if time < 80.0 {
            Self::FirstStars
        } else {
            Self::Modern
        }
    }

    /// Radial gradient stops, center first
    pub fn gradient(self) -> &'static [ColorStop] {
        match self {
            Self::Planck => &PLANCK_GRADIENT,
            Self::EarlyUniverse => &EARLY_GRADIENT,
            Self::Recombination => &RECOMBINATION_GRADIENT,
            Self::FirstStars => &FIRST_STARS_GRADIENT,
            Self::Modern => &MODERN_GRADIENT,
        }
    }
}

const PLANCK_GRADIENT: [ColorStop; 3] = [
    ColorStop::new(0.0, Rgba::new(255, 255, 255, 1.0)),
    ColorStop::new(0.7, Rgba::new(180, 100, 255, 0.7)),
    ColorStop::new(1.0, Rgba::new(120, 0, 255, 0.0)),
];

const EARLY_GRADIENT: [ColorStop; 3] = [
    ColorStop::new(0.0, Rgba::new(255, 255, 200, 1.0)),
    ColorStop::new(0.6, Rgba::new(255, 100, 50, 0.8)),
    ColorStop::new(1.0, Rgba::new(150, 50, 50, 0.0)),
];

const RECOMBINATION_GRADIENT: [ColorStop; 3] = [
    ColorStop::new(0.0, Rgba::new(255, 230, 150, 1.0)),
    ColorStop::new(0.7, Rgba::new(200, 140, 50, 0.7)),
    ColorStop::new(1.0, Rgba::new(100, 70, 20, 0.0)),
];

const FIRST_STARS_GRADIENT: [ColorStop; 4] = [
    ColorStop::new(0.0, Rgba::new(230, 230, 255, 1.0)),
    ColorStop::new(0.5, Rgba::new(100, 130, 255, 0.6)),
    ColorStop::new(0.9, Rgba::new(30, 50, 120, 0.3)),
    ColorStop::new(1.0, Rgba::new(10, 20, 80, 0.0)),
];

const MODERN_GRADIENT: [ColorStop; 4] = [
    ColorStop::new(0.0, Rgba::new(200, 220, 255, 1.0)),
    ColorStop::new(0.4, Rgba::new(50, 100, 200, 0.6)),
    ColorStop::new(0.8, Rgba::new(20, 30, 80, 0.3)),
    ColorStop::new(1.0, Rgba::new(0, 5, 20, 0.0)),
];

/// Gradient of a single spiral galaxy
pub const GALAXY_GRADIENT: [ColorStop; 3] = [
    ColorStop::new(0.0, Rgba::new(255, 255, 200, 0.7)),
    ColorStop::new(0.3, Rgba::new(200, 180, 255, 0.5)),
    ColorStop::new(1.0, Rgba::new(70, 100, 150, 0.0)),
];

/// Number of stars visible at `time`
pub fn star_count(time: f32) -> usize {
    if time < STAR_ERA_START {
        return 0;
    }
    (((time - STAR_ERA_START) * 20.0).floor() as usize).min(MAX_STARS)
}

/// Number of galaxies visible at `time`
pub fn galaxy_count(time: f32) -> usize {
    if time < GALAXY_ERA_START {
        return 0;
    }
    ((time - GALAXY_ERA_START) * 0.5).floor() as usize + 3
}

/// A milestone on the cosmic timeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CosmicEvent {
    /// Position on the 0..=100 timeline
    pub time: f32,
    /// Real age of the universe, for display
    pub age: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const COSMIC_EVENTS: [CosmicEvent; 11] = [
    CosmicEvent {
        time: 0.0,
        age: "0",
        name: "Big Bang",
        description: "The universe begins as an infinitely hot, dense singularity.",
    },
    CosmicEvent {
        time: 10.0,
        age: "10⁻⁴³s",
        name: "Planck Epoch",
        description: "Quantum gravity era - our physics breaks down completely.",
    },
    CosmicEvent {
        time: 20.0,
        age: "10⁻³⁶s",
        name: "Inflation Begins",
        description: "The universe expands exponentially, increasing its size by a factor of 10²⁶ in just a fraction of a second.",
    },
    CosmicEvent {
        time: 30.0,
        age: "10⁻³²s",
        name: "Inflation Ends",
        description: "The universe is now filled with a hot quark-gluon plasma.",
    },
    CosmicEvent {
        time: 40.0,
        age: "1s",
        name: "Nucleosynthesis",
        description: "Protons and neutrons form as the universe cools.",
    },
    CosmicEvent {
        time: 50.0,
        age: "3 minutes",
        name: "Light Elements Form",
        description: "Hydrogen and helium nuclei form as the universe continues to cool.",
    },
    CosmicEvent {
        time: 60.0,
        age: "380,000 years",
        name: "Recombination",
        description: "Electrons bind to nuclei, forming neutral atoms. The universe becomes transparent to light.",
    },
    CosmicEvent {
        time: 70.0,
        age: "100 million years",
        name: "First Stars",
        description: "Gravity pulls matter together to form the first stars, ending the cosmic dark ages.",
    },
    CosmicEvent {
        time: 80.0,
        age: "1 billion years",
        name: "First Galaxies",
        description: "Stars group together to form the first galaxies.",
    },
    CosmicEvent {
        time: 90.0,
        age: "9 billion years",
        name: "Solar System Forms",
        description: "Our sun and planets form from a molecular cloud.",
    },
    CosmicEvent {
        time: 100.0,
        age: "13.8 billion years",
        name: "Present Day",
        description: "The universe continues to expand and cool, with galaxies moving further apart.",
    },
];

/// The upcoming milestone at `time`: the first event not yet passed, or the
/// last event once the timeline is exhausted.
pub fn cosmic_event_at(time: f32) -> &'static CosmicEvent {
    COSMIC_EVENTS
        .iter()
        .find(|event| time <= event.time)
        .unwrap_or(&COSMIC_EVENTS[COSMIC_EVENTS.len() - 1])
}
