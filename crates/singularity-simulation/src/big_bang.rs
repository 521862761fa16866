//! Parameter store and playback of the expansion scene

use singularity_physics::{cosmic_event_at, CosmicEvent, TIMELINE_END};

use crate::driver::{Animation, StepOutcome};
use crate::params::DEFAULT_TIME;

/// Timeline advance per animation frame
pub const PLAYBACK_STEP: f32 = 0.2;

/// Parameter store of the expansion scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BigBangState {
    time: f32,
    event: &'static CosmicEvent,
}

impl Default for BigBangState {
    fn default() -> Self {
        Self::new(DEFAULT_TIME)
    }
}

impl BigBangState {
    pub fn new(time: f32) -> Self {
        Self {
            time,
            event: cosmic_event_at(time),
        }
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn set_time(&mut self, time: f32) {
        self.time = time;
        self.event = cosmic_event_at(time);
    }

    pub fn event(&self) -> &'static CosmicEvent {
        self.event
    }

    /// Playback from the end of the timeline starts over
    pub fn rewind_if_finished(&mut self) {
        if self.time >= TIMELINE_END {
            self.set_time(0.0);
        }
    }
}

impl Animation for BigBangState {
    fn advance(&mut self) -> StepOutcome {
        if self.time >= TIMELINE_END {
            return StepOutcome::Finished;
        }

        self.set_time((self.time + PLAYBACK_STEP).min(TIMELINE_END));
        if self.time >= TIMELINE_END {
            StepOutcome::Finished
        } else {
            StepOutcome::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{AnimationDriver, StopReason, TickOutcome};
    use approx::assert_relative_eq;

    #[test]
    fn test_set_time_updates_event() {
        let mut state = BigBangState::new(0.0);
        assert_eq!(state.event().name, "Big Bang");

        state.set_time(100.0);
        assert_eq!(state.event().name, "Present Day");
    }

    #[test]
    fn test_advance_steps_and_clamps() {
        let mut state = BigBangState::new(10.0);
        assert_eq!(state.advance(), StepOutcome::Continue);
        assert_relative_eq!(state.time(), 10.2);

        let mut state = BigBangState::new(99.9);
        assert_eq!(state.advance(), StepOutcome::Finished);
        assert_eq!(state.time(), TIMELINE_END);
        assert_eq!(state.advance(), StepOutcome::Finished);
    }

    #[test]
    fn test_playback_stops_at_end() {
        let mut state = BigBangState::new(99.0);
        let mut driver = AnimationDriver::new("big bang");
        driver.start();

        let mut ticks = 0;
        while driver.tick(&mut state) == TickOutcome::Advanced {
            ticks += 1;
            assert!(ticks < 100);
        }
        assert_eq!(state.time(), TIMELINE_END);
        assert_eq!(state.event().name, "Present Day");
        assert_eq!(driver.last_stop(), Some(StopReason::Finished));
    }

    #[test]
    fn test_rewind() {
        let mut state = BigBangState::new(TIMELINE_END);
        state.rewind_if_finished();
        assert_eq!(state.time(), 0.0);

        let mut state = BigBangState::new(40.0);
        state.rewind_if_finished();
        assert_eq!(state.time(), 40.0);
    }
}
