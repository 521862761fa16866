//! Per-frame animation driver
//!
//! The event loop requests a redraw every frame and calls [`AnimationDriver::tick`]
//! once per redraw. A run is represented by a [`CancellationToken`]; starting a
//! new run, stopping, or dropping the driver cancels the previous token so no
//! stale run keeps mutating scene state.

use std::cell::Cell;
use std::rc::Rc;

/// Shared cancellation flag for one run
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Rc<Cell<bool>>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Result of one animation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Finished,
}

/// Something that advances by one step per frame
pub trait Animation {
    fn advance(&mut self) -> StepOutcome;
}

#[derive(Debug, Clone, Default)]
pub enum DriverState {
    #[default]
    Idle,
    Running {
        token: CancellationToken,
        frames: u64,
    },
}

/// Why the last run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Requested,
    Finished,
    Cancelled,
}

/// What a call to [`AnimationDriver::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing is running
    Idle,
    /// One step was taken and the run continues
    Advanced,
    /// The run ended this frame
    Stopped(StopReason),
}

#[derive(Debug, Default)]
pub struct AnimationDriver {
    name: &'static str,
    state: DriverState,
    last_stop: Option<StopReason>,
}

impl AnimationDriver {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: DriverState::Idle,
            last_stop: None,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, DriverState::Running { .. })
    }

    pub fn frames(&self) -> u64 {
        match &self.state {
            DriverState::Running { frames, .. } => *frames,
            DriverState::Idle => 0,
        }
    }

    pub fn last_stop(&self) -> Option<StopReason> {
        self.last_stop
    }

    /// Begin a new run. Any pending run is cancelled first.
    pub fn start(&mut self) -> CancellationToken {
        self.cancel_pending();
        let token = CancellationToken::new();
        self.state = DriverState::Running {
            token: token.clone(),
            frames: 0,
        };
        self.last_stop = None;
        log::info!("{} animation started", self.name);
        token
    }

    /// Advance `animation` by one step if a run is active
    pub fn tick(&mut self, animation: &mut impl Animation) -> TickOutcome {
        let DriverState::Running { token, frames } = &mut self.state else {
            return TickOutcome::Idle;
        };

        if token.is_cancelled() {
            self.finish(StopReason::Cancelled);
            return TickOutcome::Stopped(StopReason::Cancelled);
        }

        let outcome = animation.advance();
        *frames += 1;
        log::trace!("{} frame {}", self.name, frames);

        match outcome {
            StepOutcome::Continue => TickOutcome::Advanced,
            StepOutcome::Finished => {
                self.finish(StopReason::Finished);
                TickOutcome::Stopped(StopReason::Finished)
            }
        }
    }

    /// End the current run. Returns whether a run was active.
    pub fn stop(&mut self) -> bool {
        let was_running = self.is_running();
        self.finish(StopReason::Requested);
        was_running
    }

    fn finish(&mut self, reason: StopReason) {
        let frames = self.frames();
        if self.cancel_pending() {
            self.last_stop = Some(reason);
            log::info!(
                "{} animation stopped ({:?}) after {} frames",
                self.name,
                reason,
                frames
            );
        }
    }

    /// Cancel the pending token, if any, and go idle
    fn cancel_pending(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            DriverState::Running { token, .. } => {
                token.cancel();
                true
            }
            DriverState::Idle => false,
        }
    }
}

impl Drop for AnimationDriver {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
