//! The three scenes and their animation drivers

use rand::rngs::StdRng;
use singularity_simulation::{
    entropy_source, AnimationDriver, BigBangState, BlackHoleState, DoubleSlitParams,
    DoubleSlitSession, TickOutcome,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scene {
    #[default]
    BigBang,
    BlackHole,
    DoubleSlit,
}

impl Scene {
    pub const ALL: [Scene; 3] = [Scene::BigBang, Scene::BlackHole, Scene::DoubleSlit];

    pub fn title(self) -> &'static str {
        match self {
            Self::BigBang => "Big Bang",
            Self::BlackHole => "Black Holes",
            Self::DoubleSlit => "Double Slit",
        }
    }
}

pub struct Scenes {
    active: Scene,
    pub big_bang: BigBangState,
    playback: AnimationDriver,
    pub black_hole: BlackHoleState,
    /// Controls for the next experiment run
    pub double_slit: DoubleSlitParams,
    session: Option<DoubleSlitSession<StdRng>>,
    experiment: AnimationDriver,
}

impl Default for Scenes {
    fn default() -> Self {
        Self {
            active: Scene::default(),
            big_bang: BigBangState::default(),
            playback: AnimationDriver::new("Big Bang playback"),
            black_hole: BlackHoleState::default(),
            double_slit: DoubleSlitParams::default(),
            session: None,
            experiment: AnimationDriver::new("Double slit experiment"),
        }
    }
}

impl Scenes {
    pub fn active(&self) -> Scene {
        self.active
    }

    /// Leaving a scene stops its animation
    pub fn switch_to(&mut self, scene: Scene) {
        if scene == self.active {
            return;
        }

        match self.active {
            Scene::BigBang => {
                self.playback.stop();
            }
            Scene::DoubleSlit => {
                self.experiment.stop();
            }
            Scene::BlackHole => {}
        }

        log::info!("Switched to {} scene", scene.title());
        self.active = scene;
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_running()
    }

    pub fn toggle_playback(&mut self) {
        if self.playback.is_running() {
            self.playback.stop();
        } else {
            self.big_bang.rewind_if_finished();
            self.playback.start();
        }
    }

    /// Manual scrubbing pauses playback
    pub fn set_time(&mut self, time: f32) {
        self.playback.stop();
        self.big_bang.set_time(time);
    }

    pub fn session(&self) -> Option<&DoubleSlitSession<StdRng>> {
        self.session.as_ref()
    }

    pub fn is_experiment_running(&self) -> bool {
        self.experiment.is_running()
    }

    /// Fire a fresh batch of particles with the current controls
    pub fn start_experiment(&mut self) {
        self.session = Some(DoubleSlitSession::new(self.double_slit, entropy_source()));
        self.experiment.start();
    }

    pub fn reset_experiment(&mut self) {
        self.experiment.stop();
        self.session = None;
    }

    /// Advance the active scene by one frame
    pub fn tick(&mut self) {
        match self.active {
            Scene::BigBang => {
                self.playback.tick(&mut self.big_bang);
            }
            Scene::DoubleSlit => {
                let Some(session) = self.session.as_mut() else {
                    self.experiment.stop();
                    return;
                };
                if let TickOutcome::Stopped(reason) = self.experiment.tick(session) {
                    log::info!(
                        "Experiment stopped ({:?}): {}/{} particles",
                        reason,
                        session.completed(),
                        session.total()
                    );
                }
            }
            Scene::BlackHole => {}
        }
    }
}
