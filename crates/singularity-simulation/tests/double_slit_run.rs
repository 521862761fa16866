use singularity_physics::{ParticleKind, SlitCount};
use singularity_simulation::{
    seeded_source, AnimationDriver, BehaviorMode, DoubleSlitParams, DoubleSlitSession, StopReason,
    TickOutcome,
};

fn run(params: DoubleSlitParams, seed: u64) -> DoubleSlitSession<rand::rngs::StdRng> {
    let mut session = DoubleSlitSession::new(params, seeded_source(seed));
    let mut driver = AnimationDriver::new("double slit");
    driver.start();

    let mut frames = 0;
    loop {
        match driver.tick(&mut session) {
            TickOutcome::Advanced => frames += 1,
            TickOutcome::Stopped(reason) => {
                assert_eq!(reason, StopReason::Finished);
                break;
            }
            TickOutcome::Idle => panic!("driver went idle without stopping"),
        }
        assert!(frames < 10_000, "session never completed");
    }
    session
}

#[test]
fn test_hundred_quantum_particles_complete() {
    let params = DoubleSlitParams {
        particle_count: 100,
        ..Default::default()
    };
    let session = run(params, 2024);

    assert_eq!(session.completed(), 100);
    assert_eq!(
        session.histogram().total(),
        session.stats().recorded as u64
    );
    assert!(session.stats().recorded <= 100);
}

#[test]
fn test_every_configuration_accounts_for_all_particles() {
    for kind in [ParticleKind::Electron, ParticleKind::Photon] {
        for slit_count in [SlitCount::Single, SlitCount::Double] {
            for mode in [BehaviorMode::Quantum, BehaviorMode::Classical] {
                let params = DoubleSlitParams {
                    particle_kind: kind,
                    slit_count,
                    mode,
                    particle_count: 300,
                    ..Default::default()
                };
                let session = run(params, 11);

                let stats = session.stats();
                assert_eq!(stats.completed(), 300, "{params:?}");
                assert_eq!(session.histogram().total(), stats.recorded as u64);
                if !params.interferes() {
                    assert_eq!(stats.rejected, 0);
                }
            }
        }
    }
}

#[test]
fn test_stopping_midway_leaves_particles_in_flight() {
    let params = DoubleSlitParams {
        particle_count: 200,
        ..Default::default()
    };
    let mut session = DoubleSlitSession::new(params, seeded_source(3));
    let mut driver = AnimationDriver::new("double slit");
    let token = driver.start();

    for _ in 0..50 {
        driver.tick(&mut session);
    }
    driver.stop();
    assert!(token.is_cancelled());

    let completed = session.completed();
    assert_eq!(driver.tick(&mut session), TickOutcome::Idle);
    assert_eq!(session.completed(), completed);
    assert!(session.in_flight().count() > 0);
}
