//! Deep Clean entry point
//!
//! Native build runs a headless session at 60 Hz with a simple autopilot and
//! logs what happens. Usage: `deep-clean [tuning.json] [seed]`

use std::path::Path;

use deep_clean::Tuning;
use deep_clean::render::{Atlas, HudSnapshot, build_frame};
use deep_clean::sim::{
    Classification, Controls, Direction, GameEvent, GamePhase, GameState, TickDriver,
};

/// Host refresh interval (ms)
const FRAME_MS: f64 = 1000.0 / 60.0;
/// Length of the headless run (ms)
const RUN_MS: f64 = 180_000.0;
/// Continues granted before the autopilot gives up
const MAX_CONTINUES: u32 = 2;

/// Steer toward the nearest refill when low, otherwise the nearest debris,
/// and away from creatures in the way.
fn autopilot(state: &GameState, controls: &mut Controls) {
    controls.release_all();
    let player = state.player();
    let center = player.pos + player.size / 2.0;
    let wants_refill = state.session.resource < 50.0;

    let target = state
        .entities()
        .iter()
        .filter(|e| match e.classification() {
            Classification::Refill => true,
            Classification::Collectible => !wants_refill,
            Classification::Hazard => false,
        })
        .filter(|e| e.pos.x + e.size > player.pos.x)
        .min_by(|a, b| {
            a.pos
                .distance_squared(center)
                .total_cmp(&b.pos.distance_squared(center))
        });

    let threat = state
        .entities()
        .iter()
        .filter(|e| e.classification() == Classification::Hazard)
        .filter(|e| e.pos.x > player.pos.x && e.pos.x < player.pos.x + player.size.x + 120.0)
        .find(|e| (e.pos.y + e.size / 2.0 - center.y).abs() < (e.size + player.size.y) / 2.0 + 10.0);

    if let Some(threat) = threat {
        let threat_y = threat.pos.y + threat.size / 2.0;
        let dodge = if threat_y > center.y { Direction::Up } else { Direction::Down };
        controls.key_down(dodge);
        controls.key_down(Direction::Left);
    } else if let Some(target) = target {
        let target_y = target.pos.y + target.size / 2.0;
        if target_y < center.y - 4.0 {
            controls.key_down(Direction::Up);
        } else if target_y > center.y + 4.0 {
            controls.key_down(Direction::Down);
        }
        if target.pos.x > center.x + 150.0 {
            controls.key_down(Direction::Right);
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Deep Clean (native, headless) starting...");

    let mut args = std::env::args().skip(1);
    let tuning = args
        .next()
        .map(|path| Tuning::load_or_default(Path::new(&path)))
        .unwrap_or_default();
    let seed = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(err)) => {
            log::warn!("Invalid seed argument ({err}), using a random seed");
            rand::random()
        }
        None => rand::random(),
    };

    let mut state = GameState::with_tuning(seed, tuning);
    let mut controls = Controls::new();
    let mut driver = TickDriver::new();
    let atlas = Atlas::empty();
    let mut continues = 0;
    let mut peak_population = 0;

    state.start();
    let mut now = 0.0;
    while now < RUN_MS {
        autopilot(&state, &mut controls);
        driver.frame(&mut state, &controls, now);
        peak_population = peak_population.max(build_frame(&state, &atlas, now).len() - 1);

        for event in state.drain_events() {
            match event {
                GameEvent::ScoreChanged(score) => log::debug!("Score: {score}"),
                GameEvent::LifeLost { kind, remaining } => {
                    log::info!("Hit by {kind:?}, {remaining} lives left")
                }
                GameEvent::Refilled { kind, amount } => log::debug!("{kind:?} refilled {amount}"),
                GameEvent::MilestoneReached(report) => {
                    println!(
                        "{} pieces collected: {:.8}% of the ocean's debris",
                        report.score, report.percent
                    );
                }
                GameEvent::GameOver(cause) => log::info!("Game over: {cause:?}"),
                _ => {}
            }
        }

        match state.phase {
            GamePhase::Interstitial(_) => {
                state.acknowledge();
            }
            GamePhase::GameOver(_) if continues < MAX_CONTINUES => {
                continues += 1;
                state.continue_run();
            }
            GamePhase::GameOver(_) => break,
            _ => {}
        }
        now += FRAME_MS;
    }

    let hud = HudSnapshot::from_state(&state);
    println!(
        "Seed {seed}: score {} | energy {}% | lives {} | {:.1}s | peak population {} | continues {}",
        hud.score,
        hud.energy_percent,
        hud.lives,
        now / 1000.0,
        peak_population,
        continues
    );
}
