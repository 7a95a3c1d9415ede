//! Headless demo driver
//!
//! Runs the simulation at a fixed 60 Hz step with a scripted command
//! sequence and prints the resulting telemetry. Useful for smoke-testing
//! determinism: the same seed always prints the same summary.

use poly_snake::consts::SIM_DT;
use poly_snake::sim::Direction;
use poly_snake::{SimConfig, SimState, TickInput, TickStatus, tick};

fn main() {
    env_logger::init();

    let config = SimConfig::default();
    let mut state = SimState::new(config);
    log::info!(
        "starting demo run: arena {}x{}, seed {}",
        config.arena_width,
        config.arena_height,
        config.seed
    );

    // Scripted square-ish patrol: (ticks to run, direction to request).
    let script = [
        (90, None),
        (90, Some(Direction::Down)),
        (90, Some(Direction::Left)),
        (90, Some(Direction::Up)),
        (90, Some(Direction::Right)),
    ];

    let mut ticks_run = 0u32;
    let mut goals = 0u32;
    'outer: for (count, direction) in script {
        let mut input = TickInput {
            direction,
            ..TickInput::default()
        };
        for _ in 0..count {
            match tick(&mut state, &input, SIM_DT) {
                TickStatus::JustGrew => {
                    goals += 1;
                    log::info!("scored after {} ticks", ticks_run);
                }
                TickStatus::JustDied => {
                    log::info!("died after {} ticks", ticks_run);
                    break 'outer;
                }
                TickStatus::Alive => {}
            }
            ticks_run += 1;
            // Only the first tick of each leg carries the turn command.
            input.direction = None;
        }
    }

    let telemetry = state.telemetry();
    println!(
        "ran {} ticks: phase {:?}, head ({:.1}, {:.1}), {} joints, \
         target length {:.1}, {} goals",
        ticks_run,
        state.phase,
        state.head.x,
        state.head.y,
        telemetry.joint_count,
        telemetry.target_length,
        goals,
    );
}
