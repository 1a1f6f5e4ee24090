use std::error::Error;

use glam::Vec2;
use instant::Instant;

use crate::screen::Screen;
use crate::sim::{Simulation, TickInput};

/// Fixed simulation timestep in seconds.
const TICK_RATE: f32 = 1.0 / 60.0;
/// Simulated seconds before the demo calls the chase off.
const DEMO_DURATION: f32 = 120.0;
/// Separation treated as contact between the two bodies.
const CONTACT_RADIUS: f32 = 0.4;
/// Separation below which the autopilot commits to a dive.
const DIVE_RANGE: f32 = 2.5;
/// Separation beyond which the autopilot holds the speed button.
const SPRINT_RANGE: f32 = 4.0;
/// Simulated seconds between progress summaries.
const STATS_INTERVAL: f32 = 5.0;

const PLAYER_START: Vec2 = Vec2::new(-4.0, 0.0);
const PREY_START: Vec2 = Vec2::new(4.0, 0.0);

#[derive(Default)]
struct RunStats {
    ticks: u64,
    hops: u32,
    dives: u32,
    last_summary_at: f32,
}

/// Seed for the demo run, overridable to reproduce a chase.
fn demo_seed() -> Result<u64, Box<dyn Error>> {
    match std::env::var("POUNCE_SEED") {
        Ok(raw) => Ok(raw.parse()?),
        Err(_) => Ok(fastrand::u64(..)),
    }
}

/// Run a scripted chase to completion: an autopilot keeps the pointer on
/// the prey, sprints when far behind and dives when close.
pub fn run() -> Result<(), Box<dyn Error>> {
    let seed = demo_seed()?;
    let screen = Screen::default();
    let mut sim = Simulation::with_seed(PLAYER_START, PREY_START, seed);
    log::info!("Chase started: seed {seed}, screen extent {}", screen.extent);

    let started = Instant::now();
    let mut stats = RunStats::default();
    let mut player_label = sim.player.state().label();
    let mut prey_label = sim.prey.state().label();
    let mut caught_at = None;

    let total_ticks = (DEMO_DURATION / TICK_RATE) as u64;
    for tick in 0..total_ticks {
        let now = tick as f32 * TICK_RATE;
        let separation = sim.player.position.distance(sim.prey.position);
        let input = TickInput {
            now,
            pointer: sim.prey.position, // the autopilot tracks the prey
            fast_held: separation > SPRINT_RANGE,
            dive_held: separation < DIVE_RANGE,
            prey_contact: separation < CONTACT_RADIUS,
            screen,
        };
        sim.tick(&input);
        stats.ticks += 1;

        let hunter_now = sim.player.state().label();
        if hunter_now != player_label {
            log::debug!("[{now:7.2}] hunter {player_label} -> {hunter_now}");
            if hunter_now == "Diving" {
                stats.dives += 1;
            }
            player_label = hunter_now;
        }
        let prey_now = sim.prey.state().label();
        if prey_now != prey_label {
            log::debug!("[{now:7.2}] prey {prey_label} -> {prey_now}");
            if prey_now == "Hop" {
                stats.hops += 1;
            }
            prey_label = prey_now;
        }

        if let Some(offset) = sim.prey.attachment() {
            let facing = Vec2::from_angle(sim.player.orientation().to_radians());
            let carried = sim.player.position + facing.rotate(offset);
            log::info!(
                "[{now:7.2}] prey caught on dive {}: offset {offset}, carried at {carried}",
                stats.dives
            );
            caught_at = Some(now);
            break;
        }

        if now - stats.last_summary_at >= STATS_INTERVAL {
            log::info!(
                "[{now:7.2}] hunter {} ({}, speed {:.3}) | prey {} ({}) | \
                 separation {separation:.2}, {} hops, {} dives",
                sim.player.position,
                player_label,
                sim.player.speed(),
                sim.prey.position,
                prey_label,
                stats.hops,
                stats.dives
            );
            stats.last_summary_at = now;
        }
    }

    let elapsed = started.elapsed().as_secs_f64();
    let rate = stats.ticks as f64 / elapsed.max(f64::EPSILON);
    match caught_at {
        Some(at) => log::info!(
            "Run over: prey caught at {at:.2}s after {} hops and {} dives \
             ({} ticks in {elapsed:.2}s, {rate:.0} ticks/s)",
            stats.hops,
            stats.dives,
            stats.ticks
        ),
        None => log::info!(
            "Run over: prey evaded the full {DEMO_DURATION}s \
             ({} ticks in {elapsed:.2}s, {rate:.0} ticks/s)",
            stats.ticks
        ),
    }
    Ok(())
}
