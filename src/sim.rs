use glam::Vec2;

use crate::player::Player;
use crate::prey::Prey;
use crate::screen::Screen;

/// Everything the outside world feeds into one fixed tick. The host samples
/// its pointer, buttons, contact test and viewport, then hands them over as
/// plain data.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Monotonic simulation time in seconds.
    pub now: f32,
    /// Pointer position in world units.
    pub pointer: Vec2,
    /// Speed button held this tick.
    pub fast_held: bool,
    /// Dive button held this tick.
    pub dive_held: bool,
    /// Hunter and prey contact volumes overlap this tick.
    pub prey_contact: bool,
    /// Playfield bounds for the prey's landing-spot search.
    pub screen: Screen,
}

/// The two-actor chase. Owns both actors and the randomness source, and
/// pins down who updates first.
pub struct Simulation {
    pub player: Player,
    pub prey: Prey,
    rng: fastrand::Rng,
}

impl Simulation {
    pub fn new(player_pos: Vec2, prey_pos: Vec2) -> Self {
        Self::with_rng(player_pos, prey_pos, fastrand::Rng::new())
    }

    /// Deterministic runs for scripted demos and tests.
    pub fn with_seed(player_pos: Vec2, prey_pos: Vec2, seed: u64) -> Self {
        Self::with_rng(player_pos, prey_pos, fastrand::Rng::with_seed(seed))
    }

    fn with_rng(player_pos: Vec2, prey_pos: Vec2, rng: fastrand::Rng) -> Self {
        Self {
            player: Player::new(player_pos),
            prey: Prey::new(prey_pos),
            rng,
        }
    }

    /// Advance both actors one fixed tick. Order is a hard invariant: the
    /// prey always reacts to the hunter's state from this tick, never the
    /// previous one.
    pub fn tick(&mut self, input: &TickInput) {
        // 1. Hunter: steering, speed, dive timers.
        self.player.update(input);
        // 2. Prey: evasion and catch detection against the updated hunter.
        self.prey.update(input, &self.player, &mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: f32 = 1.0 / 60.0;

    #[test]
    fn a_dive_started_this_tick_already_counts_for_the_catch() {
        // Player-first ordering: the dive begins and the catch lands inside
        // the same tick.
        let mut sim = Simulation::with_seed(Vec2::ZERO, Vec2::ZERO, 1);
        let input = TickInput {
            dive_held: true,
            prey_contact: true,
            ..TickInput::default()
        };
        sim.tick(&input);
        assert!(sim.player.is_diving());
        assert!(sim.prey.is_caught());

        // Without the dive the same contact is harmless.
        let mut control = Simulation::with_seed(Vec2::ZERO, Vec2::ZERO, 1);
        let input = TickInput {
            prey_contact: true,
            ..TickInput::default()
        };
        control.tick(&input);
        assert!(!control.prey.is_caught());
    }

    #[test]
    fn both_actors_move_over_a_chase() {
        let mut sim = Simulation::with_seed(Vec2::new(-4.0, 0.0), Vec2::new(4.0, 0.0), 1234);
        let player_start = sim.player.position;
        let prey_start = sim.prey.position;

        for tick in 0..2000 {
            let input = TickInput {
                now: tick as f32 * TICK,
                pointer: sim.prey.position,
                fast_held: true,
                ..TickInput::default()
            };
            sim.tick(&input);
        }

        assert_ne!(sim.player.position, player_start);
        assert_ne!(sim.prey.position, prey_start);
    }

    #[test]
    fn seeded_runs_are_deterministic() {
        let script = |sim: &mut Simulation| {
            for tick in 0..600 {
                let now = tick as f32 * TICK;
                let input = TickInput {
                    now,
                    pointer: sim.prey.position,
                    fast_held: tick % 120 < 90,
                    dive_held: tick % 200 > 180,
                    ..TickInput::default()
                };
                sim.tick(&input);
            }
        };

        let mut a = Simulation::with_seed(Vec2::new(-4.0, 0.0), Vec2::new(4.0, 0.0), 42);
        let mut b = Simulation::with_seed(Vec2::new(-4.0, 0.0), Vec2::new(4.0, 0.0), 42);
        script(&mut a);
        script(&mut b);

        assert_eq!(a.player.position, b.player.position);
        assert_eq!(a.prey.position, b.prey.position);
        assert_eq!(a.player.state().label(), b.player.state().label());
        assert_eq!(a.prey.state().label(), b.prey.state().label());
    }
}
