use glam::Vec2;

use crate::angles::heading_vec;
use crate::player::Player;
use crate::sim::TickInput;

/// Hop flight time in seconds.
const HOP_TIME: f32 = 0.2;
/// Hop travel speed in world units per second.
const HOP_SPEED: f32 = 6.0;
/// Per-tick probability of a spontaneous hop.
const HOP_CHANCE: f32 = 0.1;
/// Hunter proximity (world units) that always solicits a hop.
const SCARED_DISTANCE: f32 = 1.0;
/// Upper bound on candidate landing spots examined per hop.
const MAX_MOVE_ATTEMPTS: u32 = 50;
/// Carry position in the hunter's facing space once caught.
const ATTACH_OFFSET: Vec2 = Vec2::new(0.0, -0.5);
/// Extra cooldown tacked onto a committed hop, in seconds.
const HOP_COOLDOWN_GRACE: f32 = 0.1;
/// Cooldown after a failed landing-spot search, in seconds.
const HOP_RETRY_DELAY: f32 = 0.1;

/// Behavior state of the prey. `Caught` is terminal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PreyState {
    Idle,
    HopStart,
    Hop {
        started_at: f32,
        start_pos: Vec2,
        end_pos: Vec2,
    },
    Caught {
        /// Offset in the hunter's facing space; the host composes the
        /// carried world position from it.
        local_offset: Vec2,
    },
}

impl PreyState {
    /// Stable name for logs and the host's state-keyed visuals.
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::HopStart => "HopStart",
            Self::Hop { .. } => "Hop",
            Self::Caught { .. } => "Caught",
        }
    }
}

/// External tunables for the prey. Defaults give the stock arcade feel;
/// times are seconds, speeds world units per second.
#[derive(Debug, Clone, Copy)]
pub struct PreyTunables {
    pub hop_time: f32,
    pub hop_speed: f32,
    pub hop_chance: f32,
    pub scared_distance: f32,
    pub max_move_attempts: u32,
}

impl PreyTunables {
    /// Ground distance covered by one full hop.
    pub fn hop_length(&self) -> f32 {
        self.hop_time * self.hop_speed
    }
}

impl Default for PreyTunables {
    fn default() -> Self {
        Self {
            hop_time: HOP_TIME,
            hop_speed: HOP_SPEED,
            hop_chance: HOP_CHANCE,
            scared_distance: SCARED_DISTANCE,
            max_move_attempts: MAX_MOVE_ATTEMPTS,
        }
    }
}

/// A candidate landing spot from the hop search.
#[derive(Debug, Clone, Copy)]
struct HopCandidate {
    heading: f32,
    end_pos: Vec2,
    distance_to_player: f32,
}

/// The hunted prey: hops away from the hunter in bursts and goes limp once
/// caught mid-dive.
#[derive(Debug, Clone)]
pub struct Prey {
    /// World position.
    pub position: Vec2,
    /// Heading of the last committed hop, in degrees.
    pub heading: f32,
    pub tunables: PreyTunables,
    state: PreyState,
    hop_cooldown_until: f32,
}

impl Prey {
    pub fn new(position: Vec2) -> Self {
        Self::with_tunables(position, PreyTunables::default())
    }

    pub fn with_tunables(position: Vec2, tunables: PreyTunables) -> Self {
        Self {
            position,
            heading: 0.0,
            tunables,
            state: PreyState::Idle,
            hop_cooldown_until: 0.0,
        }
    }

    /// Current behavior state, for the host's state-keyed visuals.
    pub fn state(&self) -> PreyState {
        self.state
    }

    pub fn is_caught(&self) -> bool {
        matches!(self.state, PreyState::Caught { .. })
    }

    /// Carry offset in the hunter's facing space, once caught.
    pub fn attachment(&self) -> Option<Vec2> {
        match self.state {
            PreyState::Caught { local_offset } => Some(local_offset),
            _ => None,
        }
    }

    /// Advance one fixed tick against the already-updated hunter.
    pub fn update(&mut self, input: &TickInput, player: &Player, rng: &mut fastrand::Rng) {
        if self.is_caught() {
            return;
        }

        // A dive through the contact volume ends the chase from any state.
        if input.prey_contact && player.is_diving() {
            self.state = PreyState::Caught {
                local_offset: ATTACH_OFFSET,
            };
            return;
        }

        match self.state {
            PreyState::Idle => self.consider_hop(input.now, player, rng),
            PreyState::HopStart => self.start_hop(input, player, rng),
            PreyState::Hop {
                started_at,
                start_pos,
                end_pos,
            } => self.advance_hop(started_at, start_pos, end_pos, input.now),
            PreyState::Caught { .. } => {}
        }
    }

    /// Idle action: roll for a spontaneous hop, or get spooked into one by a
    /// close hunter. Gated by the hop cooldown.
    fn consider_hop(&mut self, now: f32, player: &Player, rng: &mut fastrand::Rng) {
        if now <= self.hop_cooldown_until {
            return;
        }
        // The roll burns every eligible tick, fear or no fear.
        let chance = rng.f32();
        let hunter_distance = self.position.distance(player.position);
        if chance < self.tunables.hop_chance || hunter_distance < self.tunables.scared_distance {
            self.state = PreyState::HopStart;
        }
    }

    /// HopStart action: search for a landing spot and either commit to the
    /// hop or fall back to idle for a short retry delay.
    fn start_hop(&mut self, input: &TickInput, player: &Player, rng: &mut fastrand::Rng) {
        match self.pick_hop_target(input, player, rng) {
            Some(best) => {
                self.heading = best.heading;
                self.state = PreyState::Hop {
                    started_at: input.now,
                    start_pos: self.position,
                    end_pos: best.end_pos,
                };
                self.hop_cooldown_until = input.now + self.tunables.hop_time + HOP_COOLDOWN_GRACE;
            }
            None => {
                self.state = PreyState::Idle;
                self.hop_cooldown_until = input.now + HOP_RETRY_DELAY;
            }
        }
    }

    /// Bounded random search for the on-screen landing spot farthest from
    /// the hunter. `None` when every candidate lands off-screen.
    fn pick_hop_target(
        &self,
        input: &TickInput,
        player: &Player,
        rng: &mut fastrand::Rng,
    ) -> Option<HopCandidate> {
        let hop_length = self.tunables.hop_length();
        let mut best: Option<HopCandidate> = None;

        for _ in 0..self.tunables.max_move_attempts {
            let heading = rng.f32() * 360.0;
            let end_pos = self.position + heading_vec(heading) * hop_length;
            if !input.screen.contains(end_pos) {
                continue;
            }
            let distance_to_player = end_pos.distance(player.position);
            // Strictly farther wins; ties keep the first found.
            if best.map_or(true, |b| distance_to_player > b.distance_to_player) {
                best = Some(HopCandidate {
                    heading,
                    end_pos,
                    distance_to_player,
                });
            }
        }
        best
    }

    /// Hop action: glide from start to end over `hop_time`, then land on the
    /// end position and re-arm immediately.
    fn advance_hop(&mut self, started_at: f32, start_pos: Vec2, end_pos: Vec2, now: f32) {
        let progress = ((now - started_at) / self.tunables.hop_time).clamp(0.0, 1.0);
        self.position = start_pos.lerp(end_pos, progress);
        if progress >= 1.0 {
            self.state = PreyState::Idle;
            self.hop_cooldown_until = now;
        }
    }
}
