use glam::Vec2;

use crate::angles::{delta_angle, heading_vec, lerp, lerp_angle};
use crate::sim::TickInput;

/// Top speed in world units per tick.
const MAX_SPEED: f32 = 0.20;
/// Fraction of top speed that splits the slow band from the fast band.
const SLOW_SPEED_FACTOR: f32 = 0.66;
/// Speed gained/shed per tick from the speed button, and the interpolation
/// factor easing speed toward its target.
const INC_SPEED: f32 = 0.0025;
/// Normalized pointer distance beyond which top speed is requested.
const MAGNITUDE_FAST: f32 = 0.6;
/// Normalized pointer distance beyond which slow speed is requested.
const MAGNITUDE_SLOW: f32 = 0.06;
/// Heading interpolation factor per tick.
const FAST_ROTATE_SPEED: f32 = 0.2;
/// Angular error (degrees) a fast mover can absorb without the turn penalty.
const FAST_ROTATE_MAX: f32 = 10.0;
/// Dive flight time in seconds.
const DIVE_TIME: f32 = 0.3;
/// Lockout after a dive lands, in seconds.
const DIVE_RECOVERY_TIME: f32 = 0.5;
/// Dive length in world units.
const DIVE_DISTANCE: f32 = 3.0;

/// Movement state of the hunter. Dive bookkeeping lives inside the variants
/// so it cannot outlive the dive that created it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerState {
    MoveSlow,
    MoveFast,
    Diving {
        start_pos: Vec2,
        end_pos: Vec2,
        started_at: f32,
    },
    Recovering {
        started_at: f32,
    },
}

impl PlayerState {
    /// Stable name for logs and the host's state-keyed visuals.
    pub fn label(self) -> &'static str {
        match self {
            Self::MoveSlow => "MoveSlow",
            Self::MoveFast => "MoveFast",
            Self::Diving { .. } => "Diving",
            Self::Recovering { .. } => "Recovering",
        }
    }
}

/// External tunables for the hunter. Defaults give the stock arcade feel;
/// speeds are world units per tick, times are seconds.
#[derive(Debug, Clone, Copy)]
pub struct PlayerTunables {
    pub max_speed: f32,
    /// Ceiling of the slow-movement band.
    pub slow_speed: f32,
    pub inc_speed: f32,
    pub magnitude_fast: f32,
    pub magnitude_slow: f32,
    pub fast_rotate_speed: f32,
    pub fast_rotate_max: f32,
    pub dive_time: f32,
    pub dive_recovery_time: f32,
    pub dive_distance: f32,
}

impl Default for PlayerTunables {
    fn default() -> Self {
        Self {
            max_speed: MAX_SPEED,
            slow_speed: MAX_SPEED * SLOW_SPEED_FACTOR,
            inc_speed: INC_SPEED,
            magnitude_fast: MAGNITUDE_FAST,
            magnitude_slow: MAGNITUDE_SLOW,
            fast_rotate_speed: FAST_ROTATE_SPEED,
            fast_rotate_max: FAST_ROTATE_MAX,
            dive_time: DIVE_TIME,
            dive_recovery_time: DIVE_RECOVERY_TIME,
            dive_distance: DIVE_DISTANCE,
        }
    }
}

/// The player-controlled hunter: steers toward the pointer, sprints on one
/// button, dives on the other.
#[derive(Debug, Clone)]
pub struct Player {
    /// World position.
    pub position: Vec2,
    /// Travel heading in degrees. Sprites face `heading - 180`.
    pub heading: f32,
    pub tunables: PlayerTunables,
    state: PlayerState,
    speed: f32,
    target_speed: f32,
    target_heading: f32,
}

impl Player {
    pub fn new(position: Vec2) -> Self {
        Self::with_tunables(position, PlayerTunables::default())
    }

    pub fn with_tunables(position: Vec2, tunables: PlayerTunables) -> Self {
        Self {
            position,
            heading: 0.0,
            tunables,
            state: PlayerState::MoveSlow,
            speed: 0.0,
            target_speed: 0.0,
            target_heading: 0.0,
        }
    }

    /// Current movement state, for the host's state-keyed visuals.
    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Current speed in world units per tick. Stays within `[0, max_speed]`.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// True while mid-dive. The sole query the prey relies on.
    pub fn is_diving(&self) -> bool {
        matches!(self.state, PlayerState::Diving { .. })
    }

    /// Visual facing in degrees (sprites point opposite the travel heading).
    pub fn orientation(&self) -> f32 {
        self.heading - 180.0
    }

    /// Right axis of the visual facing; points opposite the travel heading.
    fn facing_right(&self) -> Vec2 {
        -heading_vec(self.heading)
    }

    fn dive_locked(&self) -> bool {
        matches!(
            self.state,
            PlayerState::Diving { .. } | PlayerState::Recovering { .. }
        )
    }

    /// Advance one fixed tick. Reads the pointer, both buttons, and the
    /// screen extent from `input`; total over well-formed inputs.
    pub fn update(&mut self, input: &TickInput) {
        self.check_for_dive(input);

        // Speed button integration, applied in every state.
        if input.fast_held {
            self.speed += self.tunables.inc_speed;
        } else {
            self.speed -= self.tunables.inc_speed;
        }
        self.speed = self.speed.clamp(0.0, self.tunables.max_speed);

        self.update_targets(input);

        // The movement band follows speed unless a dive owns the state.
        if !self.dive_locked() {
            self.state = if self.speed > self.tunables.slow_speed {
                PlayerState::MoveFast
            } else {
                PlayerState::MoveSlow
            };
        }

        match self.state {
            PlayerState::MoveSlow | PlayerState::MoveFast => self.move_and_rotate(),
            PlayerState::Diving {
                start_pos,
                end_pos,
                started_at,
            } => self.advance_dive(start_pos, end_pos, started_at, input.now),
            PlayerState::Recovering { started_at } => {
                if input.now - started_at > self.tunables.dive_recovery_time {
                    self.state = PlayerState::MoveSlow;
                }
            }
        }
    }

    /// Start a dive on the dive button, unless one is already in flight or
    /// still being recovered from.
    fn check_for_dive(&mut self, input: &TickInput) {
        if !input.dive_held || self.dive_locked() {
            return;
        }
        self.speed = 0.0;
        self.state = PlayerState::Diving {
            start_pos: self.position,
            // The lunge runs against the facing-space right axis, which is
            // forward along the travel heading.
            end_pos: self.position - self.facing_right() * self.tunables.dive_distance,
            started_at: input.now,
        };
    }

    /// Derive the requested heading and speed from the pointer offset.
    fn update_targets(&mut self, input: &TickInput) {
        let offset = input.pointer - self.position;
        self.target_heading = offset.y.atan2(offset.x).to_degrees();

        let pointer_mag = offset.length() / input.screen.extent_len();
        self.target_speed = if pointer_mag > self.tunables.magnitude_fast {
            self.tunables.max_speed
        } else if pointer_mag > self.tunables.magnitude_slow {
            self.tunables.slow_speed
        } else {
            0.0
        };
    }

    /// Shared MoveSlow/MoveFast action: ease speed and heading toward their
    /// targets, then advance along the heading.
    fn move_and_rotate(&mut self) {
        let t = self.tunables;
        self.speed = lerp(self.speed, self.target_speed, t.inc_speed);

        let angle_error = delta_angle(self.heading, self.target_heading);
        if self.state == PlayerState::MoveFast && angle_error.abs() > t.fast_rotate_max {
            // Sharp turns shed speed instead of rotating.
            self.speed -= t.inc_speed * 5.0;
            if self.speed < t.slow_speed {
                self.state = PlayerState::MoveSlow;
            }
        } else {
            self.heading = lerp_angle(self.heading, self.target_heading, t.fast_rotate_speed);
        }

        self.position += heading_vec(self.heading) * self.speed;
    }

    /// Dive action: glide from start to end over `dive_time`, then land on
    /// the end position and enter recovery.
    fn advance_dive(&mut self, start_pos: Vec2, end_pos: Vec2, started_at: f32, now: f32) {
        let elapsed = now - started_at;
        if elapsed < self.tunables.dive_time {
            self.position = start_pos.lerp(end_pos, elapsed / self.tunables.dive_time);
        } else {
            self.position = end_pos;
            self.state = PlayerState::Recovering { started_at: now };
        }
    }
}
