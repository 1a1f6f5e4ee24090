//! Per-tick core of a two-actor arcade chase: a pointer-steered hunter
//! and a hopping prey, each a small state machine stepped at a fixed rate.
//!
//! The crate owns behavior only. Rendering, input devices, physics overlap
//! tests and the viewport all belong to the host, which feeds them in as
//! plain data through [`sim::TickInput`] and reads actor state back for its
//! own visuals. [`sim::Simulation`] pins the one ordering rule: the hunter
//! updates before the prey every tick.

pub mod angles;
pub mod app;
pub mod player;
pub mod prey;
pub mod screen;
pub mod sim;

pub use player::{Player, PlayerState, PlayerTunables};
pub use prey::{Prey, PreyState, PreyTunables};
pub use screen::Screen;
pub use sim::{Simulation, TickInput};
