//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes in as an argument, never from a clock
//! - Seeded RNG only, passed in by the driver
//! - `step` returns a fresh state and never mutates its input
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod step;

pub use collision::{hits_player, player_band};
pub use state::{GameState, InputEvent, Obstacle, Viewport};
pub use step::{spawn_rate_for, step};
