//! Lane Rush - a lane-based dodging game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (state, stepping, collision)
//! - `render`: Scene rendering over a generic 2D drawing surface
//! - `history`: Score history log with LocalStorage persistence

pub mod history;
pub mod render;
pub mod sim;

pub use history::ScoreHistory;
pub use render::{Color, Surface, render};
pub use sim::{GameState, InputEvent, Obstacle, Viewport, step};

/// Game configuration constants
pub mod consts {
    /// Number of lanes the road is divided into
    pub const LANE_COUNT: usize = 5;

    /// Speed multiplier at the start of a run
    pub const INITIAL_SPEED: f32 = 1.0;
    /// Speed multiplier ceiling
    pub const MAX_SPEED: f32 = 5.0;
    /// Milliseconds between speed bumps
    pub const SPEED_INCREASE_INTERVAL_MS: f64 = 2000.0;
    /// Speed added per bump
    pub const SPEED_INCREASE_AMOUNT: f32 = 0.1;

    /// Spawn period (in score units) at speed 1.0
    pub const INITIAL_SPAWN_INTERVAL: u32 = 200;
    /// Spawn period never shrinks below this
    pub const MIN_SPAWN_INTERVAL: u32 = 100;

    /// Design reference device height; fall speed is normalized against it
    /// so gameplay feel is independent of the actual viewport size
    pub const REFERENCE_HEIGHT: f32 = 844.0;

    /// Top of the player band, as a fraction of viewport height
    pub const PLAYER_Y_FRAC: f32 = 0.8;
    /// Player height as a fraction of viewport height
    pub const PLAYER_HEIGHT_FRAC: f32 = 0.1;
    /// Player width as a fraction of lane width
    pub const PLAYER_WIDTH_FRAC: f32 = 0.5;
    /// Obstacles spawn this fraction of the viewport height above the top edge
    pub const SPAWN_HEAD_START_FRAC: f32 = 0.1;

    /// Minimum milliseconds between simulation steps (driver cadence)
    pub const STEP_INTERVAL_MS: f64 = 50.0;
}

/// Width of one lane for the given viewport width
#[inline]
pub fn lane_width(viewport_width: f32) -> f32 {
    viewport_width / consts::LANE_COUNT as f32
}

/// Left edge of a lane-centered rectangle of the given width
#[inline]
pub fn lane_origin_x(lane: usize, viewport_width: f32, rect_width: f32) -> f32 {
    let lane_w = lane_width(viewport_width);
    lane as f32 * lane_w + (lane_w - rect_width) / 2.0
}
