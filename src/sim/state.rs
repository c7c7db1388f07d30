//! Game state and core simulation types
//!
//! The state is a plain value: the driver owns exactly one `GameState` at a
//! time, hands it to `step` by reference and replaces it with the result.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Drawable area in abstract units. Both dimensions must be positive;
/// the simulation performs no clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A descending obstacle occupying one lane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Lane index in `[0, LANE_COUNT)`
    pub lane: usize,
    /// Top edge, in viewport units; grows downward each step
    pub y: f32,
    /// Rendered height in player-height units (1..=3).
    /// Does not widen the collision band.
    pub length: u8,
}

impl Obstacle {
    /// Spawn a fresh obstacle above the visible area
    pub fn spawn<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Self {
        Self {
            lane: rng.random_range(0..LANE_COUNT),
            y: -viewport.height * SPAWN_HEAD_START_FRAC,
            length: rng.random_range(1..=3),
        }
    }
}

/// Discrete input events, applied between steps as single-field edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MoveLeft,
    MoveRight,
    TogglePause,
    /// No state effect; the driver surfaces the score history
    RequestHistory,
}

/// Complete game state for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Lane the player currently occupies, always in `[0, LANE_COUNT)`
    pub player_lane: usize,
    /// Live obstacles in insertion order
    pub obstacles: Vec<Obstacle>,
    /// One point per non-paused step; frozen once the run ends
    pub score: u64,
    /// Terminal flag; a finished run only goes away via restart
    pub is_game_over: bool,
    /// While set, `step` is a no-op but rendering continues
    pub is_paused: bool,
    /// Fall-speed multiplier, `INITIAL_SPEED..=MAX_SPEED`, never decreases
    pub speed: f32,
    /// Clock value (ms) of the last speed bump
    pub last_speed_increase_ms: f64,
    /// Spawn period in score units; recomputed on each speed bump
    pub spawn_rate: u32,
}

impl GameState {
    /// Fresh run: player centered, paused, initial speed and spawn rate
    pub fn new() -> Self {
        Self {
            player_lane: LANE_COUNT / 2,
            obstacles: Vec::new(),
            score: 0,
            is_game_over: false,
            is_paused: true,
            speed: INITIAL_SPEED,
            last_speed_increase_ms: 0.0,
            spawn_rate: INITIAL_SPAWN_INTERVAL,
        }
    }

    /// Apply a discrete input event.
    ///
    /// Lane changes clamp at the road edges and are ignored once the run has
    /// ended; the terminal state owns its final `player_lane` and `score`.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::MoveLeft if !self.is_game_over => {
                self.player_lane = self.player_lane.saturating_sub(1);
            }
            InputEvent::MoveRight if !self.is_game_over => {
                self.player_lane = (self.player_lane + 1).min(LANE_COUNT - 1);
            }
            InputEvent::TogglePause => self.is_paused = !self.is_paused,
            _ => {}
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_new_state_shape() {
        let state = GameState::new();
        assert_eq!(state.player_lane, LANE_COUNT / 2);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.score, 0);
        assert!(state.is_paused);
        assert!(!state.is_game_over);
        assert_eq!(state.speed, INITIAL_SPEED);
        assert_eq!(state.spawn_rate, INITIAL_SPAWN_INTERVAL);
    }

    #[test]
    fn test_lane_moves_clamp_at_edges() {
        let mut state = GameState::new();

        for _ in 0..LANE_COUNT + 2 {
            state.apply(InputEvent::MoveLeft);
        }
        assert_eq!(state.player_lane, 0);

        for _ in 0..LANE_COUNT + 2 {
            state.apply(InputEvent::MoveRight);
        }
        assert_eq!(state.player_lane, LANE_COUNT - 1);
    }

    #[test]
    fn test_toggle_pause_flips_flag() {
        let mut state = GameState::new();
        assert!(state.is_paused);
        state.apply(InputEvent::TogglePause);
        assert!(!state.is_paused);
        state.apply(InputEvent::TogglePause);
        assert!(state.is_paused);
    }

    #[test]
    fn test_lane_moves_ignored_after_game_over() {
        let mut state = GameState::new();
        state.is_game_over = true;
        let lane = state.player_lane;

        state.apply(InputEvent::MoveLeft);
        state.apply(InputEvent::MoveRight);
        assert_eq!(state.player_lane, lane);
    }

    #[test]
    fn test_request_history_is_a_no_op() {
        let mut state = GameState::new();
        let before = state.clone();
        state.apply(InputEvent::RequestHistory);
        assert_eq!(state, before);
    }

    #[test]
    fn test_spawned_obstacle_in_range() {
        let viewport = Viewport::new(390.0, 844.0);
        let mut rng = Pcg32::seed_from_u64(7);

        for _ in 0..100 {
            let obstacle = Obstacle::spawn(viewport, &mut rng);
            assert!(obstacle.lane < LANE_COUNT);
            assert!((1..=3).contains(&obstacle.length));
            assert_eq!(obstacle.y, -viewport.height * SPAWN_HEAD_START_FRAC);
        }
    }
}
