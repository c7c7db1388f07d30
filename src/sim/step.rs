//! The simulation step
//!
//! One call advances the game by one discrete tick: difficulty, obstacle
//! motion, spawning, collision, scoring. The driver decides the cadence;
//! the step itself only ever sees the clock value it is handed.

use rand::Rng;

use crate::consts::*;

use super::collision::hits_player;
use super::state::{GameState, Obstacle, Viewport};

/// Spawn period for a given speed: inverse-square-root curve with a floor
#[inline]
pub fn spawn_rate_for(speed: f32) -> u32 {
    let rate = (INITIAL_SPAWN_INTERVAL as f32 / speed.sqrt()).floor() as u32;
    rate.max(MIN_SPAWN_INTERVAL)
}

/// Advance the game by one step.
///
/// Total and pure: never fails, never mutates `state`, and the returned
/// value shares no obstacle storage with the input. A paused or finished
/// state comes back unchanged.
pub fn step<R: Rng + ?Sized>(
    state: &GameState,
    now_ms: f64,
    viewport: Viewport,
    rng: &mut R,
) -> GameState {
    if state.is_paused || state.is_game_over {
        return state.clone();
    }

    let mut next = state.clone();

    // Difficulty ramp: bump speed on a fixed wall-clock interval, and only
    // then recompute the spawn period from the new speed.
    if now_ms - next.last_speed_increase_ms >= SPEED_INCREASE_INTERVAL_MS {
        next.speed = (next.speed + SPEED_INCREASE_AMOUNT).min(MAX_SPEED);
        next.last_speed_increase_ms = now_ms;
        next.spawn_rate = spawn_rate_for(next.speed);
    }

    // Advance, then cull anything that has scrolled past the bottom edge.
    let fall = next.speed * (viewport.height / REFERENCE_HEIGHT);
    for obstacle in &mut next.obstacles {
        obstacle.y += fall;
    }
    next.obstacles.retain(|o| o.y < viewport.height);

    // Spawn cadence is tied to the score counter, not the clock.
    if next.score % u64::from(next.spawn_rate) == 0 {
        next.obstacles.push(Obstacle::spawn(viewport, rng));
    }

    let collided = next
        .obstacles
        .iter()
        .any(|o| hits_player(o, next.player_lane, viewport));

    if collided {
        next.is_game_over = true;
    } else {
        next.score += 1;
    }

    next
}
