//! Collision detection between the player band and obstacles
//!
//! Everything is axis-aligned interval overlap in one dimension: an obstacle
//! collides when it shares the player's lane and its vertical band overlaps
//! the player's. The obstacle band is always exactly one player-height tall;
//! `length` stretches the drawn rectangle but not the collision extent.

use crate::consts::{PLAYER_HEIGHT_FRAC, PLAYER_Y_FRAC};

use super::state::{Obstacle, Viewport};

/// The fixed vertical band the player occupies: `(top, height)`
#[inline]
pub fn player_band(viewport: Viewport) -> (f32, f32) {
    (
        viewport.height * PLAYER_Y_FRAC,
        viewport.height * PLAYER_HEIGHT_FRAC,
    )
}

/// Whether the obstacle currently overlaps the player
pub fn hits_player(obstacle: &Obstacle, player_lane: usize, viewport: Viewport) -> bool {
    let (player_y, player_height) = player_band(viewport);
    obstacle.lane == player_lane
        && obstacle.y + player_height > player_y
        && obstacle.y < player_y + player_height
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport::new(390.0, 844.0);

    fn obstacle(lane: usize, y: f32) -> Obstacle {
        Obstacle { lane, y, length: 1 }
    }

    #[test]
    fn test_hit_inside_player_band() {
        let (player_y, _) = player_band(VIEWPORT);
        assert!(hits_player(&obstacle(2, player_y), 2, VIEWPORT));
    }

    #[test]
    fn test_miss_wrong_lane() {
        let (player_y, _) = player_band(VIEWPORT);
        assert!(!hits_player(&obstacle(3, player_y), 2, VIEWPORT));
    }

    #[test]
    fn test_overlap_edges() {
        let (player_y, player_height) = player_band(VIEWPORT);

        // Bottom edge touching the player top: o.y + h == player_y is a miss
        assert!(!hits_player(&obstacle(2, player_y - player_height), 2, VIEWPORT));
        // One unit past that boundary is a hit
        assert!(hits_player(
            &obstacle(2, player_y - player_height + 1.0),
            2,
            VIEWPORT
        ));

        // Top edge at the player bottom: o.y == player_y + h is a miss
        assert!(!hits_player(&obstacle(2, player_y + player_height), 2, VIEWPORT));
        // Just above that boundary is a hit
        assert!(hits_player(
            &obstacle(2, player_y + player_height - 1.0),
            2,
            VIEWPORT
        ));
    }

    #[test]
    fn test_length_does_not_extend_collision_band() {
        let (player_y, player_height) = player_band(VIEWPORT);

        // A length-3 obstacle whose drawn rectangle would reach the player
        // but whose one-unit band ends well above it
        let tall = Obstacle {
            lane: 2,
            y: player_y - player_height * 2.5,
            length: 3,
        };
        assert!(!hits_player(&tall, 2, VIEWPORT));

        // Same position, drawn height irrelevant once the base band overlaps
        let overlapping = Obstacle {
            lane: 2,
            y: player_y - player_height * 0.5,
            length: 3,
        };
        assert!(hits_player(&overlapping, 2, VIEWPORT));
    }
}
