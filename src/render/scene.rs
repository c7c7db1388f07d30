//! The scene: state projected onto a surface
//!
//! Stateless by contract. Everything drawn here is a function of the game
//! state and the viewport; no timers, no randomness, no reads from the
//! backend.

use glam::Vec2;

use crate::consts::*;
use crate::sim::{GameState, Viewport};
use crate::{lane_origin_x, lane_width};

use super::surface::{Color, Surface};

/// Road background
const ROAD: Color = Color::from_rgb_u8(0x33, 0x33, 0x33);
/// Lane separator strokes
const LANE_MARKING: Color = Color::from_rgb_u8(0xff, 0xff, 0xff);
/// The player's vehicle
const PLAYER: Color = Color::new(0.0, 0.0, 1.0, 1.0);
/// Obstacles
const OBSTACLE: Color = Color::new(1.0, 0.0, 0.0, 1.0);
/// HUD text
const HUD_TEXT: Color = Color::from_rgb_u8(0xff, 0xff, 0xff);

/// Separator dash pattern: 5 on, 10 off
const LANE_DASH: [f32; 2] = [5.0, 10.0];

/// HUD left margin in viewport units
const HUD_MARGIN_X: f32 = 10.0;
/// HUD font size as a fraction of viewport height
const HUD_TEXT_FRAC: f32 = 0.03;

/// Draw one frame of the scene: road, lane markings, player, obstacles, HUD.
pub fn render<S: Surface + ?Sized>(surface: &mut S, state: &GameState, viewport: Viewport) {
    surface.clear(viewport);
    surface.fill_rect(
        Vec2::ZERO,
        Vec2::new(viewport.width, viewport.height),
        ROAD,
    );

    for i in 1..LANE_COUNT {
        let x = i as f32 * viewport.width / LANE_COUNT as f32;
        surface.stroke_dashed_line(
            Vec2::new(x, 0.0),
            Vec2::new(x, viewport.height),
            LANE_MARKING,
            &LANE_DASH,
        );
    }

    let player_width = lane_width(viewport.width) * PLAYER_WIDTH_FRAC;
    let player_height = viewport.height * PLAYER_HEIGHT_FRAC;

    surface.fill_rect(
        Vec2::new(
            lane_origin_x(state.player_lane, viewport.width, player_width),
            viewport.height * PLAYER_Y_FRAC,
        ),
        Vec2::new(player_width, player_height),
        PLAYER,
    );

    for obstacle in &state.obstacles {
        surface.fill_rect(
            Vec2::new(
                lane_origin_x(obstacle.lane, viewport.width, player_width),
                obstacle.y,
            ),
            Vec2::new(player_width, player_height * obstacle.length as f32),
            OBSTACLE,
        );
    }

    let font = viewport.height * HUD_TEXT_FRAC;
    surface.fill_text(
        &format!("Score: {}", state.score),
        Vec2::new(HUD_MARGIN_X, viewport.height * 0.05),
        font,
        HUD_TEXT,
    );
    surface.fill_text(
        &format!("Speed: {:.2}x", state.speed),
        Vec2::new(HUD_MARGIN_X, viewport.height * 0.10),
        font,
        HUD_TEXT,
    );
    surface.fill_text(
        &format!("Spawn Rate: {}", state.spawn_rate),
        Vec2::new(HUD_MARGIN_X, viewport.height * 0.15),
        font,
        HUD_TEXT,
    );
}
