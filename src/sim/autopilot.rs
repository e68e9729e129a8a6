//! Demo-mode driver
//!
//! Reads the session and decides which way to steer this frame. It only
//! produces the same intents a human would, so the simulation stays unaware
//! of who is playing.

use super::state::{GameState, PowerUpKind};
use crate::consts::*;

/// How far above the player an obstacle is considered a threat. A full lane
/// change takes ~23 frames, in which an obstacle scrolls ~184 units.
const THREAT_LOOKAHEAD: f32 = 200.0;

/// Returns `(move_left, move_right)` for this frame
pub fn steer(state: &GameState) -> (bool, bool) {
    let player = &state.player;
    if player.moving {
        return (false, false);
    }
    let shielded = state.effects.is_active(PowerUpKind::Shield);
    let lane = player.lane;

    if !shielded && lane_threatened(state, lane) {
        // Dodge toward the safest neighbour, preferring the middle
        let mut options: Vec<usize> = neighbours(lane)
            .filter(|&l| !lane_threatened(state, l))
            .collect();
        options.sort_by_key(|&l| l.abs_diff(PLAYER_START_LANE));
        return match options.first() {
            Some(&target) => direction(lane, target),
            None => (false, false),
        };
    }

    let Some(target) = reward_lane(state) else {
        return (false, false);
    };
    if target == lane {
        return (false, false);
    }
    let next = if target < lane { lane - 1 } else { lane + 1 };
    if !shielded && lane_threatened(state, next) {
        return (false, false);
    }
    direction(lane, next)
}

fn neighbours(lane: usize) -> impl Iterator<Item = usize> {
    [lane.checked_sub(1), Some(lane + 1)]
        .into_iter()
        .flatten()
        .filter(|&l| l < LANE_COUNT)
}

fn direction(from: usize, to: usize) -> (bool, bool) {
    (to < from, to > from)
}

/// An obstacle in `lane` is between the lookahead line and the player's feet
fn lane_threatened(state: &GameState, lane: usize) -> bool {
    let top = state.player.y - THREAT_LOOKAHEAD;
    let bottom = state.player.y + PLAYER_HEIGHT;
    state.obstacles.iter().any(|o| {
        let rect = o.rect();
        o.lane == lane && rect.max().y > top && rect.min.y < bottom
    })
}

/// Lane of the closest pickup still ahead of the player (power-ups first)
fn reward_lane(state: &GameState) -> Option<usize> {
    let y = state.player.y;
    closest_ahead(y, state.powerups.iter().map(|p| (p.lane, p.pos.y)))
        .or_else(|| closest_ahead(y, state.coins.iter().map(|c| (c.lane, c.pos.y))))
}

fn closest_ahead(player_y: f32, items: impl Iterator<Item = (usize, f32)>) -> Option<usize> {
    items
        .filter(|&(_, y)| y < player_y)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(lane, _)| lane)
}
