//! Frame-stepped simulation tick
//!
//! Core game loop that advances the session one frame deterministically.

use super::autopilot;
use super::resolve::resolve_collisions;
use super::state::{GameEvent, GameState};
use crate::consts::*;

/// Input intents sampled once per frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Only honoured while the game is over
    pub restart: bool,
    /// Handled by the host loop; the simulation ignores it
    pub quit: bool,
    /// Demo mode - the autopilot steers instead of the player
    pub autopilot: bool,
}

/// Advance the session by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.is_game_over() {
        if input.restart {
            state.restart();
        }
        return;
    }

    let (move_left, move_right) = if input.autopilot {
        autopilot::steer(state)
    } else {
        (input.move_left, input.move_right)
    };

    // Left wins when both are held; right still applies if left is blocked
    let moved = (move_left && state.player.request_move_left())
        || (move_right && state.player.request_move_right());
    if moved {
        state.events.push(GameEvent::LaneChange {
            lane: state.player.lane,
        });
    }

    state.frame += 1;
    state.player.advance();
    advance_entities(state);

    let spawns = state.spawner.tick(&state.tuning, &mut state.rng);
    for spawn in spawns {
        state.apply_spawn(spawn);
    }

    let expired = state.effects.tick(&mut state.player);
    for kind in expired {
        log::debug!("frame {}: {:?} expired", state.frame, kind);
        state.events.push(GameEvent::EffectExpired { kind });
    }

    // The high score was settled inside a crash; the rest of the frame still runs
    resolve_collisions(state);

    state.background_y = (state.background_y + state.tuning.background_speed) % SCREEN_HEIGHT;

    let idle = state.tuning.idle_points;
    state.award(idle);

    state.debug_check_invariants();
}

/// Move every entity and rebuild the collections without the ones that left
fn advance_entities(state: &mut GameState) {
    let mut cleared = 0;
    let mut obstacles = Vec::with_capacity(state.obstacles.len());
    for mut obstacle in std::mem::take(&mut state.obstacles) {
        obstacle.advance();
        if obstacle.is_off_screen() {
            cleared += 1;
        } else {
            obstacles.push(obstacle);
        }
    }
    state.obstacles = obstacles;

    let survival = state.tuning.survival_points;
    for _ in 0..cleared {
        let points = state.award(survival);
        state.events.push(GameEvent::ObstacleCleared { points });
    }

    state.coins = std::mem::take(&mut state.coins)
        .into_iter()
        .filter_map(|mut coin| {
            coin.advance();
            (!coin.is_off_screen()).then_some(coin)
        })
        .collect();

    state.powerups = std::mem::take(&mut state.powerups)
        .into_iter()
        .filter_map(|mut powerup| {
            powerup.advance();
            (!powerup.is_off_screen()).then_some(powerup)
        })
        .collect();

    state.particles = std::mem::take(&mut state.particles)
        .into_iter()
        .filter_map(|mut particle| {
            particle.advance();
            (!particle.is_dead()).then_some(particle)
        })
        .collect();
}
