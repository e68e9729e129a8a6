//! Read-only view of a frame for renderers
//!
//! Borrowed straight from the session so capturing a frame costs nothing.
//! Renderers never get a mutable handle on the simulation.

use serde::Serialize;

use crate::sim::{Coin, GameState, Obstacle, Particle, Player, PowerUp, PowerUpKind};

/// One active effect as shown on the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EffectTimer {
    pub kind: PowerUpKind,
    /// Whole seconds remaining, rounded up
    pub seconds: u32,
}

/// Numbers and flags for the overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hud {
    pub score: u64,
    pub coins: u32,
    pub high_score: u64,
    /// Active effects in shield, magnet, double-score order
    pub effects: Vec<EffectTimer>,
    pub game_over: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot<'a> {
    pub frame: u64,
    pub player: &'a Player,
    /// False while crashed or during an invulnerability flash
    pub player_visible: bool,
    /// Draw the magnet field around the player
    pub magnet_field: bool,
    pub obstacles: &'a [Obstacle],
    pub coins: &'a [Coin],
    pub powerups: &'a [PowerUp],
    pub particles: &'a [Particle],
    pub background_y: f32,
    pub hud: Hud,
}

impl<'a> FrameSnapshot<'a> {
    pub fn capture(state: &'a GameState) -> Self {
        let game_over = state.is_game_over();
        let effects = PowerUpKind::ALL
            .into_iter()
            .filter_map(|kind| {
                state
                    .effects
                    .remaining_secs(kind)
                    .map(|seconds| EffectTimer { kind, seconds })
            })
            .collect();

        Self {
            frame: state.frame,
            player: &state.player,
            player_visible: !game_over && !state.player.flash_hidden(),
            magnet_field: !game_over && state.effects.is_active(PowerUpKind::Magnet),
            obstacles: &state.obstacles,
            coins: &state.coins,
            powerups: &state.powerups,
            particles: &state.particles,
            background_y: state.background_y,
            hud: Hud {
                score: state.score,
                coins: state.coins_collected,
                high_score: state.high_score,
                effects,
                game_over,
            },
        }
    }
}
