//! Timed power-up effects
//!
//! Each effect is a frame countdown: active while `remaining > 0`. Picking
//! up an effect that is already running restarts it at full duration.

use serde::{Deserialize, Serialize};

use super::player::Player;
use super::state::PowerUpKind;

/// Active power-up effects
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActiveEffects {
    pub shield_ticks: u32,
    pub magnet_ticks: u32,
    pub double_score_ticks: u32,
}

impl ActiveEffects {
    fn ticks_mut(&mut self, kind: PowerUpKind) -> &mut u32 {
        match kind {
            PowerUpKind::Shield => &mut self.shield_ticks,
            PowerUpKind::Magnet => &mut self.magnet_ticks,
            PowerUpKind::DoubleScore => &mut self.double_score_ticks,
        }
    }

    /// Frames left on an effect (0 when inactive)
    pub fn remaining(&self, kind: PowerUpKind) -> u32 {
        match kind {
            PowerUpKind::Shield => self.shield_ticks,
            PowerUpKind::Magnet => self.magnet_ticks,
            PowerUpKind::DoubleScore => self.double_score_ticks,
        }
    }

    pub fn is_active(&self, kind: PowerUpKind) -> bool {
        self.remaining(kind) > 0
    }

    /// Start (or restart) an effect. The shield also makes the player invulnerable.
    pub fn activate(&mut self, kind: PowerUpKind, duration: u32, player: &mut Player) {
        *self.ticks_mut(kind) = duration;
        if kind == PowerUpKind::Shield {
            player.grant_invulnerability(duration);
        }
    }

    /// Count every active effect down one frame. Returns the effects that ended.
    pub fn tick(&mut self, player: &mut Player) -> Vec<PowerUpKind> {
        let mut expired = Vec::new();
        for kind in PowerUpKind::ALL {
            let ticks = self.ticks_mut(kind);
            if *ticks == 0 {
                continue;
            }
            *ticks -= 1;
            if *ticks == 0 {
                expired.push(kind);
            }
        }
        if expired.contains(&PowerUpKind::Shield) {
            player.clear_invulnerability();
        }
        expired
    }

    /// Drop every effect (restart)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// HUD seconds for an active effect (`None` when inactive)
    pub fn remaining_secs(&self, kind: PowerUpKind) -> Option<u32> {
        let ticks = self.remaining(kind);
        (ticks > 0).then(|| ticks / crate::consts::FPS + 1)
    }
}
