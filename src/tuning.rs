//! Data-driven game balance
//!
//! Every gameplay number lives here so a run can be rebalanced from a JSON
//! file without touching the simulation. Missing fields fall back to the
//! defaults, so a file only needs the values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result, read_file};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Movement ===
    /// Horizontal player speed during a lane change (units/frame)
    pub player_move_speed: f32,
    /// Downward speed shared by obstacles, coins and power-ups (units/frame)
    pub scroll_speed: f32,
    /// Background scroll per frame (cosmetic)
    pub background_speed: f32,

    // === Spawning ===
    /// Initial frames between obstacle spawns
    pub obstacle_delay: f32,
    /// Floor for the obstacle delay ramp
    pub obstacle_min_delay: f32,
    /// Amount the obstacle delay shrinks on every obstacle spawn
    pub obstacle_delay_step: f32,
    /// Probability that a spawned obstacle is a spike
    pub spike_chance: f32,
    /// Frames between coin spawns
    pub coin_delay: u32,
    /// Frames between power-up spawns
    pub powerup_delay: u32,

    // === Effects ===
    /// Duration of every power-up effect (frames)
    pub effect_duration: u32,
    /// Coins closer than this to the player are collected by the magnet
    pub magnet_collect_radius: f32,
    /// Coins closer than this (but outside the collect radius) are pulled in
    pub magnet_pull_radius: f32,
    /// Upper bound on the per-frame pull multiplier
    pub magnet_max_pull: f32,
    /// Numerator of the inverse-distance pull (`min(max_pull, k / d)`)
    pub magnet_pull_strength: f32,
    /// Chance a magnet collection emits a tick cue (keeps audio from spamming)
    pub magnet_tick_chance: f32,

    // === Scoring ===
    pub survival_points: u64,
    pub coin_points: u64,
    pub idle_points: u64,
    /// Multiplier applied to every scoring event while double score is active
    pub double_score_factor: u64,

    // === Particles ===
    /// Lifetime of a particle (frames)
    pub particle_life: u32,
    /// Maximum live particles (extra spawns are dropped)
    pub max_particles: usize,
    /// Maximum absolute velocity component of a burst particle
    pub particle_spread: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_move_speed: 12.0,
            scroll_speed: 8.0,
            background_speed: 5.0,

            obstacle_delay: 60.0,
            obstacle_min_delay: 30.0,
            obstacle_delay_step: 0.3,
            spike_chance: 0.2,
            coin_delay: 90,
            powerup_delay: 600,

            effect_duration: 300, // 5 seconds at 60 FPS
            magnet_collect_radius: 80.0,
            magnet_pull_radius: 200.0,
            magnet_max_pull: 1.5,
            magnet_pull_strength: 150.0,
            magnet_tick_chance: 0.3,

            survival_points: 10,
            coin_points: 50,
            idle_points: 1,
            double_score_factor: 2,

            particle_life: 30,
            max_particles: 256,
            particle_spread: 3.0,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let tuning = Self::from_json(&read_file(path)?)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values that would break the frame loop
    pub fn validate(&self) -> Result<()> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> Error {
            Error::InvalidTuning {
                field,
                reason: reason.into(),
            }
        }

        if self.player_move_speed <= 0.0 {
            return Err(invalid("player_move_speed", "must be positive"));
        }
        if self.scroll_speed <= 0.0 {
            return Err(invalid("scroll_speed", "must be positive"));
        }
        if self.obstacle_min_delay < 1.0 {
            return Err(invalid("obstacle_min_delay", "must be at least 1 frame"));
        }
        if self.obstacle_delay < self.obstacle_min_delay {
            return Err(invalid(
                "obstacle_delay",
                format!("must be >= obstacle_min_delay ({})", self.obstacle_min_delay),
            ));
        }
        if self.obstacle_delay_step < 0.0 {
            return Err(invalid("obstacle_delay_step", "must not be negative"));
        }
        if self.coin_delay == 0 {
            return Err(invalid("coin_delay", "must be at least 1 frame"));
        }
        if self.powerup_delay == 0 {
            return Err(invalid("powerup_delay", "must be at least 1 frame"));
        }
        if self.effect_duration == 0 {
            return Err(invalid("effect_duration", "must be at least 1 frame"));
        }
        if !(0.0..=1.0).contains(&self.spike_chance) {
            return Err(invalid("spike_chance", "must be within [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.magnet_tick_chance) {
            return Err(invalid("magnet_tick_chance", "must be within [0, 1]"));
        }
        if self.magnet_collect_radius > self.magnet_pull_radius {
            return Err(invalid(
                "magnet_collect_radius",
                "must not exceed magnet_pull_radius",
            ));
        }
        if self.particle_spread < 0.0 {
            return Err(invalid("particle_spread", "must not be negative"));
        }
        if self.double_score_factor == 0 {
            return Err(invalid("double_score_factor", "must be at least 1"));
        }
        Ok(())
    }

    /// Points for an event, doubled when the double-score effect is active
    #[inline]
    pub fn points(&self, base: u64, doubled: bool) -> u64 {
        if doubled {
            base * self.double_score_factor
        } else {
            base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "coin_points": 75 }"#).unwrap();
        assert_eq!(tuning.coin_points, 75);
        assert_eq!(tuning.survival_points, 10);
        assert_eq!(tuning.effect_duration, 300);
    }

    #[test]
    fn test_rejects_inverted_magnet_radii() {
        let err = Tuning::from_json(
            r#"{ "magnet_collect_radius": 250.0, "magnet_pull_radius": 200.0 }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidTuning {
                field: "magnet_collect_radius",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_delay_below_floor() {
        let err = Tuning::from_json(r#"{ "obstacle_delay": 10.0 }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidTuning { field: "obstacle_delay", .. }));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(Tuning::from_json("{ nope"), Err(Error::Json(_))));
    }

    #[test]
    fn test_points_doubling() {
        let tuning = Tuning::default();
        assert_eq!(tuning.points(50, false), 50);
        assert_eq!(tuning.points(50, true), 100);
    }
}
