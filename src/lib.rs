//! Lane Runner - a three-lane endless runner
//!
//! Core modules:
//! - `sim`: Deterministic frame simulation (entities, spawning, effects, collisions)
//! - `renderer`: Read-only frame snapshots and the text HUD
//! - `audio`: Sound cue routing with graceful degradation
//! - `tuning`: Data-driven game balance
//! - `settings`: Presentation preferences

pub mod audio;
pub mod error;
pub mod highscores;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{Error, Result};
pub use highscores::HighScores;
pub use settings::{QualityPreset, Settings};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Target frame rate the simulation is tuned for
    pub const FPS: u32 = 60;

    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Lane layout (three fixed tracks)
    pub const LANE_COUNT: usize = 3;
    pub const LANE_WIDTH: f32 = 266.0; // 800 / 3, truncated
    pub const LANE_CENTERS: [f32; LANE_COUNT] = [
        LANE_WIDTH / 2.0,
        SCREEN_WIDTH / 2.0,
        SCREEN_WIDTH - LANE_WIDTH / 2.0,
    ];

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    pub const PLAYER_Y: f32 = SCREEN_HEIGHT - 150.0;
    pub const PLAYER_START_LANE: usize = 1;

    /// Entity sizes
    pub const OBSTACLE_SIZE: f32 = 50.0;
    /// Obstacle hitbox is shrunk by this much on every side
    pub const OBSTACLE_INSET: f32 = 5.0;
    pub const COIN_SIZE: f32 = 30.0;
    pub const POWERUP_SIZE: f32 = 40.0;
}

/// Left edge x for an entity of `width` centered in `lane`
#[inline]
pub fn lane_left(lane: usize, width: f32) -> f32 {
    consts::LANE_CENTERS[lane] - width / 2.0
}

