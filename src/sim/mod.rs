//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` per frame, no wall clock
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod effects;
pub mod player;
pub mod resolve;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use effects::ActiveEffects;
pub use player::Player;
pub use resolve::{ObstacleHit, resolve_collisions};
pub use spawner::{Spawn, Spawner};
pub use state::{
    Coin, GameEvent, GamePhase, GameState, Obstacle, ObstacleKind, Particle, ParticleColor,
    PowerUp, PowerUpKind,
};
pub use tick::{TickInput, tick};
