//! Interval-driven entity spawning
//!
//! Each category keeps its own frame counter. Obstacles speed up over a run:
//! every obstacle spawn shaves a little off the delay until it hits the floor.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::{ObstacleKind, PowerUpKind};
use crate::consts::LANE_COUNT;
use crate::tuning::Tuning;

/// A request to create an entity, applied by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spawn {
    Obstacle { lane: usize, kind: ObstacleKind },
    Coin { lane: usize },
    PowerUp { lane: usize, kind: PowerUpKind },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    pub obstacle_timer: u32,
    /// Current obstacle delay in frames (decays toward the floor)
    pub obstacle_delay: f32,
    pub coin_timer: u32,
    pub powerup_timer: u32,
}

impl Spawner {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            obstacle_timer: 0,
            obstacle_delay: tuning.obstacle_delay,
            coin_timer: 0,
            powerup_timer: 0,
        }
    }

    /// Advance all counters one frame and return what should spawn
    pub fn tick(&mut self, tuning: &Tuning, rng: &mut Pcg32) -> Vec<Spawn> {
        let mut spawns = Vec::new();

        self.obstacle_timer += 1;
        if self.obstacle_timer as f32 >= self.obstacle_delay {
            self.obstacle_timer = 0;
            let lane = rng.random_range(0..LANE_COUNT);
            let kind = if rng.random::<f32>() < tuning.spike_chance {
                ObstacleKind::Spike
            } else {
                ObstacleKind::Barrier
            };
            spawns.push(Spawn::Obstacle { lane, kind });
            self.obstacle_delay =
                (self.obstacle_delay - tuning.obstacle_delay_step).max(tuning.obstacle_min_delay);
        }

        self.coin_timer += 1;
        if self.coin_timer >= tuning.coin_delay {
            self.coin_timer = 0;
            let lane = rng.random_range(0..LANE_COUNT);
            spawns.push(Spawn::Coin { lane });
        }

        self.powerup_timer += 1;
        if self.powerup_timer >= tuning.powerup_delay {
            self.powerup_timer = 0;
            let lane = rng.random_range(0..LANE_COUNT);
            let kind = PowerUpKind::ALL[rng.random_range(0..PowerUpKind::ALL.len())];
            spawns.push(Spawn::PowerUp { lane, kind });
        }

        spawns
    }
}
