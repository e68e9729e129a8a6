//! Game state and core simulation types
//!
//! `GameState` is the session: it owns every entity collection, the effect
//! timers, the spawner and the RNG. Nothing outside the `sim` module mutates it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::effects::ActiveEffects;
use super::player::Player;
use super::spawner::{Spawn, Spawner};
use crate::consts::*;
use crate::highscores::{HighScores, RunRecord};
use crate::lane_left;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Running
    Playing,
    /// Player crashed; waits for restart
    GameOver,
}

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ObstacleKind {
    #[default]
    Barrier,
    /// Hazard variant, drawn as a rotating star
    Spike,
}

/// An obstacle scrolling down a lane
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub lane: usize,
    /// Top-left corner
    pub pos: Vec2,
    pub speed: f32,
    pub kind: ObstacleKind,
    /// Rotation in degrees (cosmetic)
    pub rotation: f32,
}

impl Obstacle {
    pub fn new(id: u32, lane: usize, kind: ObstacleKind, speed: f32) -> Self {
        Self {
            id,
            lane,
            pos: Vec2::new(lane_left(lane, OBSTACLE_SIZE), -OBSTACLE_SIZE),
            speed,
            kind,
            rotation: 0.0,
        }
    }

    pub fn advance(&mut self) {
        self.pos.y += self.speed;
        self.rotation = (self.rotation + 2.0) % 360.0;
    }

    /// Full visual bounds
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, OBSTACLE_SIZE, OBSTACLE_SIZE)
    }

    /// Collision box, slightly smaller than the sprite
    pub fn rect(&self) -> Rect {
        self.bounds().inset(OBSTACLE_INSET)
    }

    pub fn is_off_screen(&self) -> bool {
        self.pos.y > SCREEN_HEIGHT
    }
}

/// A collectible coin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub id: u32,
    pub lane: usize,
    /// Top-left corner
    pub pos: Vec2,
    pub speed: f32,
    /// Spin in degrees (cosmetic)
    pub rotation: f32,
    /// Bob animation phase (cosmetic)
    pub bob_phase: f32,
}

impl Coin {
    pub fn new(id: u32, lane: usize, speed: f32) -> Self {
        Self {
            id,
            lane,
            pos: Vec2::new(lane_left(lane, COIN_SIZE), -COIN_SIZE),
            speed,
            rotation: 0.0,
            bob_phase: 0.0,
        }
    }

    pub fn advance(&mut self) {
        self.pos.y += self.speed;
        self.rotation = (self.rotation + 5.0) % 360.0;
        self.bob_phase += 0.1;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, COIN_SIZE, COIN_SIZE)
    }

    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }

    pub fn bob_offset(&self) -> f32 {
        self.bob_phase.sin() * 2.0
    }

    pub fn is_off_screen(&self) -> bool {
        self.pos.y > SCREEN_HEIGHT
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Invulnerable; obstacles are smashed instead of ending the run
    Shield,
    /// Pulls nearby coins in and collects close ones
    Magnet,
    /// Every scoring event is doubled
    DoubleScore,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [
        PowerUpKind::Shield,
        PowerUpKind::Magnet,
        PowerUpKind::DoubleScore,
    ];

    /// HUD label
    pub fn label(&self) -> &'static str {
        match self {
            PowerUpKind::Shield => "Shield",
            PowerUpKind::Magnet => "Magnet",
            PowerUpKind::DoubleScore => "2X Score",
        }
    }
}

/// A power-up pickup scrolling down a lane
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: u32,
    pub lane: usize,
    /// Top-left corner
    pub pos: Vec2,
    pub speed: f32,
    pub kind: PowerUpKind,
    /// Pulse animation phase (cosmetic)
    pub pulse: f32,
}

impl PowerUp {
    pub fn new(id: u32, lane: usize, kind: PowerUpKind, speed: f32) -> Self {
        Self {
            id,
            lane,
            pos: Vec2::new(lane_left(lane, POWERUP_SIZE), -POWERUP_SIZE),
            speed,
            kind,
            pulse: 0.0,
        }
    }

    pub fn advance(&mut self) {
        self.pos.y += self.speed;
        self.pulse += 0.2;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, POWERUP_SIZE, POWERUP_SIZE)
    }

    pub fn is_off_screen(&self) -> bool {
        self.pos.y > SCREEN_HEIGHT
    }
}

/// Particle palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleColor {
    /// Crash
    Red,
    /// Shielded smash
    Cyan,
    /// Magnet trail
    Purple,
    /// Coin pickup
    Yellow,
    /// Power-up pickup
    Green,
}

/// A particle for visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: ParticleColor,
    /// Frames left
    pub life: u32,
    pub max_life: u32,
}

impl Particle {
    pub fn advance(&mut self) {
        self.pos += self.vel;
        self.life = self.life.saturating_sub(1);
    }

    pub fn is_dead(&self) -> bool {
        self.life == 0
    }

    /// Remaining life in 0..=1, used for fade and size
    pub fn fade(&self) -> f32 {
        if self.max_life == 0 {
            0.0
        } else {
            self.life as f32 / self.max_life as f32
        }
    }
}

/// Something the outside world may want to react to (sound, UI)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A lane change started
    LaneChange { lane: usize },
    /// An obstacle scrolled past the player
    ObstacleCleared { points: u64 },
    /// A shielded player destroyed an obstacle
    ObstacleSmashed { lane: usize },
    CoinCollected { points: u64 },
    /// Magnet auto-collected a coin (rate limited)
    MagnetTick,
    PowerUpCollected { kind: PowerUpKind },
    EffectExpired { kind: PowerUpKind },
    /// Run ended
    Crash { score: u64 },
    NewHighScore { score: u64 },
    Restarted,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Gameplay balance for this session
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: u64,
    pub coins_collected: u32,
    /// Best score this process has seen
    pub high_score: u64,
    /// In-memory leaderboard of finished runs
    pub leaderboard: HighScores,
    /// Frames simulated in the current run
    pub frame: u64,
    /// Background scroll offset, wraps at screen height
    pub background_y: f32,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub coins: Vec<Coin>,
    pub powerups: Vec<PowerUp>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    pub effects: ActiveEffects,
    pub spawner: Spawner,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a new session with the given seed and tuning
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            phase: GamePhase::Playing,
            score: 0,
            coins_collected: 0,
            high_score: 0,
            leaderboard: HighScores::new(),
            frame: 0,
            background_y: 0.0,
            player: Player::new(tuning.player_move_speed),
            obstacles: Vec::new(),
            coins: Vec::new(),
            powerups: Vec::new(),
            particles: Vec::new(),
            effects: ActiveEffects::default(),
            spawner: Spawner::new(&tuning),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
            tuning,
        }
    }

    /// Reset the run, keeping the high score and leaderboard
    pub fn restart(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.coins_collected = 0;
        self.frame = 0;
        self.background_y = 0.0;
        self.player = Player::new(self.tuning.player_move_speed);
        self.obstacles.clear();
        self.coins.clear();
        self.powerups.clear();
        self.particles.clear();
        self.effects.clear();
        self.spawner = Spawner::new(&self.tuning);
        self.events.push(GameEvent::Restarted);
        log::info!("Run restarted (high score {})", self.high_score);
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Add points, doubled while double score is active. Returns the gain.
    pub fn award(&mut self, base: u64) -> u64 {
        let doubled = self.effects.is_active(PowerUpKind::DoubleScore);
        let gain = self.tuning.points(base, doubled);
        self.score += gain;
        gain
    }

    /// Materialize a spawn request as an entity
    pub fn apply_spawn(&mut self, spawn: Spawn) {
        let speed = self.tuning.scroll_speed;
        let id = self.next_entity_id();
        match spawn {
            Spawn::Obstacle { lane, kind } => {
                self.obstacles.push(Obstacle::new(id, lane, kind, speed));
            }
            Spawn::Coin { lane } => {
                self.coins.push(Coin::new(id, lane, speed));
            }
            Spawn::PowerUp { lane, kind } => {
                self.powerups.push(PowerUp::new(id, lane, kind, speed));
            }
        }
        log::debug!("frame {}: spawned {:?}", self.frame, spawn);
    }

    /// Emit a burst of particles, respecting the particle cap
    pub fn spawn_particles(&mut self, pos: Vec2, color: ParticleColor, count: usize) {
        let room = self.tuning.max_particles.saturating_sub(self.particles.len());
        let spread = self.tuning.particle_spread;
        let life = self.tuning.particle_life;
        for _ in 0..count.min(room) {
            let vel = Vec2::new(
                self.rng.random_range(-spread..=spread),
                self.rng.random_range(-spread..=spread),
            );
            self.particles.push(Particle {
                pos,
                vel,
                color,
                life,
                max_life: life,
            });
        }
    }

    /// Activate a power-up effect, mirroring the shield onto the player
    pub fn activate_powerup(&mut self, kind: PowerUpKind) {
        let duration = self.tuning.effect_duration;
        self.effects.activate(kind, duration, &mut self.player);
        log::debug!("{:?} active for {} frames", kind, duration);
    }

    /// End the run: record high score and leaderboard entry
    pub fn end_run(&mut self) {
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::Crash { score: self.score });

        if self.score > self.high_score {
            self.high_score = self.score;
            self.events.push(GameEvent::NewHighScore { score: self.score });
        }
        self.leaderboard.record(RunRecord {
            score: self.score,
            coins: self.coins_collected,
            frames: self.frame,
        });

        let center = self.player.center();
        self.spawn_particles(center, ParticleColor::Red, 10);

        log::info!(
            "Game over at frame {}: score {}, coins {}, high score {}",
            self.frame,
            self.score,
            self.coins_collected,
            self.high_score
        );
    }

    /// Panics (debug builds) if the simulation reached an impossible state
    pub(crate) fn debug_check_invariants(&self) {
        debug_assert!(self.player.lane < LANE_COUNT, "lane out of range");
        debug_assert!(
            self.player.moving || self.player.x == self.player.target_x,
            "player idle away from its lane"
        );
        debug_assert!(
            self.player.invulnerable == (self.player.invulnerable_ticks > 0),
            "invulnerability flag out of sync with its timer"
        );
        debug_assert!(
            self.leaderboard.top_score().unwrap_or(0) == self.high_score,
            "leaderboard lost the high score"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obstacle_scroll_scenario() {
        let mut obstacle = Obstacle::new(1, 1, ObstacleKind::Barrier, 8.0);
        assert_eq!(obstacle.pos.y, -50.0);
        for _ in 0..10 {
            obstacle.advance();
        }
        assert_eq!(obstacle.pos.y, 30.0);
        assert!(!obstacle.is_off_screen());
    }

    #[test]
    fn test_entities_centered_in_lane() {
        let obstacle = Obstacle::new(1, 0, ObstacleKind::Spike, 8.0);
        let coin = Coin::new(2, 1, 8.0);
        let powerup = PowerUp::new(3, 2, PowerUpKind::Magnet, 8.0);
        assert_eq!(obstacle.bounds().center().x, LANE_CENTERS[0]);
        assert_eq!(coin.center().x, LANE_CENTERS[1]);
        assert_eq!(powerup.rect().center().x, LANE_CENTERS[2]);
    }

    #[test]
    fn test_off_screen_is_past_bottom_edge() {
        let mut coin = Coin::new(1, 0, 8.0);
        coin.pos.y = SCREEN_HEIGHT;
        assert!(!coin.is_off_screen());
        coin.pos.y = SCREEN_HEIGHT + 1.0;
        assert!(coin.is_off_screen());
    }

    #[test]
    fn test_particle_lifetime() {
        let mut particle = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::new(1.0, -1.0),
            color: ParticleColor::Yellow,
            life: 2,
            max_life: 2,
        };
        particle.advance();
        assert_eq!(particle.pos, Vec2::new(1.0, -1.0));
        assert!(!particle.is_dead());
        assert_eq!(particle.fade(), 0.5);
        particle.advance();
        assert!(particle.is_dead());
    }

    #[test]
    fn test_particle_cap() {
        let tuning = Tuning {
            max_particles: 4,
            ..Tuning::default()
        };
        let mut state = GameState::new(1, tuning);
        state.spawn_particles(Vec2::ZERO, ParticleColor::Green, 3);
        state.spawn_particles(Vec2::ZERO, ParticleColor::Green, 3);
        assert_eq!(state.particles.len(), 4);
    }

    #[test]
    fn test_end_run_updates_high_score_once() {
        let mut state = GameState::new(7, Tuning::default());
        state.score = 120;
        state.end_run();
        assert!(state.is_game_over());
        assert_eq!(state.high_score, 120);
        assert!(state.events.contains(&GameEvent::NewHighScore { score: 120 }));

        state.restart();
        state.score = 80;
        state.drain_events();
        state.end_run();
        assert_eq!(state.high_score, 120);
        assert!(!state.events.iter().any(|e| matches!(e, GameEvent::NewHighScore { .. })));
        assert_eq!(state.leaderboard.top_score(), Some(120));
    }
}
