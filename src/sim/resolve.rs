//! Collision resolution
//!
//! Runs once per frame after everything has moved. Order matters:
//! obstacles first, then coins, then power-ups. A crash only stops the
//! obstacle pass; pickups still resolve on the crash frame.

use super::state::{GameEvent, GameState, ParticleColor, PowerUpKind};
use rand::Rng;

/// Outcome of resolving the obstacle pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleHit {
    None,
    /// Shield absorbed the hit and the obstacle was destroyed
    Smashed,
    /// Run is over
    Crashed,
}

/// Resolve every player interaction for this frame
pub fn resolve_collisions(state: &mut GameState) {
    resolve_obstacles(state);
    collect_coins(state);
    collect_powerups(state);
}

/// Only the first overlapping obstacle is resolved per frame. A shielded
/// player plowing through a cluster smashes one obstacle per frame.
pub fn resolve_obstacles(state: &mut GameState) -> ObstacleHit {
    let player_rect = state.player.rect();
    let Some(index) = state
        .obstacles
        .iter()
        .position(|o| player_rect.intersects(&o.rect()))
    else {
        return ObstacleHit::None;
    };

    if !state.player.invulnerable {
        state.end_run();
        return ObstacleHit::Crashed;
    }

    let obstacle = state.obstacles.remove(index);
    state.events.push(GameEvent::ObstacleSmashed {
        lane: obstacle.lane,
    });
    state.spawn_particles(obstacle.bounds().center(), ParticleColor::Cyan, 8);
    log::debug!("frame {}: shield smashed obstacle {}", state.frame, obstacle.id);
    ObstacleHit::Smashed
}

/// Magnet attraction and coin pickup
pub fn collect_coins(state: &mut GameState) {
    let player_rect = state.player.rect();
    let player_center = player_rect.center();
    let magnet = state.effects.is_active(PowerUpKind::Magnet);
    let tuning = state.tuning.clone();

    let mut kept = Vec::with_capacity(state.coins.len());
    for mut coin in std::mem::take(&mut state.coins) {
        let mut collected = false;
        // Overlap is judged where the coin was before any pull
        let rect = coin.rect();

        if magnet {
            let coin_center = coin.center();
            let delta = player_center - coin_center;
            let distance = delta.length();

            if distance < tuning.magnet_collect_radius {
                collected = true;
                if state.rng.random::<f32>() < tuning.magnet_tick_chance {
                    state.events.push(GameEvent::MagnetTick);
                }
            } else if distance < tuning.magnet_pull_radius {
                // Stronger pull the closer the coin is
                let pull = (tuning.magnet_pull_strength / distance).min(tuning.magnet_max_pull);
                coin.pos += delta * pull;
                state.spawn_particles(coin_center, ParticleColor::Purple, 3);
            }
        }

        if collected || player_rect.intersects(&rect) {
            state.coins_collected += 1;
            let points = state.award(tuning.coin_points);
            state.events.push(GameEvent::CoinCollected { points });
            state.spawn_particles(coin.center(), ParticleColor::Yellow, 6);
        } else {
            kept.push(coin);
        }
    }
    state.coins = kept;
}

/// Power-up pickup (direct overlap only)
pub fn collect_powerups(state: &mut GameState) {
    let player_rect = state.player.rect();

    let (taken, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut state.powerups)
        .into_iter()
        .partition(|p| player_rect.intersects(&p.rect()));
    state.powerups = kept;

    for powerup in taken {
        state.activate_powerup(powerup.kind);
        state.events.push(GameEvent::PowerUpCollected {
            kind: powerup.kind,
        });
        state.spawn_particles(powerup.rect().center(), ParticleColor::Green, 8);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{Coin, Obstacle, ObstacleKind, PowerUp};
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn state() -> GameState {
        GameState::new(42, Tuning::default())
    }

    /// Obstacle overlapping the player's box in the player's lane
    fn obstacle_on_player(state: &mut GameState) -> Obstacle {
        let id = state.next_entity_id();
        let mut obstacle = Obstacle::new(id, state.player.lane, ObstacleKind::Barrier, 8.0);
        obstacle.pos.y = state.player.y;
        obstacle
    }

    #[test]
    fn test_unshielded_hit_ends_run() {
        let mut state = state();
        state.score = 500;
        let obstacle = obstacle_on_player(&mut state);
        state.obstacles.push(obstacle);

        resolve_collisions(&mut state);
        assert!(state.is_game_over());
        assert_eq!(state.high_score, 500);
        assert!(state.events.contains(&GameEvent::Crash { score: 500 }));
        assert_eq!(state.particles.len(), 10);
        assert_eq!(state.obstacles.len(), 1);
    }

    #[test]
    fn test_shield_smashes_one_obstacle_per_frame() {
        let mut state = state();
        state.activate_powerup(PowerUpKind::Shield);
        for _ in 0..2 {
            let obstacle = obstacle_on_player(&mut state);
            state.obstacles.push(obstacle);
        }

        assert_eq!(resolve_obstacles(&mut state), ObstacleHit::Smashed);
        assert_eq!(state.obstacles.len(), 1);
        assert!(!state.is_game_over());

        assert_eq!(resolve_obstacles(&mut state), ObstacleHit::Smashed);
        assert!(state.obstacles.is_empty());
        assert_eq!(resolve_obstacles(&mut state), ObstacleHit::None);
    }

    #[test]
    fn test_obstacle_in_other_lane_misses() {
        let mut state = state();
        let id = state.next_entity_id();
        let mut obstacle = Obstacle::new(id, 0, ObstacleKind::Spike, 8.0);
        obstacle.pos.y = state.player.y;
        state.obstacles.push(obstacle);
        assert_eq!(resolve_obstacles(&mut state), ObstacleHit::None);
    }

    #[test]
    fn test_coin_overlap_scores() {
        let mut state = state();
        let id = state.next_entity_id();
        let mut coin = Coin::new(id, state.player.lane, 8.0);
        coin.pos.y = state.player.y + 10.0;
        state.coins.push(coin);

        collect_coins(&mut state);
        assert!(state.coins.is_empty());
        assert_eq!(state.coins_collected, 1);
        assert_eq!(state.score, 50);
        assert!(state.events.contains(&GameEvent::CoinCollected { points: 50 }));
    }

    #[test]
    fn test_double_score_doubles_coin() {
        let mut state = state();
        state.activate_powerup(PowerUpKind::DoubleScore);
        let id = state.next_entity_id();
        let mut coin = Coin::new(id, state.player.lane, 8.0);
        coin.pos.y = state.player.y;
        state.coins.push(coin);

        collect_coins(&mut state);
        assert_eq!(state.score, 100);
    }

    #[test]
    fn test_magnet_auto_collects_within_radius() {
        let mut state = state();
        state.activate_powerup(PowerUpKind::Magnet);
        let player_center = state.player.center();

        // Coin center 50 units straight above the player center, no box overlap
        let id = state.next_entity_id();
        let mut coin = Coin::new(id, state.player.lane, 8.0);
        coin.pos = player_center - Vec2::new(0.0, 50.0) - Vec2::splat(COIN_SIZE / 2.0);
        assert!(!state.player.rect().intersects(&coin.rect()));
        state.coins.push(coin);

        collect_coins(&mut state);
        assert!(state.coins.is_empty());
        assert_eq!(state.coins_collected, 1);
    }

    #[test]
    fn test_magnet_pulls_distant_coin() {
        let mut state = state();
        state.activate_powerup(PowerUpKind::Magnet);
        let player_center = state.player.center();

        // Coin center 190 units to the left of the player center
        let id = state.next_entity_id();
        let mut coin = Coin::new(id, state.player.lane, 8.0);
        coin.pos = player_center - Vec2::new(190.0, 0.0) - Vec2::splat(COIN_SIZE / 2.0);
        state.coins.push(coin);

        collect_coins(&mut state);
        assert_eq!(state.coins.len(), 1);
        assert_eq!(state.coins_collected, 0);
        // pull = 150 / 190 of the gap
        let moved = state.coins[0].center();
        let expected = player_center.x - 190.0 + 190.0 * (150.0 / 190.0);
        assert!((moved.x - expected).abs() < 1e-3);
        assert_eq!(moved.y, player_center.y);
        assert_eq!(state.particles.len(), 3);
    }

    #[test]
    fn test_magnet_pull_is_capped() {
        let mut state = state();
        state.activate_powerup(PowerUpKind::Magnet);
        let player_center = state.player.center();

        // 150 / 90 would exceed the cap, so the coin moves 1.5x the gap
        let id = state.next_entity_id();
        let mut coin = Coin::new(id, state.player.lane, 8.0);
        coin.pos = player_center - Vec2::new(0.0, 90.0) - Vec2::splat(COIN_SIZE / 2.0);
        let before = coin.pos;
        state.coins.push(coin);

        collect_coins(&mut state);
        assert_eq!(state.coins.len(), 1);
        assert_eq!(state.coins[0].pos, before + Vec2::new(0.0, 90.0) * 1.5);
    }

    #[test]
    fn test_pulled_coin_not_collected_until_next_frame() {
        let mut state = state();
        state.activate_powerup(PowerUpKind::Magnet);
        let player_center = state.player.center();

        let id = state.next_entity_id();
        let mut coin = Coin::new(id, state.player.lane, 8.0);
        coin.pos = player_center - Vec2::new(0.0, 120.0) - Vec2::splat(COIN_SIZE / 2.0);
        assert!(!state.player.rect().intersects(&coin.rect()));
        state.coins.push(coin);

        // The pull drags the coin onto the player, but overlap uses the old box
        collect_coins(&mut state);
        assert_eq!(state.coins.len(), 1);
        assert!(state.player.rect().intersects(&state.coins[0].rect()));
        assert_eq!(state.coins_collected, 0);

        collect_coins(&mut state);
        assert!(state.coins.is_empty());
        assert_eq!(state.coins_collected, 1);
    }

    #[test]
    fn test_crash_frame_still_collects_pickups() {
        let mut state = state();
        let obstacle = obstacle_on_player(&mut state);
        state.obstacles.push(obstacle);

        let id = state.next_entity_id();
        let mut coin = Coin::new(id, state.player.lane, 8.0);
        coin.pos.y = state.player.y;
        state.coins.push(coin);

        let id = state.next_entity_id();
        let mut powerup = PowerUp::new(id, state.player.lane, PowerUpKind::Magnet, 8.0);
        powerup.pos.y = state.player.y;
        state.powerups.push(powerup);

        resolve_collisions(&mut state);
        assert!(state.is_game_over());
        assert_eq!(state.high_score, 0);
        assert!(state.events.contains(&GameEvent::Crash { score: 0 }));
        assert_eq!(state.coins_collected, 1);
        assert_eq!(state.score, 50);
        assert!(state.coins.is_empty());
        assert!(state.effects.is_active(PowerUpKind::Magnet));
    }

    #[test]
    fn test_no_magnet_no_pull() {
        let mut state = state();
        let id = state.next_entity_id();
        let mut coin = Coin::new(id, state.player.lane, 8.0);
        coin.pos.y = state.player.y - 100.0;
        let before = coin.pos;
        state.coins.push(coin);

        collect_coins(&mut state);
        assert_eq!(state.coins[0].pos, before);
        assert_eq!(state.coins_collected, 0);
    }

    #[test]
    fn test_powerup_pickup_activates_effect() {
        let mut state = state();
        let id = state.next_entity_id();
        let mut powerup = PowerUp::new(id, state.player.lane, PowerUpKind::Shield, 8.0);
        powerup.pos.y = state.player.y;
        state.powerups.push(powerup);

        collect_powerups(&mut state);
        assert!(state.powerups.is_empty());
        assert!(state.effects.is_active(PowerUpKind::Shield));
        assert!(state.player.invulnerable);
        assert_eq!(state.effects.remaining(PowerUpKind::Shield), 300);
        assert!(state.events.contains(&GameEvent::PowerUpCollected {
            kind: PowerUpKind::Shield
        }));
    }

    #[test]
    fn test_powerup_far_away_stays() {
        let mut state = state();
        let id = state.next_entity_id();
        state
            .powerups
            .push(PowerUp::new(id, 0, PowerUpKind::Magnet, 8.0));
        collect_powerups(&mut state);
        assert_eq!(state.powerups.len(), 1);
        assert!(!state.effects.is_active(PowerUpKind::Magnet));
    }
}
