//! The player-controlled runner
//!
//! Lane changes are animated: a request sets a target x and the runner slides
//! toward it a fixed step per frame. Only one lane change runs at a time.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;
use crate::lane_left;

/// Bob phase advance per frame (radians)
const BOB_RATE: f32 = 0.2;
/// Bob amplitude in pixels (cosmetic only)
const BOB_AMPLITUDE: f32 = 3.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Left edge
    pub x: f32,
    /// Top edge (fixed)
    pub y: f32,
    pub lane: usize,
    pub target_x: f32,
    pub moving: bool,
    /// Horizontal step per frame while moving
    pub move_speed: f32,
    pub invulnerable: bool,
    pub invulnerable_ticks: u32,
    /// Frames spent invulnerable, drives the flashing sprite
    pub flash_ticks: u32,
    /// Running bob animation phase
    pub bob_phase: f32,
}

impl Player {
    pub fn new(move_speed: f32) -> Self {
        let x = lane_left(PLAYER_START_LANE, PLAYER_WIDTH);
        Self {
            x,
            y: PLAYER_Y,
            lane: PLAYER_START_LANE,
            target_x: x,
            moving: false,
            move_speed,
            invulnerable: false,
            invulnerable_ticks: 0,
            flash_ticks: 0,
            bob_phase: 0.0,
        }
    }

    /// Start a move one lane left. Returns false if ignored.
    pub fn request_move_left(&mut self) -> bool {
        if self.moving || self.lane == 0 {
            return false;
        }
        self.begin_move(self.lane - 1);
        true
    }

    /// Start a move one lane right. Returns false if ignored.
    pub fn request_move_right(&mut self) -> bool {
        if self.moving || self.lane + 1 >= LANE_COUNT {
            return false;
        }
        self.begin_move(self.lane + 1);
        true
    }

    fn begin_move(&mut self, lane: usize) {
        self.lane = lane;
        self.target_x = lane_left(lane, PLAYER_WIDTH);
        self.moving = true;
    }

    /// Advance one frame: slide toward the target lane, tick invulnerability
    pub fn advance(&mut self) {
        if self.moving {
            let remaining = self.target_x - self.x;
            // Snap when within one step so we never overshoot
            if remaining.abs() <= self.move_speed {
                self.x = self.target_x;
                self.moving = false;
            } else {
                self.x += self.move_speed * remaining.signum();
            }
        }

        self.bob_phase += BOB_RATE;

        if self.invulnerable {
            self.invulnerable_ticks = self.invulnerable_ticks.saturating_sub(1);
            self.flash_ticks += 1;
            if self.invulnerable_ticks == 0 {
                self.clear_invulnerability();
            }
        }
    }

    pub fn grant_invulnerability(&mut self, ticks: u32) {
        self.invulnerable = true;
        self.invulnerable_ticks = ticks;
    }

    pub fn clear_invulnerability(&mut self) {
        self.invulnerable = false;
        self.invulnerable_ticks = 0;
        self.flash_ticks = 0;
    }

    /// Collision box (the bob is cosmetic and not part of it)
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }

    /// Vertical draw offset from the running bob
    pub fn bob_offset(&self) -> f32 {
        self.bob_phase.sin() * BOB_AMPLITUDE
    }

    /// Whether the sprite should be hidden this frame (invulnerability flash)
    pub fn flash_hidden(&self) -> bool {
        self.invulnerable && self.flash_ticks % 10 < 5
    }
}
