//! Tunable values for a session, defaults match the compiled-in constants

use serde::{Deserialize, Serialize};

use crate::{
    common::constants::{
        ARENA_HEIGHT, ARENA_WIDTH, BOX_SIZE, BULLET_POOL_SIZE, BULLET_SIZE, BULLET_SPEED,
        FIRE_COOLDOWN_MS, MOVE_SPEED, ROTATION_SPEED, SINGLE_SHOT_AMMO, SINGLE_SHOT_POOL_SIZE,
        TANK_SIZE, WALL_SIZE,
    },
    error::ConfigError,
    map::default_box_layout,
    utils::{Rect, Vector2},
};

/// How the Tank is allowed to fire
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum FiringMode {
    /// One bullet out at a time, each shot spends a round.
    /// `ammo: None` never runs dry
    SingleShot { ammo: Option<u32> },
    /// Any number of bullets out, spaced by a cooldown
    Cooldown { cooldown_ms: u64 },
}

/// What happens when a Bullet reaches the Tank
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GameOverPolicy {
    /// The hit is ignored and the session never ends
    #[default]
    Disabled,
    /// The hit ends the session
    OnTankHit,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub arena_width: f64,
    pub arena_height: f64,
    pub wall_size: f64,
    pub box_size: f64,
    /// Top-left corners of every box, `None` uses the stock layout
    pub box_layout: Option<Vec<Vector2>>,
    pub bullet_pool_size: usize,
    pub rotation_speed: f64,
    pub move_speed: f64,
    pub bullet_speed: f64,
    pub tank_size: f64,
    pub bullet_size: f64,
    pub firing: FiringMode,
    pub game_over: GameOverPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            wall_size: WALL_SIZE,
            box_size: BOX_SIZE,
            box_layout: None,
            bullet_pool_size: BULLET_POOL_SIZE,
            rotation_speed: ROTATION_SPEED,
            move_speed: MOVE_SPEED,
            bullet_speed: BULLET_SPEED,
            tank_size: TANK_SIZE,
            bullet_size: BULLET_SIZE,
            firing: FiringMode::Cooldown {
                cooldown_ms: FIRE_COOLDOWN_MS,
            },
            game_over: GameOverPolicy::Disabled,
        }
    }
}

impl GameConfig {
    /// Small pool, a single bullet out at a time and a handful of rounds
    pub fn single_shot() -> Self {
        Self {
            bullet_pool_size: SINGLE_SHOT_POOL_SIZE,
            firing: FiringMode::SingleShot {
                ammo: Some(SINGLE_SHOT_AMMO),
            },
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bullet_pool_size < 1 {
            return Err(ConfigError::BulletPoolEmpty);
        }

        let positive = |v: f64| v.is_finite() && v > 0.0;

        if !positive(self.arena_width) || !positive(self.arena_height) {
            return Err(ConfigError::ArenaSize {
                width: self.arena_width,
                height: self.arena_height,
            });
        }
        if !positive(self.wall_size) {
            return Err(ConfigError::WallSize(self.wall_size));
        }
        if !positive(self.box_size) {
            return Err(ConfigError::BoxSize(self.box_size));
        }
        for (name, size) in [("tank", self.tank_size), ("bullet", self.bullet_size)] {
            if !positive(size) {
                return Err(ConfigError::EntitySize { name, size });
            }
        }
        for (name, speed) in [
            ("rotation", self.rotation_speed),
            ("move", self.move_speed),
            ("bullet", self.bullet_speed),
        ] {
            if !speed.is_finite() {
                return Err(ConfigError::Speed { name, speed });
            }
        }
        if let FiringMode::Cooldown { cooldown_ms: 0 } = self.firing {
            return Err(ConfigError::CooldownZero);
        }

        let arena = self.arena();
        for (index, corner) in self.box_corners().iter().enumerate() {
            let far = corner.plus(&Vector2::new(self.box_size, self.box_size));
            if !arena.contains(corner) || !arena.contains(&far) {
                return Err(ConfigError::BoxOutOfBounds {
                    index,
                    x: corner.x,
                    y: corner.y,
                });
            }
        }

        Ok(())
    }

    /// Top-left corners of the boxes placed in the arena, the stock layout
    /// scaled to the arena when none is given
    pub fn box_corners(&self) -> Vec<Vector2> {
        match &self.box_layout {
            Some(layout) => layout.clone(),
            None => default_box_layout(self.arena_width, self.arena_height, self.box_size),
        }
    }

    pub fn arena(&self) -> Rect {
        Rect::new(Vector2::zero(), self.arena_width, self.arena_height)
    }
}
