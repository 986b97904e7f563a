use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    config::{FiringMode, GameConfig, GameOverPolicy},
    error::ConfigError,
    map::wall_positions,
    utils::Vector2,
};

use super::{
    bullet::BulletPool,
    constants::TANK_START_X,
    contact::{EntityRef, Overlap},
    environment::{Block, Environment},
    input::InputState,
    tank::Tank,
};

/// Commands issued back to the engine during a tick
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum GameEvent {
    BulletSpawned {
        slot: usize,
        position: Vector2,
        angle: f64,
    },
    /// `position` is where the bullet was when its overlap was reported,
    /// or where it left the arena
    BulletRetired {
        slot: usize,
        position: Vector2,
    },
    BoxDestroyed {
        index: usize,
    },
    GameOver,
}

/// Everything a session knows about the arena
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameState {
    config: GameConfig,
    tank: Tank,
    bullets: BulletPool,
    environment: Environment,
    /// Rounds left for the single shot Tank, `None` when unlimited
    ammo: Option<u32>,
    /// Earliest session time in ms the cooldown Tank may fire again
    bullet_time: u64,
    game_over: bool,
    ticks: u64,
}

impl GameState {
    /// Lays out the arena for a new session
    pub fn initialize(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let walls = wall_positions(config.arena_width, config.arena_height, config.wall_size)
            .into_iter()
            .map(|corner| Block::new(corner, config.wall_size))
            .collect::<Vec<_>>();

        let boxes = config
            .box_corners()
            .into_iter()
            .map(|corner| Block::new(corner, config.box_size))
            .collect::<Vec<_>>();

        let ammo = match config.firing {
            FiringMode::SingleShot { ammo } => ammo,
            FiringMode::Cooldown { .. } => None,
        };

        info!(
            walls = walls.len(),
            boxes = boxes.len(),
            pool = config.bullet_pool_size,
            "arena initialized"
        );

        Ok(Self {
            tank: Tank::new(Vector2::new(TANK_START_X, config.arena_height / 2.0)),
            bullets: BulletPool::new(config.bullet_pool_size),
            environment: Environment { walls, boxes },
            ammo,
            bullet_time: 0,
            game_over: false,
            ticks: 0,
            config,
        })
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn tank(&self) -> &Tank {
        &self.tank
    }

    pub fn bullets(&self) -> &BulletPool {
        &self.bullets
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn ammo(&self) -> Option<u32> {
        self.ammo
    }

    pub fn bullet_time(&self) -> u64 {
        self.bullet_time
    }

    /// Number of ticks that changed the state
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// Produces the state following `state` without touching it
pub fn update(
    state: &GameState,
    input: &InputState,
    overlaps: &[Overlap],
    now_ms: u64,
) -> (GameState, Vec<GameEvent>) {
    let mut next = state.clone();
    let events = next.tick(input, overlaps, now_ms);
    (next, events)
}

impl GameState {
    /// Advances the session by one frame
    ///
    /// `overlaps` are the intersections the physics reported for this frame and
    /// `now_ms` the session clock. The steps run in a fixed order, later steps
    /// see the effects of earlier ones.
    pub fn tick(&mut self, input: &InputState, overlaps: &[Overlap], now_ms: u64) -> Vec<GameEvent> {
        if self.game_over {
            return Vec::new();
        }

        let mut events = Vec::new();
        self.ticks += 1;

        // rotation, left wins when both are held
        if input.left {
            self.tank.rotate(-self.config.rotation_speed);
        } else if input.right {
            self.tank.rotate(self.config.rotation_speed);
        }

        // translation, reversing runs at half speed
        if input.forward {
            self.tank.drive(self.config.move_speed);
        } else if input.back {
            self.tank.drive(-self.config.move_speed / 2.0);
        }

        let spawned = match input.fire {
            true => self.try_fire(now_ms),
            false => None,
        };
        if let Some(slot) = spawned {
            debug!(slot, angle = self.tank.angle, "pew");
            events.push(GameEvent::BulletSpawned {
                slot,
                position: self.tank.position,
                angle: self.tank.angle,
            });
        }

        self.bullets.physics_update();

        self.resolve_overlaps(overlaps, spawned, &mut events);

        if !self.game_over {
            self.retire_stray_bullets(&mut events);
        }

        self.tank.sync_sprite();

        events
    }

    fn try_fire(&mut self, now_ms: u64) -> Option<usize> {
        let (position, angle, speed) = (
            self.tank.position,
            self.tank.angle,
            self.config.bullet_speed,
        );

        match self.config.firing {
            FiringMode::SingleShot { .. } => {
                if self.ammo == Some(0) || self.bullets.in_flight_count() > 0 {
                    return None;
                }

                let slot = self.bullets.fire(position, angle, speed)?;
                if let Some(ammo) = self.ammo.as_mut() {
                    *ammo -= 1;
                }

                Some(slot)
            }
            FiringMode::Cooldown { cooldown_ms } => {
                if now_ms < self.bullet_time {
                    return None;
                }

                let slot = self.bullets.fire(position, angle, speed)?;
                self.bullet_time = now_ms.saturating_add(cooldown_ms);

                Some(slot)
            }
        }
    }

    /// Reacts to the reported overlaps
    ///
    /// Duplicate pairs are dropped and the remaining ones handled by kind:
    /// tank hits first, then bullet/bullet, bullet/box and bullet/wall.
    fn resolve_overlaps(
        &mut self,
        overlaps: &[Overlap],
        spawned: Option<usize>,
        events: &mut Vec<GameEvent>,
    ) {
        let mut seen = HashSet::new();
        let mut pairs = overlaps
            .iter()
            .map(|o| o.normalized())
            .filter(|o| seen.insert(*o))
            .filter(|o| self.is_known(o.0) && self.is_known(o.1))
            .collect::<Vec<_>>();
        pairs.sort_by_key(|o| overlap_rank(o));

        for Overlap(a, b) in pairs {
            match (a, b) {
                (EntityRef::Tank, EntityRef::Bullet(slot)) => {
                    if !self.bullets.is_in_flight(slot) || spawned == Some(slot) {
                        continue;
                    }

                    match self.config.game_over {
                        GameOverPolicy::Disabled => debug!(slot, "tank hit ignored"),
                        GameOverPolicy::OnTankHit => {
                            self.end_game(events);
                            return;
                        }
                    }
                }
                (EntityRef::Bullet(first), EntityRef::Bullet(second)) => {
                    if first != second
                        && self.bullets.is_in_flight(first)
                        && self.bullets.is_in_flight(second)
                    {
                        self.retire_bullet(first, events);
                        self.retire_bullet(second, events);
                    }
                }
                (EntityRef::Bullet(slot), EntityRef::Box(index)) => {
                    if self.environment.is_box_active(index) && self.retire_bullet(slot, events) {
                        self.environment.destroy_box(index);
                        debug!(index, "box destroyed");
                        events.push(GameEvent::BoxDestroyed { index });
                    }
                }
                (EntityRef::Bullet(slot), EntityRef::Wall(_)) => {
                    self.retire_bullet(slot, events);
                }
                // solid collisions belong to the physics engine
                _ => {}
            }
        }
    }

    fn is_known(&self, entity: EntityRef) -> bool {
        let known = match entity {
            EntityRef::Tank => true,
            EntityRef::Bullet(slot) => slot < self.bullets.capacity(),
            EntityRef::Wall(index) => index < self.environment.walls.len(),
            EntityRef::Box(index) => index < self.environment.boxes.len(),
        };

        if !known {
            warn!(?entity, "overlap refers to an unknown entity");
        }

        known
    }

    /// Retires a bullet at the spot its reported overlap was detected
    fn retire_bullet(&mut self, slot: usize, events: &mut Vec<GameEvent>) -> bool {
        let Some(position) = self.bullets.get(slot).map(|b| b.last_position) else {
            return false;
        };
        self.retire_bullet_at(slot, position, events)
    }

    fn retire_bullet_at(
        &mut self,
        slot: usize,
        position: Vector2,
        events: &mut Vec<GameEvent>,
    ) -> bool {
        if !self.bullets.retire(slot) {
            return false;
        }

        debug!(slot, x = position.x, y = position.y, "bullet retired");
        events.push(GameEvent::BulletRetired { slot, position });

        true
    }

    /// Retires bullets that left the arena without touching anything
    fn retire_stray_bullets(&mut self, events: &mut Vec<GameEvent>) {
        let arena = self.config.arena();
        let strays = self
            .bullets
            .in_flight()
            .filter(|(_, b)| !arena.contains(&b.position))
            .map(|(slot, b)| (slot, b.position))
            .collect::<Vec<_>>();

        for (slot, position) in strays {
            self.retire_bullet_at(slot, position, events);
        }
    }

    fn end_game(&mut self, events: &mut Vec<GameEvent>) {
        self.tank.alive = false;

        let slots = self
            .bullets
            .in_flight()
            .map(|(slot, _)| slot)
            .collect::<Vec<_>>();
        for slot in slots {
            self.retire_bullet(slot, events);
        }

        self.game_over = true;
        info!(ticks = self.ticks, "game over");
        events.push(GameEvent::GameOver);
    }
}

fn overlap_rank(overlap: &Overlap) -> u8 {
    match overlap {
        Overlap(EntityRef::Tank, EntityRef::Bullet(_)) => 0,
        Overlap(EntityRef::Bullet(_), EntityRef::Bullet(_)) => 1,
        Overlap(EntityRef::Bullet(_), EntityRef::Box(_)) => 2,
        Overlap(EntityRef::Bullet(_), EntityRef::Wall(_)) => 3,
        _ => 4,
    }
}
