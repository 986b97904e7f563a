//! Overlap events handed to the update rule by whatever owns the physics

use serde::{Deserialize, Serialize};

use crate::utils::Rect;

use super::gamestate::GameState;

/// Handle to a single entity of a [`GameState`]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case", tag = "kind", content = "index")]
pub enum EntityRef {
    Tank,
    /// Bullet pool slot
    Bullet(usize),
    Wall(usize),
    Box(usize),
}

/// Two entities whose bounds intersect on this tick, in no particular order
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Overlap(pub EntityRef, pub EntityRef);

impl Overlap {
    /// Same pair with the lower handle first, so `(a, b)` and `(b, a)` compare equal
    pub fn normalized(self) -> Self {
        if self.1 < self.0 {
            Overlap(self.1, self.0)
        } else {
            self
        }
    }
}

/// Brute force overlap query for adapters without an arcade physics engine
///
/// Reports the same pairs the arcade overlap callbacks watch: tank/bullet,
/// bullet/bullet, bullet/box and bullet/wall. Solid collisions are not
/// resolved here.
pub fn detect_overlaps(state: &GameState) -> Vec<Overlap> {
    let config = state.config();
    let tank = Rect::centered(state.tank().position, config.tank_size);

    let bullets: Vec<(usize, Rect)> = state
        .bullets()
        .in_flight()
        .map(|(slot, b)| (slot, Rect::centered(b.position, config.bullet_size)))
        .collect();

    let mut overlaps = Vec::new();

    for (i, &(slot, bounds)) in bullets.iter().enumerate() {
        if state.tank().alive && bounds.overlaps(&tank) {
            overlaps.push(Overlap(EntityRef::Tank, EntityRef::Bullet(slot)));
        }

        for &(other, other_bounds) in &bullets[i + 1..] {
            if bounds.overlaps(&other_bounds) {
                overlaps.push(Overlap(EntityRef::Bullet(slot), EntityRef::Bullet(other)));
            }
        }

        for (index, block) in state.environment().active_boxes() {
            if bounds.overlaps(&block.bounds) {
                overlaps.push(Overlap(EntityRef::Bullet(slot), EntityRef::Box(index)));
            }
        }

        for (index, wall) in state.environment().walls.iter().enumerate() {
            if bounds.overlaps(&wall.bounds) {
                overlaps.push(Overlap(EntityRef::Bullet(slot), EntityRef::Wall(index)));
            }
        }
    }

    overlaps
}
