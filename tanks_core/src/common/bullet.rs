//! Definitions for the Tank's projectile and the pool the projectiles live in

use serde::{Deserialize, Serialize};

use crate::utils::Vector2;

/// Projectile shot from the Tank, explodes on the first wall, box or bullet it meets
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Bullet {
    /// Bullet Position
    pub position: Vector2,
    /// Position before the latest move, where the last overlap query saw it
    pub last_position: Vector2,
    /// Distance covered every tick
    pub velocity: Vector2,
    /// Angle of the Bullet in degrees
    pub angle: f64,
    pub in_flight: bool,
}

impl Bullet {
    fn idle() -> Self {
        Self {
            position: Vector2::zero(),
            last_position: Vector2::zero(),
            velocity: Vector2::zero(),
            angle: 0.0,
            in_flight: false,
        }
    }

    pub fn physics_update(&mut self) {
        self.last_position = self.position;
        self.position = self.position.plus(&self.velocity);
    }
}

/// Fixed set of bullet slots allocated once per session
///
/// A slot is checked out when fired and checked back in when the bullet is retired.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BulletPool {
    slots: Vec<Bullet>,
}

impl BulletPool {
    pub fn new(size: usize) -> Self {
        Self {
            slots: (0..size).map(|_| Bullet::idle()).collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, slot: usize) -> Option<&Bullet> {
        self.slots.get(slot)
    }

    pub fn is_in_flight(&self, slot: usize) -> bool {
        self.slots.get(slot).map_or(false, |b| b.in_flight)
    }

    pub fn in_flight_count(&self) -> usize {
        self.slots.iter().filter(|b| b.in_flight).count()
    }

    /// Slots paired with the bullets currently out
    pub fn in_flight(&self) -> impl Iterator<Item = (usize, &Bullet)> {
        self.slots.iter().enumerate().filter(|(_, b)| b.in_flight)
    }

    /// Puts the first free slot in flight from `position` along `angle`
    ///
    /// Returns the slot used, or `None` when every slot is already out
    pub fn fire(&mut self, position: Vector2, angle: f64, speed: f64) -> Option<usize> {
        let (slot, bullet) = self
            .slots
            .iter_mut()
            .enumerate()
            .find(|(_, b)| !b.in_flight)?;

        *bullet = Bullet {
            position,
            last_position: position,
            velocity: Vector2::from_degrees(angle).scale(speed),
            angle,
            in_flight: true,
        };

        Some(slot)
    }

    /// Returns the slot to the pool, `false` if it was not in flight
    pub fn retire(&mut self, slot: usize) -> bool {
        match self.slots.get_mut(slot) {
            Some(bullet) if bullet.in_flight => {
                bullet.in_flight = false;
                bullet.velocity = Vector2::zero();
                true
            }
            _ => false,
        }
    }

    pub fn physics_update(&mut self) {
        self.slots
            .iter_mut()
            .filter(|b| b.in_flight)
            .for_each(Bullet::physics_update);
    }
}
