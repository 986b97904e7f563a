use serde::{Deserialize, Serialize};

use crate::utils::{normalize_degrees, Vector2};

/// The player controlled Tank
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Tank {
    /// Center of the Tank
    pub position: Vector2,
    /// Heading of the physics body in degrees
    pub angle: f64,
    /// Heading the sprite is drawn with, trails `angle` until the end of a tick
    pub sprite_angle: f64,
    pub alive: bool,
}

impl Tank {
    pub fn new(position: Vector2) -> Self {
        Self {
            position,
            angle: 0.0,
            sprite_angle: 0.0,
            alive: true,
        }
    }

    pub fn rotate(&mut self, degrees: f64) {
        self.angle = normalize_degrees(self.angle + degrees);
    }

    /// Moves along the heading, negative distances reverse
    pub fn drive(&mut self, distance: f64) {
        self.position = self
            .position
            .plus(&Vector2::from_degrees(self.angle).scale(distance));
    }

    pub fn sync_sprite(&mut self) {
        self.sprite_angle = self.angle;
    }
}
