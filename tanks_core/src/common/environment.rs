use serde::{Deserialize, Serialize};

use crate::utils::{Rect, Vector2};

/// Square obstacle, walls never go away while boxes can be shot
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Block {
    pub bounds: Rect,
    pub active: bool,
}

impl Block {
    pub fn new(corner: Vector2, size: f64) -> Self {
        Self {
            bounds: Rect::new(corner, size, size),
            active: true,
        }
    }
}

/// Walls ringing the arena and the boxes scattered inside it
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Environment {
    pub walls: Vec<Block>,
    pub boxes: Vec<Block>,
}

impl Environment {
    /// Boxes still in play, paired with their index
    pub fn active_boxes(&self) -> impl Iterator<Item = (usize, &Block)> {
        self.boxes.iter().enumerate().filter(|(_, b)| b.active)
    }

    pub fn is_box_active(&self, index: usize) -> bool {
        self.boxes.get(index).map_or(false, |b| b.active)
    }

    /// Removes a box from play, `false` when it was already gone
    pub fn destroy_box(&mut self, index: usize) -> bool {
        match self.boxes.get_mut(index) {
            Some(block) if block.active => {
                block.active = false;
                true
            }
            _ => false,
        }
    }
}
