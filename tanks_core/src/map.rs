//! Static arena layout: the border wall grid and the stock box placement
//!
//! Every position produced here is the top-left corner of a square cell.

use crate::utils::Vector2;

/// Cells along the four borders of the arena
///
/// The top and bottom rows span the full width, the left and right columns
/// fill the rows in between so corners are never doubled up.
pub fn wall_positions(width: f64, height: f64, cell: f64) -> Vec<Vector2> {
    let mut walls = Vec::new();

    let mut x = 0.0;
    while x < width {
        walls.push(Vector2::new(x, 0.0));
        walls.push(Vector2::new(x, height - cell));
        x += cell;
    }

    let mut y = cell;
    while y < height - cell {
        walls.push(Vector2::new(0.0, y));
        walls.push(Vector2::new(width - cell, y));
        y += cell;
    }

    walls
}

/// Box placement of the stock arena
///
/// Two columns of boxes flank the middle, two short rows close the top and
/// bottom and a single box sits in the center. Coordinates near the right and
/// bottom edges follow the arena size.
pub fn default_box_layout(width: f64, height: f64, box_size: f64) -> Vec<Vector2> {
    const GAP: f64 = 5.0;
    let step = box_size + GAP;

    let right_column = width - 200.0 - box_size;
    let bottom_row = height - 150.0 - box_size;

    let mut boxes = vec![Vector2::new(200.0, 220.0)];

    let mut i = 205.0;
    while i <= 485.0 {
        boxes.push(Vector2::new(200.0, 20.0 + i + box_size));
        boxes.push(Vector2::new(right_column, i - box_size - GAP));
        i += step;
    }
    boxes.push(Vector2::new(right_column, 480.0));

    let mut i = 345.0;
    while i <= 510.0 {
        boxes.push(Vector2::new(i + box_size, 150.0));
        boxes.push(Vector2::new(i, bottom_row));
        i += step;
    }

    boxes.push(Vector2::new(450.0, 350.0));

    boxes
}
