use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Unit vector pointing along a heading given in degrees
    ///
    /// 0° faces +x and angles grow clockwise on screen (y grows downwards)
    pub fn from_degrees(angle: f64) -> Self {
        let radians = angle.to_radians();
        Self {
            x: radians.cos(),
            y: radians.sin(),
        }
    }

    pub fn plus(&self, coord: &Vector2) -> Self {
        Self {
            x: self.x + coord.x,
            y: self.y + coord.y,
        }
    }

    pub fn minus(&self, coord: &Vector2) -> Self {
        Self {
            x: self.x - coord.x,
            y: self.y - coord.y,
        }
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(&self, other: &Vector2) -> f64 {
        self.minus(other).magnitude()
    }
}

/// Axis aligned bounding box described by its top-left corner and extent
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub origin: Vector2,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(origin: Vector2, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Square of side `size` centered on `center`
    pub fn centered(center: Vector2, size: f64) -> Self {
        Self {
            origin: center.minus(&Vector2::new(size / 2.0, size / 2.0)),
            width: size,
            height: size,
        }
    }

    pub fn center(&self) -> Vector2 {
        Vector2 {
            x: self.origin.x + self.width / 2.0,
            y: self.origin.y + self.height / 2.0,
        }
    }

    pub fn contains(&self, point: &Vector2) -> bool {
        point.x >= self.origin.x
            && point.x <= self.origin.x + self.width
            && point.y >= self.origin.y
            && point.y <= self.origin.y + self.height
    }

    /// Strict intersection test, rectangles that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.origin.x < other.origin.x + other.width
            && other.origin.x < self.origin.x + self.width
            && self.origin.y < other.origin.y + other.height
            && other.origin.y < self.origin.y + self.height
    }
}

/// Wraps an angle in degrees into `[0, 360)`
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_zero_points_right() {
        let dir = Vector2::from_degrees(0.0);
        assert_eq!(dir, Vector2::new(1.0, 0.0));

        let down = Vector2::from_degrees(90.0);
        assert!(down.x.abs() < 1e-12);
        assert!((down.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn touching_rects_do_not_overlap() {
        let a = Rect::new(Vector2::new(0.0, 0.0), 50.0, 50.0);
        let b = Rect::new(Vector2::new(50.0, 0.0), 50.0, 50.0);
        let c = Rect::new(Vector2::new(49.0, 49.0), 10.0, 10.0);

        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&b));
    }

    #[test]
    fn centered_rect_round_trips_center() {
        let rect = Rect::centered(Vector2::new(100.0, 375.0), 40.0);
        assert_eq!(rect.origin, Vector2::new(80.0, 355.0));
        assert_eq!(rect.center(), Vector2::new(100.0, 375.0));
    }

    #[test]
    fn degrees_wrap_into_range() {
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert!(normalize_degrees(-1e-20) < 360.0);
    }
}
