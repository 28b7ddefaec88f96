//! Fundamental geometric types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Integer grid position in the arena. x grows East, y grows North.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift this point by the given deltas.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Shortest distance from this point to the closed segment `a..b`.
    ///
    /// The projection onto the segment is clamped to the endpoints, so a
    /// point "past" either end measures to that endpoint. A degenerate
    /// segment (a == b) degrades to plain point distance.
    pub fn distance_to_segment(&self, a: Point, b: Point) -> f64 {
        let p = DVec2::new(self.x as f64, self.y as f64);
        let start = DVec2::new(a.x as f64, a.y as f64);
        let end = DVec2::new(b.x as f64, b.y as f64);

        let seg = end - start;
        let len_sq = seg.length_squared();
        if len_sq == 0.0 {
            return p.distance(start);
        }

        let t = ((p - start).dot(seg) / len_sq).clamp(0.0, 1.0);
        p.distance(start + seg * t)
    }
}
