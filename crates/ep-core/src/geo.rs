//! Planar coordinate types and proximity tests.
//!
//! The world is a flat rectangle measured in canvas units, so plain
//! Euclidean distance in `f64` is all the geometry the simulation needs.

use std::fmt;

/// A point on the simulation plane.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// `true` if `other` lies strictly closer than `radius`.
    ///
    /// A point exactly `radius` away is **not** in range.
    #[inline]
    pub fn in_range(self, other: Point, radius: f64) -> bool {
        self.distance(other) < radius
    }

    /// Return this point shifted by `(dx, dy)`.
    #[inline]
    pub fn translate(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// An axis-aligned rectangle spanning `start` (minimum corner) to `end`
/// (maximum corner).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub start: Point,
    pub end:   Point,
}

impl Rect {
    /// Build a rectangle from two corners in any order.
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            start: Point::new(a.x.min(b.x), a.y.min(b.y)),
            end:   Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.end.x - self.start.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.end.y - self.start.y
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) * 0.5,
            (self.start.y + self.end.y) * 0.5,
        )
    }

    /// Inclusive containment: points on the border are inside.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.start.x && p.x <= self.end.x && p.y >= self.start.y && p.y <= self.end.y
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {}]", self.start, self.end)
    }
}
