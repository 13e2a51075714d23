//! Screen-space points and rectangles.
//!
//! The board is laid out in whatever units the front end draws in
//! (pixels, terminal cells, ...). Rows grow along `+y` from the origin and
//! columns along `+x`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// A point or offset in screen units.
#[derive(Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vec2 {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns true if both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl fmt::Debug for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec2({}, {})", self.x, self.y)
    }
}

/// Axis-aligned rectangle given by its minimum and maximum corners.
///
/// Containment is half-open: the minimum edges belong to the rectangle, the
/// maximum edges do not. Two rectangles sharing an edge therefore never both
/// contain a point on it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Corner with the smallest coordinates.
    pub min: Vec2,
    /// Corner with the largest coordinates.
    pub max: Vec2,
}

impl Rect {
    /// Creates a rectangle from its two corners.
    #[inline]
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Creates a rectangle from its minimum corner and size.
    pub fn from_origin_size(origin: Vec2, width: f64, height: f64) -> Self {
        Self::new(origin, origin + Vec2::new(width, height))
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Width times height.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Midpoint of the rectangle.
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// Returns true if `point` lies inside (half-open on the max edges).
    pub fn contains(&self, point: Vec2) -> bool {
        self.min.x <= point.x
            && point.x < self.max.x
            && self.min.y <= point.y
            && point.y < self.max.y
    }

    /// Returns true if the two rectangles share a region of positive area.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Shrinks the rectangle by `margin` on every side.
    ///
    /// A margin larger than half the extent collapses that axis onto the
    /// centre line instead of inverting the rectangle.
    pub fn inset(&self, margin: f64) -> Rect {
        let center = self.center();
        let half_w = (self.width() / 2.0 - margin).max(0.0);
        let half_h = (self.height() / 2.0 - margin).max(0.0);
        Rect::new(
            Vec2::new(center.x - half_w, center.y - half_h),
            Vec2::new(center.x + half_w, center.y + half_h),
        )
    }
}
