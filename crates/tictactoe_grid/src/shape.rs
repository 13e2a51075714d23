//! Player marks and their placement geometry.

use crate::geometry::{Rect, Vec2};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The kind of mark a player places.
///
/// The string identifier (`"Cross"` / `"Circle"`) is stable and is the key
/// used by [`ScoreKeeper`](crate::ScoreKeeper).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum ShapeKind {
    /// Cross, conventionally "X".
    Cross,
    /// Circle, conventionally "O".
    Circle,
}

impl ShapeKind {
    /// Returns the other kind.
    pub fn opponent(self) -> Self {
        match self {
            ShapeKind::Cross => ShapeKind::Circle,
            ShapeKind::Circle => ShapeKind::Cross,
        }
    }

    /// Stable string identifier.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Straight stroke between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start point.
    pub start: Vec2,
    /// End point.
    pub end: Vec2,
}

/// What a front end has to draw for a shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Outline {
    /// Two crossing diagonals.
    Cross([Segment; 2]),
    /// A circle inscribed in the drawing area.
    Circle {
        /// Centre of the circle.
        center: Vec2,
        /// Radius of the circle.
        radius: f64,
    },
}

/// A mark placed in a cell.
///
/// `position` is the minimum corner of the cell, `width`/`height` its size
/// and `margin` the gap kept between the cell edge and the stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct Shape {
    kind: ShapeKind,
    position: Vec2,
    width: f64,
    height: f64,
    margin: f64,
}

impl Shape {
    /// Creates a shape drawn in the `width` x `height` box at `position`.
    pub fn new(position: Vec2, kind: ShapeKind, width: f64, height: f64, margin: f64) -> Self {
        Self {
            kind,
            position,
            width,
            height,
            margin: margin.max(0.0),
        }
    }

    /// Creates a shape filling the given cell bounds.
    #[instrument(level = "trace")]
    pub fn fit(bounds: Rect, kind: ShapeKind, margin: f64) -> Self {
        Self::new(bounds.min, kind, bounds.width(), bounds.height(), margin)
    }

    /// Area the stroke is drawn in: the cell box shrunk by the margin.
    pub fn area(&self) -> Rect {
        Rect::from_origin_size(self.position, self.width, self.height).inset(self.margin)
    }

    /// Drawing primitives for this shape.
    pub fn outline(&self) -> Outline {
        let area = self.area();
        match self.kind {
            ShapeKind::Cross => Outline::Cross([
                Segment {
                    start: area.min,
                    end: area.max,
                },
                Segment {
                    start: Vec2::new(area.min.x, area.max.y),
                    end: Vec2::new(area.max.x, area.min.y),
                },
            ]),
            ShapeKind::Circle => Outline::Circle {
                center: area.center(),
                radius: area.width().min(area.height()) / 2.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_identifiers_are_stable() {
        assert_eq!(ShapeKind::Cross.as_str(), "Cross");
        assert_eq!(ShapeKind::Circle.to_string(), "Circle");
        assert_eq!(ShapeKind::from_str("circle"), Ok(ShapeKind::Circle));
        assert!(ShapeKind::from_str("square").is_err());
    }

    #[test]
    fn test_serializes_as_identifier() {
        assert_eq!(serde_json::to_string(&ShapeKind::Cross).unwrap(), "\"Cross\"");
        let kind: ShapeKind = serde_json::from_str("\"Circle\"").unwrap();
        assert_eq!(kind, ShapeKind::Circle);
    }

    #[test]
    fn test_opponent_flips() {
        assert_eq!(ShapeKind::Cross.opponent(), ShapeKind::Circle);
        assert_eq!(ShapeKind::Circle.opponent(), ShapeKind::Cross);
    }

    #[test]
    fn test_cross_outline_spans_inner_area() {
        let shape = Shape::new(Vec2::new(0.0, 0.0), ShapeKind::Cross, 100.0, 80.0, 10.0);
        let Outline::Cross([a, b]) = shape.outline() else {
            panic!("cross should produce strokes");
        };
        assert_eq!(a.start, Vec2::new(10.0, 10.0));
        assert_eq!(a.end, Vec2::new(90.0, 70.0));
        assert_eq!(b.start, Vec2::new(10.0, 70.0));
        assert_eq!(b.end, Vec2::new(90.0, 10.0));
    }

    #[test]
    fn test_circle_fits_smaller_side() {
        let bounds = Rect::from_origin_size(Vec2::new(20.0, 0.0), 100.0, 60.0);
        let shape = Shape::fit(bounds, ShapeKind::Circle, 5.0);
        match shape.outline() {
            Outline::Circle { center, radius } => {
                assert_eq!(center, Vec2::new(70.0, 30.0));
                assert_eq!(radius, 25.0);
            }
            other => panic!("unexpected outline {other:?}"),
        }
    }
}
