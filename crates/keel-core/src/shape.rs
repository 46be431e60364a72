//! Closed polymorphism over shape kinds.
//!
//! [`Shape`] is a tagged variant: exactly one of a fixed set of kinds, each
//! with its own payload struct. Kind and payload are set together by the
//! constructors and can never disagree. Every operation is a free function
//! that matches exhaustively over the kinds, so adding a kind does not
//! compile until each operation handles it.

use std::f64::consts::PI;
use std::fmt;

use crate::contract::{self, Violation};
use crate::optional::Optional;

/// Payload of a circular shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    /// Distance from centre to edge.
    pub radius: f64,
}

/// Payload of a square shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Square {
    /// Length of one edge.
    pub side: f64,
}

/// Discriminator of a [`Shape`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// See [`Circle`].
    Circle,
    /// See [`Square`].
    Square,
}

impl ShapeKind {
    /// Every kind, in declaration order.
    pub const ALL: [ShapeKind; 2] = [ShapeKind::Circle, ShapeKind::Square];

    /// Lower-case name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// One value of a closed set of shape kinds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// A circle.
    Circle(Circle),
    /// A square.
    Square(Square),
}

impl Shape {
    /// A circle of the given radius.
    pub fn circle(radius: f64) -> Self {
        Self::Circle(Circle { radius })
    }

    /// A square with the given side length.
    pub fn square(side: f64) -> Self {
        Self::Square(Square { side })
    }

    /// The discriminator.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Circle(_) => ShapeKind::Circle,
            Self::Square(_) => ShapeKind::Square,
        }
    }

    /// The circle payload, if this is a circle.
    pub fn as_circle(&self) -> Optional<&Circle> {
        match self {
            Self::Circle(c) => Optional::Present(c),
            _ => Optional::Empty,
        }
    }

    /// The square payload, if this is a square.
    pub fn as_square(&self) -> Optional<&Square> {
        match self {
            Self::Square(s) => Optional::Present(s),
            _ => Optional::Empty,
        }
    }

    /// The circle payload.
    ///
    /// # Panics
    ///
    /// Contract violation ([`Violation::WrongKind`]) if this is not a circle.
    #[track_caller]
    pub fn expect_circle(&self) -> &Circle {
        match self {
            Self::Circle(c) => c,
            other => contract::violated(Violation::WrongKind {
                expected: ShapeKind::Circle.name(),
                found: other.kind().name(),
            }),
        }
    }

    /// The square payload.
    ///
    /// # Panics
    ///
    /// Contract violation ([`Violation::WrongKind`]) if this is not a square.
    #[track_caller]
    pub fn expect_square(&self) -> &Square {
        match self {
            Self::Square(s) => s,
            other => contract::violated(Violation::WrongKind {
                expected: ShapeKind::Square.name(),
                found: other.kind().name(),
            }),
        }
    }

    /// See [`area`].
    pub fn area(&self) -> f64 {
        area(self)
    }

    /// See [`perimeter`].
    pub fn perimeter(&self) -> f64 {
        perimeter(self)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Self::Circle(c)
    }
}

impl From<Square> for Shape {
    fn from(s: Square) -> Self {
        Self::Square(s)
    }
}

/// Enclosed area: π·r² for a circle, s² for a square.
pub fn area(shape: &Shape) -> f64 {
    match shape {
        Shape::Circle(Circle { radius }) => PI * radius * radius,
        Shape::Square(Square { side }) => side * side,
    }
}

/// Boundary length: 2π·r for a circle, 4·s for a square.
pub fn perimeter(shape: &Shape) -> f64 {
    match shape {
        Shape::Circle(Circle { radius }) => 2.0 * PI * radius,
        Shape::Square(Square { side }) => 4.0 * side,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn circle_area_radius_two() {
        let a = area(&Shape::circle(2.0));
        assert!((a - 12.566_370_614_359_172).abs() < EPS, "area was {a}");
    }

    #[test]
    fn square_area_side_three() {
        assert_eq!(area(&Shape::square(3.0)), 9.0);
    }

    #[test]
    fn perimeters() {
        assert!((perimeter(&Shape::circle(1.0)) - 2.0 * PI).abs() < EPS);
        assert_eq!(Shape::square(2.5).perimeter(), 10.0);
    }

    #[test]
    fn kind_matches_constructor() {
        assert_eq!(Shape::circle(1.0).kind(), ShapeKind::Circle);
        assert_eq!(Shape::square(1.0).kind(), ShapeKind::Square);
        assert_eq!(Shape::from(Square { side: 1.0 }).kind(), ShapeKind::Square);
    }

    #[test]
    fn checked_accessors_follow_kind() {
        let c = Shape::circle(4.0);
        assert_eq!(c.as_circle().map(|c| c.radius), Optional::of(4.0));
        assert!(c.as_square().is_empty());
        assert_eq!(c.expect_circle().radius, 4.0);
    }

    #[test]
    #[should_panic(expected = "wrong kind: expected square, found circle")]
    fn expect_wrong_kind_is_violation() {
        Shape::circle(1.0).expect_square();
    }

    #[test]
    fn kind_names() {
        let names: Vec<_> = ShapeKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(names, ["circle", "square"]);
    }

    #[test]
    fn mixed_collection_dispatch() {
        let shapes = [Shape::circle(1.0), Shape::square(2.0), Shape::square(1.0)];
        let total: f64 = shapes.iter().map(area).sum();
        assert!((total - (PI + 5.0)).abs() < EPS);
    }
}
