//! 2-D coordinates and the Euclidean distance between them.

use serde::{Deserialize, Serialize};

/// Distances and coordinates are measured in meters.
pub type Meters = f64;

/// Tuple form of a 2-D coordinate, as it appears on the wire: `[x, y]`.
pub type Coordinates = (Meters, Meters);

/// Record form of a 2-D coordinate. Immutable value record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: Meters,
    pub y: Meters,
}

impl From<Coordinates> for Point {
    fn from((x, y): Coordinates) -> Self {
        Self { x, y }
    }
}

impl Point {
    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> Meters {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Euclidean distance between two tuple-form coordinates.
pub fn distance(a: Coordinates, b: Coordinates) -> Meters {
    Point::from(a).distance_to(&Point::from(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn classic_three_four_five_triangle() {
        assert!((distance((0.0, 0.0), (3.0, 4.0)) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn record_form_matches_tuple_form() {
        let a = Point { x: 1.5, y: -2.0 };
        let b = Point { x: -3.0, y: 4.25 };
        assert_eq!(a.distance_to(&b), distance((1.5, -2.0), (-3.0, 4.25)));
    }

    #[test]
    fn distance_to_self_is_zero() {
        let p = Point { x: 7.0, y: -7.0 };
        assert_eq!(p.distance_to(&p), 0.0);
    }

    proptest! {
        /// Property: distance is symmetric.
        #[test]
        fn distance_is_symmetric(
            x1 in -1e6f64..1e6, y1 in -1e6f64..1e6,
            x2 in -1e6f64..1e6, y2 in -1e6f64..1e6,
        ) {
            prop_assert_eq!(distance((x1, y1), (x2, y2)), distance((x2, y2), (x1, y1)));
        }

        /// Property: distance is never negative.
        #[test]
        fn distance_is_non_negative(
            x1 in -1e6f64..1e6, y1 in -1e6f64..1e6,
            x2 in -1e6f64..1e6, y2 in -1e6f64..1e6,
        ) {
            prop_assert!(distance((x1, y1), (x2, y2)) >= 0.0);
        }

        /// Property: translating both points leaves the distance unchanged
        /// up to floating-point error.
        #[test]
        fn distance_is_translation_invariant(
            x1 in -1e3f64..1e3, y1 in -1e3f64..1e3,
            x2 in -1e3f64..1e3, y2 in -1e3f64..1e3,
            dx in -1e3f64..1e3, dy in -1e3f64..1e3,
        ) {
            let base = distance((x1, y1), (x2, y2));
            let moved = distance((x1 + dx, y1 + dy), (x2 + dx, y2 + dy));
            prop_assert!((base - moved).abs() < 1e-6);
        }
    }
}
