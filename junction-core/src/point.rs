//! Integer points in three-dimensional space.

use std::fmt;

/// A junction box position with integer coordinates.
///
/// Points are identified by their index in the input-ordered slice handed to
/// the forest builders; the struct itself carries no identity.
///
/// # Examples
/// ```
/// use junction_core::Point;
///
/// let origin = Point::new(0, 0, 0);
/// let corner = Point::new(1, 2, 2);
/// assert_eq!(origin.squared_distance(&corner), 9);
/// assert_eq!(origin.distance(&corner), 3.0);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Point {
    x: i32,
    y: i32,
    z: i32,
}

impl Point {
    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns the x coordinate.
    #[must_use]
    #[rustfmt::skip]
    pub const fn x(&self) -> i32 { self.x }

    /// Returns the y coordinate.
    #[must_use]
    #[rustfmt::skip]
    pub const fn y(&self) -> i32 { self.y }

    /// Returns the z coordinate.
    #[must_use]
    #[rustfmt::skip]
    pub const fn z(&self) -> i32 { self.z }

    /// Returns the exact squared Euclidean distance to `other`.
    ///
    /// Each axis difference fits in 32 bits, so the sum of three squares
    /// always fits in a `u128`.
    #[must_use]
    pub fn squared_distance(&self, other: &Self) -> u128 {
        axis_square(self.x, other.x) + axis_square(self.y, other.y) + axis_square(self.z, other.z)
    }

    /// Returns the Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        (self.squared_distance(other) as f64).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

fn axis_square(left: i32, right: i32) -> u128 {
    let diff = u128::from(i64::from(left).abs_diff(i64::from(right)));
    diff * diff
}
