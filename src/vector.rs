//! # Grid Vector
//!
//! A `Vector` is an integer `(x, y)` pair measuring distance along the two grid
//! axes. Read as a position it is the distance from the origin `(0, 0)`, where
//! `x` is the row and `y` the column. Read as a movement it is the distance
//! from another position, so adding a direction to a position yields the next
//! position along that direction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Integer displacement or position on the board grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vector {
    /// Row component
    pub x: i32,
    /// Column component
    pub y: i32,
}

impl Vector {
    /// One row towards the top edge
    pub const UP: Vector = Vector { x: -1, y: 0 };
    /// One row towards the bottom edge
    pub const DOWN: Vector = Vector { x: 1, y: 0 };
    /// One column towards the left edge
    pub const LEFT: Vector = Vector { x: 0, y: -1 };
    /// One column towards the right edge
    pub const RIGHT: Vector = Vector { x: 0, y: 1 };

    /// Creates a vector from its row and column components
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise sum, or `None` if either component overflows
    ///
    /// # Arguments
    /// * `other` - The displacement to add
    ///
    /// # Returns
    /// `Some(sum)` when both components fit in an `i32`
    pub fn checked_add(self, other: Vector) -> Option<Vector> {
        Some(Vector::new(
            self.x.checked_add(other.x)?,
            self.y.checked_add(other.y)?,
        ))
    }
}

/// Component-wise sum. Never panics: components wrap on overflow.
impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector::new(self.x.wrapping_add(other.x), self.y.wrapping_add(other.y))
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Vector {
    fn from((x, y): (i32, i32)) -> Self {
        Vector::new(x, y)
    }
}
