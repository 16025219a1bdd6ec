//! Normalized layout coordinates.
//!
//! Layout strategies place every node inside the unit square. The rendering
//! surface scales these coordinates to its own canvas.
//!
//! ```text
//!   (0,0) ────────► +X (1,0)
//!     │
//!     │
//!     ▼
//!    +Y (0,1)
//! ```
//!
//! The origin is the top-left corner and Y increases downward, matching most
//! screen coordinate systems.

use serde::Serialize;

/// A 2D point in normalized layout space.
///
/// # Examples
///
/// ```
/// # use irscope_core::geometry::Point;
/// let p = Point::new(0.25, 0.75);
/// assert_eq!(p.x(), 0.25);
/// assert_eq!(p.y(), 0.75);
/// assert!(p.is_normalized());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Creates a new point with the specified x-coordinate
    pub fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    /// Returns `true` if both coordinates lie within `[0, 1]`.
    pub fn is_normalized(self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}
