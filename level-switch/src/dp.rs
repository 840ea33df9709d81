//! # Density-Independent Distances
//!
//! This module provides the logical distance unit used by the level switch
//! together with the position, size and rectangle types built on it.
//!
//! ## Overview
//!
//! All geometry in this crate is expressed in density-independent points
//! ([`Dp`]). Hosts convert their native pointer coordinates into `Dp` before
//! delivering events; the switch never needs to know the screen scale.
//!
//! ## Coordinate System
//!
//! - Origin (0, 0) at the top-left corner
//! - X-axis increases to the right
//! - Y-axis increases downward
//!
//! ## Usage
//!
//! ```
//! use level_switch::dp::{Dp, DpPosition, DpRect, DpSize};
//!
//! let frame = DpRect::new(DpPosition::ZERO, DpSize::new(Dp(112.0), Dp(288.0)));
//! assert!(frame.contains(DpPosition::new(Dp(10.0), Dp(100.0))));
//! assert!(!frame.contains(DpPosition::new(Dp(10.0), Dp(288.0))));
//! ```

use std::ops::{Add, Div, Mul, Sub};

/// Density-independent distance.
///
/// `Dp` wraps a single `f64`. The level switch uses it for segment heights,
/// container widths and pointer coordinates alike.
///
/// ```
/// use level_switch::dp::Dp;
///
/// let segment = Dp(72.0);
/// let stack = segment * 4.0;
/// assert_eq!(stack, Dp(288.0));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// A constant representing zero distance.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Dp` instance with the specified value.
    pub const fn new(value: f64) -> Self {
        Dp(value)
    }

    /// Returns the raw `f64` value.
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Returns `true` when the value is finite and strictly greater than zero.
    ///
    /// Segment heights and widths must satisfy this to produce a usable
    /// stack.
    pub fn is_positive(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Dp::new(value)
    }
}

impl Add for Dp {
    type Output = Dp;

    fn add(self, rhs: Dp) -> Dp {
        Dp(self.0 + rhs.0)
    }
}

impl Sub for Dp {
    type Output = Dp;

    fn sub(self, rhs: Dp) -> Dp {
        Dp(self.0 - rhs.0)
    }
}

impl Mul<f64> for Dp {
    type Output = Dp;

    fn mul(self, rhs: f64) -> Dp {
        Dp(self.0 * rhs)
    }
}

/// Dividing one distance by another yields a plain ratio.
impl Div for Dp {
    type Output = f64;

    fn div(self, rhs: Dp) -> f64 {
        self.0 / rhs.0
    }
}

/// A 2D position in `Dp` space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DpPosition {
    /// The x-coordinate.
    pub x: Dp,
    /// The y-coordinate.
    pub y: Dp,
}

impl DpPosition {
    /// The origin.
    pub const ZERO: Self = Self {
        x: Dp::ZERO,
        y: Dp::ZERO,
    };

    /// Creates a new position.
    pub const fn new(x: Dp, y: Dp) -> Self {
        Self { x, y }
    }

    /// Returns this position expressed relative to `origin`.
    pub fn relative_to(self, origin: DpPosition) -> Self {
        Self {
            x: self.x - origin.x,
            y: self.y - origin.y,
        }
    }
}

impl From<[f64; 2]> for DpPosition {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(Dp(x), Dp(y))
    }
}

/// A 2D size in `Dp` space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DpSize {
    /// The width.
    pub width: Dp,
    /// The height.
    pub height: Dp,
}

impl DpSize {
    /// Creates a new size.
    pub const fn new(width: Dp, height: Dp) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in `Dp` space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DpRect {
    /// Top-left corner.
    pub origin: DpPosition,
    /// Extent of the rectangle.
    pub size: DpSize,
}

impl DpRect {
    /// Creates a new rectangle from a position and size.
    pub const fn new(origin: DpPosition, size: DpSize) -> Self {
        Self { origin, size }
    }

    /// The smallest y-coordinate covered by the rectangle.
    pub fn min_y(&self) -> Dp {
        self.origin.y
    }

    /// The y-coordinate just past the bottom edge.
    pub fn max_y(&self) -> Dp {
        self.origin.y + self.size.height
    }

    /// Checks whether a point lies inside the rectangle.
    ///
    /// The left and top edges are inclusive, the right and bottom edges are
    /// exclusive, so two vertically adjacent rectangles never both contain
    /// the same point.
    pub fn contains(&self, point: DpPosition) -> bool {
        let within_x =
            point.x >= self.origin.x && point.x < self.origin.x + self.size.width;
        let within_y = point.y >= self.min_y() && point.y < self.max_y();
        within_x && within_y
    }
}
