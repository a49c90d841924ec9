//! Math utilities and types
//!
//! Integer screen-space value types used throughout the component tree.
//! Screen space has its origin in the top-left corner, x grows to the right
//! and y grows downwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

pub use nalgebra::Vector4;

/// RGBA colour with components in `0.0..=1.0`
pub type Color = Vector4<f32>;

/// Frequently used colours
pub mod colors {
    use super::Color;

    /// Opaque white
    pub fn white() -> Color {
        Color::new(1.0, 1.0, 1.0, 1.0)
    }

    /// Opaque black
    pub fn black() -> Color {
        Color::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Build a colour from a packed `0xRRGGBB` value, fully opaque
    pub fn from_rgb(rgb: u32) -> Color {
        let channel = |shift: u32| ((rgb >> shift) & 0xFF) as f32 / 255.0;
        Color::new(channel(16), channel(8), channel(0), 1.0)
    }
}

/// Screen-space direction used for directional translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Towards the top of the screen (negative y)
    Up,
    /// Towards the bottom of the screen (positive y)
    Down,
    /// Towards the left edge (negative x)
    Left,
    /// Towards the right edge (positive x)
    Right,
}

impl Direction {
    /// Unit offset of this direction as `(dx, dy)`
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Immutable integer point in screen space
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate2D {
    /// Horizontal component
    pub x: i32,
    /// Vertical component
    pub y: i32,
}

impl Coordinate2D {
    /// The screen origin
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new coordinate
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Copy of this coordinate shifted by `(dx, dy)`
    #[must_use]
    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Copy of this coordinate shifted by the components of `offset`
    #[must_use]
    pub const fn translated(self, offset: Self) -> Self {
        self.translate(offset.x, offset.y)
    }

    /// Copy of this coordinate moved `distance` pixels in `direction`
    #[must_use]
    pub const fn moved_in(self, direction: Direction, distance: i32) -> Self {
        let (dx, dy) = direction.offset();
        self.translate(dx * distance, dy * distance)
    }

    /// Euclidean distance to `other`
    pub fn distance_to(self, other: Self) -> f32 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy) as f32
    }
}

impl Add for Coordinate2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.translated(rhs)
    }
}

impl Sub for Coordinate2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Coordinate2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<(i32, i32)> for Coordinate2D {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate{{X={}, Y={}}}", self.x, self.y)
    }
}

/// Axis-aligned rectangle: an origin plus a size
///
/// Containment is half-open: a plane covers `[x, x + width)` horizontally and
/// `[y, y + height)` vertically, so the right and bottom edge pixels belong to
/// the neighbouring plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Plane {
    /// Top-left corner
    pub origin: Coordinate2D,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl Plane {
    /// Create a plane from its top-left corner and size
    pub const fn new(origin: Coordinate2D, width: i32, height: i32) -> Self {
        Self { origin, width, height }
    }

    /// Create a plane of the given size anchored at the origin
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(Coordinate2D::ORIGIN, width, height)
    }

    /// X coordinate one past the right edge
    pub const fn right(&self) -> i32 {
        self.origin.x + self.width
    }

    /// Y coordinate one past the bottom edge
    pub const fn bottom(&self) -> i32 {
        self.origin.y + self.height
    }

    /// Whether the plane covers no pixels
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Whether `(x, y)` lies inside the plane (half-open)
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.origin.x && x < self.right() && y >= self.origin.y && y < self.bottom()
    }

    /// Whether `coordinate` lies inside the plane (half-open)
    pub const fn contains_coordinate(&self, coordinate: Coordinate2D) -> bool {
        self.contains(coordinate.x, coordinate.y)
    }

    /// Copy of this plane with its origin shifted by `(dx, dy)`
    #[must_use]
    pub const fn moved(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.origin.translate(dx, dy), self.width, self.height)
    }

    /// Copy of this plane with its origin shifted by `offset`
    #[must_use]
    pub const fn translated(&self, offset: Coordinate2D) -> Self {
        self.moved(offset.x, offset.y)
    }

    /// Copy shrunk by `amount` pixels on every side; never negative in size
    #[must_use]
    pub fn inset(&self, amount: i32) -> Self {
        Self::new(
            self.origin.translate(amount, amount),
            (self.width - 2 * amount).max(0),
            (self.height - 2 * amount).max(0),
        )
    }

    /// Overlapping area of two planes, or `None` if they do not overlap
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let left = self.origin.x.max(other.origin.x);
        let top = self.origin.y.max(other.origin.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right <= left || bottom <= top {
            return None;
        }

        Some(Self::new(Coordinate2D::new(left, top), right - left, bottom - top))
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plane{{{} {}x{}}}", self.origin, self.width, self.height)
    }
}
