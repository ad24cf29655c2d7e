//! Physical pixel types used by the pager.
//!
//! Pointer coordinates, scroll offsets and panel geometry are all expressed in
//! physical pixels supplied by the host.
//!
//! # Key Types
//!
//! - [`Px`] - A single pixel value that supports negative values for
//!   mirrored scrolling
//! - [`PxPosition`] - A 2D position (x, y)
//! - [`PxRect`] - An axis-aligned rectangle, used for viewport hit-testing
//!
//! # Example
//!
//! ```
//! use viewpager_core::px::{Px, PxPosition, PxRect};
//!
//! let viewport = PxRect::new(Px(0), Px(0), Px(250), Px(400));
//! let pointer = PxPosition::new(Px(252), Px(10));
//!
//! assert!(!viewport.contains(pointer, Px::ZERO));
//! assert!(viewport.contains(pointer, Px(2)));
//! ```

/// A physical pixel value.
///
/// Negative values are allowed: mirrored surfaces report negative scroll
/// offsets.
///
/// ```
/// use viewpager_core::px::Px;
///
/// let offset = Px::new(245);
/// assert_eq!(offset + Px(5), Px(250));
/// assert_eq!(Px::new(-10).abs(), 10);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Px(pub i32);

impl Px {
    /// A constant representing zero pixels.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Px` instance from an i32 value.
    pub const fn new(value: i32) -> Self {
        Px(value)
    }

    /// Returns the raw i32 value.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Returns the absolute value as a u32.
    pub fn abs(self) -> u32 {
        self.0.unsigned_abs()
    }

    /// Converts the pixel value to f32.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Saturating integer addition.
    pub fn saturating_add(self, rhs: Self) -> Self {
        Px(self.0.saturating_add(rhs.0))
    }

    /// Saturating integer subtraction.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Px(self.0.saturating_sub(rhs.0))
    }
}

/// A 2D position in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxPosition {
    /// The x-coordinate in physical pixels
    pub x: Px,
    /// The y-coordinate in physical pixels
    pub y: Px,
}

impl PxPosition {
    /// A constant representing the zero position (0, 0).
    pub const ZERO: Self = Self { x: Px(0), y: Px(0) };

    /// Creates a new position from x and y coordinates.
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in physical pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PxRect {
    /// The x-coordinate of the top-left corner
    pub x: Px,
    /// The y-coordinate of the top-left corner
    pub y: Px,
    /// The width of the rectangle
    pub width: Px,
    /// The height of the rectangle
    pub height: Px,
}

impl PxRect {
    /// A zero-sized rectangle at the origin.
    pub const ZERO: Self = Self {
        x: Px::ZERO,
        y: Px::ZERO,
        width: Px::ZERO,
        height: Px::ZERO,
    };

    /// Creates a new rectangle from position and size.
    pub const fn new(x: Px, y: Px, width: Px, height: Px) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Checks whether `point` lies inside the rectangle grown by
    /// `leave_radius` on every side.
    ///
    /// Edges are inclusive, so a pointer resting exactly on the border still
    /// counts as inside.
    pub fn contains(&self, point: PxPosition, leave_radius: Px) -> bool {
        let left = self.x.saturating_sub(leave_radius);
        let right = self.x.saturating_add(self.width).saturating_add(leave_radius);
        let top = self.y.saturating_sub(leave_radius);
        let bottom = self
            .y
            .saturating_add(self.height)
            .saturating_add(leave_radius);

        point.x >= left && point.x <= right && point.y >= top && point.y <= bottom
    }
}

impl std::ops::Add for Px {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Px(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Px {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0 - rhs.0)
    }
}

impl std::ops::Neg for Px {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Px(-self.0)
    }
}

impl std::ops::Sub for PxPosition {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        PxPosition {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl From<[i32; 2]> for PxPosition {
    fn from(pos: [i32; 2]) -> Self {
        PxPosition {
            x: Px(pos[0]),
            y: Px(pos[1]),
        }
    }
}
