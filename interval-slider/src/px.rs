//! Physical pixel geometry for the interval slider.
//!
//! All layout results (slider frame, thumb rectangles, anchors, label and
//! mark frames) are expressed in physical pixels, relative to the top-left
//! corner of the control.
//!
//! # Key Types
//!
//! - [`Px`] - A single physical pixel coordinate value, negative values allowed
//! - [`PxPosition`] - A 2D point (x, y)
//! - [`PxSize`] - A 2D size (width, height)
//! - [`PxRect`] - A rectangle given by its top-left corner and its size
//!
//! # Coordinate System
//!
//! - Origin (0, 0) at the top-left corner of the control
//! - X-axis increases to the right
//! - Y-axis increases downward
//!
//! # Example
//!
//! ```
//! use interval_slider::px::{Px, PxPosition, PxRect, PxSize};
//!
//! let rect = PxRect::from_position_size(
//!     PxPosition::new(Px(10), Px(20)),
//!     PxSize::new(Px(100), Px(40)),
//! );
//! assert_eq!(rect.center(), PxPosition::new(Px(60), Px(40)));
//! ```

use crate::dp::Dp;

/// A physical pixel coordinate value.
///
/// Unlike density-independent pixels ([`Dp`]), physical pixels are not scaled
/// by the screen density.
///
/// # Examples
///
/// ```
/// use interval_slider::px::Px;
///
/// let a = Px(100);
/// let b = Px(-50);
/// assert_eq!(a + b, Px(50));
/// assert_eq!(a.half(), Px(50));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0);

    /// Converts from density-independent pixels using the global scale factor.
    pub fn from_dp(dp: Dp) -> Self {
        Px(dp.to_pixels_f64() as i32)
    }

    /// Converts the pixel value to f32.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Creates a `Px` from an f32 value, saturating at the numeric bounds.
    ///
    /// ```
    /// use interval_slider::px::Px;
    ///
    /// assert_eq!(Px::saturating_from_f32(42.7), Px(42));
    /// assert_eq!(Px::saturating_from_f32(f32::MAX), Px(i32::MAX));
    /// ```
    pub fn saturating_from_f32(value: f32) -> Self {
        let clamped_value = value.clamp(i32::MIN as f32, i32::MAX as f32);
        Px(clamped_value as i32)
    }

    /// Returns half of this value, truncated toward zero.
    pub fn half(self) -> Self {
        Px(self.0 / 2)
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
    /// The zero position (0, 0).
    pub const ZERO: Self = Self { x: Px(0), y: Px(0) };

    /// Creates a new position from x and y coordinates.
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }
}

/// A 2D size in physical pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PxSize {
    /// The width in physical pixels
    pub width: Px,
    /// The height in physical pixels
    pub height: Px,
}

impl PxSize {
    /// Creates a new size from width and height.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }

    /// Converts density-independent dimensions to a pixel size.
    pub fn from_dp(width: Dp, height: Dp) -> Self {
        Self {
            width: Px::from_dp(width),
            height: Px::from_dp(height),
        }
    }
}

/// A rectangle in physical pixel space, given by its top-left corner and
/// its dimensions.
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
    /// A zero rectangle (0×0 at position (0, 0)).
    pub const ZERO: Self = Self {
        x: Px::ZERO,
        y: Px::ZERO,
        width: Px::ZERO,
        height: Px::ZERO,
    };

    /// Creates a new rectangle from position and size components.
    pub const fn new(x: Px, y: Px, width: Px, height: Px) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a new rectangle from a position and size.
    pub fn from_position_size(position: PxPosition, size: PxSize) -> Self {
        Self {
            x: position.x,
            y: position.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Creates a rectangle of the given size whose center is `center`.
    ///
    /// The top-left corner is `center - size / 2`, so
    /// `PxRect::centered_at(c, s).center() == c` for every `c` and `s`.
    pub fn centered_at(center: PxPosition, size: PxSize) -> Self {
        Self {
            x: center.x - size.width.half(),
            y: center.y - size.height.half(),
            width: size.width,
            height: size.height,
        }
    }

    /// The top-left corner.
    pub fn origin(&self) -> PxPosition {
        PxPosition::new(self.x, self.y)
    }

    /// The dimensions.
    pub fn size(&self) -> PxSize {
        PxSize::new(self.width, self.height)
    }

    /// The same rectangle moved to the origin; what a view calls its bounds.
    pub fn local_bounds(&self) -> Self {
        Self::new(Px::ZERO, Px::ZERO, self.width, self.height)
    }

    /// The center point, `origin + size / 2`.
    pub fn center(&self) -> PxPosition {
        PxPosition::new(self.x + self.width.half(), self.y + self.height.half())
    }

    /// The y-coordinate of the bottom edge.
    pub fn max_y(&self) -> Px {
        self.y + self.height
    }

    /// Whether the point lies inside the rectangle (right and bottom edges
    /// excluded).
    pub fn contains(&self, point: PxPosition) -> bool {
        point.x.0 >= self.x.0
            && point.x.0 < self.x.0 + self.width.0
            && point.y.0 >= self.y.0
            && point.y.0 < self.y.0 + self.height.0
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

impl std::ops::Sub for PxPosition {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        PxPosition {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
