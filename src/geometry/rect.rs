use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrellisError};

/// An axis-aligned rectangle in screen coordinates.
///
/// `right` and `bottom` are edges, not the last covered pixel, so
/// `width() == right - left`. Nothing stops a caller from building an
/// inverted rectangle; consumers that need a real area call [`Rect::validate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Build a rectangle from its upper-left corner and size.
    ///
    /// `right`/`bottom` saturate at the `i32` limits.
    pub const fn from_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x.saturating_add(width), y.saturating_add(height))
    }

    /// Horizontal extent. Widened so that any pair of `i32` edges fits.
    pub fn width(&self) -> i64 {
        i64::from(self.right) - i64::from(self.left)
    }

    pub fn height(&self) -> i64 {
        i64::from(self.bottom) - i64::from(self.top)
    }

    pub fn area(&self) -> i64 {
        self.width().saturating_mul(self.height())
    }

    /// True when the rectangle covers no area (including inverted ones)
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// True when the bounds are ordered (`left <= right`, `top <= bottom`)
    pub const fn is_valid(&self) -> bool {
        self.left <= self.right && self.top <= self.bottom
    }

    /// Return the rectangle if it has a positive width and height.
    pub fn validate(self) -> Result<Self> {
        if !self.is_valid() {
            return Err(TrellisError::InvalidGeometry {
                rect: self,
                reason: "bounds are inverted",
            });
        }
        if self.is_empty() {
            return Err(TrellisError::InvalidGeometry {
                rect: self,
                reason: "zero area",
            });
        }
        Ok(self)
    }

    pub fn center(&self) -> (i32, i32) {
        (
            saturate(i64::from(self.left) + self.width() / 2),
            saturate(i64::from(self.top) + self.height() / 2),
        )
    }

    /// Overwrite all four bounds. No validation is done.
    pub fn set_bounds(&mut self, left: i32, top: i32, right: i32, bottom: i32) {
        *self = Self::new(left, top, right, bottom);
    }

    /// Value-style counterpart of [`Rect::set_bounds`]
    #[must_use]
    pub const fn with_bounds(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right, bottom)
    }

    /// Place the upper-left corner at `(x, y)`, keeping the size
    pub fn move_to(&mut self, x: i32, y: i32) {
        *self = self.moved_to(x, y);
    }

    /// Bounds that would leave the `i32` range saturate instead.
    #[must_use]
    pub fn moved_to(self, x: i32, y: i32) -> Self {
        Self::new(
            x,
            y,
            saturate(i64::from(x) + self.width()),
            saturate(i64::from(y) + self.height()),
        )
    }

    /// Checked form of [`Rect::moved_to`] for positions computed in wider
    /// arithmetic. Fails if any resulting bound does not fit in `i32`.
    pub fn try_moved_to(self, x: i64, y: i64) -> Result<Self> {
        let bounds = (
            i32::try_from(x),
            i32::try_from(y),
            x.checked_add(self.width()).map(i32::try_from),
            y.checked_add(self.height()).map(i32::try_from),
        );
        match bounds {
            (Ok(left), Ok(top), Some(Ok(right)), Some(Ok(bottom))) => {
                Ok(Self::new(left, top, right, bottom))
            }
            _ => Err(TrellisError::InvalidGeometry {
                rect: self,
                reason: "position does not fit in i32 coordinates",
            }),
        }
    }

    /// Translate all four bounds by `(dx, dy)`
    pub fn shift(&mut self, dx: i32, dy: i32) {
        *self = self.shifted(dx, dy);
    }

    /// Bounds saturate at the `i32` limits.
    #[must_use]
    pub const fn shifted(self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.left.saturating_add(dx),
            self.top.saturating_add(dy),
            self.right.saturating_add(dx),
            self.bottom.saturating_add(dy),
        )
    }

    /// Check if a point lies inside the rectangle, edges included
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        self.left <= x && x <= self.right && self.top <= y && y <= self.bottom
    }
}

fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}
