//! Core geometry types: Point, Size, Rect, Edges.
//!
//! These are the foundational types used throughout dialog-kit for positioning
//! and sizing elements. Units are renderer-defined (pixels for a raster host,
//! cells for a terminal host); the layout engine only does integer arithmetic.

use std::ops::{Add, Sub};

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A 2D extent (width x height).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// A zero-sized size.
    pub const ZERO: Size = Size { width: 0, height: 0 };

    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// A rectangle defined by its top-left corner and extent.
///
/// This is the geometry currency of the layout passes: `measure_minimum`
/// computes extents, `grow_to_fit` enlarges them, `assign_positions` fills in
/// `left`/`top`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// An empty rect at the origin.
    pub const EMPTY: Rect = Rect { left: 0, top: 0, width: 0, height: 0 };

    /// Create a new rect.
    #[inline]
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, width, height }
    }

    /// A rect at the origin with the given extent.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self { left: 0, top: 0, width: size.width, height: size.height }
    }

    /// The right edge (exclusive): `left + width`.
    #[inline]
    pub const fn right(self) -> i32 {
        self.left + self.width
    }

    /// The bottom edge (exclusive): `top + height`.
    #[inline]
    pub const fn bottom(self) -> i32 {
        self.top + self.height
    }

    /// The extent as a [`Size`].
    #[inline]
    pub const fn size(self) -> Size {
        Size { width: self.width, height: self.height }
    }

    /// Whether the point lies inside this rect.
    #[inline]
    pub const fn contains(self, p: Point) -> bool {
        p.x >= self.left && p.x < self.right() && p.y >= self.top && p.y < self.bottom()
    }

    /// Compute the smallest rect containing both `self` and `other`.
    #[inline]
    pub const fn union(self, other: Rect) -> Rect {
        let l = if self.left < other.left { self.left } else { other.left };
        let t = if self.top < other.top { self.top } else { other.top };

        let sr = self.right();
        let or = other.right();
        let r = if sr > or { sr } else { or };

        let sb = self.bottom();
        let ob = other.bottom();
        let b = if sb > ob { sb } else { ob };

        Rect { left: l, top: t, width: r - l, height: b - t }
    }
}

// ---------------------------------------------------------------------------
// Side / Edges
// ---------------------------------------------------------------------------

/// One of the four sides of a rectangle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

/// Per-side spacing with a scalar fallback, used for margins and padding.
///
/// Each side may be overridden individually; reading an unset side falls back
/// to the scalar `base`. This keeps a single stored default instead of
/// duplicating it four times.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Edges {
    base: i32,
    top: Option<i32>,
    right: Option<i32>,
    bottom: Option<i32>,
    left: Option<i32>,
}

impl Edges {
    /// All four sides equal to `base`.
    pub const fn uniform(base: i32) -> Self {
        Self { base, top: None, right: None, bottom: None, left: None }
    }

    /// The value for one side, falling back to the scalar base.
    #[inline]
    pub fn get(&self, side: Side) -> i32 {
        let v = match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        };
        v.unwrap_or(self.base)
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.get(Side::Top)
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.get(Side::Right)
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.get(Side::Bottom)
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.get(Side::Left)
    }

    /// The four resolved values as `(top, right, bottom, left)`.
    pub fn resolved(&self) -> (i32, i32, i32, i32) {
        (self.top(), self.right(), self.bottom(), self.left())
    }

    /// Override a single side. Returns `true` if the resolved value changed.
    pub fn set(&mut self, side: Side, value: i32) -> bool {
        let changed = self.get(side) != value;
        let slot = match side {
            Side::Top => &mut self.top,
            Side::Right => &mut self.right,
            Side::Bottom => &mut self.bottom,
            Side::Left => &mut self.left,
        };
        *slot = Some(value);
        changed
    }

    /// Assign from a value list, mirroring the shorthand accepted at widget
    /// construction:
    ///
    /// - 1 value: all four sides
    /// - 2 values: `(vertical, horizontal)`
    /// - 4 values: `(top, right, bottom, left)`
    ///
    /// Any other count fails with [`Error::InvalidSpacing`] and leaves the
    /// edges untouched. Returns `true` if any resolved value changed.
    pub fn assign(&mut self, values: &[i32]) -> Result<bool> {
        let before = self.resolved();
        match values {
            [all] => {
                *self = Edges::uniform(*all);
            }
            [vertical, horizontal] => {
                self.top = Some(*vertical);
                self.bottom = Some(*vertical);
                self.left = Some(*horizontal);
                self.right = Some(*horizontal);
            }
            [top, right, bottom, left] => {
                self.top = Some(*top);
                self.right = Some(*right);
                self.bottom = Some(*bottom);
                self.left = Some(*left);
            }
            other => return Err(Error::InvalidSpacing(other.len())),
        }
        Ok(self.resolved() != before)
    }

    /// Total horizontal extent: `left + right`.
    #[inline]
    pub fn width(&self) -> i32 {
        self.left() + self.right()
    }

    /// Total vertical extent: `top + bottom`.
    #[inline]
    pub fn height(&self) -> i32 {
        self.top() + self.bottom()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
