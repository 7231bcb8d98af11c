#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Grids are addressed row-major with 0-indexed `(row, col)` coordinates and
//! the origin at the top-left cell.

use std::fmt;
use std::ops::Add;

/// Coordinate arithmetic left the grid's first quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("negative coordinate ({row}, {col})")]
    NegativeCoordinate { row: i64, col: i64 },
}

/// A cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const ORIGIN: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Build from signed components, rejecting negatives.
    pub fn from_signed(row: i64, col: i64) -> Result<Self, GeometryError> {
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) => Ok(Self::new(r, c)),
            _ => Err(GeometryError::NegativeCoordinate { row, col }),
        }
    }

    /// Shift by a signed delta.
    pub fn offset(self, rows: i64, cols: i64) -> Result<Self, GeometryError> {
        Self::from_signed(self.row as i64 + rows, self.col as i64 + cols)
    }
}

/// Saturates at `usize::MAX`, which no grid contains.
impl Add for Coord {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.row.saturating_add(rhs.row),
            self.col.saturating_add(rhs.col),
        )
    }
}

impl From<(usize, usize)> for Coord {
    #[inline]
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Dimensions of a rectangular block of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub height: usize,
    pub width: usize,
}

impl Size {
    #[inline]
    pub const fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    #[inline]
    pub const fn area(self) -> usize {
        self.height * self.width
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.height == 0 || self.width == 0
    }

    #[inline]
    pub const fn contains(self, coord: Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    /// Whether a block of `other` placed at `origin` stays inside.
    #[inline]
    pub const fn fits(self, origin: Coord, other: Size) -> bool {
        match (
            origin.row.checked_add(other.height),
            origin.col.checked_add(other.width),
        ) {
            (Some(bottom), Some(right)) => bottom <= self.height && right <= self.width,
            _ => false,
        }
    }

    /// Grow by `margin` cells on every side.
    pub fn expanded(self, margin: usize) -> Self {
        Self::new(self.height + 2 * margin, self.width + 2 * margin)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

/// Which corner of an overlaid block a position refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Anchor {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Anchor {
    /// Top-left coordinate of a `size` block whose anchored corner sits at `pos`.
    pub fn origin(self, pos: Coord, size: Size) -> Result<Coord, GeometryError> {
        let last_row = size.height.saturating_sub(1) as i64;
        let last_col = size.width.saturating_sub(1) as i64;
        match self {
            Self::TopLeft => Ok(pos),
            Self::TopRight => pos.offset(0, -last_col),
            Self::BottomLeft => pos.offset(-last_row, 0),
            Self::BottomRight => pos.offset(-last_row, -last_col),
        }
    }
}

/// Horizontal alignment of text within a wider span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    #[default]
    Left,
    Right,
    Center,
}

impl Alignment {
    /// Padding `(before, after)` that places `len` cells inside `width`.
    ///
    /// Centering puts the odd cell after the content.
    pub const fn padding(self, len: usize, width: usize) -> (usize, usize) {
        let diff = width.saturating_sub(len);
        match self {
            Self::Left => (0, diff),
            Self::Right => (diff, 0),
            Self::Center => (diff / 2, diff - diff / 2),
        }
    }
}
