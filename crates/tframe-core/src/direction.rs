#![forbid(unsafe_code)]

//! Line directions and weights.
//!
//! A box-drawing glyph is described by which of its four arms are drawn and
//! how heavy each arm is. [`JunctionMap`] captures exactly that; the junction
//! table in `tframe-render` maps every valid map to a glyph.

use std::fmt;

use bitflags::bitflags;

/// One of the four arms a box-drawing glyph can extend along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in junction lookup order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    #[inline]
    const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }

    /// Lowercase name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Weight of a single arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Thickness {
    Thin,
    Thick,
    Double,
}

impl Thickness {
    /// Key for an absent arm in the junction table.
    pub const NONE_KEY: &'static str = "none";

    pub const ALL: [Self; 3] = [Self::Thin, Self::Thick, Self::Double];

    /// Key used by the junction table for this weight.
    #[inline]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Thin => "thin",
            Self::Thick => "thick",
            Self::Double => "double",
        }
    }

    /// Table key for an optional arm (`"none"` when absent).
    #[inline]
    pub const fn key_of(thickness: Option<Self>) -> &'static str {
        match thickness {
            Some(t) => t.key(),
            None => Self::NONE_KEY,
        }
    }

    /// Parse a table key. `Ok(None)` is the explicit `"none"` key.
    pub fn from_key(key: &str) -> Result<Option<Self>, UnknownThickness> {
        match key {
            "none" => Ok(None),
            "thin" => Ok(Some(Self::Thin)),
            "thick" => Ok(Some(Self::Thick)),
            "double" => Ok(Some(Self::Double)),
            other => Err(UnknownThickness(other.to_owned())),
        }
    }
}

impl fmt::Display for Thickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A thickness key that is not one of `none`, `thin`, `thick`, `double`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown thickness key {0:?}")]
pub struct UnknownThickness(pub String);

bitflags! {
    /// A set of directions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DirectionSet: u8 {
        const UP    = 0b0001;
        const DOWN  = 0b0010;
        const LEFT  = 0b0100;
        const RIGHT = 0b1000;
        const VERTICAL = Self::UP.bits() | Self::DOWN.bits();
        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
    }
}

impl From<Direction> for DirectionSet {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::UP,
            Direction::Down => Self::DOWN,
            Direction::Left => Self::LEFT,
            Direction::Right => Self::RIGHT,
        }
    }
}

/// Direction → thickness map describing one junction.
///
/// Absent directions are `None`. Iteration and formatting always follow
/// [`Direction::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct JunctionMap {
    arms: [Option<Thickness>; 4],
}

impl JunctionMap {
    /// A map with no arms.
    pub const EMPTY: Self = Self { arms: [None; 4] };

    #[inline]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Build from `(direction, thickness)` pairs; later pairs win.
    pub fn from_arms<I>(arms: I) -> Self
    where
        I: IntoIterator<Item = (Direction, Thickness)>,
    {
        let mut map = Self::EMPTY;
        for (direction, thickness) in arms {
            map.insert(direction, thickness);
        }
        map
    }

    /// A straight horizontal segment (`LEFT` and `RIGHT`).
    #[inline]
    pub const fn horizontal(thickness: Thickness) -> Self {
        Self {
            arms: [None, None, Some(thickness), Some(thickness)],
        }
    }

    /// A straight vertical segment (`UP` and `DOWN`).
    #[inline]
    pub const fn vertical(thickness: Thickness) -> Self {
        Self {
            arms: [Some(thickness), Some(thickness), None, None],
        }
    }

    #[inline]
    pub const fn get(&self, direction: Direction) -> Option<Thickness> {
        self.arms[direction.index()]
    }

    /// Set an arm, returning the previous thickness.
    #[inline]
    pub fn insert(&mut self, direction: Direction, thickness: Thickness) -> Option<Thickness> {
        self.arms[direction.index()].replace(thickness)
    }

    /// Remove an arm, returning its thickness.
    #[inline]
    pub fn remove(&mut self, direction: Direction) -> Option<Thickness> {
        self.arms[direction.index()].take()
    }

    /// Remove every arm in `directions`.
    pub fn strip(&mut self, directions: DirectionSet) {
        for direction in Direction::ALL {
            if directions.contains(direction.into()) {
                self.remove(direction);
            }
        }
    }

    #[must_use]
    pub fn with(mut self, direction: Direction, thickness: Thickness) -> Self {
        self.insert(direction, thickness);
        self
    }

    #[must_use]
    pub fn without(mut self, directions: DirectionSet) -> Self {
        self.strip(directions);
        self
    }

    /// Union of both maps. Where both define an arm, `other` wins.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut arms = self.arms;
        for (slot, theirs) in arms.iter_mut().zip(other.arms) {
            if theirs.is_some() {
                *slot = theirs;
            }
        }
        Self { arms }
    }

    /// Directions that carry an arm.
    pub fn directions(&self) -> DirectionSet {
        self.iter()
            .fold(DirectionSet::empty(), |set, (d, _)| set | DirectionSet::from(d))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arms.iter().all(Option::is_none)
    }

    /// Number of drawn arms.
    #[inline]
    pub fn len(&self) -> usize {
        self.arms.iter().filter(|arm| arm.is_some()).count()
    }

    /// Present arms in [`Direction::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, Thickness)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(|d| self.get(d).map(|t| (d, t)))
    }

    /// Table keys in lookup order: up, down, left, right.
    pub fn keys(&self) -> [&'static str; 4] {
        self.arms.map(Thickness::key_of)
    }
}

impl fmt::Display for JunctionMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (direction, thickness)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{direction}: {thickness}")?;
        }
        f.write_str("}")
    }
}
