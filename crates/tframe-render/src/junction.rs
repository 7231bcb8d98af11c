#![forbid(unsafe_code)]

//! Junctions: a direction map plus a style, resolved to a glyph.
//!
//! The glyph is derived state. Every mutation goes through a method that
//! re-resolves against the table, so a `Junction` never holds a glyph that
//! disagrees with its map.

use std::borrow::Cow;
use std::fmt;

use tframe_core::{Direction, DirectionSet, JunctionMap, Thickness};

use crate::junction_table::{DEFAULT_STYLE, JunctionTable};

/// A direction map has no glyph in the table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JunctionError {
    #[error("no glyph for junction {map} (style {style:?})")]
    Unresolvable { map: JunctionMap, style: String },
}

/// Named glyph variant, e.g. rounded corners or dashed lines.
///
/// Styles missing from a table entry fall back to [`Style::DEFAULT`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Style(Cow<'static, str>);

impl Style {
    pub const DEFAULT: Self = Self(Cow::Borrowed(DEFAULT_STYLE));
    pub const ROUND: Self = Self(Cow::Borrowed("round"));
    pub const SHARP: Self = Self(Cow::Borrowed("sharp"));
    pub const TRIPLE_DASH: Self = Self(Cow::Borrowed("triple_dash"));
    pub const QUAD_DASH: Self = Self(Cow::Borrowed("quad_dash"));
    pub const DUO_DASH: Self = Self(Cow::Borrowed("duo_dash"));
    pub const CLASSIC: Self = Self(Cow::Borrowed("classic"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_STYLE
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolve `map` in `style` against the process-wide table.
pub fn resolve(map: &JunctionMap, style: &Style) -> Result<char, JunctionError> {
    match JunctionTable::global().glyph(map, style.as_str()) {
        Some(glyph) => Ok(glyph),
        None => {
            tframe_core::trace!(%map, %style, "unresolvable junction");
            Err(JunctionError::Unresolvable {
                map: *map,
                style: style.as_str().to_owned(),
            })
        }
    }
}

/// A resolved box-drawing junction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Junction {
    map: JunctionMap,
    style: Style,
    glyph: char,
}

impl Junction {
    /// Resolve a new junction; fails if the table has no entry for `map`.
    pub fn new(map: JunctionMap, style: Style) -> Result<Self, JunctionError> {
        let glyph = resolve(&map, &style)?;
        Ok(Self { map, style, glyph })
    }

    /// A default-style junction from `(direction, thickness)` arms.
    pub fn from_arms<I>(arms: I) -> Result<Self, JunctionError>
    where
        I: IntoIterator<Item = (Direction, Thickness)>,
    {
        Self::new(JunctionMap::from_arms(arms), Style::DEFAULT)
    }

    /// Reverse construction from a glyph present in the table.
    pub fn from_glyph(glyph: char) -> Option<Self> {
        let (map, style) = JunctionTable::global().find(glyph)?;
        Some(Self {
            map,
            style: Style::new(style.to_owned()),
            glyph,
        })
    }

    #[inline]
    pub const fn glyph(&self) -> char {
        self.glyph
    }

    #[inline]
    pub const fn map(&self) -> &JunctionMap {
        &self.map
    }

    #[inline]
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Replace the map, re-resolving. On error `self` is unchanged.
    pub fn set_map(&mut self, map: JunctionMap) -> Result<(), JunctionError> {
        self.glyph = resolve(&map, &self.style)?;
        self.map = map;
        Ok(())
    }

    /// Change style, re-resolving. On error `self` is unchanged.
    pub fn set_style(&mut self, style: Style) -> Result<(), JunctionError> {
        self.glyph = resolve(&self.map, &style)?;
        self.style = style;
        Ok(())
    }

    /// Add or replace one arm.
    pub fn insert(
        &mut self,
        direction: Direction,
        thickness: Thickness,
    ) -> Result<(), JunctionError> {
        self.set_map(self.map.with(direction, thickness))
    }

    /// Drop one arm.
    pub fn remove(&mut self, direction: Direction) -> Result<(), JunctionError> {
        self.set_map(self.map.without(direction.into()))
    }

    /// A copy with `directions` removed.
    pub fn stripped(&self, directions: DirectionSet) -> Result<Self, JunctionError> {
        Self::new(self.map.without(directions), self.style.clone())
    }
}

impl fmt::Display for Junction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph)
    }
}

/// Merge two junctions: union of arms (`b` wins), style reset to default.
pub fn merge_junctions(a: &Junction, b: &Junction) -> Result<Junction, JunctionError> {
    Junction::new(a.map.union(&b.map), Style::DEFAULT)
}

/// [`merge_junctions`], dropping `strip` from the union before resolving.
///
/// The map is resolved once, after stripping, so a combination that only
/// exists before the strip does not fail the merge.
pub fn merge_junctions_stripping(
    a: &Junction,
    b: &Junction,
    strip: DirectionSet,
) -> Result<Junction, JunctionError> {
    Junction::new(a.map.union(&b.map).without(strip), Style::DEFAULT)
}

/// `count` copies of `junction`.
pub fn repeat_junction(junction: &Junction, count: usize) -> Vec<Junction> {
    vec![junction.clone(); count]
}
