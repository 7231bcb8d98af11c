#![forbid(unsafe_code)]

//! Cell types and invariants.
//!
//! A `Cell` is one position of a [`Grid`](crate::Grid): exactly one
//! single-width character plus its foreground color. Border cells carry a
//! [`Junction`] instead of a bare character so overlapping frames can merge
//! their lines.
//!
//! # Invariants
//!
//! - Content is one scalar value of display width 1. Wider or multi-character
//!   content breaks column alignment and is rejected by [`Cell::parse`].
//! - A junction cell's glyph is always the glyph its junction resolved to.

use tframe_core::DirectionSet;
use tframe_style::Color;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

use crate::junction::{Junction, JunctionError, merge_junctions_stripping};

/// Content rejected by [`Cell::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CellError {
    #[error("cell content must be one character, got {content:?} (use a border pattern for sequences)")]
    NotSingleCharacter { content: String },
    #[error("cell content {content:?} is not one column wide")]
    NotSingleWidth { content: String },
}

/// What a cell displays.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CellContent {
    Char(char),
    Junction(Junction),
}

impl CellContent {
    #[inline]
    pub fn glyph(&self) -> char {
        match self {
            Self::Char(c) => *c,
            Self::Junction(j) => j.glyph(),
        }
    }
}

/// A single grid position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    pub content: CellContent,
    pub color: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

impl Cell {
    /// A space in the default color.
    pub const BLANK: Self = Self::from_char(' ');

    #[inline]
    pub const fn from_char(c: char) -> Self {
        Self {
            content: CellContent::Char(c),
            color: Color::Default,
        }
    }

    /// Parse user text into a cell, enforcing the single-character rule.
    pub fn parse(s: &str) -> Result<Self, CellError> {
        let mut graphemes = s.graphemes(true);
        let (Some(grapheme), None) = (graphemes.next(), graphemes.next()) else {
            return Err(CellError::NotSingleCharacter {
                content: s.to_owned(),
            });
        };
        let mut chars = grapheme.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(CellError::NotSingleCharacter {
                content: s.to_owned(),
            });
        };
        Self::checked(c)
    }

    /// A character cell, rejecting characters that are not one column wide.
    pub fn checked(c: char) -> Result<Self, CellError> {
        if c.width() == Some(1) {
            Ok(Self::from_char(c))
        } else {
            Err(CellError::NotSingleWidth {
                content: c.to_string(),
            })
        }
    }

    #[inline]
    pub fn junction(junction: Junction) -> Self {
        Self {
            content: CellContent::Junction(junction),
            color: Color::Default,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[inline]
    pub fn glyph(&self) -> char {
        self.content.glyph()
    }

    #[inline]
    pub fn as_junction(&self) -> Option<&Junction> {
        match &self.content {
            CellContent::Junction(j) => Some(j),
            CellContent::Char(_) => None,
        }
    }

    #[inline]
    pub fn is_junction(&self) -> bool {
        matches!(self.content, CellContent::Junction(_))
    }

    /// Merge `child` into `self` when both are junctions.
    ///
    /// The merged cell takes the child's color. Returns `Ok(None)` when
    /// either side is a plain character; nothing merges with text.
    pub fn merge(&self, child: &Cell, strip: DirectionSet) -> Result<Option<Cell>, JunctionError> {
        match (self.as_junction(), child.as_junction()) {
            (Some(ours), Some(theirs)) => {
                let merged = merge_junctions_stripping(ours, theirs, strip)?;
                Ok(Some(Cell::junction(merged).with_color(child.color)))
            }
            _ => Ok(None),
        }
    }
}

impl From<Junction> for Cell {
    fn from(junction: Junction) -> Self {
        Self::junction(junction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tframe_core::{Direction::*, Thickness::*};

    #[test]
    fn parse_accepts_one_character() {
        assert_eq!(Cell::parse("a").unwrap().glyph(), 'a');
        assert_eq!(Cell::parse("─").unwrap().glyph(), '─');
        assert_eq!(Cell::parse(" ").unwrap(), Cell::BLANK);
    }

    #[test]
    fn parse_rejects_sequences() {
        assert!(matches!(
            Cell::parse("ab"),
            Err(CellError::NotSingleCharacter { .. })
        ));
        assert!(matches!(
            Cell::parse(""),
            Err(CellError::NotSingleCharacter { .. })
        ));
        // One grapheme, two scalar values.
        assert!(matches!(
            Cell::parse("e\u{301}"),
            Err(CellError::NotSingleCharacter { .. })
        ));
    }

    #[test]
    fn parse_rejects_wide_and_control() {
        assert!(matches!(
            Cell::parse("漢"),
            Err(CellError::NotSingleWidth { .. })
        ));
        assert!(matches!(
            Cell::parse("\t"),
            Err(CellError::NotSingleWidth { .. })
        ));
    }

    #[test]
    fn merge_takes_child_color() {
        let parent = Cell::junction(Junction::from_arms([(Up, Thin), (Down, Thin)]).unwrap())
            .with_color(Color::Blue);
        let child = Cell::junction(Junction::from_arms([(Left, Thin), (Right, Thin)]).unwrap())
            .with_color(Color::Red);
        let merged = parent.merge(&child, DirectionSet::empty()).unwrap().unwrap();
        assert_eq!(merged.glyph(), '┼');
        assert_eq!(merged.color, Color::Red);
    }

    #[test]
    fn merge_skips_plain_characters() {
        let text = Cell::from_char('x');
        let line = Cell::junction(Junction::from_arms([(Left, Thin), (Right, Thin)]).unwrap());
        assert_eq!(text.merge(&line, DirectionSet::empty()), Ok(None));
        assert_eq!(line.merge(&text, DirectionSet::empty()), Ok(None));
    }
}
