#![forbid(unsafe_code)]

//! Titles drawn into a frame's border.
//!
//! A title occupies a run of border cells: an opening flank glyph, the text,
//! and a closing flank glyph. The run never touches a corner, so text that is
//! too long for its edge is cut short.

use tframe_core::Alignment;
use tframe_render::{Cell, CellError};
use tframe_style::Color;
use unicode_segmentation::UnicodeSegmentation;

use crate::border_type::Side;

/// Edges shorter than this have no room for a title.
const MIN_TITLED_EDGE: usize = 4;

/// Text placed on one edge of a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    pub text: String,
    pub alignment: Alignment,
    pub color: Color,
    /// Distance from the aligned end of the edge.
    pub margin: usize,
    pub side: Side,
}

impl Title {
    /// Left-aligned title on the top edge.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            alignment: Alignment::Left,
            color: Color::Default,
            margin: 2,
            side: Side::Top,
        }
    }

    #[must_use]
    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    #[must_use]
    pub fn colored(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_margin(mut self, margin: usize) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn on(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Text cells in the title's color.
    pub fn cells(&self) -> Result<Vec<Cell>, CellError> {
        self.text
            .graphemes(true)
            .map(|g| Cell::parse(g).map(|cell| cell.with_color(self.color)))
            .collect()
    }

    /// Cells for an edge of `edge_len`, flanks included, and the index of
    /// the first one. `None` when the edge is too short for any title.
    pub(crate) fn layout(
        &self,
        edge_len: usize,
        flanks: (char, char),
        flank_color: Color,
    ) -> Result<Option<(usize, Vec<Cell>)>, CellError> {
        if edge_len < MIN_TITLED_EDGE {
            return Ok(None);
        }
        let mut text = self.cells()?;
        text.truncate(edge_len - MIN_TITLED_EDGE);
        let len = text.len();

        let pos = align_to_position(self.alignment, edge_len, len, self.margin + 1);
        let last_start = (edge_len - len - 3) as i64;
        let start = (pos - 1).clamp(1, last_start) as usize;

        let mut run = Vec::with_capacity(len + 2);
        run.push(Cell::from_char(flanks.0).with_color(flank_color));
        run.extend(text);
        run.push(Cell::from_char(flanks.1).with_color(flank_color));
        Ok(Some((start, run)))
    }
}

/// Position of the first text cell along an edge of length `of`.
///
/// The margin is capped at `of - text_len - 4`, leaving room for both
/// corners and both flanks. The result may be negative or past the end for
/// degenerate inputs; callers clamp it.
pub fn align_to_position(alignment: Alignment, of: usize, text_len: usize, margin: usize) -> i64 {
    let of = of as i64;
    let len = text_len as i64;
    let margin = (margin as i64).min(of - len - 4);
    match alignment {
        Alignment::Center => of.div_euclid(2) - (len + 1).div_euclid(2) + 1,
        Alignment::Left => {
            let from_right = of - margin - len;
            if margin >= from_right { from_right } else { margin }
        }
        Alignment::Right => of - len - margin,
    }
}

/// Flank glyphs drawn when the border type does not override them.
pub(crate) const fn default_flanks(side: Side) -> (char, char) {
    if side.is_horizontal() {
        ('╴', '╶')
    } else {
        ('╵', '╷')
    }
}
