#![forbid(unsafe_code)]

//! Rectangular cell storage.
//!
//! A `Grid` is a row-major `Vec<Cell>` with fixed dimensions. Rows are never
//! ragged: text input is padded to the widest row according to an
//! [`Alignment`].
//!
//! Access outside the grid is an error, never a silent clip. Writes that
//! would cross the edge are rejected before any cell changes.
//!
//! A grid with no columns has no rows either; `0×N` and `N×0` normalize to
//! `0×0`.

use std::fmt;

use tframe_core::{Alignment, Anchor, Coord, GeometryError, Size};
use tframe_style::{Color, ColorProfile};
use unicode_segmentation::UnicodeSegmentation;

use crate::ansi;
use crate::cell::{Cell, CellError};

/// Grid access and construction errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("coordinate {coord} outside {size} grid")]
    OutOfBounds { coord: Coord, size: Size },
    #[error("{block} block at {origin} does not fit in {size} grid")]
    DoesNotFit {
        origin: Coord,
        block: Size,
        size: Size,
    },
    #[error("slice start {start} is past end {end}")]
    InvertedSlice { start: Coord, end: Coord },
    #[error(transparent)]
    Cell(#[from] CellError),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// A 2D grid of cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// A blank grid.
    pub fn new(size: Size) -> Self {
        Self::filled(size, Cell::BLANK)
    }

    /// A grid with every position set to `cell`.
    pub fn filled(size: Size, cell: Cell) -> Self {
        let size = if size.is_empty() { Size::default() } else { size };
        Self {
            width: size.width,
            height: size.height,
            cells: vec![cell; size.area()],
        }
    }

    /// Split `text` on `\n` into rows of single-character cells.
    ///
    /// Short rows are padded to the widest row per `alignment`. Each
    /// grapheme must be a single one-column character.
    pub fn from_text(text: &str, alignment: Alignment) -> Result<Self, GridError> {
        let rows = text
            .split('\n')
            .map(|line| {
                line.graphemes(true)
                    .map(Cell::parse)
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_rows(rows, alignment))
    }

    /// Build from ragged rows, padding with blanks per `alignment`.
    pub fn from_rows(rows: Vec<Vec<Cell>>, alignment: Alignment) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if width == 0 {
            return Self::default();
        }
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            let (before, after) = alignment.padding(row.len(), width);
            cells.extend(std::iter::repeat_n(Cell::BLANK, before));
            cells.extend(row);
            cells.extend(std::iter::repeat_n(Cell::BLANK, after));
        }
        Self {
            width,
            height,
            cells,
        }
    }

    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.height, self.width)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0
    }

    #[inline]
    fn index(&self, coord: Coord) -> Result<usize, GridError> {
        if self.size().contains(coord) {
            Ok(coord.row * self.width + coord.col)
        } else {
            Err(GridError::OutOfBounds {
                coord,
                size: self.size(),
            })
        }
    }

    pub fn get(&self, coord: Coord) -> Result<&Cell, GridError> {
        let idx = self.index(coord)?;
        Ok(&self.cells[idx])
    }

    pub fn get_mut(&mut self, coord: Coord) -> Result<&mut Cell, GridError> {
        let idx = self.index(coord)?;
        Ok(&mut self.cells[idx])
    }

    pub fn set(&mut self, coord: Coord, cell: Cell) -> Result<(), GridError> {
        *self.get_mut(coord)? = cell;
        Ok(())
    }

    /// One row, or `None` past the last row.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row < self.height {
            let start = row * self.width;
            Some(&self.cells[start..start + self.width])
        } else {
            None
        }
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.height).filter_map(move |r| self.row(r))
    }

    /// Copy of the inclusive rectangle `start..=end`.
    pub fn slice(&self, start: Coord, end: Coord) -> Result<Grid, GridError> {
        if start.row > end.row || start.col > end.col {
            return Err(GridError::InvertedSlice { start, end });
        }
        self.index(start)?;
        self.index(end)?;
        let rows = (start.row..=end.row)
            .filter_map(|r| self.row(r))
            .map(|row| row[start.col..=end.col].to_vec())
            .collect();
        Ok(Self::from_rows(rows, Alignment::Left))
    }

    /// Copy `block` into `self` with its top-left cell at `origin`.
    pub fn write(&mut self, origin: Coord, block: &Grid) -> Result<(), GridError> {
        if !self.size().fits(origin, block.size()) {
            return Err(GridError::DoesNotFit {
                origin,
                block: block.size(),
                size: self.size(),
            });
        }
        for (r, row) in block.rows().enumerate() {
            let start = (origin.row + r) * self.width + origin.col;
            self.cells[start..start + block.width].clone_from_slice(row);
        }
        Ok(())
    }

    /// Copy `block` so its `anchor` corner lands on `pos`.
    pub fn overlay(&mut self, block: &Grid, pos: Coord, anchor: Anchor) -> Result<(), GridError> {
        let origin = anchor.origin(pos, block.size())?;
        self.write(origin, block)
    }

    /// Recolor every cell in `coords`. Validates all coordinates first.
    pub fn color(&mut self, coords: &[Coord], color: Color) -> Result<(), GridError> {
        let indices = coords
            .iter()
            .map(|&c| self.index(c))
            .collect::<Result<Vec<_>, _>>()?;
        for idx in indices {
            self.cells[idx].color = color;
        }
        Ok(())
    }

    pub fn color_all(&mut self, color: Color) {
        for cell in &mut self.cells {
            cell.color = color;
        }
    }

    /// Rows become columns.
    pub fn transpose(&self) -> Grid {
        let mut cells = Vec::with_capacity(self.cells.len());
        for col in 0..self.width {
            for row in 0..self.height {
                cells.push(self.cells[row * self.width + col].clone());
            }
        }
        Self {
            width: self.height,
            height: self.width,
            cells,
        }
    }

    /// A larger grid with `self` centered inside a `margin`-wide ring of `fill`.
    pub fn expanded(&self, margin: usize, fill: Cell) -> Grid {
        let mut out = Self::filled(self.size().expanded(margin), fill);
        // The enlarged grid always has room for the original.
        let origin = Coord::new(margin, margin);
        for (r, row) in self.rows().enumerate() {
            let start = (origin.row + r) * out.width + origin.col;
            out.cells[start..start + self.width].clone_from_slice(row);
        }
        out
    }

    /// Rows joined by `\n`, no colors.
    pub fn to_plain_string(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        // Writing into a String cannot fail.
        let _ = ansi::write_plain(self, &mut out);
        out
    }

    /// Colored text using 24-bit sequences.
    pub fn to_ansi_string(&self) -> String {
        self.to_ansi_string_with(ColorProfile::TrueColor)
    }

    /// Colored text for a specific terminal profile.
    pub fn to_ansi_string_with(&self, profile: ColorProfile) -> String {
        let mut out = String::with_capacity((self.width + 20) * self.height);
        let _ = ansi::write_ansi(self, profile, &mut out);
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ansi::write_plain(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(grid: &Grid) -> String {
        grid.to_plain_string()
    }

    // ===== Construction =====

    #[test]
    fn from_text_pads_left_aligned() {
        let grid = Grid::from_text("abcdef\nghij", Alignment::Left).unwrap();
        assert_eq!(grid.size(), Size::new(2, 6));
        assert_eq!(text(&grid), "abcdef\nghij  ");
    }

    #[test]
    fn from_text_pads_right_and_center() {
        let right = Grid::from_text("abcdef\nghij", Alignment::Right).unwrap();
        assert_eq!(text(&right), "abcdef\n  ghij");
        let center = Grid::from_text("abcdefg\nab", Alignment::Center).unwrap();
        assert_eq!(text(&center), "abcdefg\n  ab   ");
    }

    #[test]
    fn from_text_rejects_wide_glyphs() {
        let err = Grid::from_text("ok\n漢字", Alignment::Left).unwrap_err();
        assert!(matches!(err, GridError::Cell(CellError::NotSingleWidth { .. })));
    }

    #[test]
    fn empty_text_is_empty_grid() {
        let grid = Grid::from_text("", Alignment::Left).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.size(), Size::new(0, 0));
        assert_eq!(text(&grid), "");
        assert_eq!(grid.to_ansi_string(), "");
    }

    #[test]
    fn zero_width_normalizes() {
        assert_eq!(Grid::new(Size::new(3, 0)).size(), Size::new(0, 0));
    }

    // ===== Access =====

    #[test]
    fn get_set_and_bounds() {
        let mut grid = Grid::new(Size::new(2, 3));
        grid.set(Coord::new(1, 2), Cell::from_char('x')).unwrap();
        assert_eq!(grid.get(Coord::new(1, 2)).unwrap().glyph(), 'x');
        assert_eq!(
            grid.get(Coord::new(2, 0)),
            Err(GridError::OutOfBounds {
                coord: Coord::new(2, 0),
                size: Size::new(2, 3)
            })
        );
        assert!(grid.set(Coord::new(0, 3), Cell::BLANK).is_err());
    }

    #[test]
    fn slice_is_inclusive() {
        let grid = Grid::from_text("abc\ndef\nghi", Alignment::Left).unwrap();
        let part = grid.slice(Coord::new(1, 1), Coord::new(2, 2)).unwrap();
        assert_eq!(text(&part), "ef\nhi");
        let one = grid.slice(Coord::new(0, 0), Coord::new(0, 0)).unwrap();
        assert_eq!(text(&one), "a");
    }

    #[test]
    fn slice_errors() {
        let grid = Grid::from_text("abc\ndef", Alignment::Left).unwrap();
        assert!(matches!(
            grid.slice(Coord::new(1, 1), Coord::new(0, 2)),
            Err(GridError::InvertedSlice { .. })
        ));
        assert!(matches!(
            grid.slice(Coord::new(0, 0), Coord::new(2, 2)),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    // ===== Overlay =====

    #[test]
    fn overlay_anchors() {
        let block = Grid::from_text("xy\nzw", Alignment::Left).unwrap();
        let base = Grid::from_text("....\n....\n....", Alignment::Left).unwrap();

        let mut g = base.clone();
        g.overlay(&block, Coord::new(0, 0), Anchor::TopLeft).unwrap();
        assert_eq!(text(&g), "xy..\nzw..\n....");

        let mut g = base.clone();
        g.overlay(&block, Coord::new(0, 3), Anchor::TopRight).unwrap();
        assert_eq!(text(&g), "..xy\n..zw\n....");

        let mut g = base.clone();
        g.overlay(&block, Coord::new(2, 0), Anchor::BottomLeft).unwrap();
        assert_eq!(text(&g), "....\nxy..\nzw..");

        let mut g = base.clone();
        g.overlay(&block, Coord::new(2, 3), Anchor::BottomRight).unwrap();
        assert_eq!(text(&g), "....\n..xy\n..zw");
    }

    #[test]
    fn overlay_out_of_range_leaves_grid_untouched() {
        let block = Grid::from_text("xy\nzw", Alignment::Left).unwrap();
        let mut g = Grid::from_text("...\n...", Alignment::Left).unwrap();
        let before = g.clone();
        assert!(matches!(
            g.overlay(&block, Coord::new(1, 1), Anchor::TopLeft),
            Err(GridError::DoesNotFit { .. })
        ));
        assert!(matches!(
            g.overlay(&block, Coord::new(0, 0), Anchor::BottomRight),
            Err(GridError::Geometry(GeometryError::NegativeCoordinate { .. }))
        ));
        assert_eq!(g, before);
    }

    // ===== Transforms =====

    #[test]
    fn transpose_swaps_axes() {
        let grid = Grid::from_text("abc", Alignment::Left).unwrap();
        let t = grid.transpose();
        assert_eq!(t.size(), Size::new(3, 1));
        assert_eq!(text(&t), "a\nb\nc");
        assert_eq!(t.transpose(), grid);
    }

    #[test]
    fn expanded_rings_content() {
        let grid = Grid::from_text("ab", Alignment::Left).unwrap();
        let out = grid.expanded(1, Cell::from_char('#'));
        assert_eq!(text(&out), "####\n#ab#\n####");
    }

    #[test]
    fn color_validates_before_writing() {
        let mut grid = Grid::new(Size::new(1, 2));
        let err = grid.color(&[Coord::new(0, 0), Coord::new(5, 5)], Color::Red);
        assert!(err.is_err());
        assert_eq!(grid.get(Coord::new(0, 0)).unwrap().color, Color::Default);
    }

    // ===== Rendering =====

    #[test]
    fn ansi_emits_only_on_color_change() {
        let mut grid = Grid::from_text("ab\ncd", Alignment::Left).unwrap();
        grid.color(&[Coord::new(0, 1), Coord::new(1, 0)], Color::Red)
            .unwrap();
        let red = Color::Red.sequence(ColorProfile::TrueColor);
        let default = Color::Default.sequence(ColorProfile::TrueColor);
        assert_eq!(
            grid.to_ansi_string(),
            format!("{default}a{red}b\nc{default}d\x1b[0m")
        );
    }
}
