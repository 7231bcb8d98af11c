#![forbid(unsafe_code)]

//! Frames: bordered, titled, composable grids.
//!
//! A [`Frame`] owns a [`Grid`] and, once bordered, the coordinates of every
//! border cell. Borders are drawn from a [`BorderType`]; titles are redrawn
//! whenever the border changes.
//!
//! # Composition
//!
//! [`Frame::add_frame`] copies a child frame into the parent. Where the
//! child's border lands on junction cells of the parent, the two junctions
//! are merged so lines join instead of overwriting each other:
//!
//! ```text
//! ╭─────┬───┐      parent border plus a child box sharing its top edge
//! │     │   │
//! │     └───┤
//! ╰─────────╯
//! ```
//!
//! Each child edge drops the arm pointing into the child before merging, so
//! a seam running along the child's edge stays a straight line.

use std::fmt;

use tframe_core::{Alignment, Anchor, Coord, DirectionSet, Size};
use tframe_render::{Cell, CellError, Grid, GridError, JunctionError};
use tframe_style::{Color, ColorProfile};

use crate::border::Border;
use crate::border_type::{BorderType, BorderTypeError, Corner, Side};
use crate::title::{Title, default_flanks};

/// Frame construction and composition errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    #[error("a frame needs at least 2×2 cells, got {height}×{width}")]
    TooSmall { height: usize, width: usize },
    #[error("{content} content does not fit inside a {outer} frame")]
    ContentTooLarge { content: Size, outer: Size },
    #[error("frame is already bordered")]
    AlreadyBordered,
    #[error("frame has no border")]
    NotBordered,
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Junction(#[from] JunctionError),
    #[error(transparent)]
    BorderType(#[from] BorderTypeError),
    #[error(transparent)]
    Cell(#[from] CellError),
}

/// Coordinates of a frame's border cells, recorded when the border is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeCoords {
    edges: [Vec<Coord>; 4],
    corners: [Coord; 4],
}

impl EdgeCoords {
    /// Border coordinates of a frame with outer `size` (at least 2×2).
    fn for_size(size: Size) -> Self {
        let (h, w) = (size.height, size.width);
        let top = (1..w - 1).map(|c| Coord::new(0, c)).collect();
        let bottom = (1..w - 1).map(|c| Coord::new(h - 1, c)).collect();
        let left = (1..h - 1).map(|r| Coord::new(r, 0)).collect();
        let right = (1..h - 1).map(|r| Coord::new(r, w - 1)).collect();
        Self {
            edges: [top, bottom, left, right],
            corners: [
                Coord::new(0, 0),
                Coord::new(0, w - 1),
                Coord::new(h - 1, 0),
                Coord::new(h - 1, w - 1),
            ],
        }
    }

    /// Edge cells, corners excluded.
    pub fn edge(&self, side: Side) -> &[Coord] {
        &self.edges[side.index()]
    }

    pub fn corner(&self, corner: Corner) -> Coord {
        self.corners[corner.index()]
    }

    /// Every border cell: edges first, then corners.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.edges
            .iter()
            .flatten()
            .copied()
            .chain(self.corners.iter().copied())
    }
}

/// A frame composed into a parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildFrame {
    /// Parent coordinate of the child's top-left cell.
    pub offset: Coord,
    pub frame: Frame,
}

/// A bordered, titled grid that can host other frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    grid: Grid,
    border_type: BorderType,
    edges: Option<EdgeCoords>,
    /// Interior size recorded by `unborder`, which a grid with no rows or
    /// no columns cannot hold on its own.
    stripped: Option<Size>,
    border_color: Option<Color>,
    inner_color: Option<Color>,
    titles: Vec<Title>,
    children: Vec<ChildFrame>,
}

impl Frame {
    /// Wrap `content` in a border.
    pub fn new(content: Grid, border_type: BorderType) -> Result<Self, FrameError> {
        let mut frame = Self::unbordered(content, border_type);
        frame.border()?;
        Ok(frame)
    }

    /// A frame holding `content` with no border yet.
    pub fn unbordered(content: Grid, border_type: BorderType) -> Self {
        Self {
            grid: content,
            border_type,
            edges: None,
            stripped: None,
            border_color: None,
            inner_color: None,
            titles: Vec::new(),
            children: Vec::new(),
        }
    }

    /// An empty bordered box of outer size `height`×`width`.
    ///
    /// ```
    /// use tframe_widgets::{Frame, Preset};
    ///
    /// let frame = Frame::boxed(3, 5, Preset::ThinRound.into()).unwrap();
    /// assert_eq!(frame.to_string(), "╭───╮\n│   │\n╰───╯");
    /// ```
    pub fn boxed(height: usize, width: usize, border_type: BorderType) -> Result<Self, FrameError> {
        if height < 2 || width < 2 {
            return Err(FrameError::TooSmall { height, width });
        }
        let inner = Size::new(height - 2, width - 2);
        let mut frame = Self::unbordered(Grid::new(inner), border_type);
        frame.draw_border(inner)?;
        Ok(frame)
    }

    /// A box with `text` centered in it, each line aligned by `alignment`.
    pub fn centered(
        text: &str,
        height: usize,
        width: usize,
        border_type: BorderType,
        alignment: Alignment,
    ) -> Result<Self, FrameError> {
        let mut frame = Self::boxed(height, width, border_type)?;
        let block = Grid::from_text(text, alignment)?;
        if block.is_empty() {
            return Ok(frame);
        }
        let outer = frame.size();
        let content = block.size();
        let start = |outer: usize, inner: usize| -> Option<usize> {
            // Rows and columns alike: equal space on both sides, any odd
            // cell going after the content.
            let start = (outer.checked_sub(inner)?) / 2;
            (start >= 1 && start + inner < outer).then_some(start)
        };
        match (start(outer.height, content.height), start(outer.width, content.width)) {
            (Some(row), Some(col)) => frame.grid.write(Coord::new(row, col), &block)?,
            _ => return Err(FrameError::ContentTooLarge { content, outer }),
        }
        Ok(frame)
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the cells. Border coordinates are not updated.
    #[inline]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.grid.size()
    }

    #[inline]
    pub fn border_type(&self) -> &BorderType {
        &self.border_type
    }

    #[inline]
    pub fn is_bordered(&self) -> bool {
        self.edges.is_some()
    }

    /// Border coordinates, if the frame is bordered.
    #[inline]
    pub fn edge_coords(&self) -> Option<&EdgeCoords> {
        self.edges.as_ref()
    }

    #[inline]
    pub fn border_color(&self) -> Option<Color> {
        self.border_color
    }

    #[inline]
    pub fn inner_color(&self) -> Option<Color> {
        self.inner_color
    }

    pub fn titles(&self) -> &[Title] {
        &self.titles
    }

    /// Frames composed into this one, in insertion order.
    pub fn children(&self) -> &[ChildFrame] {
        &self.children
    }

    /// Surround the content with a ring of border cells.
    pub fn border(&mut self) -> Result<(), FrameError> {
        if self.is_bordered() {
            return Err(FrameError::AlreadyBordered);
        }
        let inner = match self.stripped {
            Some(size) if self.grid.is_empty() => size,
            _ => self.grid.size(),
        };
        self.draw_border(inner)?;
        self.stripped = None;
        Ok(())
    }

    fn draw_border(&mut self, inner: Size) -> Result<(), FrameError> {
        let span = tframe_core::debug_span!(
            "frame.border",
            height = inner.height + 2,
            width = inner.width + 2
        );
        let _guard = span.enter();

        let border = Border::new(&self.border_type, self.border_color.unwrap_or_default())?;
        let left = border.edge(Side::Left, inner.height);
        let right = border.edge(Side::Right, inner.height);

        let mut rows = Vec::with_capacity(inner.height + 2);
        rows.push(ring_row(
            border.corner(Corner::TopLeft),
            border.edge(Side::Top, inner.width),
            border.corner(Corner::TopRight),
        ));
        for (r, (l, rt)) in left.into_iter().zip(right).enumerate() {
            let content = self.grid.row(r).map(<[Cell]>::to_vec).unwrap_or_default();
            let mut row = Vec::with_capacity(inner.width + 2);
            row.push(l);
            row.extend(content);
            row.resize(inner.width + 1, Cell::BLANK);
            row.push(rt);
            rows.push(row);
        }
        rows.push(ring_row(
            border.corner(Corner::BottomLeft),
            border.edge(Side::Bottom, inner.width),
            border.corner(Corner::BottomRight),
        ));

        self.grid = Grid::from_rows(rows, Alignment::Left);
        self.edges = Some(EdgeCoords::for_size(self.grid.size()));
        self.draw_titles()
    }

    /// Strip the outer ring of cells. Titles are kept for the next border.
    pub fn unborder(&mut self) -> Result<(), FrameError> {
        if self.edges.take().is_none() {
            return Err(FrameError::NotBordered);
        }
        let Size { height, width } = self.grid.size();
        let inner = Size::new(height.saturating_sub(2), width.saturating_sub(2));
        self.grid = if inner.is_empty() {
            Grid::default()
        } else {
            self.grid
                .slice(Coord::new(1, 1), Coord::new(height - 2, width - 2))?
        };
        self.stripped = Some(inner);
        Ok(())
    }

    /// Append a title and redraw every title.
    pub fn add_title(&mut self, title: Title) -> Result<(), FrameError> {
        title.cells()?;
        self.titles.push(title);
        self.draw_titles()
    }

    /// Recolor the border (titles' flank glyphs included).
    ///
    /// The color is remembered and used for later borders too.
    pub fn color_border(&mut self, color: Color) -> Result<(), FrameError> {
        self.border_color = Some(color);
        if let Some(edges) = &self.edges {
            let coords: Vec<Coord> = edges.iter().collect();
            self.grid.color(&coords, color)?;
        }
        self.draw_titles()
    }

    /// Recolor every cell inside the border (the whole grid if unbordered).
    pub fn color_inner(&mut self, color: Color) -> Result<(), FrameError> {
        self.inner_color = Some(color);
        let Size { height, width } = self.grid.size();
        if !self.is_bordered() {
            self.grid.color_all(color);
            return Ok(());
        }
        let coords: Vec<Coord> = (1..height.saturating_sub(1))
            .flat_map(|r| (1..width.saturating_sub(1)).map(move |c| Coord::new(r, c)))
            .collect();
        self.grid.color(&coords, color)?;
        Ok(())
    }

    fn draw_titles(&mut self) -> Result<(), FrameError> {
        if !self.is_bordered() || self.titles.is_empty() {
            return Ok(());
        }
        let Size { height, width } = self.grid.size();
        let flank_color = self.border_color.unwrap_or_default();
        for title in &self.titles {
            let (open, close) = self.border_type.title_glyphs();
            let defaults = default_flanks(title.side);
            let flanks = (open.unwrap_or(defaults.0), close.unwrap_or(defaults.1));
            let edge_len = if title.side.is_horizontal() { width } else { height };
            let Some((start, cells)) = title.layout(edge_len, flanks, flank_color)? else {
                continue;
            };
            for (i, cell) in cells.into_iter().enumerate() {
                let at = match title.side {
                    Side::Top => Coord::new(0, start + i),
                    Side::Bottom => Coord::new(height - 1, start + i),
                    Side::Left => Coord::new(start + i, 0),
                    Side::Right => Coord::new(start + i, width - 1),
                };
                self.grid.set(at, cell)?;
            }
        }
        Ok(())
    }

    /// Compose `child` into this frame with its top-left cell at `offset`.
    ///
    /// Border junctions of the child that land on junctions of this frame
    /// are merged. With `preserve_border_color`, this frame's own border
    /// color is reapplied afterwards so merged cells on its ring keep it;
    /// otherwise merged cells take the child's color.
    ///
    /// Nothing changes if the child does not fit or a seam cannot be drawn.
    pub fn add_frame(
        &mut self,
        child: Frame,
        offset: Coord,
        preserve_border_color: bool,
    ) -> Result<(), FrameError> {
        let span = tframe_core::debug_span!(
            "frame.add_frame",
            row = offset.row,
            col = offset.col,
            child_height = child.grid.height(),
            child_width = child.grid.width()
        );
        let _guard = span.enter();

        if !self.grid.size().fits(offset, child.size()) {
            return Err(GridError::DoesNotFit {
                origin: offset,
                block: child.size(),
                size: self.grid.size(),
            }
            .into());
        }

        let merged = self.seam_merges(&child, offset)?;
        tframe_core::debug!(merged = merged.len(), "seam junctions merged");

        self.grid.overlay(&child.grid, offset, Anchor::TopLeft)?;
        for (coord, cell) in merged {
            self.grid.set(coord, cell)?;
        }

        match self.border_color {
            Some(color) if preserve_border_color => self.color_border(color)?,
            _ => self.draw_titles()?,
        }
        self.children.push(ChildFrame { offset, frame: child });
        Ok(())
    }

    /// Merged cells for every child border cell landing on a parent junction.
    fn seam_merges(&self, child: &Frame, offset: Coord) -> Result<Vec<(Coord, Cell)>, FrameError> {
        let Some(edges) = &child.edges else {
            return Ok(Vec::new());
        };
        let groups = Side::ALL
            .into_iter()
            .map(|side| (edges.edge(side).to_vec(), DirectionSet::from(side.inward())))
            .chain(std::iter::once((
                Corner::ALL.map(|c| edges.corner(c)).to_vec(),
                DirectionSet::empty(),
            )));

        let mut merged = Vec::new();
        for (coords, strip) in groups {
            for coord in coords {
                let at = coord + offset;
                let ours = self.grid.get(at)?;
                let theirs = child.grid.get(coord)?;
                if let Some(cell) = ours.merge(theirs, strip)? {
                    tframe_core::trace!(row = at.row, col = at.col, glyph = %cell.glyph(), "seam");
                    merged.push((at, cell));
                }
            }
        }
        Ok(merged)
    }

    pub fn to_plain_string(&self) -> String {
        self.grid.to_plain_string()
    }

    /// Colored text using 24-bit sequences.
    pub fn to_ansi_string(&self) -> String {
        self.grid.to_ansi_string()
    }

    pub fn to_ansi_string_with(&self, profile: ColorProfile) -> String {
        self.grid.to_ansi_string_with(profile)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}

fn ring_row(first: &Cell, edge: Vec<Cell>, last: &Cell) -> Vec<Cell> {
    let mut row = Vec::with_capacity(edge.len() + 2);
    row.push(first.clone());
    row.extend(edge);
    row.push(last.clone());
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::Preset;
    use tframe_core::Thickness;

    fn text(frame: &Frame) -> String {
        frame.to_plain_string()
    }

    fn boxed(height: usize, width: usize, preset: Preset) -> Frame {
        Frame::boxed(height, width, preset.into()).unwrap()
    }

    // ===== construction =====

    #[test]
    fn boxed_draws_ring() {
        assert_eq!(
            text(&boxed(4, 6, Preset::ThinSharp)),
            "┌────┐\n│    │\n│    │\n└────┘"
        );
        assert_eq!(text(&boxed(2, 4, Preset::Double)), "╔══╗\n╚══╝");
        assert_eq!(text(&boxed(3, 2, Preset::Thick)), "┏┓\n┃┃\n┗┛");
    }

    #[test]
    fn boxed_rejects_tiny() {
        assert_eq!(
            Frame::boxed(1, 5, BorderType::default()),
            Err(FrameError::TooSmall {
                height: 1,
                width: 5
            })
        );
    }

    #[test]
    fn new_borders_content() {
        let grid = Grid::from_text("ab\nc", Alignment::Left).unwrap();
        let frame = Frame::new(grid, Preset::ThinRound.into()).unwrap();
        assert_eq!(text(&frame), "╭──╮\n│ab│\n│c │\n╰──╯");
        assert!(frame.is_bordered());
    }

    #[test]
    fn new_on_empty_grid_is_corners_only() {
        let frame = Frame::new(Grid::default(), Preset::ThinRound.into()).unwrap();
        assert_eq!(text(&frame), "╭╮\n╰╯");
        assert_eq!(frame, boxed(2, 2, Preset::ThinRound));
    }

    #[test]
    fn mixed_thickness_box() {
        let spec = crate::ThicknessSpec::sides(
            Thickness::Thin,
            Thickness::Thin,
            Thickness::Double,
            Thickness::Thick,
        );
        // Double left meets thin top; thick right meets thin top.
        let bt = BorderType::from_thickness(&spec).unwrap();
        assert_eq!(text(&Frame::boxed(3, 4, bt).unwrap()), "╓──┒\n║  ┃\n╙──┚");
    }

    #[test]
    fn centered_text() {
        let frame = Frame::centered(
            "abcdef\nghij",
            6,
            12,
            Preset::Thick.into(),
            Alignment::Center,
        )
        .unwrap();
        assert_eq!(
            text(&frame),
            "┏━━━━━━━━━━┓\n\
             ┃          ┃\n\
             ┃  abcdef  ┃\n\
             ┃   ghij   ┃\n\
             ┃          ┃\n\
             ┗━━━━━━━━━━┛"
        );
    }

    #[test]
    fn centered_rejects_oversized_text() {
        let err = Frame::centered("abcd", 3, 5, BorderType::default(), Alignment::Left).unwrap_err();
        assert!(matches!(err, FrameError::ContentTooLarge { .. }));
        assert!(Frame::centered("abc", 3, 5, BorderType::default(), Alignment::Left).is_ok());
    }

    // ===== border state =====

    #[test]
    fn border_twice_is_rejected() {
        let mut frame = boxed(3, 3, Preset::ThinRound);
        assert_eq!(frame.border(), Err(FrameError::AlreadyBordered));
    }

    #[test]
    fn unborder_strips_ring() {
        let grid = Grid::from_text("xy", Alignment::Left).unwrap();
        let mut frame = Frame::new(grid.clone(), Preset::Double.into()).unwrap();
        frame.unborder().unwrap();
        assert_eq!(frame.grid(), &grid);
        assert_eq!(frame.unborder(), Err(FrameError::NotBordered));
        frame.border().unwrap();
        assert_eq!(text(&frame), "╔══╗\n║xy║\n╚══╝");
    }

    #[test]
    fn thin_boxes_survive_rebordering() {
        for (height, width) in [(2, 9), (5, 2), (2, 2)] {
            let original = boxed(height, width, Preset::ThinRound);
            let mut frame = original.clone();
            frame.unborder().unwrap();
            assert_eq!(frame.size(), Size::default());
            frame.border().unwrap();
            assert_eq!(frame, original, "{height}×{width}");
        }
        assert_eq!(text(&boxed(2, 9, Preset::ThinRound)), "╭───────╮\n╰───────╯");
    }

    #[test]
    fn add_frame_rejects_overflowing_offset() {
        let mut parent = boxed(4, 4, Preset::ThinSharp);
        let before = parent.clone();
        let child = boxed(2, 2, Preset::ThinSharp);
        let err = parent
            .add_frame(child, Coord::new(usize::MAX, 1), false)
            .unwrap_err();
        assert!(matches!(err, FrameError::Grid(GridError::DoesNotFit { .. })));
        assert_eq!(parent, before);
    }

    #[test]
    fn edge_coords_exclude_corners() {
        let frame = boxed(3, 4, Preset::ThinRound);
        let edges = frame.edge_coords().unwrap();
        assert_eq!(edges.edge(Side::Top), &[Coord::new(0, 1), Coord::new(0, 2)]);
        assert_eq!(edges.edge(Side::Right), &[Coord::new(1, 3)]);
        assert_eq!(edges.corner(Corner::BottomRight), Coord::new(2, 3));
        assert_eq!(edges.iter().count(), 10);
    }

    // ===== titles and color =====

    #[test]
    fn title_on_top_edge() {
        let mut frame = boxed(3, 12, Preset::ThinRound);
        frame.add_title(Title::new("hi")).unwrap();
        assert_eq!(text(&frame).lines().next(), Some("╭─╴hi╶─────╮"));
    }

    #[test]
    fn title_on_left_edge_reads_downward() {
        let mut frame = boxed(8, 3, Preset::ThinSharp);
        frame.add_title(Title::new("ab").on(Side::Left)).unwrap();
        let column: String = text(&frame).lines().filter_map(|l| l.chars().next()).collect();
        assert_eq!(column, "┌╵ab╷││└");
    }

    #[test]
    fn title_glyph_override() {
        let mut frame = boxed(3, 10, Preset::ClassicDouble);
        frame
            .add_title(Title::new("x").aligned(Alignment::Right))
            .unwrap();
        assert_eq!(text(&frame).lines().next(), Some("+=====x==+"));
    }

    #[test]
    fn title_survives_rebordering() {
        let mut frame = boxed(3, 10, Preset::ThinSharp);
        frame.add_title(Title::new("t")).unwrap();
        let before = text(&frame);
        frame.unborder().unwrap();
        frame.border().unwrap();
        assert_eq!(text(&frame), before);
    }

    #[test]
    fn border_color_reaches_flanks_not_text() {
        let mut frame = boxed(3, 10, Preset::ThinRound);
        frame
            .add_title(Title::new("ab").colored(Color::Blue))
            .unwrap();
        frame.color_border(Color::Red).unwrap();
        let top = frame.grid().row(0).unwrap();
        assert_eq!(top[0].color, Color::Red);
        assert_eq!(top[2].glyph(), '╴');
        assert_eq!(top[2].color, Color::Red);
        assert_eq!(top[3].color, Color::Blue);
        assert_eq!(frame.grid().get(Coord::new(1, 1)).unwrap().color, Color::Default);
    }

    #[test]
    fn inner_color_skips_border() {
        let mut frame = boxed(4, 4, Preset::ThinRound);
        frame.color_inner(Color::Green).unwrap();
        assert_eq!(frame.grid().get(Coord::new(1, 2)).unwrap().color, Color::Green);
        assert_eq!(frame.grid().get(Coord::new(0, 2)).unwrap().color, Color::Default);
        assert_eq!(frame.grid().get(Coord::new(3, 3)).unwrap().color, Color::Default);
    }

    #[test]
    fn border_color_applies_to_later_borders() {
        let mut frame = Frame::unbordered(
            Grid::from_text("a", Alignment::Left).unwrap(),
            Preset::ThinRound.into(),
        );
        frame.color_border(Color::Magenta).unwrap();
        frame.border().unwrap();
        assert_eq!(frame.grid().get(Coord::new(0, 0)).unwrap().color, Color::Magenta);
        assert_eq!(frame.grid().get(Coord::new(1, 1)).unwrap().color, Color::Default);
    }

    // ===== composition =====

    #[test]
    fn child_on_top_edge_makes_tees() {
        let mut parent = boxed(6, 12, Preset::ThinSharp);
        parent
            .add_frame(boxed(4, 5, Preset::ThinSharp), Coord::new(0, 3), false)
            .unwrap();
        assert_eq!(
            text(&parent),
            "┌──┬───┬───┐\n\
             │  │   │   │\n\
             │  │   │   │\n\
             │  └───┘   │\n\
             │          │\n\
             └──────────┘"
        );
    }

    #[test]
    fn child_on_left_edge_makes_tees() {
        let mut parent = boxed(6, 10, Preset::ThinSharp);
        parent
            .add_frame(boxed(4, 5, Preset::ThinSharp), Coord::new(1, 0), false)
            .unwrap();
        assert_eq!(
            text(&parent),
            "┌────────┐\n\
             ├───┐    │\n\
             │   │    │\n\
             │   │    │\n\
             ├───┘    │\n\
             └────────┘"
        );
    }

    #[test]
    fn interior_child_is_copied_verbatim() {
        let mut parent = boxed(5, 8, Preset::ThinRound);
        let child = boxed(3, 4, Preset::Double);
        parent.add_frame(child.clone(), Coord::new(1, 2), false).unwrap();
        assert_eq!(
            text(&parent),
            "╭──────╮\n\
             │ ╔══╗ │\n\
             │ ║  ║ │\n\
             │ ╚══╝ │\n\
             ╰──────╯"
        );
        assert_eq!(parent.children().len(), 1);
        assert_eq!(parent.children()[0].frame, child);
        assert_eq!(parent.children()[0].offset, Coord::new(1, 2));
    }

    #[test]
    fn oversized_child_leaves_parent_untouched() {
        let mut parent = boxed(4, 6, Preset::ThinRound);
        let before = parent.clone();
        let err = parent
            .add_frame(boxed(3, 3, Preset::ThinRound), Coord::new(2, 4), false)
            .unwrap_err();
        assert!(matches!(err, FrameError::Grid(GridError::DoesNotFit { .. })));
        assert_eq!(parent, before);
    }

    #[test]
    fn unresolvable_seam_leaves_parent_untouched() {
        let mut parent = boxed(5, 8, Preset::Thick);
        let before = parent.clone();
        let err = parent
            .add_frame(boxed(3, 4, Preset::Double), Coord::new(0, 2), false)
            .unwrap_err();
        assert!(matches!(err, FrameError::Junction(_)));
        assert_eq!(parent, before);
    }

    #[test]
    fn seam_color_follows_flag() {
        let child = || {
            let mut child = boxed(3, 4, Preset::ThinSharp);
            child.color_border(Color::Blue).unwrap();
            child
        };
        let seam = Coord::new(0, 2);

        let mut parent = boxed(5, 8, Preset::ThinSharp);
        parent.color_border(Color::Red).unwrap();
        parent.add_frame(child(), seam, true).unwrap();
        assert_eq!(parent.grid().get(seam).unwrap().glyph(), '┬');
        assert_eq!(parent.grid().get(seam).unwrap().color, Color::Red);

        let mut parent = boxed(5, 8, Preset::ThinSharp);
        parent.color_border(Color::Red).unwrap();
        parent.add_frame(child(), seam, false).unwrap();
        assert_eq!(parent.grid().get(seam).unwrap().color, Color::Blue);
    }

    #[test]
    fn parent_titles_are_redrawn_over_children() {
        let mut parent = boxed(5, 12, Preset::ThinSharp);
        parent.add_title(Title::new("top")).unwrap();
        parent
            .add_frame(boxed(3, 8, Preset::ThinSharp), Coord::new(0, 2), false)
            .unwrap();
        assert_eq!(text(&parent).lines().next(), Some("┌─╴top╶──┬─┐"));
    }

    #[test]
    fn ansi_output_colors_border() {
        let mut frame = boxed(2, 2, Preset::ThinRound);
        frame.color_border(Color::Red).unwrap();
        let red = Color::Red.sequence(ColorProfile::TrueColor);
        assert_eq!(frame.to_ansi_string(), format!("{red}╭╮\n╰╯\x1b[0m"));
    }
}
