#![forbid(unsafe_code)]

//! A border template resolved into cells.

use tframe_render::Cell;
use tframe_style::Color;

use crate::border_type::{BorderType, BorderTypeError, Corner, Side, Slot};

/// Concrete cells for every part of a border.
///
/// Edges hold one period of their pattern; [`Border::edge`] repeats it to
/// the requested length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Border {
    corners: [Cell; 4],
    edges: [Vec<Cell>; 4],
}

impl Border {
    /// Resolve `border_type`, coloring every cell with `color`.
    pub fn new(border_type: &BorderType, color: Color) -> Result<Self, BorderTypeError> {
        let realize = |slot: Slot| -> Result<Vec<Cell>, BorderTypeError> {
            let cells = border_type
                .component(slot)
                .realize(color)
                .map_err(|source| BorderTypeError::Unresolvable { slot, source })?;
            if cells.is_empty() {
                return Err(BorderTypeError::EmptyPattern { slot });
            }
            Ok(cells)
        };

        let mut corners: [Cell; 4] = Default::default();
        for corner in Corner::ALL {
            // A corner is a single cell; patterns contribute their first.
            let mut cells = realize(Slot::Corner(corner))?;
            corners[corner.index()] = cells.swap_remove(0);
        }
        let mut edges: [Vec<Cell>; 4] = Default::default();
        for side in Side::ALL {
            edges[side.index()] = realize(Slot::Edge(side))?;
        }
        Ok(Self { corners, edges })
    }

    #[inline]
    pub fn corner(&self, corner: Corner) -> &Cell {
        &self.corners[corner.index()]
    }

    /// `len` cells along `side`, cycling the edge pattern.
    pub fn edge(&self, side: Side, len: usize) -> Vec<Cell> {
        self.edges[side.index()]
            .iter()
            .cycle()
            .take(len)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::border_type::BorderComponent;
    use crate::presets::Preset;

    fn text(cells: &[Cell]) -> String {
        cells.iter().map(Cell::glyph).collect()
    }

    #[test]
    fn resolves_corners_and_edges() {
        let border = Border::new(Preset::ThinRound.border_type(), Color::Green).unwrap();
        assert_eq!(border.corner(Corner::TopLeft).glyph(), '╭');
        assert_eq!(border.corner(Corner::BottomRight).glyph(), '╯');
        assert_eq!(text(&border.edge(Side::Left, 3)), "│││");
        assert!(border.edge(Side::Top, 4).iter().all(|c| c.color == Color::Green));
        assert!(border.corner(Corner::TopLeft).is_junction());
    }

    #[test]
    fn edge_cycles_pattern() {
        let border = Border::new(Preset::ThinRoundCastle.border_type(), Color::Default).unwrap();
        assert_eq!(text(&border.edge(Side::Top, 5)), "─⍽─⍽─");
        assert!(border.edge(Side::Top, 0).is_empty());
    }

    #[test]
    fn literal_cells_do_not_merge() {
        let border = Border::new(Preset::ClassicDashed.border_type(), Color::Default).unwrap();
        assert_eq!(border.corner(Corner::TopRight).glyph(), '+');
        assert!(!border.corner(Corner::TopRight).is_junction());
    }

    #[test]
    fn empty_pattern_is_rejected() {
        let bt = BorderType::default()
            .with_component(Slot::Edge(Side::Right), BorderComponent::Pattern(Vec::new()));
        assert_eq!(
            Border::new(&bt, Color::Default),
            Err(BorderTypeError::EmptyPattern {
                slot: Slot::Edge(Side::Right)
            })
        );
    }
}
