#![forbid(unsafe_code)]

//! Border templates.
//!
//! A [`BorderType`] describes the eight parts of a border (four corners,
//! four edges) as [`BorderComponent`]s. It is a template: nothing is
//! resolved to glyphs until a [`Border`](crate::Border) is built from it.
//!
//! Corners follow the edges they join. With per-side thicknesses
//! `top`, `bottom`, `left`, `right`:
//!
//! | corner       | arms                              |
//! |--------------|-----------------------------------|
//! | top-left     | `{down: left, right: top}`        |
//! | top-right    | `{down: right, left: top}`        |
//! | bottom-left  | `{up: left, right: bottom}`       |
//! | bottom-right | `{up: right, left: bottom}`       |

use std::fmt;

use tframe_core::{Direction, JunctionMap, Thickness};
use tframe_render::{Cell, Junction, JunctionError, Style};
use tframe_style::Color;

/// One side of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Bottom => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }

    /// Top and bottom run left to right.
    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// The arm of an edge cell that points into the rectangle.
    #[inline]
    pub const fn inward(self) -> Direction {
        match self {
            Self::Top => Direction::Down,
            Self::Bottom => Direction::Up,
            Self::Left => Direction::Right,
            Self::Right => Direction::Left,
        }
    }
}

/// One corner of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::TopLeft => 0,
            Self::TopRight => 1,
            Self::BottomLeft => 2,
            Self::BottomRight => 3,
        }
    }

    /// The horizontal and vertical side meeting at this corner.
    pub const fn sides(self) -> (Side, Side) {
        match self {
            Self::TopLeft => (Side::Top, Side::Left),
            Self::TopRight => (Side::Top, Side::Right),
            Self::BottomLeft => (Side::Bottom, Side::Left),
            Self::BottomRight => (Side::Bottom, Side::Right),
        }
    }

    /// Arms of the corner glyph: toward the vertical edge, toward the horizontal one.
    const fn arms(self) -> (Direction, Direction) {
        match self {
            Self::TopLeft => (Direction::Down, Direction::Right),
            Self::TopRight => (Direction::Down, Direction::Left),
            Self::BottomLeft => (Direction::Up, Direction::Right),
            Self::BottomRight => (Direction::Up, Direction::Left),
        }
    }
}

/// Any of the eight parts of a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Corner(Corner),
    Edge(Side),
}

impl Slot {
    pub const ALL: [Self; 8] = [
        Self::Corner(Corner::TopLeft),
        Self::Corner(Corner::TopRight),
        Self::Corner(Corner::BottomLeft),
        Self::Corner(Corner::BottomRight),
        Self::Edge(Side::Top),
        Self::Edge(Side::Bottom),
        Self::Edge(Side::Left),
        Self::Edge(Side::Right),
    ];
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Corner(Corner::TopLeft) => "top-left corner",
            Self::Corner(Corner::TopRight) => "top-right corner",
            Self::Corner(Corner::BottomLeft) => "bottom-left corner",
            Self::Corner(Corner::BottomRight) => "bottom-right corner",
            Self::Edge(Side::Top) => "top edge",
            Self::Edge(Side::Bottom) => "bottom edge",
            Self::Edge(Side::Left) => "left edge",
            Self::Edge(Side::Right) => "right edge",
        };
        f.write_str(name)
    }
}

/// Errors building a border template.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BorderTypeError {
    #[error("no thickness for the {side:?} side and no uniform thickness")]
    MissingThickness { side: Side },
    #[error("{slot} is an empty pattern")]
    EmptyPattern { slot: Slot },
    #[error("{slot} cannot be drawn: {source}")]
    Unresolvable {
        slot: Slot,
        #[source]
        source: JunctionError,
    },
}

/// How one part of a border is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorderComponent {
    /// A fixed character that never merges with neighbours.
    Literal(char),
    /// A junction resolved from the table.
    Junction { map: JunctionMap, style: Style },
    /// Components repeated cyclically along an edge.
    Pattern(Vec<BorderComponent>),
}

impl BorderComponent {
    pub fn junction(map: JunctionMap, style: Style) -> Self {
        Self::Junction { map, style }
    }

    /// Check every junction in the component resolves.
    pub fn validate(&self) -> Result<(), JunctionError> {
        match self {
            Self::Literal(_) => Ok(()),
            Self::Junction { map, style } => tframe_render::resolve(map, style).map(drop),
            Self::Pattern(parts) => parts.iter().try_for_each(Self::validate),
        }
    }

    /// Resolve into one period of cells. Nested patterns are flattened.
    pub fn realize(&self, color: Color) -> Result<Vec<Cell>, JunctionError> {
        let mut cells = Vec::new();
        self.realize_into(color, &mut cells)?;
        Ok(cells)
    }

    fn realize_into(&self, color: Color, out: &mut Vec<Cell>) -> Result<(), JunctionError> {
        match self {
            Self::Literal(c) => out.push(Cell::from_char(*c).with_color(color)),
            Self::Junction { map, style } => {
                let junction = Junction::new(*map, style.clone())?;
                out.push(Cell::junction(junction).with_color(color));
            }
            Self::Pattern(parts) => {
                for part in parts {
                    part.realize_into(color, out)?;
                }
            }
        }
        Ok(())
    }

    /// Same shape with every junction restyled; literals are untouched.
    #[must_use]
    pub fn restyled(&self, style: &Style) -> Self {
        match self {
            Self::Literal(c) => Self::Literal(*c),
            Self::Junction { map, .. } => Self::Junction {
                map: *map,
                style: style.clone(),
            },
            Self::Pattern(parts) => Self::Pattern(parts.iter().map(|p| p.restyled(style)).collect()),
        }
    }
}

impl From<char> for BorderComponent {
    fn from(c: char) -> Self {
        Self::Literal(c)
    }
}

/// Inputs to [`BorderType::from_thickness`].
///
/// Each side uses its own thickness, else the uniform one. Styles cascade
/// from most to least specific: per-slot, then `corner_style` (corners
/// only), then `style`, then the default style.
#[derive(Debug, Clone, Default)]
pub struct ThicknessSpec {
    pub thickness: Option<Thickness>,
    pub sides: [Option<Thickness>; 4],
    pub style: Option<Style>,
    pub corner_style: Option<Style>,
    pub edge_styles: [Option<Style>; 4],
    pub corner_styles: [Option<Style>; 4],
}

impl ThicknessSpec {
    /// Every side at `thickness`.
    pub fn uniform(thickness: Thickness) -> Self {
        Self {
            thickness: Some(thickness),
            ..Self::default()
        }
    }

    /// Explicit thickness per side.
    pub fn sides(top: Thickness, bottom: Thickness, left: Thickness, right: Thickness) -> Self {
        Self {
            sides: [Some(top), Some(bottom), Some(left), Some(right)],
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_side(mut self, side: Side, thickness: Thickness) -> Self {
        self.sides[side.index()] = Some(thickness);
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    #[must_use]
    pub fn with_corner_style(mut self, style: Style) -> Self {
        self.corner_style = Some(style);
        self
    }

    #[must_use]
    pub fn with_slot_style(mut self, slot: Slot, style: Style) -> Self {
        match slot {
            Slot::Corner(corner) => self.corner_styles[corner.index()] = Some(style),
            Slot::Edge(side) => self.edge_styles[side.index()] = Some(style),
        }
        self
    }

    fn thickness_of(&self, side: Side) -> Result<Thickness, BorderTypeError> {
        self.sides[side.index()]
            .or(self.thickness)
            .ok_or(BorderTypeError::MissingThickness { side })
    }

    fn edge_style(&self, side: Side) -> Style {
        self.edge_styles[side.index()]
            .clone()
            .or_else(|| self.style.clone())
            .unwrap_or_default()
    }

    fn corner_style_of(&self, corner: Corner) -> Style {
        self.corner_styles[corner.index()]
            .clone()
            .or_else(|| self.corner_style.clone())
            .or_else(|| self.style.clone())
            .unwrap_or_default()
    }
}

/// A border template: eight components plus optional title flank glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderType {
    corners: [BorderComponent; 4],
    edges: [BorderComponent; 4],
    title_open: Option<char>,
    title_close: Option<char>,
}

impl BorderType {
    /// Build from explicit components. Nothing is validated.
    pub fn from_components(corners: [BorderComponent; 4], edges: [BorderComponent; 4]) -> Self {
        Self {
            corners,
            edges,
            title_open: None,
            title_close: None,
        }
    }

    /// Build from per-side thicknesses and styles, validating every junction.
    pub fn from_thickness(spec: &ThicknessSpec) -> Result<Self, BorderTypeError> {
        let mut thickness = [Thickness::Thin; 4];
        for side in Side::ALL {
            thickness[side.index()] = spec.thickness_of(side)?;
        }
        let border_type = Self::layout(spec, thickness);
        border_type.validate()?;
        Ok(border_type)
    }

    /// Lay out junction components for known side thicknesses.
    ///
    /// Nothing is resolved here; [`Border::new`](crate::Border::new) reports
    /// shapes the table cannot draw.
    pub(crate) fn layout(spec: &ThicknessSpec, thickness: [Thickness; 4]) -> Self {
        let of = |side: Side| thickness[side.index()];
        let corners = Corner::ALL.map(|corner| {
            let (horizontal, vertical) = corner.sides();
            let (to_vertical, to_horizontal) = corner.arms();
            let map = JunctionMap::new()
                .with(to_vertical, of(vertical))
                .with(to_horizontal, of(horizontal));
            BorderComponent::junction(map, spec.corner_style_of(corner))
        });
        let edges = Side::ALL.map(|side| {
            let map = if side.is_horizontal() {
                JunctionMap::horizontal(of(side))
            } else {
                JunctionMap::vertical(of(side))
            };
            BorderComponent::junction(map, spec.edge_style(side))
        });
        Self::from_components(corners, edges)
    }

    /// Uniform border in the default style.
    pub fn uniform(thickness: Thickness) -> Self {
        Self::layout(&ThicknessSpec::uniform(thickness), [thickness; 4])
    }

    /// Start a [`Combine`] builder from `base`.
    pub fn combine(base: &BorderType) -> Combine {
        Combine {
            inner: base.clone(),
        }
    }

    /// Check every component resolves.
    pub fn validate(&self) -> Result<(), BorderTypeError> {
        for slot in Slot::ALL {
            self.component(slot)
                .validate()
                .map_err(|source| BorderTypeError::Unresolvable { slot, source })?;
        }
        Ok(())
    }

    pub fn component(&self, slot: Slot) -> &BorderComponent {
        match slot {
            Slot::Corner(corner) => &self.corners[corner.index()],
            Slot::Edge(side) => &self.edges[side.index()],
        }
    }

    pub fn component_mut(&mut self, slot: Slot) -> &mut BorderComponent {
        match slot {
            Slot::Corner(corner) => &mut self.corners[corner.index()],
            Slot::Edge(side) => &mut self.edges[side.index()],
        }
    }

    #[inline]
    pub fn corner(&self, corner: Corner) -> &BorderComponent {
        &self.corners[corner.index()]
    }

    #[inline]
    pub fn edge(&self, side: Side) -> &BorderComponent {
        &self.edges[side.index()]
    }

    /// Glyphs drawn before and after title text, if overridden.
    #[inline]
    pub const fn title_glyphs(&self) -> (Option<char>, Option<char>) {
        (self.title_open, self.title_close)
    }

    #[must_use]
    pub fn with_title_glyphs(mut self, open: char, close: char) -> Self {
        self.title_open = Some(open);
        self.title_close = Some(close);
        self
    }

    #[must_use]
    pub fn with_component(mut self, slot: Slot, component: BorderComponent) -> Self {
        *self.component_mut(slot) = component;
        self
    }

    /// Restyle the edges, leaving corners as they are.
    #[must_use]
    pub fn with_edge_style(mut self, horizontal: &Style, vertical: &Style) -> Self {
        for side in Side::ALL {
            let style = if side.is_horizontal() {
                horizontal
            } else {
                vertical
            };
            let edge = &mut self.edges[side.index()];
            *edge = edge.restyled(style);
        }
        self
    }
}

impl Default for BorderType {
    fn default() -> Self {
        Self::uniform(Thickness::Thin)
    }
}

/// Where [`Combine`] takes a component from.
#[derive(Debug, Clone)]
pub enum Pick<'a> {
    /// The same slot of an existing template.
    Template(&'a BorderType),
    /// An explicit component.
    Value(BorderComponent),
}

impl From<char> for Pick<'_> {
    fn from(c: char) -> Self {
        Self::Value(BorderComponent::Literal(c))
    }
}

impl From<BorderComponent> for Pick<'_> {
    fn from(component: BorderComponent) -> Self {
        Self::Value(component)
    }
}

impl<'a> From<&'a BorderType> for Pick<'a> {
    fn from(template: &'a BorderType) -> Self {
        Self::Template(template)
    }
}

/// Builder mixing components from several templates.
///
/// ```
/// use tframe_core::Thickness;
/// use tframe_widgets::{BorderType, Corner, Side, Slot};
///
/// let double = BorderType::uniform(Thickness::Double);
/// let mixed = BorderType::combine(&BorderType::uniform(Thickness::Thin))
///     .pick(Slot::Edge(Side::Top), &double)
///     .pick(Slot::Corner(Corner::TopLeft), '+')
///     .build()
///     .unwrap();
/// assert_eq!(mixed.edge(Side::Top), double.edge(Side::Top));
/// ```
#[derive(Debug, Clone)]
pub struct Combine {
    inner: BorderType,
}

impl Combine {
    #[must_use]
    pub fn pick<'a>(mut self, slot: Slot, pick: impl Into<Pick<'a>>) -> Self {
        let component = match pick.into() {
            Pick::Template(template) => template.component(slot).clone(),
            Pick::Value(component) => component,
        };
        *self.inner.component_mut(slot) = component;
        self
    }

    #[must_use]
    pub fn title_glyphs(mut self, open: char, close: char) -> Self {
        self.inner.title_open = Some(open);
        self.inner.title_close = Some(close);
        self
    }

    /// Finish, validating every junction component.
    pub fn build(self) -> Result<BorderType, BorderTypeError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}
