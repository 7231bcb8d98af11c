#![forbid(unsafe_code)]

//! tframe public facade crate.
//!
//! Re-exports the types needed to build, title, color, and compose frames,
//! plus a prelude for day-to-day usage.
//!
//! ```
//! use tframe::prelude::*;
//!
//! let mut outer = Frame::boxed(5, 12, Preset::ThinSharp.into())?;
//! let inner = Frame::boxed(3, 5, Preset::ThinSharp.into())?;
//! outer.add_frame(inner, Coord::new(0, 3), false)?;
//! assert_eq!(outer.to_string().lines().next(), Some("┌──┬───┬───┐"));
//! # Ok::<(), tframe::Error>(())
//! ```

// --- Core re-exports -------------------------------------------------------

pub use tframe_core::{
    Alignment, Anchor, Coord, Direction, DirectionSet, GeometryError, JunctionMap, Size,
    Thickness,
};

// --- Render re-exports -----------------------------------------------------

pub use tframe_render::{
    Cell, CellContent, CellError, Grid, GridError, Junction, JunctionError, JunctionTable, Style,
    TableError, merge_junctions, resolve,
};

// --- Style re-exports ------------------------------------------------------

pub use tframe_style::{Color, ColorProfile, Rgb, UnknownColor};

// --- Widget re-exports -----------------------------------------------------

pub use tframe_widgets::{
    Border, BorderComponent, BorderType, BorderTypeError, Corner, Frame, FrameError, Pick, Preset,
    Side, Slot, ThicknessSpec, Title, UnknownPreset,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for tframe users.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Frame(#[from] FrameError),
    #[error(transparent)]
    BorderType(#[from] BorderTypeError),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Junction(#[from] JunctionError),
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Preset(#[from] UnknownPreset),
    #[error(transparent)]
    Color(#[from] UnknownColor),
}

/// Standard result type for tframe APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Alignment, BorderType, Color, Coord, Error, Frame, Grid, Preset, Result, Side, Thickness,
        ThicknessSpec, Title,
    };

    pub use crate::{core, render, style, widgets};
}

pub use tframe_core as core;
pub use tframe_render as render;
pub use tframe_style as style;
pub use tframe_widgets as widgets;
