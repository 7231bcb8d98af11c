#![forbid(unsafe_code)]

//! Render kernel: junction glyph resolution, cells, and character grids.
//!
//! # Role in tframe
//! `tframe-render` turns line descriptions into glyphs and holds them in a
//! [`Grid`]. Border types, titles, and frame composition live in
//! `tframe-widgets`; this crate knows nothing about frames.
//!
//! # Primary responsibilities
//! - **Junction table**: the shipped direction-map → glyph data.
//! - **Junction**: a direction map plus style with a derived glyph.
//! - **Cell/Grid**: 2D storage with slicing, overlay, and rendering to
//!   plain or colored text.

pub mod ansi;
pub mod cell;
pub mod grid;
pub mod junction;
pub mod junction_table;

pub use cell::{Cell, CellContent, CellError};
pub use grid::{Grid, GridError};
pub use junction::{
    Junction, JunctionError, Style, merge_junctions, merge_junctions_stripping, repeat_junction,
    resolve,
};
pub use junction_table::{JunctionTable, Leaf, TableError};
