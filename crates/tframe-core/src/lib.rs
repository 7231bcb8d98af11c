#![forbid(unsafe_code)]

//! Core: geometry, the line direction/thickness model, and logging macros.

pub mod direction;
pub mod geometry;
pub mod logging;

pub use direction::{Direction, DirectionSet, JunctionMap, Thickness, UnknownThickness};
pub use geometry::{Alignment, Anchor, Coord, GeometryError, Size};

#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, info, trace, trace_span, warn};
