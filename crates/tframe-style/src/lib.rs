#![forbid(unsafe_code)]

//! Colors for frame cells and the escape sequences that select them.

pub mod color;

pub use color::{Color, ColorProfile, Rgb, SGR_RESET, UnknownColor};
