#![forbid(unsafe_code)]

//! Text output for grids.
//!
//! Colored output tracks the previous cell's color across the whole grid,
//! including row breaks, and emits a sequence only when it changes. A run of
//! equally colored cells therefore costs one sequence. Output that selected
//! any color ends with [`SGR_RESET`].

use std::fmt::{self, Write};

use tframe_style::{Color, ColorProfile, SGR_RESET};

use crate::grid::Grid;

/// Rows joined by `\n`.
pub fn write_plain<W: Write + ?Sized>(grid: &Grid, out: &mut W) -> fmt::Result {
    for (r, row) in grid.rows().enumerate() {
        if r > 0 {
            out.write_char('\n')?;
        }
        for cell in row {
            out.write_char(cell.glyph())?;
        }
    }
    Ok(())
}

/// Rows joined by `\n` with color sequences for `profile`.
pub fn write_ansi<W: Write + ?Sized>(
    grid: &Grid,
    profile: ColorProfile,
    out: &mut W,
) -> fmt::Result {
    if profile == ColorProfile::Mono {
        return write_plain(grid, out);
    }
    let mut prev: Option<Color> = None;
    for (r, row) in grid.rows().enumerate() {
        if r > 0 {
            out.write_char('\n')?;
        }
        for cell in row {
            if prev != Some(cell.color) {
                cell.color.write_sequence(profile, out)?;
                prev = Some(cell.color);
            }
            out.write_char(cell.glyph())?;
        }
    }
    if prev.is_some() {
        out.write_str(SGR_RESET)?;
    }
    Ok(())
}
