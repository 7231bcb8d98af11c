#![forbid(unsafe_code)]

//! Snapshot/golden testing for tframe.
//!
//! Captures [`Grid`] output as plain or ANSI-colored text, compares it
//! against stored `.snap` files, and shows a line diff on mismatch.
//!
//! # Quick Start
//!
//! ```ignore
//! use tframe_harness::assert_snapshot;
//!
//! #[test]
//! fn box_renders() {
//!     let frame = Frame::boxed(3, 8, Preset::ThinRound.into()).unwrap();
//!     assert_snapshot!("box_basic", frame.grid());
//! }
//! ```
//!
//! # Updating Snapshots
//!
//! Run tests with `BLESS=1` to create or update snapshot files:
//!
//! ```sh
//! BLESS=1 cargo test -p tframe-harness
//! ```
//!
//! Snapshot files are stored under `tests/snapshots/` relative to the
//! crate's `CARGO_MANIFEST_DIR`. ANSI snapshots use the true-color profile
//! unless `TFRAME_TEST_PROFILE` selects `mono` or `ansi16`; a non-default
//! profile is appended to the snapshot name.

use std::fmt::Write as FmtWrite;
use std::path::{Path, PathBuf};

use tframe_style::ColorProfile;

// Re-exported for harness users.
pub use tframe_render::Grid;

// ============================================================================
// Grid → Text Conversion
// ============================================================================

/// Rows joined by `\n`, colors dropped.
pub fn grid_to_text(grid: &Grid) -> String {
    grid.to_plain_string()
}

/// Rows joined by `\n` with color sequences for `profile`.
pub fn grid_to_ansi(grid: &Grid, profile: ColorProfile) -> String {
    grid.to_ansi_string_with(profile)
}

// ============================================================================
// Match Modes & Normalization
// ============================================================================

/// Comparison mode for snapshot testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Byte-exact string comparison.
    Exact,
    /// Trim trailing whitespace on each line before comparing.
    TrimTrailing,
    /// Collapse all whitespace runs to single spaces and trim each line.
    Fuzzy,
}

fn normalize(text: &str, mode: MatchMode) -> String {
    match mode {
        MatchMode::Exact => text.to_string(),
        MatchMode::TrimTrailing => text
            .lines()
            .map(|l| l.trim_end())
            .collect::<Vec<_>>()
            .join("\n"),
        MatchMode::Fuzzy => text
            .lines()
            .map(|l| l.split_whitespace().collect::<Vec<_>>().join(" "))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

// ============================================================================
// Diff
// ============================================================================

/// Line diff of two texts: ` ` marks a shared line, `-` a line only in
/// `expected`, `+` a line only in `actual`. Empty when the texts agree.
pub fn diff_text(expected: &str, actual: &str) -> String {
    if expected == actual {
        return String::new();
    }
    let mut want = expected.lines();
    let mut got = actual.lines();
    let mut out = String::new();
    loop {
        // Writing into a String cannot fail.
        let _ = match (want.next(), got.next()) {
            (None, None) => break,
            (Some(e), Some(a)) if e == a => writeln!(out, " {e}"),
            (Some(e), Some(a)) => writeln!(out, "-{e}\n+{a}"),
            (Some(e), None) => writeln!(out, "-{e}"),
            (None, Some(a)) => writeln!(out, "+{a}"),
        };
    }
    if out.lines().all(|l| l.starts_with(' ')) {
        String::new()
    } else {
        out
    }
}

// ============================================================================
// Snapshot Assertion
// ============================================================================

/// Color profile for ANSI snapshots, from `TFRAME_TEST_PROFILE`.
///
/// Returns `None` when unset or unrecognized, meaning true color.
#[must_use]
pub fn current_test_profile() -> Option<ColorProfile> {
    match std::env::var("TFRAME_TEST_PROFILE").ok()?.as_str() {
        "mono" => Some(ColorProfile::Mono),
        "ansi16" => Some(ColorProfile::Ansi16),
        _ => None,
    }
}

fn profile_suffix(profile: ColorProfile) -> &'static str {
    match profile {
        ColorProfile::Mono => "__mono",
        ColorProfile::Ansi16 => "__ansi16",
        ColorProfile::TrueColor => "",
    }
}

fn snapshot_path(base_dir: &Path, name: &str) -> PathBuf {
    base_dir
        .join("tests")
        .join("snapshots")
        .join(format!("{name}.snap"))
}

fn is_bless() -> bool {
    std::env::var("BLESS").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

/// Compare `actual` with the stored snapshot, or store it under `BLESS=1`.
fn check_snapshot(label: &str, path: &Path, actual: &str, mode: MatchMode) {
    if is_bless() {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create snapshot directory");
        }
        std::fs::write(path, actual).expect("failed to write snapshot");
        return;
    }

    match std::fs::read_to_string(path) {
        Ok(expected) => {
            let norm_expected = normalize(&expected, mode);
            let norm_actual = normalize(actual, mode);

            if norm_expected != norm_actual {
                let diff = diff_text(&norm_expected, &norm_actual);
                panic!(
                    "\n\
                     === Snapshot mismatch: '{label}' ===\n\
                     File: {}\n\
                     Mode: {mode:?}\n\
                     Set BLESS=1 to update.\n\n\
                     Diff (- expected, + actual):\n{diff}",
                    path.display()
                );
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            panic!(
                "\n\
                 === No snapshot found: '{label}' ===\n\
                 Expected at: {}\n\
                 Run with BLESS=1 to create it.\n\n\
                 Actual output:\n{actual}",
                path.display(),
            );
        }
        Err(e) => {
            panic!("Failed to read snapshot '{}': {e}", path.display());
        }
    }
}

/// Assert that a grid's plain text matches a stored snapshot.
///
/// # Arguments
///
/// * `name`     – Snapshot identifier (used as the `.snap` filename).
/// * `grid`     – The grid to compare.
/// * `base_dir` – Root directory for snapshot storage (use `env!("CARGO_MANIFEST_DIR")`).
/// * `mode`     – How to compare the text.
///
/// # Panics
///
/// * If the snapshot file does not exist and `BLESS=1` is **not** set.
/// * If the grid output does not match the stored snapshot.
pub fn assert_grid_snapshot(name: &str, grid: &Grid, base_dir: &str, mode: MatchMode) {
    let path = snapshot_path(Path::new(base_dir), name);
    check_snapshot(name, &path, &grid_to_text(grid), mode);
}

/// Assert that a grid's colored output matches a stored snapshot.
///
/// Behaves like [`assert_grid_snapshot`] but keeps escape sequences and
/// compares exactly. Files use the `.ansi.snap` suffix.
pub fn assert_grid_snapshot_ansi(name: &str, grid: &Grid, base_dir: &str) {
    let profile = current_test_profile().unwrap_or_default();
    let resolved = format!("{name}{}.ansi", profile_suffix(profile));
    let path = snapshot_path(Path::new(base_dir), &resolved);
    check_snapshot(&resolved, &path, &grid_to_ansi(grid, profile), MatchMode::Exact);
}

// ============================================================================
// Convenience Macros
// ============================================================================

/// Assert that a grid matches a stored snapshot (plain text).
///
/// Uses `CARGO_MANIFEST_DIR` to locate the snapshot directory automatically.
///
/// ```ignore
/// // Default mode: TrimTrailing
/// assert_snapshot!("frame_basic", frame.grid());
///
/// // Explicit mode
/// assert_snapshot!("frame_exact", frame.grid(), MatchMode::Exact);
/// ```
#[macro_export]
macro_rules! assert_snapshot {
    ($name:expr, $grid:expr) => {
        $crate::assert_grid_snapshot(
            $name,
            $grid,
            env!("CARGO_MANIFEST_DIR"),
            $crate::MatchMode::TrimTrailing,
        )
    };
    ($name:expr, $grid:expr, $mode:expr) => {
        $crate::assert_grid_snapshot($name, $grid, env!("CARGO_MANIFEST_DIR"), $mode)
    };
}

/// Assert that a grid matches a stored ANSI snapshot.
#[macro_export]
macro_rules! assert_snapshot_ansi {
    ($name:expr, $grid:expr) => {
        $crate::assert_grid_snapshot_ansi($name, $grid, env!("CARGO_MANIFEST_DIR"))
    };
}

// ============================================================================
// Tests
// ============================================================================
