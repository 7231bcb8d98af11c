#![forbid(unsafe_code)]

//! Integration tests: golden snapshots for frames.
//!
//! Run `BLESS=1 cargo test --package tframe-harness` to create/update snapshots.

use tframe_core::{Alignment, Coord, Thickness};
use tframe_harness::{MatchMode, assert_snapshot, assert_snapshot_ansi};
use tframe_style::Color;
use tframe_widgets::{BorderType, Frame, Preset, Side, ThicknessSpec, Title};

fn boxed(height: usize, width: usize, preset: Preset) -> Frame {
    Frame::boxed(height, width, preset.into()).unwrap()
}

// ============================================================================
// Composition
// ============================================================================

/// A double box with a red border and a blue bottom-right title, nested in
/// a rounded outer frame.
fn nested_titled() -> Frame {
    let mut inner = boxed(12, 12, Preset::Double);
    inner
        .add_title(
            Title::new("hello")
                .aligned(Alignment::Right)
                .colored(Color::Blue)
                .on(Side::Bottom),
        )
        .unwrap();
    inner.color_border(Color::Red).unwrap();

    let mut outer = boxed(15, 30, Preset::ThinRound);
    outer.add_frame(inner, Coord::new(2, 12), false).unwrap();
    outer
}

#[test]
fn snapshot_nested_titled() {
    let frame = nested_titled();
    assert_snapshot!("nested_titled", frame.grid(), MatchMode::Exact);
}

#[test]
fn snapshot_nested_titled_ansi() {
    let frame = nested_titled();
    assert_snapshot_ansi!("nested_titled", frame.grid());
}

#[test]
fn snapshot_seam_top_edge() {
    let mut parent = boxed(6, 12, Preset::ThinSharp);
    parent
        .add_frame(boxed(4, 5, Preset::ThinSharp), Coord::new(0, 3), false)
        .unwrap();
    assert_snapshot!("seam_top_edge", parent.grid());
}

#[test]
fn snapshot_seam_split_pane() {
    let mut parent = boxed(6, 14, Preset::ThinRound);
    parent
        .add_frame(boxed(6, 7, Preset::ThinSharp), Coord::new(0, 0), false)
        .unwrap();
    assert_snapshot!("seam_split_pane", parent.grid());
}

#[test]
fn snapshot_seam_thick_into_thin() {
    let mut parent = boxed(7, 16, Preset::ThinSharp);
    parent
        .add_frame(boxed(4, 8, Preset::Thick), Coord::new(0, 4), false)
        .unwrap();
    assert_snapshot!("seam_thick_into_thin", parent.grid());
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn snapshot_centered_text() {
    let frame = Frame::centered(
        "abcdef\nghij",
        6,
        12,
        Preset::Thick.into(),
        Alignment::Center,
    )
    .unwrap();
    assert_snapshot!("centered_text", frame.grid());
}

#[test]
fn snapshot_mixed_thickness() {
    let spec = ThicknessSpec::uniform(Thickness::Thin).with_side(Side::Top, Thickness::Double);
    let frame = Frame::boxed(4, 10, BorderType::from_thickness(&spec).unwrap()).unwrap();
    assert_snapshot!("mixed_thickness", frame.grid());
}

#[test]
fn snapshot_castle_title() {
    let mut frame = boxed(4, 11, Preset::ThinRoundCastle);
    frame
        .add_title(Title::new("keep").aligned(Alignment::Center))
        .unwrap();
    assert_snapshot!("castle_title", frame.grid());
}

#[test]
fn snapshot_classic_titles() {
    let mut frame = boxed(5, 16, Preset::ClassicDashed);
    frame.add_title(Title::new("log")).unwrap();
    frame
        .add_title(Title::new("v1").aligned(Alignment::Right).on(Side::Bottom))
        .unwrap();
    assert_snapshot!("classic_titles", frame.grid());
}

#[test]
fn snapshot_side_titles() {
    let mut frame = boxed(9, 9, Preset::Double);
    frame.add_title(Title::new("ab").on(Side::Left)).unwrap();
    frame
        .add_title(Title::new("cd").aligned(Alignment::Right).on(Side::Right))
        .unwrap();
    assert_snapshot!("side_titles", frame.grid());
}

#[test]
fn snapshot_dashed_presets() {
    let mut row = boxed(5, 32, Preset::ThinSharp);
    let presets = [
        Preset::ThinRoundTripleDash,
        Preset::ThinSharpQuadDash,
        Preset::ThickDuoDash,
    ];
    for (i, preset) in presets.into_iter().enumerate() {
        row.add_frame(boxed(3, 8, preset), Coord::new(1, 2 + i * 10), false)
            .unwrap();
    }
    assert_snapshot!("dashed_presets", row.grid());
}
