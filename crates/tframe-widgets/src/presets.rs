#![forbid(unsafe_code)]

//! Named border types.
//!
//! Presets are addressed by path-like keys such as `thin/round` or
//! `thick/dashed/quad`. Every template is built once, on first use.
//!
//! ```text
//! thin/round   thick    double   classic/dashed
//! ╭───╮        ┏━━━┓    ╔═══╗    +---+
//! │   │        ┃   ┃    ║   ║    |   |
//! ╰───╯        ┗━━━┛    ╚═══╝    +---+
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use tframe_core::{JunctionMap, Thickness};
use tframe_render::Style;

use crate::border_type::{BorderComponent, BorderType, Side, Slot, ThicknessSpec};

/// A key that names no preset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown border preset {0:?}")]
pub struct UnknownPreset(pub String);

/// Built-in border types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    ThinRound,
    ThinSharp,
    Thick,
    Double,
    ThinRoundTripleDash,
    ThinRoundQuadDash,
    ThinRoundDuoDash,
    ThinSharpTripleDash,
    ThinSharpQuadDash,
    ThinSharpDuoDash,
    ThickTripleDash,
    ThickQuadDash,
    ThickDuoDash,
    ThinRoundCastle,
    ClassicDashed,
    ClassicDouble,
    ClassicUnderscore,
    ClassicOverscore,
}

impl Preset {
    pub const ALL: [Self; 18] = [
        Self::ThinRound,
        Self::ThinSharp,
        Self::Thick,
        Self::Double,
        Self::ThinRoundTripleDash,
        Self::ThinRoundQuadDash,
        Self::ThinRoundDuoDash,
        Self::ThinSharpTripleDash,
        Self::ThinSharpQuadDash,
        Self::ThinSharpDuoDash,
        Self::ThickTripleDash,
        Self::ThickQuadDash,
        Self::ThickDuoDash,
        Self::ThinRoundCastle,
        Self::ClassicDashed,
        Self::ClassicDouble,
        Self::ClassicUnderscore,
        Self::ClassicOverscore,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Self::ThinRound => "thin/round",
            Self::ThinSharp => "thin/sharp",
            Self::Thick => "thick",
            Self::Double => "double",
            Self::ThinRoundTripleDash => "thin/round/dashed/triple",
            Self::ThinRoundQuadDash => "thin/round/dashed/quad",
            Self::ThinRoundDuoDash => "thin/round/dashed/duo",
            Self::ThinSharpTripleDash => "thin/sharp/dashed/triple",
            Self::ThinSharpQuadDash => "thin/sharp/dashed/quad",
            Self::ThinSharpDuoDash => "thin/sharp/dashed/duo",
            Self::ThickTripleDash => "thick/dashed/triple",
            Self::ThickQuadDash => "thick/dashed/quad",
            Self::ThickDuoDash => "thick/dashed/duo",
            Self::ThinRoundCastle => "thin/round/castle",
            Self::ClassicDashed => "classic/dashed",
            Self::ClassicDouble => "classic/double",
            Self::ClassicUnderscore => "classic/underscore",
            Self::ClassicOverscore => "classic/overscore",
        }
    }

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }

    /// The shared template for this preset.
    pub fn border_type(self) -> &'static BorderType {
        &REGISTRY[self.index()]
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.key() == s)
            .ok_or_else(|| UnknownPreset(s.to_owned()))
    }
}

impl From<Preset> for BorderType {
    fn from(preset: Preset) -> Self {
        preset.border_type().clone()
    }
}

static REGISTRY: LazyLock<[BorderType; 18]> = LazyLock::new(build_registry);

/// Every preset, indexed like [`Preset::ALL`].
fn build_registry() -> [BorderType; 18] {
    let round = thin(Style::ROUND);
    let sharp = thin(Style::SHARP);
    let thick = BorderType::uniform(Thickness::Thick);
    let dashed = |base: &BorderType, style: Style| base.clone().with_edge_style(&style, &style);

    let castle_top = BorderComponent::Pattern(vec![
        BorderComponent::junction(JunctionMap::horizontal(Thickness::Thin), Style::DEFAULT),
        BorderComponent::Literal('⍽'),
    ]);

    [
        round.clone(),
        sharp.clone(),
        thick.clone(),
        BorderType::uniform(Thickness::Double),
        dashed(&round, Style::TRIPLE_DASH),
        dashed(&round, Style::QUAD_DASH),
        dashed(&round, Style::DUO_DASH),
        dashed(&sharp, Style::TRIPLE_DASH),
        dashed(&sharp, Style::QUAD_DASH),
        dashed(&sharp, Style::DUO_DASH),
        dashed(&thick, Style::TRIPLE_DASH),
        dashed(&thick, Style::QUAD_DASH),
        dashed(&thick, Style::DUO_DASH),
        round.with_component(Slot::Edge(Side::Top), castle_top),
        classic(['+'; 4], '-', '|').with_title_glyphs('-', '-'),
        classic(['+'; 4], '=', '|').with_title_glyphs('=', '='),
        classic([' ', ' ', '|', '|'], '_', '|').with_title_glyphs('_', '_'),
        classic(['|', '|', ' ', ' '], '‾', '|').with_title_glyphs('‾', '‾'),
    ]
}

fn thin(corner_style: Style) -> BorderType {
    let spec = ThicknessSpec::uniform(Thickness::Thin).with_corner_style(corner_style);
    BorderType::layout(&spec, [Thickness::Thin; 4])
}

/// Literal border; corners in top-left, top-right, bottom-left, bottom-right order.
fn classic(corners: [char; 4], horizontal: char, vertical: char) -> BorderType {
    let h = BorderComponent::Literal(horizontal);
    let v = BorderComponent::Literal(vertical);
    BorderType::from_components(corners.map(BorderComponent::Literal), [h.clone(), h, v.clone(), v])
}
