#![forbid(unsafe_code)]

//! Cell colors and their SGR escape sequences.

use std::fmt::{self, Write as _};
use std::str::FromStr;

/// Resets every SGR attribute.
pub const SGR_RESET: &str = "\x1b[0m";

/// Terminal color capability used when emitting sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorProfile {
    /// No color output.
    Mono,
    /// Standard 16 ANSI colors.
    Ansi16,
    /// Full 24-bit RGB color.
    #[default]
    TrueColor,
}

impl ColorProfile {
    /// Detect the profile from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Detect using a custom environment lookup (for tests).
    ///
    /// `NO_COLOR` (any value) wins; `COLORTERM=truecolor|24bit` selects
    /// 24-bit output; anything else falls back to 16 colors.
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if get_env("NO_COLOR").is_some() {
            return Self::Mono;
        }
        match get_env("COLORTERM").as_deref() {
            Some("truecolor" | "24bit") => Self::TrueColor,
            _ => Self::Ansi16,
        }
    }
}

/// RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack a `0xRRGGBB` literal.
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    fn distance_sq(self, other: Self) -> u32 {
        let dr = self.r.abs_diff(other.r) as u32;
        let dg = self.g.abs_diff(other.g) as u32;
        let db = self.b.abs_diff(other.b) as u32;
        dr * dr + dg * dg + db * db
    }
}

/// Foreground color of a cell.
///
/// `Default` leaves the terminal's own foreground in place; the named
/// colors carry a fixed palette value so true-color output is stable
/// across terminal themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Gray,
    BrightWhite,
    Red,
    BrightRed,
    Yellow,
    BrightYellow,
    Green,
    BrightGreen,
    Cyan,
    BrightCyan,
    Blue,
    BrightBlue,
    Magenta,
    BrightMagenta,
    Rgb(Rgb),
}

impl Color {
    /// Every named color, in palette order.
    pub const NAMED: [Self; 15] = [
        Self::Black,
        Self::Gray,
        Self::BrightWhite,
        Self::Red,
        Self::BrightRed,
        Self::Yellow,
        Self::BrightYellow,
        Self::Green,
        Self::BrightGreen,
        Self::Cyan,
        Self::BrightCyan,
        Self::Blue,
        Self::BrightBlue,
        Self::Magenta,
        Self::BrightMagenta,
    ];

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(Rgb::new(r, g, b))
    }

    /// Palette value, `None` for `Default`.
    #[must_use]
    pub const fn to_rgb(self) -> Option<Rgb> {
        let hex = match self {
            Self::Default => return None,
            Self::Rgb(rgb) => return Some(rgb),
            Self::Black => 0x000000,
            Self::Gray => 0x666666,
            Self::BrightWhite => 0xE5E5E5,
            Self::Red => 0xCD3131,
            Self::BrightRed => 0xF14C4C,
            Self::Yellow => 0xE5E510,
            Self::BrightYellow => 0xF5F543,
            Self::Green => 0x0DBC79,
            Self::BrightGreen => 0x23D18B,
            Self::Cyan => 0x11A8CD,
            Self::BrightCyan => 0x29B8DB,
            Self::Blue => 0x2472C8,
            Self::BrightBlue => 0x3B8EEA,
            Self::Magenta => 0xBC3FBC,
            Self::BrightMagenta => 0xD670D6,
        };
        Some(Rgb::from_hex(hex))
    }

    /// SGR foreground parameter in the 16-color space.
    const fn ansi16_code(self) -> Option<u8> {
        Some(match self {
            Self::Black => 30,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
            Self::Gray => 90,
            Self::BrightRed => 91,
            Self::BrightGreen => 92,
            Self::BrightYellow => 93,
            Self::BrightBlue => 94,
            Self::BrightMagenta => 95,
            Self::BrightCyan => 96,
            Self::BrightWhite => 97,
            Self::Default | Self::Rgb(_) => return None,
        })
    }

    /// Closest named color by squared RGB distance.
    #[must_use]
    pub fn nearest_named(rgb: Rgb) -> Self {
        let mut best = Self::Black;
        let mut best_dist = u32::MAX;
        for named in Self::NAMED {
            if let Some(value) = named.to_rgb() {
                let dist = value.distance_sq(rgb);
                if dist < best_dist {
                    best = named;
                    best_dist = dist;
                }
            }
        }
        best
    }

    /// Snake-case name; `None` for RGB values.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        Some(match self {
            Self::Default => "default",
            Self::Black => "black",
            Self::Gray => "gray",
            Self::BrightWhite => "bright_white",
            Self::Red => "red",
            Self::BrightRed => "bright_red",
            Self::Yellow => "yellow",
            Self::BrightYellow => "bright_yellow",
            Self::Green => "green",
            Self::BrightGreen => "bright_green",
            Self::Cyan => "cyan",
            Self::BrightCyan => "bright_cyan",
            Self::Blue => "blue",
            Self::BrightBlue => "bright_blue",
            Self::Magenta => "magenta",
            Self::BrightMagenta => "bright_magenta",
            Self::Rgb(_) => return None,
        })
    }

    /// Append the sequence selecting this color to `out`.
    pub fn write_sequence<W: fmt::Write + ?Sized>(
        self,
        profile: ColorProfile,
        out: &mut W,
    ) -> fmt::Result {
        match profile {
            ColorProfile::Mono => Ok(()),
            ColorProfile::TrueColor => match self.to_rgb() {
                Some(Rgb { r, g, b }) => write!(out, "\x1b[38;2;{r};{g};{b}m"),
                None => out.write_str("\x1b[39m"),
            },
            ColorProfile::Ansi16 => {
                let color = match self {
                    Self::Rgb(rgb) => Self::nearest_named(rgb),
                    other => other,
                };
                match color.ansi16_code() {
                    Some(code) => write!(out, "\x1b[{code}m"),
                    None => out.write_str("\x1b[39m"),
                }
            }
        }
    }

    /// The sequence selecting this color as an owned string.
    #[must_use]
    pub fn sequence(self, profile: ColorProfile) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_sequence(profile, &mut out);
        out
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

/// A color name that is neither a palette name nor `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color {0:?}")]
pub struct UnknownColor(pub String);

impl FromStr for Color {
    type Err = UnknownColor;

    /// Accepts palette names (`bright_red`) and `#rrggbb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(hex) = s.strip_prefix('#') {
            return match u32::from_str_radix(hex, 16) {
                Ok(value) if hex.len() == 6 => Ok(Self::Rgb(Rgb::from_hex(value))),
                _ => Err(UnknownColor(s.to_owned())),
            };
        }
        if s == "default" {
            return Ok(Self::Default);
        }
        Self::NAMED
            .into_iter()
            .find(|c| c.name() == Some(s))
            .ok_or_else(|| UnknownColor(s.to_owned()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.name(), self) {
            (Some(name), _) => f.write_str(name),
            (None, Self::Rgb(Rgb { r, g, b })) => {
                f.write_char('#')?;
                write!(f, "{r:02x}{g:02x}{b:02x}")
            }
            (None, _) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truecolor_sequence_uses_palette_value() {
        assert_eq!(
            Color::Red.sequence(ColorProfile::TrueColor),
            "\x1b[38;2;205;49;49m"
        );
        assert_eq!(
            Color::rgb(1, 2, 3).sequence(ColorProfile::TrueColor),
            "\x1b[38;2;1;2;3m"
        );
        assert_eq!(Color::Default.sequence(ColorProfile::TrueColor), "\x1b[39m");
    }

    #[test]
    fn ansi16_sequence_maps_rgb_to_nearest() {
        assert_eq!(Color::BrightBlue.sequence(ColorProfile::Ansi16), "\x1b[94m");
        assert_eq!(
            Color::rgb(200, 50, 50).sequence(ColorProfile::Ansi16),
            "\x1b[31m"
        );
        assert_eq!(Color::Default.sequence(ColorProfile::Ansi16), "\x1b[39m");
    }

    #[test]
    fn mono_emits_nothing() {
        for color in Color::NAMED {
            assert_eq!(color.sequence(ColorProfile::Mono), "");
        }
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for color in Color::NAMED {
            let name = color.to_string();
            assert_eq!(name.parse::<Color>(), Ok(color));
        }
        assert_eq!("default".parse::<Color>(), Ok(Color::Default));
        assert_eq!("#0dbc79".parse::<Color>(), Ok(Color::rgb(13, 188, 121)));
        assert!("chartreuse".parse::<Color>().is_err());
        assert!("#12345".parse::<Color>().is_err());
    }

    #[test]
    fn profile_from_env() {
        let env = |pairs: &'static [(&'static str, &'static str)]| {
            move |key: &str| {
                pairs
                    .iter()
                    .find(|(k, _)| *k == key)
                    .map(|(_, v)| (*v).to_owned())
            }
        };
        assert_eq!(
            ColorProfile::from_env_with(env(&[("NO_COLOR", "1"), ("COLORTERM", "truecolor")])),
            ColorProfile::Mono
        );
        assert_eq!(
            ColorProfile::from_env_with(env(&[("COLORTERM", "24bit")])),
            ColorProfile::TrueColor
        );
        assert_eq!(ColorProfile::from_env_with(env(&[])), ColorProfile::Ansi16);
    }
}
