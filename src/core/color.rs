//! Appearance palette shared by the PNG charts and the terminal preview.
//!
//! Ranked kinds get evenly spaced hues around the colour wheel, assigned
//! over the full fixed ranking so a kind keeps its colour whatever else is present.
//! Unranked kinds are all drawn in one neutral grey.

use std::fmt;

use plotters::style::{Color, HSLColor, RGBColor};

use crate::core::{constants::APPEARANCE_TYPES, ordering::AppearanceRank};

/// Hue of the first ranked kind, in degrees.
const HUE_START: f64 = 15.0;
const SATURATION: f64 = 0.65;
const LIGHTNESS: f64 = 0.55;

/// Colour for anything outside the fixed ranking.
pub const UNRANKED_GREY: Rgb = Rgb(0x7f, 0x7f, 0x7f);

/// Plain 8-bit RGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl From<Rgb> for RGBColor {
    #[inline]
    fn from(Rgb(r, g, b): Rgb) -> Self {
        RGBColor(r, g, b)
    }
}

/// Fill colour for one appearance rank.
#[must_use]
pub fn appearance_color(rank: AppearanceRank) -> Rgb {
    match rank {
        AppearanceRank::Ranked(i) => hue_color(i, APPEARANCE_TYPES.len()),
        AppearanceRank::Unranked => UNRANKED_GREY,
    }
}

#[allow(clippy::cast_precision_loss)]
fn hue_color(index: usize, levels: usize) -> Rgb {
    let degrees = (HUE_START + 360.0 * index as f64 / levels.max(1) as f64) % 360.0;
    let rgba = HSLColor(degrees / 360.0, SATURATION, LIGHTNESS).to_rgba();
    Rgb(rgba.0, rgba.1, rgba.2)
}

// --- ANSI ---

/// Escape sequences for the terminal preview.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnsiCode {
    /// True-colour foreground `ESC[38;2;R;G;Bm`.
    Fg(Rgb),
    Bold,
    Reset,
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fg(Rgb(r, g, b)) => write!(f, "\x1b[38;2;{r};{g};{b}m"),
            Self::Bold => f.write_str("\x1b[1m"),
            Self::Reset => f.write_str("\x1b[0m"),
        }
    }
}

impl From<Rgb> for AnsiCode {
    #[inline]
    fn from(c: Rgb) -> Self {
        Self::Fg(c)
    }
}

/// Wrap `text` in colour + reset sequence.
#[inline]
#[must_use]
pub fn colorize(c: AnsiCode, text: &str) -> String {
    format!("{c}{text}{}", AnsiCode::Reset)
}
