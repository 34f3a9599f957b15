//! The canonical parsed color.
//!
//! Stores the four bytes of the `#RRGGBBAA` form, so the hex strings and the
//! numeric channels can never disagree. Hex output is always uppercase.

use std::fmt;
use std::str::FromStr;

use crate::constants;
use crate::math;
use crate::model::{Hsl, Hsv, Rgb};
use crate::parse::{self, ColorParseError};

/// RGBA color decoded from a canonical `#RRGGBBAA` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    alpha: u8,
}

impl Color {
    /// Red channel (0–255).
    pub fn r(&self) -> u8 {
        self.r
    }
    /// Green channel (0–255).
    pub fn g(&self) -> u8 {
        self.g
    }
    /// Blue channel (0–255).
    pub fn b(&self) -> u8 {
        self.b
    }
    /// Alpha (0.0–1.0), the alpha byte divided by 255.
    pub fn a(&self) -> f64 {
        f64::from(self.alpha) / 255.0
    }
    /// Raw alpha byte.
    pub fn alpha_byte(&self) -> u8 {
        self.alpha
    }
}

impl Default for Color {
    /// Opaque black, the parser's fallback.
    fn default() -> Self {
        Self::from_rgba8(0, 0, 0, constants::OPAQUE_ALPHA)
    }
}

impl Color {
    /// Create from the four bytes of `#RRGGBBAA`.
    pub const fn from_rgba8(r: u8, g: u8, b: u8, alpha: u8) -> Self {
        Self { r, g, b, alpha }
    }

    /// `#RRGGBB`.
    pub fn hex(&self) -> String {
        math::rgb_to_hex(Rgb::new(self.r, self.g, self.b))
    }

    /// `#RRGGBBAA`.
    pub fn hexa(&self) -> String {
        format!("{}{}", self.hex(), math::component_to_hex(self.alpha))
    }

    /// Create from an [`Rgb`]; a missing alpha means fully opaque.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self::from_rgba8(rgb.r, rgb.g, rgb.b, alpha_to_byte(rgb.a.unwrap_or(1.0)))
    }

    /// Convert to an [`Rgb`] carrying this color's alpha.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::with_alpha(self.r, self.g, self.b, self.a())
    }

    /// Create from HSV plus alpha (0.0–1.0).
    pub fn from_hsv(hsv: Hsv, a: f64) -> Self {
        let rgb = math::hsv_to_rgb(hsv);
        Self::from_rgba8(rgb.r, rgb.g, rgb.b, alpha_to_byte(a))
    }

    /// Convert to HSV. Alpha is dropped.
    pub fn to_hsv(&self) -> Hsv {
        math::rgb_to_hsv(Rgb::new(self.r, self.g, self.b))
    }

    /// Create from HSL plus alpha (0.0–1.0).
    pub fn from_hsl(hsl: Hsl, a: f64) -> Self {
        let rgb = math::hsl_to_rgb(hsl);
        Self::from_rgba8(rgb.r, rgb.g, rgb.b, alpha_to_byte(a))
    }

    /// Convert to HSL. Alpha is dropped.
    pub fn to_hsl(&self) -> Hsl {
        math::rgb_to_hsl(Rgb::new(self.r, self.g, self.b))
    }

    /// Same color with a different alpha (clamped to 0.0–1.0).
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            alpha: alpha_to_byte(a),
            ..self
        }
    }
}

/// Scale a 0.0–1.0 alpha to a byte. NaN counts as opaque.
pub(crate) fn alpha_to_byte(a: f64) -> u8 {
    if a.is_nan() {
        return constants::OPAQUE_ALPHA;
    }
    (a.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hexa())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::try_parse_color(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.hexa()
    }
}
