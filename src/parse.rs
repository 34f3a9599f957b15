//! Text → [`Color`] parsing.
//!
//! Accepted forms: `#RGB`, `#RRGGBB`, `#RRGGBBAA` (extra digits ignored),
//! `rgb(r, g, b)`, `rgba(r, g, b, a)` and named keywords. [`parse_color`]
//! never fails and substitutes opaque black for anything it cannot read;
//! [`try_parse_color`] reports why instead.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::color::{alpha_to_byte, Color};
use crate::constants;
use crate::math;
use crate::model::Rgb;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("hex color needs 3, 6 or 8 digits, got {0}")]
    InvalidLength(usize),
    #[error("malformed rgb()/rgba() notation `{0}`")]
    MalformedFunction(String),
    #[error("invalid alpha component `{0}`")]
    InvalidAlpha(String),
    #[error("unknown color keyword `{0}`")]
    UnknownKeyword(String),
}

static RGB_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"rgba?\(([0-9]{1,3}),\s*([0-9]{1,3}),\s*([0-9]{1,3})(?:,\s*([0-9.]+))?\)")
        .expect("valid regex")
});

/// Parse any supported color text, falling back to opaque black.
pub fn parse_color(input: &str) -> Color {
    try_parse_color(input).unwrap_or_else(|err| {
        log::debug!(
            "color {:?} falls back to {}: {}",
            input,
            constants::FALLBACK_HEXA,
            err
        );
        Color::default()
    })
}

/// Parse any supported color text, reporting unreadable input as an error.
///
/// Invalid characters inside an otherwise well-sized hex literal are not
/// errors; each one is read as `0`.
pub fn try_parse_color(input: &str) -> Result<Color, ColorParseError> {
    if input.is_empty() {
        return Err(ColorParseError::Empty);
    }
    let hexa: Cow<'_, str> = if input.starts_with('#') {
        Cow::Borrowed(input)
    } else if input.starts_with("rgb") {
        Cow::Owned(rgb_function_to_hexa(input)?)
    } else {
        Cow::Borrowed(lookup_keyword(input)?)
    };
    let [r, g, b, a] = expand_hex(&hexa)?;
    Ok(Color::from_rgba8(r, g, b, a))
}

/// Normalize a hex string (with or without `#`) to uppercase `#RRGGBBAA`.
///
/// Shorthand `RGB` doubles each digit. With six or more digits the first six
/// are the channels and the 7th–8th, when present, the alpha. Each non-hex
/// character is read as `0`. Anything shorter than three digits, or four to
/// five digits long, becomes `#000000FF`.
pub fn normalize_hex(hex: &str) -> String {
    match expand_hex(hex) {
        Ok([r, g, b, a]) => Color::from_rgba8(r, g, b, a).hexa(),
        Err(_) => constants::FALLBACK_HEXA.to_string(),
    }
}

/// Hex digit value; anything else counts as zero.
fn nibble(c: char) -> u8 {
    c.to_digit(16).map_or(0, |d| d as u8)
}

fn hex_byte(hi: char, lo: char) -> u8 {
    (nibble(hi) << 4) | nibble(lo)
}

fn expand_hex(hex: &str) -> Result<[u8; 4], ColorParseError> {
    if hex.is_empty() {
        return Err(ColorParseError::Empty);
    }
    let digits: Vec<char> = hex.strip_prefix('#').unwrap_or(hex).chars().collect();
    match digits.as_slice() {
        [r, g, b] => Ok([
            hex_byte(*r, *r),
            hex_byte(*g, *g),
            hex_byte(*b, *b),
            constants::OPAQUE_ALPHA,
        ]),
        [r1, r2, g1, g2, b1, b2, rest @ ..] => {
            let alpha = match rest {
                [a1, a2, ..] => hex_byte(*a1, *a2),
                _ => constants::OPAQUE_ALPHA,
            };
            Ok([
                hex_byte(*r1, *r2),
                hex_byte(*g1, *g2),
                hex_byte(*b1, *b2),
                alpha,
            ])
        }
        _ => Err(ColorParseError::InvalidLength(digits.len())),
    }
}

/// Read `rgb()`/`rgba()` notation into `#RRGGBBAA`.
///
/// Channels above 255 clamp to 255; alpha defaults to 1 and clamps to 0–1.
fn rgb_function_to_hexa(input: &str) -> Result<String, ColorParseError> {
    let caps = RGB_FUNCTION
        .captures(input)
        .ok_or_else(|| ColorParseError::MalformedFunction(input.to_string()))?;
    let channel = |i: usize| caps[i].parse::<u16>().map_or(0, |v| v.min(255) as u8);
    let a = match caps.get(4) {
        Some(m) => m
            .as_str()
            .parse::<f64>()
            .map_err(|_| ColorParseError::InvalidAlpha(m.as_str().to_string()))?,
        None => 1.0,
    };
    let rgb = Rgb::with_alpha(channel(1), channel(2), channel(3), a);
    Ok(format!(
        "{}{}",
        math::rgb_to_hex(rgb),
        math::component_to_hex(alpha_to_byte(a))
    ))
}

#[cfg(feature = "keywords")]
fn lookup_keyword(name: &str) -> Result<&'static str, ColorParseError> {
    crate::keywords::lookup(name).ok_or_else(|| ColorParseError::UnknownKeyword(name.to_string()))
}

#[cfg(not(feature = "keywords"))]
fn lookup_keyword(name: &str) -> Result<&'static str, ColorParseError> {
    Err(ColorParseError::UnknownKeyword(name.to_string()))
}
