//! Plain value types passed to and returned from the converter.
//!
//! None of these enforce their ranges on construction; the conversion
//! functions in [`crate::math`] clamp or wrap whatever they are given.

/// 8-bit RGB triplet with an optional alpha in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub a: Option<f64>,
}

impl Rgb {
    /// Triplet without alpha.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: None }
    }

    /// Triplet carrying an explicit alpha.
    pub const fn with_alpha(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r,
            g,
            b,
            a: Some(a),
        }
    }

    /// Channels normalized to 0.0–1.0.
    pub(crate) fn normalized(&self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Largest per-channel difference, ignoring alpha.
    pub fn max_channel_delta(&self, other: &Rgb) -> u8 {
        self.r
            .abs_diff(other.r)
            .max(self.g.abs_diff(other.g))
            .max(self.b.abs_diff(other.b))
    }
}

/// Hue in degrees (0–360), saturation and value in 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }
}

/// Hue in degrees (0–360), saturation and lightness in 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

#[cfg(feature = "rgb")]
mod rgb_interop {
    use super::Rgb;

    impl From<rgb::RGB8> for Rgb {
        fn from(px: rgb::RGB8) -> Self {
            Rgb::new(px.r, px.g, px.b)
        }
    }

    impl From<Rgb> for rgb::RGB8 {
        fn from(c: Rgb) -> Self {
            rgb::RGB8::new(c.r, c.g, c.b)
        }
    }

    impl From<rgb::RGBA8> for Rgb {
        fn from(px: rgb::RGBA8) -> Self {
            Rgb::with_alpha(px.r, px.g, px.b, f64::from(px.a) / 255.0)
        }
    }

    impl From<Rgb> for rgb::RGBA8 {
        fn from(c: Rgb) -> Self {
            let a = (c.a.unwrap_or(1.0).clamp(0.0, 1.0) * 255.0).round() as u8;
            rgb::RGBA8::new(c.r, c.g, c.b, a)
        }
    }
}
