//! # solid-color
//!
//! Color parsing and conversion core for color picker widgets.
//!
//! Reads `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb()`, `rgba()` and named keywords
//! into a canonical [`Color`], converts between RGB, HSV and HSL, and samples
//! the hue ramps and gradients a picker paints.
//!
//! ## Usage
//!
//! ```rust
//! use solid_color::{parse_color, rgb_to_hsv, hsv_to_rgb};
//!
//! let color = parse_color("rgba(0, 128, 255, 0.5)");
//! assert_eq!(color.hex(), "#0080FF");
//!
//! let hsv = rgb_to_hsv(color.to_rgb());
//! assert_eq!(hsv_to_rgb(hsv).b, 255);
//! ```
//!
//! ## Features
//!
//! - `keywords` (default): named colors such as `"red"` or `"rebeccapurple"`.
//! - `serde`: serialization for the value types; [`Color`] serializes as
//!   its `#RRGGBBAA` string.
//! - `rgb`: conversions to and from the `rgb` crate's pixel types.

mod color;
mod constants;
#[cfg(feature = "keywords")]
pub mod keywords;
mod math;
mod model;
mod parse;
pub mod raster;

pub use color::Color;
pub use constants::FALLBACK_HEXA;
pub use math::{
    calculate_line_color, component_to_hex, hex_to_rgb, hsl_to_rgb, hsv_to_rgb, hue_to_rgb,
    rgb_to_hex, rgb_to_hsl, rgb_to_hsv, rgb_to_hue,
};
pub use model::{Hsl, Hsv, Rgb};
pub use parse::{normalize_hex, parse_color, try_parse_color, ColorParseError};
