//! Color math: direct conversions between RGB, HSV, HSL and hex.
//!
//! Hue is in degrees (0–360); saturation, value and lightness in 0.0–1.0;
//! RGB channels are 0–255. Every function is total: out-of-range input is
//! clamped or wrapped, never rejected.

use crate::model::{Hsl, Hsv, Rgb};

/// Round a 0.0–1.0 fraction to a 0–255 channel.
fn unit_to_channel(x: f64) -> u8 {
    (x.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Round a 0.0–255.0 value to a channel, clamping first.
fn clamp_channel(x: f64) -> u8 {
    x.clamp(0.0, 255.0).round() as u8
}

/// Wrap degrees into [0, 360). Non-finite angles become 0.
fn wrap_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let h = h.rem_euclid(360.0);
    // rem_euclid can round tiny negatives up to exactly 360.0
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Two uppercase hex digits, zero padded.
pub fn component_to_hex(c: u8) -> String {
    format!("{:02X}", c)
}

/// `#RRGGBB`, uppercase. Alpha is ignored.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!(
        "#{}{}{}",
        component_to_hex(rgb.r),
        component_to_hex(rgb.g),
        component_to_hex(rgb.b)
    )
}

/// Decode `#RGB` or `#RRGGBB` without validating individual digits.
///
/// The shorthand form is expanded by repeating every character, whatever it
/// is. Anything that does not decode as a hex number yields black. For the
/// validating decoder used by the parser see [`crate::normalize_hex`].
pub fn hex_to_rgb(hex: &str) -> Rgb {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let expanded: String = if digits.chars().count() < 6 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };
    let n = u32::from_str_radix(&expanded, 16).unwrap_or(0);
    Rgb::new(
        ((n >> 16) & 0xFF) as u8,
        ((n >> 8) & 0xFF) as u8,
        (n & 0xFF) as u8,
    )
}

/// RGB → HSV. Gray input (max == min) yields `h = 0, s = 0`.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let (r, g, b) = rgb.normalized();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { delta / max };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsv::new(wrap_hue(h * 60.0), s, v)
}

/// HSV → RGB using the six-sector construction.
///
/// `s` and `v` are clamped into [0, 1] and `h` wrapped into [0, 360) first.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let s = clamp_unit(hsv.s);
    let v = clamp_unit(hsv.v);
    let h6 = wrap_hue(hsv.h) / 60.0;

    let i = h6.floor();
    let f = h6 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match i as u32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb::new(unit_to_channel(r), unit_to_channel(g), unit_to_channel(b))
}

/// Hue angle of an RGB color in degrees. Gray input has no hue and yields 0.
pub fn rgb_to_hue(rgb: Rgb) -> f64 {
    let (r, g, b) = (f64::from(rgb.r), f64::from(rgb.g), f64::from(rgb.b));
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    if max == min {
        return 0.0;
    }
    let delta = max - min;
    if max == r && g >= b {
        60.0 * (g - b) / delta
    } else if max == r {
        60.0 * (g - b) / delta + 360.0
    } else if max == g {
        60.0 * (b - r) / delta + 120.0
    } else {
        60.0 * (r - g) / delta + 240.0
    }
}

/// Fully saturated, full brightness color for a hue angle.
///
/// Each channel is a triangular wave over `x = h / 60 * 255`, folded with
/// absolute values and clamped to 0–255.
pub fn hue_to_rgb(h: f64) -> Rgb {
    let x = h / 60.0 * 255.0;
    Rgb::new(
        clamp_channel((x - 765.0).abs() - 255.0),
        clamp_channel(510.0 - (x - 510.0).abs()),
        clamp_channel(510.0 - (x - 1020.0).abs()),
    )
}

/// Rainbow sample at `position` along a hue strip `width` units wide.
///
/// The strip is split into six equal sixths; within each one a single channel
/// ramps linearly while the other two sit at 0 or 255. Agrees with
/// `hsv_to_rgb(Hsv::new(position / width * 360.0, 1.0, 1.0))` to within one
/// step per channel. Positions outside the strip wrap around.
pub fn calculate_line_color(position: f64, width: f64) -> Rgb {
    let percent = if width > 0.0 && width.is_finite() && position.is_finite() {
        (position / width).rem_euclid(1.0)
    } else {
        0.0
    };
    let scaled = percent * 6.0;
    let sector = (scaled.floor() as usize).min(5);
    let t = (scaled - sector as f64).clamp(0.0, 1.0);

    let (r, g, b) = match sector {
        0 => (1.0, t, 0.0),
        1 => (1.0 - t, 1.0, 0.0),
        2 => (0.0, 1.0, t),
        3 => (0.0, 1.0 - t, 1.0),
        4 => (t, 0.0, 1.0),
        _ => (1.0, 0.0, 1.0 - t),
    };
    Rgb::new(unit_to_channel(r), unit_to_channel(g), unit_to_channel(b))
}

/// HSL → HSV. Saturations and lightness/value in 0.0–1.0; hue passes through.
fn hsl_to_hsv(hsl: Hsl) -> Hsv {
    let s_hsl = clamp_unit(hsl.s);
    let l = clamp_unit(hsl.l);
    let v = l + s_hsl * l.min(1.0 - l);
    let s_hsv = if v == 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };
    Hsv::new(hsl.h, s_hsv, v)
}

/// HSV → HSL. Saturations and lightness/value in 0.0–1.0; hue passes through.
fn hsv_to_hsl(hsv: Hsv) -> Hsl {
    let l = hsv.v * (1.0 - hsv.s / 2.0);
    let s_hsl = if l == 0.0 || l == 1.0 {
        0.0
    } else {
        (hsv.v - l) / l.min(1.0 - l)
    };
    Hsl::new(hsv.h, s_hsl, l)
}

/// RGB → HSL. Gray input yields `h = 0, s = 0`.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    hsv_to_hsl(rgb_to_hsv(rgb))
}

/// HSL → RGB, with the same clamping and hue wrapping as [`hsv_to_rgb`].
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    hsv_to_rgb(hsl_to_hsv(hsl))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_to_hex_pads_and_uppercases() {
        assert_eq!(component_to_hex(0), "00");
        assert_eq!(component_to_hex(10), "0A");
        assert_eq!(component_to_hex(171), "AB");
        assert_eq!(component_to_hex(255), "FF");
    }

    #[test]
    fn rgb_to_hex_ignores_alpha() {
        assert_eq!(rgb_to_hex(Rgb::with_alpha(255, 136, 0, 0.1)), "#FF8800");
    }

    #[test]
    fn hex_to_rgb_decodes_both_lengths() {
        assert_eq!(hex_to_rgb("#FF8800"), Rgb::new(255, 136, 0));
        assert_eq!(hex_to_rgb("#f80"), Rgb::new(255, 136, 0));
        assert_eq!(hex_to_rgb("0080ff"), Rgb::new(0, 128, 255));
    }

    #[test]
    fn hex_to_rgb_is_permissive_about_garbage() {
        assert_eq!(hex_to_rgb("#zzz"), Rgb::new(0, 0, 0));
        assert_eq!(hex_to_rgb(""), Rgb::new(0, 0, 0));
    }

    #[test]
    fn rgb_to_hsv_primaries() {
        assert_eq!(rgb_to_hsv(Rgb::new(255, 0, 0)), Hsv::new(0.0, 1.0, 1.0));
        assert_eq!(rgb_to_hsv(Rgb::new(0, 255, 0)), Hsv::new(120.0, 1.0, 1.0));
        assert_eq!(rgb_to_hsv(Rgb::new(0, 0, 255)), Hsv::new(240.0, 1.0, 1.0));
        let magenta_red = rgb_to_hsv(Rgb::new(255, 0, 128));
        assert!(magenta_red.h > 300.0 && magenta_red.h < 360.0);
    }

    #[test]
    fn gray_has_no_hue_or_saturation() {
        let gray = Rgb::new(10, 10, 10);
        assert_eq!(rgb_to_hue(gray), 0.0);
        let hsv = rgb_to_hsv(gray);
        assert_eq!(hsv.h, 0.0);
        assert_eq!(hsv.s, 0.0);
        assert_eq!(rgb_to_hsv(Rgb::new(0, 0, 0)), Hsv::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn hsv_to_rgb_clamps_and_wraps() {
        assert_eq!(hsv_to_rgb(Hsv::new(-120.0, 1.0, 1.0)), Rgb::new(0, 0, 255));
        assert_eq!(hsv_to_rgb(Hsv::new(480.0, 1.0, 1.0)), Rgb::new(0, 255, 0));
        assert_eq!(hsv_to_rgb(Hsv::new(360.0, 1.0, 1.0)), Rgb::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(Hsv::new(0.0, 2.0, 5.0)), Rgb::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(Hsv::new(0.0, -1.0, 0.5)), Rgb::new(128, 128, 128));
        assert_eq!(hsv_to_rgb(Hsv::new(f64::NAN, 1.0, 1.0)), Rgb::new(255, 0, 0));
    }

    #[test]
    fn rgb_to_hue_covers_every_branch() {
        assert_eq!(rgb_to_hue(Rgb::new(255, 128, 0)), 60.0 * 128.0 / 255.0);
        assert_eq!(rgb_to_hue(Rgb::new(255, 0, 255)), 300.0);
        assert_eq!(rgb_to_hue(Rgb::new(0, 255, 0)), 120.0);
        assert_eq!(rgb_to_hue(Rgb::new(0, 0, 255)), 240.0);
    }

    #[test]
    fn hue_to_rgb_hits_the_rainbow_corners() {
        assert_eq!(hue_to_rgb(0.0), Rgb::new(255, 0, 0));
        assert_eq!(hue_to_rgb(60.0), Rgb::new(255, 255, 0));
        assert_eq!(hue_to_rgb(120.0), Rgb::new(0, 255, 0));
        assert_eq!(hue_to_rgb(180.0), Rgb::new(0, 255, 255));
        assert_eq!(hue_to_rgb(240.0), Rgb::new(0, 0, 255));
        assert_eq!(hue_to_rgb(300.0), Rgb::new(255, 0, 255));
        assert_eq!(hue_to_rgb(30.0), Rgb::new(255, 128, 0));
    }

    #[test]
    fn calculate_line_color_sixths() {
        let w = 600.0;
        assert_eq!(calculate_line_color(0.0, w), Rgb::new(255, 0, 0));
        assert_eq!(calculate_line_color(100.0, w), Rgb::new(255, 255, 0));
        assert_eq!(calculate_line_color(200.0, w), Rgb::new(0, 255, 0));
        assert_eq!(calculate_line_color(300.0, w), Rgb::new(0, 255, 255));
        assert_eq!(calculate_line_color(400.0, w), Rgb::new(0, 0, 255));
        assert_eq!(calculate_line_color(500.0, w), Rgb::new(255, 0, 255));
        assert_eq!(calculate_line_color(600.0, w), Rgb::new(255, 0, 0));
        assert_eq!(calculate_line_color(50.0, w), Rgb::new(255, 128, 0));
    }

    #[test]
    fn calculate_line_color_degenerate_width() {
        assert_eq!(calculate_line_color(10.0, 0.0), Rgb::new(255, 0, 0));
        assert_eq!(calculate_line_color(10.0, -5.0), Rgb::new(255, 0, 0));
        assert_eq!(calculate_line_color(f64::NAN, 10.0), Rgb::new(255, 0, 0));
    }

    #[test]
    fn hsl_known_values() {
        let hsl = rgb_to_hsl(Rgb::new(255, 0, 0));
        assert_eq!((hsl.h, hsl.s, hsl.l), (0.0, 1.0, 0.5));
        assert_eq!(hsl_to_rgb(Hsl::new(120.0, 1.0, 0.25)), Rgb::new(0, 128, 0));
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 0.0, 1.0)), Rgb::new(255, 255, 255));
        assert_eq!(hsl_to_rgb(Hsl::new(-60.0, 1.0, 0.5)), Rgb::new(255, 0, 255));
        let white = rgb_to_hsl(Rgb::new(255, 255, 255));
        assert_eq!((white.s, white.l), (0.0, 1.0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn any_rgb() -> impl Strategy<Value = Rgb> {
            (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
        }

        proptest! {
            #[test]
            fn hex_round_trip_is_exact(c in any_rgb()) {
                prop_assert_eq!(hex_to_rgb(&rgb_to_hex(c)), c);
            }

            #[test]
            fn hsv_round_trip_within_one(c in any_rgb()) {
                let back = hsv_to_rgb(rgb_to_hsv(c));
                prop_assert!(back.max_channel_delta(&c) <= 1, "{:?} -> {:?}", c, back);
            }

            #[test]
            fn hsl_round_trip_within_one(c in any_rgb()) {
                let back = hsl_to_rgb(rgb_to_hsl(c));
                prop_assert!(back.max_channel_delta(&c) <= 1, "{:?} -> {:?}", c, back);
            }

            #[test]
            fn line_color_matches_hsv(h in 0.0f64..360.0, width in 1e-3f64..1e5) {
                let line = calculate_line_color(h / 360.0 * width, width);
                let hsv = hsv_to_rgb(Hsv::new(h, 1.0, 1.0));
                prop_assert!(line.max_channel_delta(&hsv) <= 1, "h={} w={}: {:?} vs {:?}", h, width, line, hsv);
            }

            #[test]
            fn hue_to_rgb_matches_hsv(h in 0.0f64..360.0) {
                let tri = hue_to_rgb(h);
                let hsv = hsv_to_rgb(Hsv::new(h, 1.0, 1.0));
                prop_assert!(tri.max_channel_delta(&hsv) <= 1, "h={}: {:?} vs {:?}", h, tri, hsv);
            }

            #[test]
            fn rgb_to_hue_agrees_with_hsv(c in any_rgb()) {
                let direct = rgb_to_hue(c);
                let via_hsv = rgb_to_hsv(c).h;
                prop_assert!((0.0..360.0).contains(&direct));
                prop_assert!((direct - via_hsv).abs() < 1e-9 || (direct - via_hsv).abs() > 359.999);
            }
        }
    }
}
