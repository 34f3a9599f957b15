//! Gradient rasterizers for picker controls.
//!
//! Each function fills an RGBA8 buffer (row-major, 4 bytes per pixel) that a
//! widget can upload as an image and scale, rather than painting gradients
//! per frame. Zero-sized requests yield an empty buffer.

use crate::constants;
use crate::math;
use crate::model::{Hsv, Rgb};

fn buffer(width: u32, height: u32) -> Vec<u8> {
    vec![0u8; width as usize * height as usize * 4]
}

fn put(buf: &mut [u8], width: u32, px: u32, py: u32, rgba: [u8; 4]) {
    let offset = (py as usize * width as usize + px as usize) * 4;
    buf[offset..offset + 4].copy_from_slice(&rgba);
}

/// Fraction of the way across `len` pixels at pixel `i` (0 at the first, 1 at the last).
fn ramp(i: u32, len: u32) -> f64 {
    f64::from(i) / f64::from(len.saturating_sub(1).max(1))
}

/// Horizontal rainbow for the hue slider, red at both ends.
///
/// Columns are sampled at their centers with [`crate::calculate_line_color`].
pub fn hue_strip(width: u32, height: u32) -> Vec<u8> {
    let mut buf = buffer(width, height);
    for px in 0..width {
        let c = math::calculate_line_color(f64::from(px) + 0.5, f64::from(width));
        for py in 0..height {
            put(&mut buf, width, px, py, [c.r, c.g, c.b, 255]);
        }
    }
    buf
}

/// Saturation/value square for a fixed hue.
///
/// Saturation grows left to right, value falls top to bottom, so the top-right
/// corner is the pure hue and the bottom row is black.
pub fn saturation_value_area(hue: f64, width: u32, height: u32) -> Vec<u8> {
    let mut buf = buffer(width, height);
    for py in 0..height {
        let v = 1.0 - ramp(py, height);
        for px in 0..width {
            let c = math::hsv_to_rgb(Hsv::new(hue, ramp(px, width), v));
            put(&mut buf, width, px, py, [c.r, c.g, c.b, 255]);
        }
    }
    buf
}

/// Horizontal gradient: `hsv` at full brightness on the left → black on the right.
pub fn brightness_strip(hsv: Hsv, width: u32, height: u32) -> Vec<u8> {
    let mut buf = buffer(width, height);
    for px in 0..width {
        let c = math::hsv_to_rgb(Hsv::new(hsv.h, hsv.s, 1.0 - ramp(px, width)));
        for py in 0..height {
            put(&mut buf, width, px, py, [c.r, c.g, c.b, 255]);
        }
    }
    buf
}

/// Linear blend of two channels, `t` = 0 gives `under`.
fn blend(under: u8, over: u8, t: f64) -> u8 {
    (f64::from(under) * (1.0 - t) + f64::from(over) * t).round() as u8
}

/// Whether the checkerboard cell containing `(px, py)` is dark.
fn is_dark_cell(px: u32, py: u32, cell: u32) -> bool {
    let cell = cell.max(1);
    (px / cell + py / cell) % 2 == 1
}

/// Alpha slider track: `rgb` fading in from transparent (left) to opaque
/// (right), composited over a light/dark checkerboard of `cell`-pixel squares.
///
/// The result is fully opaque; the checkerboard shows through instead.
pub fn alpha_strip(rgb: Rgb, width: u32, height: u32, cell: u32) -> Vec<u8> {
    let mut buf = buffer(width, height);
    for py in 0..height {
        for px in 0..width {
            let (br, bg, bb) = if is_dark_cell(px, py, cell) {
                constants::CHECKER_DARK
            } else {
                constants::CHECKER_LIGHT
            };
            let t = ramp(px, width);
            put(
                &mut buf,
                width,
                px,
                py,
                [blend(br, rgb.r, t), blend(bg, rgb.g, t), blend(bb, rgb.b, t), 255],
            );
        }
    }
    buf
}

/// [`alpha_strip`] with the default checkerboard cell size.
pub fn default_alpha_strip(rgb: Rgb, width: u32, height: u32) -> Vec<u8> {
    alpha_strip(rgb, width, height, constants::CHECKER_CELL)
}
