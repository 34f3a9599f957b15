//! Fallback values and rasterizer defaults.

/// Canonical form substituted for anything that does not parse.
pub const FALLBACK_HEXA: &str = "#000000FF";

/// Alpha byte used when the input carries none.
pub const OPAQUE_ALPHA: u8 = 0xFF;

/// Light checkerboard square (alpha backgrounds)
pub const CHECKER_LIGHT: (u8, u8, u8) = (255, 255, 255);

/// Dark checkerboard square (alpha backgrounds)
pub const CHECKER_DARK: (u8, u8, u8) = (204, 204, 204);

/// Checkerboard cell size in pixels
pub const CHECKER_CELL: u32 = 5;
