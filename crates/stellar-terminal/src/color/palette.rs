//! The fixed part of the 256-color palette (indices 16-255).
//!
//! Indices 0-15 come from the theme and are resolved by
//! [`ColorResolver`](super::ColorResolver).

use stellar_common::Rgb;

/// Step between adjacent 6x6x6 cube levels.
pub const CUBE_STEP: u8 = 51;

pub const CUBE_START: u8 = 16;
pub const GRAY_START: u8 = 232;

/// Resolve a cube index (16-231) to RGB.
///
/// `n - 16` is decomposed base-6 into red, green and blue levels, each
/// scaled by [`CUBE_STEP`]. Indices outside the cube are clamped into it.
pub fn cube_to_rgb(idx: u8) -> Rgb {
    let i = idx.clamp(CUBE_START, GRAY_START - 1) - CUBE_START;
    let r = i / 36;
    let g = (i / 6) % 6;
    let b = i % 6;
    Rgb::new(r * CUBE_STEP, g * CUBE_STEP, b * CUBE_STEP)
}

/// Resolve a grayscale index (232-255) to RGB.
///
/// 24 steps from 8 to 248 inclusive. Indices below the ramp are clamped.
///
/// The usual `8 + 10 * (n - 232)` ramp stops at 238 for index 255. This
/// one is stretched so 255 reaches 248; the two agree for the first three
/// steps and drift apart by up to 10 mid-ramp (250 is 195 here, 188
/// there).
pub fn grayscale_to_rgb(idx: u8) -> Rgb {
    let step = u16::from(idx.max(GRAY_START) - GRAY_START);
    // 0..=23 maps onto 8..=248; the result always fits in u8.
    let v = 8 + step * 240 / 23;
    Rgb::gray(v as u8)
}

// =============================================================================
// TESTS
// =============================================================================
