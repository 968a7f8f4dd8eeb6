//! Luma calculation using ITU-R BT.601 coefficients.
//!
//! The weights are stored in thousandths so 8-bit luma can be computed with
//! integer arithmetic and truncated exactly: 0.299R + 0.587G + 0.114B
//! becomes (299R + 587G + 114B) / 1000.

/// BT.601 weight for the red channel, in thousandths.
pub const LUMA_R: u32 = 299;

/// BT.601 weight for the green channel, in thousandths.
pub const LUMA_G: u32 = 587;

/// BT.601 weight for the blue channel, in thousandths.
pub const LUMA_B: u32 = 114;

/// Fixed-point scale of the weights.
pub const LUMA_SCALE: u32 = 1000;

/// Calculate luma from u8 RGB values (0 to 255), truncated toward zero.
///
/// # Arguments
/// * `r` - Red channel value (0-255)
/// * `g` - Green channel value (0-255)
/// * `b` - Blue channel value (0-255)
///
/// # Returns
/// Luma value (0-255)
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    let sum = LUMA_R * r as u32 + LUMA_G * g as u32 + LUMA_B * b as u32;
    // Weights sum to LUMA_SCALE, so the quotient never exceeds 255
    (sum / LUMA_SCALE) as u8
}
