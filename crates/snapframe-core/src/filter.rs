//! Pixel filters stamped onto a captured frame.
//!
//! Each filter is a fixed per-pixel transform of R, G and B. Alpha is always
//! passed through. Results are saturated into 0..=255 and truncated toward
//! zero.
//!
//! ## Filters
//! - `None` - identity
//! - `Grayscale` - BT.601 luma in all three channels
//! - `Sepia` - classic sepia tone matrix
//! - `Vintage` - faded tone matrix followed by a 1.2x contrast boost around 128
//! - `Invert` - photographic negative
//!
//! Matrix weights are kept in thousandths so the fractional part is dropped
//! exactly; 8-bit inputs never hit floating-point rounding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CaptureError;
use crate::frame::{Frame, CHANNELS};
use crate::luminance::luma_u8;
use crate::transform::mirror_row;

/// Filter selectable on the capture screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// No color change.
    #[default]
    None,
    /// Luma-weighted grayscale.
    Grayscale,
    /// Warm brown tone.
    Sepia,
    /// Faded, slightly warm tone with extra contrast.
    Vintage,
    /// Negative. The UI identifies it as `"custom-js"`.
    #[serde(rename = "custom-js", alias = "invert")]
    Invert,
}

impl FilterKind {
    /// Filters offered by the capture screen, in menu order.
    pub const ALL: [FilterKind; 5] = [
        FilterKind::None,
        FilterKind::Grayscale,
        FilterKind::Sepia,
        FilterKind::Vintage,
        FilterKind::Invert,
    ];

    /// Identifier used by the UI layer.
    pub fn as_str(self) -> &'static str {
        match self {
            FilterKind::None => "none",
            FilterKind::Grayscale => "grayscale",
            FilterKind::Sepia => "sepia",
            FilterKind::Vintage => "vintage",
            FilterKind::Invert => "custom-js",
        }
    }

    /// Whether applying this filter leaves pixels unchanged.
    #[inline]
    pub fn is_identity(self) -> bool {
        self == FilterKind::None
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKind {
    type Err = CaptureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "none" => Ok(FilterKind::None),
            "grayscale" => Ok(FilterKind::Grayscale),
            "sepia" => Ok(FilterKind::Sepia),
            "vintage" => Ok(FilterKind::Vintage),
            "custom-js" | "invert" => Ok(FilterKind::Invert),
            _ => Err(CaptureError::UnknownFilter(s.to_string())),
        }
    }
}

/// 3x3 RGB matrix with weights in thousandths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColorMatrix([[i32; 3]; 3]);

impl ColorMatrix {
    /// Weighted sums in thousandths, before any saturation.
    #[inline]
    fn weigh(&self, [r, g, b]: [u8; 3]) -> [i32; 3] {
        let (r, g, b) = (r as i32, g as i32, b as i32);
        self.0.map(|[wr, wg, wb]| wr * r + wg * g + wb * b)
    }

    #[inline]
    fn apply(&self, rgb: [u8; 3]) -> [u8; 3] {
        self.weigh(rgb).map(saturate_milli)
    }
}

const SEPIA: ColorMatrix = ColorMatrix([
    [393, 769, 189],
    [349, 686, 168],
    [272, 534, 131],
]);

const VINTAGE_TONE: ColorMatrix = ColorMatrix([
    [900, 50, 50],
    [50, 800, 50],
    [50, 50, 700],
]);

/// Vintage contrast factor (1.2) in thousandths.
const VINTAGE_CONTRAST: i32 = 1200;

/// Value left unchanged by the contrast boost.
const CONTRAST_PIVOT: i32 = 128;

/// Saturate a value in thousandths into 0..=255 and drop the fraction.
#[inline]
fn saturate_milli(value: i32) -> u8 {
    (value.clamp(0, 255_000) / 1000) as u8
}

/// Saturate a value in millionths into 0..=255 and drop the fraction.
#[inline]
fn saturate_micro(value: i32) -> u8 {
    (value.clamp(0, 255_000_000) / 1_000_000) as u8
}

/// Contrast around `CONTRAST_PIVOT`: `factor * (x - 128) + 128`, with `x`
/// and `factor` in thousandths.
#[inline]
fn contrast_milli(x_milli: i32, factor_milli: i32) -> u8 {
    saturate_micro(
        factor_milli * (x_milli - CONTRAST_PIVOT * 1000) + CONTRAST_PIVOT * 1_000_000,
    )
}

/// Apply `filter` to one RGB triple.
#[inline]
pub fn filter_pixel(filter: FilterKind, rgb: [u8; 3]) -> [u8; 3] {
    match filter {
        FilterKind::None => rgb,
        FilterKind::Grayscale => {
            let [r, g, b] = rgb;
            let l = luma_u8(r, g, b);
            [l, l, l]
        }
        FilterKind::Sepia => SEPIA.apply(rgb),
        FilterKind::Vintage => {
            // Stage one stays unrounded; only the boosted value saturates
            VINTAGE_TONE
                .weigh(rgb)
                .map(|c| contrast_milli(c, VINTAGE_CONTRAST))
        }
        FilterKind::Invert => rgb.map(|c| 255 - c),
    }
}

/// Apply a filter, and optionally a horizontal mirror, to a copy of `frame`.
///
/// # Arguments
/// * `frame` - Source frame (RGBA)
/// * `filter` - Filter to stamp onto every pixel
/// * `mirror` - Mirror each row left-to-right
///
/// # Errors
/// `InvalidFrame` (or `InvalidDimensions`) if the buffer doesn't match the
/// dimensions. No output is produced.
///
/// # Example
/// ```ignore
/// let pixels = vec![100, 150, 200, 255];
/// let frame = Frame::new(1, 1, pixels)?;
/// let gray = apply_filter(&frame, FilterKind::Grayscale, false)?;
/// assert_eq!(gray.pixels, vec![140, 140, 140, 255]);
/// ```
pub fn apply_filter(frame: &Frame, filter: FilterKind, mirror: bool) -> Result<Frame, CaptureError> {
    frame.validate()?;
    let mut output = frame.clone();
    apply_filter_in_place(&mut output, filter, mirror)?;
    Ok(output)
}

/// Apply a filter, and optionally a horizontal mirror, in place.
///
/// The frame is validated before any byte is written, so a failed call leaves
/// it untouched.
pub fn apply_filter_in_place(
    frame: &mut Frame,
    filter: FilterKind,
    mirror: bool,
) -> Result<(), CaptureError> {
    frame.validate()?;
    if filter.is_identity() && !mirror {
        return Ok(());
    }

    let stride = frame.stride();
    // Rows are independent; the filter never looks at neighbouring pixels
    for row in frame.pixels.chunks_exact_mut(stride) {
        if !filter.is_identity() {
            for px in row.chunks_exact_mut(CHANNELS) {
                let [r, g, b] = filter_pixel(filter, [px[0], px[1], px[2]]);
                px[0] = r;
                px[1] = g;
                px[2] = b;
            }
        }
        if mirror {
            mirror_row(row);
        }
    }
    Ok(())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
