//! Aspect-fit crop planning and region extraction.
//!
//! `plan_crop` finds the largest rectangle of a target aspect ratio that fits
//! centered inside the source frame. `extract_crop` copies that rectangle out
//! into a new frame, optionally mirroring each row during the copy.
//!
//! # Rounding
//!
//! The free dimension is truncated toward zero. All arithmetic is done on
//! integers, so e.g. `1080 * 4 / 5` is exactly 864 with no floating-point
//! drift.
//!
//! # Example
//!
//! ```ignore
//! // Center a 4:5 portrait crop in a 1080p landscape frame
//! let rect = plan_crop(1920, 1080, AspectRatio::PORTRAIT)?;
//! assert_eq!(rect, CropRect { x: 528, y: 0, width: 864, height: 1080 });
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CaptureError;
use crate::frame::{Frame, CHANNELS};
use crate::transform::ratio::AspectRatio;

/// A pixel-aligned rectangle inside a source frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CropRect {
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl CropRect {
    /// Rectangle covering a whole `width` x `height` frame.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// Whether the rectangle lies entirely within a `width` x `height` frame.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.x as u64 + self.width as u64 <= width as u64
            && self.y as u64 + self.height as u64 <= height as u64
    }

    /// Width / height of the rectangle.
    pub fn ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

/// Plan the centered crop of `ratio` for a `source_width` x `source_height` frame.
///
/// # Arguments
///
/// * `source_width` - Width of the captured frame in pixels
/// * `source_height` - Height of the captured frame in pixels
/// * `ratio` - Target width:height ratio
///
/// # Returns
///
/// The largest centered `CropRect` of the requested ratio. When the source
/// is relatively wider than the target the full height is kept and the sides
/// are trimmed; otherwise the full width is kept and top/bottom are trimmed.
///
/// # Errors
///
/// * `InvalidDimensions` if either source dimension is zero
///
/// Zero ratio components are rejected earlier, by `AspectRatio::new` and
/// its parser, with `InvalidRatio`.
pub fn plan_crop(
    source_width: u32,
    source_height: u32,
    ratio: AspectRatio,
) -> Result<CropRect, CaptureError> {
    if source_width == 0 || source_height == 0 {
        return Err(CaptureError::InvalidDimensions {
            width: source_width,
            height: source_height,
        });
    }
    let w = source_width as u64;
    let h = source_height as u64;
    let num = ratio.numerator() as u64;
    let den = ratio.denominator() as u64;

    // w / h > num / den, cross-multiplied
    let rect = if w * den > h * num {
        let crop_w = (h * num / den).clamp(1, w) as u32;
        CropRect {
            x: (source_width - crop_w) / 2,
            y: 0,
            width: crop_w,
            height: source_height,
        }
    } else {
        let crop_h = (w * den / num).clamp(1, h) as u32;
        CropRect {
            x: 0,
            y: (source_height - crop_h) / 2,
            width: source_width,
            height: crop_h,
        }
    };

    debug_assert!(rect.fits_within(source_width, source_height));
    Ok(rect)
}

/// `plan_crop` for a raw `numerator:denominator` pair.
///
/// Fails with `InvalidRatio` if either component is zero, before looking at
/// the source dimensions.
pub fn plan_crop_with(
    source_width: u32,
    source_height: u32,
    numerator: u32,
    denominator: u32,
) -> Result<CropRect, CaptureError> {
    let ratio = AspectRatio::new(numerator, denominator)?;
    plan_crop(source_width, source_height, ratio)
}

/// Copy `rect` out of `frame` into a new frame.
///
/// When `mirror` is set, each output row is the source row reversed: output
/// column `x` takes source column `rect.x + rect.width - 1 - x`.
///
/// # Errors
///
/// * `InvalidFrame` / `InvalidDimensions` if `frame` breaks the buffer invariant
/// * `InvalidDimensions` if `rect` is empty
/// * `CropOutOfBounds` if `rect` is not contained in `frame`
pub fn extract_crop(frame: &Frame, rect: CropRect, mirror: bool) -> Result<Frame, CaptureError> {
    frame.validate()?;
    if rect.width == 0 || rect.height == 0 {
        return Err(CaptureError::InvalidDimensions {
            width: rect.width,
            height: rect.height,
        });
    }
    if !rect.fits_within(frame.width, frame.height) {
        return Err(CaptureError::CropOutOfBounds {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            source_width: frame.width,
            source_height: frame.height,
        });
    }

    let src_stride = frame.stride();
    let out_stride = rect.width as usize * CHANNELS;
    let mut output = Vec::with_capacity(out_stride * rect.height as usize);

    // Copy row by row
    for y in 0..rect.height as usize {
        let row_start = (rect.y as usize + y) * src_stride + rect.x as usize * CHANNELS;
        let row = &frame.pixels[row_start..row_start + out_stride];

        if mirror {
            for px in row.chunks_exact(CHANNELS).rev() {
                output.extend_from_slice(px);
            }
        } else {
            output.extend_from_slice(row);
        }
    }

    Ok(Frame {
        width: rect.width,
        height: rect.height,
        pixels: output,
    })
}


// ============================================================================
// Property-Based Tests
// ============================================================================
