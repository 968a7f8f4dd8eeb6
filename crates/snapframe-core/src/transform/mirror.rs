//! Horizontal mirroring.
//!
//! Front-facing cameras preview as a mirror image. Mirroring swaps pixel
//! `x` with pixel `width - 1 - x` in every row; dimensions never change and
//! applying it twice restores the original frame.

use crate::error::CaptureError;
use crate::frame::{Frame, CHANNELS};

/// Mirror a frame left-to-right in place.
///
/// # Errors
///
/// Fails with `InvalidFrame`/`InvalidDimensions` without touching the buffer
/// if the frame breaks the buffer invariant.
pub fn mirror_horizontal(frame: &mut Frame) -> Result<(), CaptureError> {
    frame.validate()?;
    let stride = frame.stride();
    for row in frame.pixels.chunks_exact_mut(stride) {
        mirror_row(row);
    }
    Ok(())
}

/// Reverse the pixel order of one RGBA row, keeping channel order.
#[inline]
pub(crate) fn mirror_row(row: &mut [u8]) {
    let width = row.len() / CHANNELS;
    for x in 0..width / 2 {
        let (left, right) = row.split_at_mut((width - 1 - x) * CHANNELS);
        left[x * CHANNELS..(x + 1) * CHANNELS].swap_with_slice(&mut right[..CHANNELS]);
    }
}
