//! The RGBA raster shared by every stage of the capture pipeline.

use crate::error::CaptureError;

/// Number of bytes per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// A captured frame with RGBA pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    /// Length must be width * height * 4.
    pub pixels: Vec<u8>,
}

impl Frame {
    /// Create a frame, checking that the buffer matches the dimensions.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, CaptureError> {
        let frame = Self {
            width,
            height,
            pixels,
        };
        frame.validate()?;
        Ok(frame)
    }

    /// Create a frame filled with a single RGBA color.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, CaptureError> {
        let expected = expected_len(width, height);
        let len = usize::try_from(expected)
            .map_err(|_| CaptureError::InvalidFrame { expected, actual: 0 })?;
        let pixels = rgba.iter().copied().cycle().take(len).collect();
        Self::new(width, height, pixels)
    }

    /// Check the buffer/dimension invariant.
    ///
    /// A frame whose byte size does not fit in `usize` can never match its
    /// buffer and is rejected with `InvalidFrame`.
    pub fn validate(&self) -> Result<(), CaptureError> {
        if self.width == 0 || self.height == 0 {
            return Err(CaptureError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        let expected = expected_len(self.width, self.height);
        if !len_matches(self.pixels.len(), expected) {
            return Err(CaptureError::InvalidFrame {
                expected,
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }

    /// Byte length of one row. Only meaningful once `validate` has passed.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// RGBA value at (x, y), or `None` when outside the frame or buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as u64 * self.width as u64 + x as u64) * CHANNELS as u64;
        let idx = usize::try_from(idx).ok()?;
        let px = self.pixels.get(idx..idx.checked_add(CHANNELS)?)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Buffer length required for a `width` x `height` RGBA frame.
///
/// Computed in `u64` and saturated, so it never wraps on 32-bit targets.
#[inline]
pub fn expected_len(width: u32, height: u32) -> u64 {
    (width as u64 * height as u64).saturating_mul(CHANNELS as u64)
}

/// Whether a buffer of `len` bytes has exactly `expected` bytes.
#[inline]
pub(crate) fn len_matches(len: usize, expected: u64) -> bool {
    u64::try_from(len).is_ok_and(|len| len == expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_creation() {
        let frame = Frame::new(100, 50, vec![0u8; 100 * 50 * 4]).unwrap();

        assert_eq!(frame.width, 100);
        assert_eq!(frame.height, 50);
        assert_eq!(frame.pixels.len(), 20000);
        assert_eq!(frame.stride(), 400);
    }

    #[test]
    fn test_frame_rejects_short_buffer() {
        let err = Frame::new(2, 2, vec![0u8; 12]).unwrap_err();
        assert_eq!(
            err,
            CaptureError::InvalidFrame {
                expected: 16,
                actual: 12
            }
        );
    }

    #[test]
    fn test_frame_rejects_partial_row() {
        // One extra byte past the last complete pixel
        let err = Frame::new(2, 2, vec![0u8; 17]).unwrap_err();
        assert!(matches!(err, CaptureError::InvalidFrame { .. }));
    }

    #[test]
    fn test_frame_rejects_zero_dimensions() {
        let err = Frame::new(0, 10, vec![]).unwrap_err();
        assert_eq!(
            err,
            CaptureError::InvalidDimensions {
                width: 0,
                height: 10
            }
        );
    }

    #[test]
    fn test_filled_frame() {
        let frame = Frame::filled(3, 2, [10, 20, 30, 255]).unwrap();
        assert_eq!(frame.pixels.len(), 24);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(frame.pixel(x, y), Some([10, 20, 30, 255]));
            }
        }
    }

    #[test]
    fn test_pixel_out_of_range() {
        let frame = Frame::filled(2, 2, [0, 0, 0, 255]).unwrap();
        assert_eq!(frame.pixel(2, 0), None);
        assert_eq!(frame.pixel(0, 2), None);
    }

    #[test]
    fn test_expected_len_does_not_wrap() {
        // 65536 * 65536 * 4 = 2^34, which a 32-bit usize would wrap to 0
        assert_eq!(expected_len(65536, 65536), 1u64 << 34);
        assert_eq!(expected_len(u32::MAX, u32::MAX), u64::MAX);
    }

    #[test]
    fn test_huge_dimensions_with_empty_buffer_rejected() {
        let err = Frame::new(65536, 65536, vec![]).unwrap_err();
        assert_eq!(
            err,
            CaptureError::InvalidFrame {
                expected: 1u64 << 34,
                actual: 0
            }
        );

        let err = Frame::new(u32::MAX, u32::MAX, vec![]).unwrap_err();
        assert!(matches!(err, CaptureError::InvalidFrame { actual: 0, .. }));
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn test_filled_rejects_unaddressable_size() {
        let err = Frame::filled(65536, 65536, [0, 0, 0, 255]).unwrap_err();
        assert!(matches!(err, CaptureError::InvalidFrame { .. }));
    }
}
