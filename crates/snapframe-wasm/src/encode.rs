//! Image encoding WASM bindings.
//!
//! This module exposes the snapframe-core PNG encoder to JavaScript, so the
//! captured still can be downloaded without recompressing it.
//!
//! # Functions
//!
//! - [`encode_png`] - Encode RGBA pixel data to PNG bytes
//! - [`encode_png_from_image`] - Encode a JsFrame to PNG bytes
//!
//! # Example
//!
//! ```typescript
//! import { capture, encode_png_from_image, export_filename } from '@snapframe/wasm';
//!
//! const still = capture(frame, settings);
//! const png = encode_png_from_image(still);
//!
//! const link = document.createElement('a');
//! link.href = URL.createObjectURL(new Blob([png], { type: 'image/png' }));
//! link.download = export_filename(settings.filter);
//! link.click();
//! ```

use crate::error::to_js_error;
use crate::types::JsFrame;
use snapframe_core::encode;
use wasm_bindgen::prelude::*;

/// Encode RGBA pixel data to PNG bytes.
///
/// # Arguments
///
/// * `pixels` - RGBA pixel data as a `Uint8Array` (4 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Errors
///
/// Returns an error if:
/// - The pixel data length doesn't match width * height * 4
/// - Width or height is zero
/// - Encoding fails internally
#[wasm_bindgen]
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    encode::encode_png_rgba(pixels, width, height).map_err(to_js_error)
}

/// Encode a JsFrame to PNG bytes.
#[wasm_bindgen]
pub fn encode_png_from_image(image: &JsFrame) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(&image.to_frame()).map_err(to_js_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapframe_core::encode::PNG_SIGNATURE;

    #[test]
    fn test_encode_png_from_image_creates_valid_png() {
        let img = JsFrame::new(10, 10, vec![128u8; 10 * 10 * 4]);
        let png = encode_png_from_image(&img).unwrap();
        assert_eq!(&png[0..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_encode_png_raw_pixels() {
        let pixels = vec![255u8, 0, 0, 255, 0, 255, 0, 128];
        let png = encode_png(&pixels, 2, 1).unwrap();
        assert_eq!(&png[0..8], &PNG_SIGNATURE);
    }
}
