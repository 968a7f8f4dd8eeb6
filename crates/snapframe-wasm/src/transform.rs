//! WASM bindings for crop planning and mirroring.
//!
//! The page can either ask for the crop rectangle and let the canvas do the
//! copy (`drawImage` with a source rect), or hand the whole frame to
//! `extract_crop` and keep the copy inside WASM.

use crate::error::to_js_error;
use crate::types::{JsCropRect, JsFrame};
use snapframe_core::transform::{self, AspectRatio};
use wasm_bindgen::prelude::*;

/// Plan the centered crop of `ratio` for a source frame.
///
/// # Arguments
///
/// * `source_width` - Video width in pixels (`video.videoWidth`)
/// * `source_height` - Video height in pixels (`video.videoHeight`)
/// * `ratio` - Ratio identifier such as `"4-5"`, `"1-1"` or `"9-16"`
///
/// # Errors
///
/// Throws if the ratio identifier is malformed or has a zero component, or
/// if either source dimension is zero.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const rect = plan_crop(video.videoWidth, video.videoHeight, "4-5");
/// canvas.width = rect.width;
/// canvas.height = rect.height;
/// ctx.drawImage(video, rect.x, rect.y, rect.width, rect.height, 0, 0, rect.width, rect.height);
/// ```
#[wasm_bindgen]
pub fn plan_crop(source_width: u32, source_height: u32, ratio: &str) -> Result<JsCropRect, JsValue> {
    let ratio: AspectRatio = ratio.parse().map_err(to_js_error)?;
    transform::plan_crop(source_width, source_height, ratio)
        .map(JsCropRect::from)
        .map_err(to_js_error)
}

/// Copy `rect` out of `image`, mirroring each row if `mirror` is set.
///
/// # Errors
///
/// Throws if the frame buffer doesn't match its dimensions or the rectangle
/// leaves the frame.
#[wasm_bindgen]
pub fn extract_crop(image: &JsFrame, rect: &JsCropRect, mirror: bool) -> Result<JsFrame, JsValue> {
    let src = image.to_frame();
    transform::extract_crop(&src, (*rect).into(), mirror)
        .map(JsFrame::from_frame)
        .map_err(to_js_error)
}

/// Mirror a frame left-to-right.
#[wasm_bindgen]
pub fn mirror_horizontal(image: &JsFrame) -> Result<JsFrame, JsValue> {
    let mut frame = image.to_frame();
    transform::mirror_horizontal(&mut frame).map_err(to_js_error)?;
    Ok(JsFrame::from_frame(frame))
}

/// Ratio identifiers offered by the capture screen, in menu order.
#[wasm_bindgen]
pub fn supported_ratios() -> Vec<String> {
    AspectRatio::PRESETS.iter().map(|r| r.to_string()).collect()
}


/// WASM-specific tests that require JsValue.
///
/// These tests exercise the error paths, which build JS `Error` objects and
/// can only run on wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_plan_crop_unknown_ratio() {
        assert!(plan_crop(1920, 1080, "wide").is_err());
    }

    #[wasm_bindgen_test]
    fn test_plan_crop_zero_ratio() {
        assert!(plan_crop(1920, 1080, "0-5").is_err());
    }

    #[wasm_bindgen_test]
    fn test_plan_crop_zero_dimensions() {
        assert!(plan_crop(0, 1080, "1-1").is_err());
    }

    #[wasm_bindgen_test]
    fn test_extract_crop_out_of_bounds() {
        let img = JsFrame::new(4, 4, vec![0u8; 64]);
        assert!(extract_crop(&img, &JsCropRect::new(2, 2, 4, 4), false).is_err());
    }

    #[wasm_bindgen_test]
    fn test_mirror_invalid_frame() {
        let img = JsFrame::new(4, 4, vec![0u8; 10]);
        assert!(mirror_horizontal(&img).is_err());
    }
}
