//! Pixel filter WASM bindings.

use crate::error::to_js_error;
use crate::types::JsFrame;
use snapframe_core::filter::{apply_filter_in_place, FilterKind};
use wasm_bindgen::prelude::*;

/// Apply a filter, and optionally a horizontal mirror, to a frame.
///
/// # Arguments
/// * `image` - Source frame (RGBA)
/// * `filter` - `"none"`, `"grayscale"`, `"sepia"`, `"vintage"` or `"custom-js"`
/// * `mirror` - Mirror each row left-to-right
///
/// # Returns
/// New JsFrame with the filter stamped on; alpha is unchanged.
///
/// # Example (TypeScript)
/// ```typescript
/// const data = ctx.getImageData(0, 0, canvas.width, canvas.height);
/// const frame = new JsFrame(data.width, data.height, new Uint8Array(data.data.buffer));
/// const sepia = apply_filter(frame, "sepia", false);
/// ctx.putImageData(new ImageData(sepia.image_data(), sepia.width, sepia.height), 0, 0);
/// ```
#[wasm_bindgen]
pub fn apply_filter(image: &JsFrame, filter: &str, mirror: bool) -> Result<JsFrame, JsValue> {
    let filter: FilterKind = filter.parse().map_err(to_js_error)?;
    let mut frame = image.to_frame();
    apply_filter_in_place(&mut frame, filter, mirror).map_err(to_js_error)?;
    Ok(JsFrame::from_frame(frame))
}

/// Filter identifiers offered by the capture screen, in menu order.
#[wasm_bindgen]
pub fn supported_filters() -> Vec<String> {
    FilterKind::ALL.iter().map(|f| f.as_str().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_grayscale() {
        let image = JsFrame::new(1, 1, vec![100, 150, 200, 42]);
        let result = apply_filter(&image, "grayscale", false).unwrap();
        assert_eq!(result.pixels(), vec![140, 140, 140, 42]);
    }

    #[test]
    fn test_apply_custom_js_inverts() {
        let image = JsFrame::new(1, 1, vec![0, 100, 255, 255]);
        let result = apply_filter(&image, "custom-js", false).unwrap();
        assert_eq!(result.pixels(), vec![255, 155, 0, 255]);
    }

    #[test]
    fn test_apply_none_with_mirror() {
        let image = JsFrame::new(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        let result = apply_filter(&image, "none", true).unwrap();
        assert_eq!(result.pixels(), vec![5, 6, 7, 8, 1, 2, 3, 4]);
    }

    #[test]
    fn test_dimensions_preserved() {
        let image = JsFrame::new(6, 3, vec![90u8; 6 * 3 * 4]);
        let result = apply_filter(&image, "vintage", true).unwrap();
        assert_eq!(result.width(), 6);
        assert_eq!(result.height(), 3);
        assert_eq!(result.byte_length(), 72);
    }

    #[test]
    fn test_supported_filters() {
        assert_eq!(
            supported_filters(),
            vec!["none", "grayscale", "sepia", "vintage", "custom-js"]
        );
    }
}

/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_unknown_filter() {
        let image = JsFrame::new(1, 1, vec![0, 0, 0, 255]);
        assert!(apply_filter(&image, "blur", false).is_err());
    }

    #[wasm_bindgen_test]
    fn test_invalid_frame() {
        let image = JsFrame::new(2, 2, vec![0u8; 15]);
        assert!(apply_filter(&image, "sepia", false).is_err());
    }
}
