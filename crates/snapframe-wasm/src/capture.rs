//! Capture settings and the one-call capture pipeline for JavaScript.
//!
//! The page keeps the selected ratio, filter and mirror flag in a
//! `JsCaptureSettings` (or a plain `{ ratio, filter, mirror }` object) and
//! passes it with every shot. The core keeps no selection state.

use crate::error::to_js_error;
use crate::types::JsFrame;
use snapframe_core::{CaptureSettings, FacingMode, FilterKind};
use wasm_bindgen::prelude::*;

/// Capture settings wrapper for JavaScript
#[wasm_bindgen]
pub struct JsCaptureSettings {
    inner: CaptureSettings,
}

#[wasm_bindgen]
impl JsCaptureSettings {
    /// Create settings with default values (4:5, no filter, not mirrored)
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: CaptureSettings::new(),
        }
    }

    /// Default settings for a camera facing mode (`"user"` or `"environment"`).
    ///
    /// The user-facing camera previews mirrored, so its captures are too.
    pub fn for_facing(facing: JsValue) -> Result<JsCaptureSettings, JsValue> {
        let facing: FacingMode = serde_wasm_bindgen::from_value(facing)
            .map_err(|e| to_js_error(format!("Invalid facing mode: {}", e)))?;
        Ok(Self {
            inner: CaptureSettings::for_facing(facing),
        })
    }

    /// Build settings from a plain `{ ratio, filter, mirror }` object.
    ///
    /// Missing fields keep their defaults.
    pub fn from_object(value: JsValue) -> Result<JsCaptureSettings, JsValue> {
        let inner: CaptureSettings = serde_wasm_bindgen::from_value(value)
            .map_err(|e| to_js_error(format!("Invalid capture settings: {}", e)))?;
        Ok(Self { inner })
    }

    /// Serialize to a plain `{ ratio, filter, mirror }` object.
    pub fn to_object(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(to_js_error)
    }

    /// Get ratio identifier (e.g. `"4-5"`)
    #[wasm_bindgen(getter)]
    pub fn ratio(&self) -> String {
        self.inner.ratio.to_string()
    }

    /// Set ratio from its identifier; throws on unknown identifiers
    pub fn set_ratio(&mut self, value: &str) -> Result<(), JsValue> {
        self.inner.ratio = value.parse().map_err(to_js_error)?;
        Ok(())
    }

    /// Get ratio label for display (e.g. `"4:5"`)
    #[wasm_bindgen(getter)]
    pub fn ratio_label(&self) -> String {
        self.inner.ratio.label()
    }

    /// Get filter identifier
    #[wasm_bindgen(getter)]
    pub fn filter(&self) -> String {
        self.inner.filter.as_str().to_string()
    }

    /// Set filter from its identifier; throws on unknown identifiers
    pub fn set_filter(&mut self, value: &str) -> Result<(), JsValue> {
        self.inner.filter = value.parse().map_err(to_js_error)?;
        Ok(())
    }

    /// Get mirror flag
    #[wasm_bindgen(getter)]
    pub fn mirror(&self) -> bool {
        self.inner.mirror
    }

    /// Set mirror flag
    #[wasm_bindgen(setter)]
    pub fn set_mirror(&mut self, value: bool) {
        self.inner.mirror = value;
    }

    /// Check if all values are at their defaults
    pub fn is_default(&self) -> bool {
        self.inner.is_default()
    }
}

impl Default for JsCaptureSettings {
    fn default() -> Self {
        Self::new()
    }
}

/// Crop, mirror and filter a raw frame in one call.
///
/// # Arguments
/// * `image` - Full video frame (RGBA)
/// * `settings` - Ratio, filter and mirror selection
///
/// # Returns
/// The export-ready still
///
/// # Example (TypeScript)
/// ```typescript
/// const settings = new JsCaptureSettings();
/// settings.set_ratio("1-1");
/// settings.set_filter("vintage");
///
/// const still = capture(frame, settings);
/// const png = encode_png_from_image(still);
/// ```
#[wasm_bindgen]
pub fn capture(image: &JsFrame, settings: &JsCaptureSettings) -> Result<JsFrame, JsValue> {
    let src = image.to_frame();
    snapframe_core::capture(&src, &settings.inner)
        .map(JsFrame::from_frame)
        .map_err(to_js_error)
}

/// Download file name for a still taken with `filter`.
#[wasm_bindgen]
pub fn export_filename(filter: &str) -> Result<String, JsValue> {
    let filter: FilterKind = filter.parse().map_err(to_js_error)?;
    Ok(snapframe_core::export_filename(filter))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn landscape(width: u32, height: u32) -> JsFrame {
        let pixels: Vec<u8> = (0..height)
            .flat_map(|_| (0..width).flat_map(|x| [x as u8, 50, 100, 255]))
            .collect();
        JsFrame::new(width, height, pixels)
    }

    #[test]
    fn test_settings_default() {
        let settings = JsCaptureSettings::new();
        assert!(settings.is_default());
        assert_eq!(settings.ratio(), "4-5");
        assert_eq!(settings.ratio_label(), "4:5");
        assert_eq!(settings.filter(), "none");
        assert!(!settings.mirror());
    }

    #[test]
    fn test_settings_setters() {
        let mut settings = JsCaptureSettings::new();
        settings.set_ratio("9-16").unwrap();
        settings.set_filter("custom-js").unwrap();
        settings.set_mirror(true);

        assert_eq!(settings.ratio(), "9-16");
        assert_eq!(settings.filter(), "custom-js");
        assert!(settings.mirror());
        assert!(!settings.is_default());
    }

    #[test]
    fn test_capture_square_grayscale() {
        let mut settings = JsCaptureSettings::new();
        settings.set_ratio("1-1").unwrap();
        settings.set_filter("grayscale").unwrap();

        let still = capture(&landscape(40, 20), &settings).unwrap();
        assert_eq!(still.width(), 20);
        assert_eq!(still.height(), 20);

        // First column is source column 10: 0.299*10 + 0.587*50 + 0.114*100 = 43.74
        assert_eq!(&still.pixels()[0..4], &[43, 43, 43, 255]);
    }

    #[test]
    fn test_capture_mirrored() {
        let mut settings = JsCaptureSettings::new();
        settings.set_ratio("1-1").unwrap();
        settings.set_mirror(true);

        let still = capture(&landscape(40, 20), &settings).unwrap();
        // Square spans columns 10..30; mirrored, column 0 shows 29
        assert_eq!(still.pixels()[0], 29);
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename("vintage").unwrap(), "minha-foto-filtrada-vintage.png");
        assert_eq!(export_filename("none").unwrap(), "minha-foto-filtrada-none.png");
    }
}
