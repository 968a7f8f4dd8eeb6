//! Snapframe WASM - WebAssembly bindings for Snapframe
//!
//! This crate exposes the snapframe-core capture pipeline to the camera page.
//! The page owns the camera stream, the controls and the download; it hands
//! raw `ImageData` pixels in and gets a cropped, filtered still back.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for frames and crop rectangles
//! - `transform` - Crop planning, region extraction and mirroring
//! - `filter` - Pixel filters
//! - `capture` - Capture settings and the one-call pipeline
//! - `encode` - PNG export
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsFrame, JsCaptureSettings, capture } from '@snapframe/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const data = ctx.getImageData(0, 0, video.videoWidth, video.videoHeight);
//! const frame = new JsFrame(data.width, data.height, new Uint8Array(data.data.buffer));
//! const still = capture(frame, new JsCaptureSettings());
//! console.log(`Captured ${still.width}x${still.height}`);
//! ```

use wasm_bindgen::prelude::*;

mod capture;
mod encode;
mod error;
mod filter;
mod transform;
mod types;

// Re-export public types
pub use capture::{capture, export_filename, JsCaptureSettings};
pub use encode::{encode_png, encode_png_from_image};
pub use filter::{apply_filter, supported_filters};
pub use transform::{extract_crop, mirror_horizontal, plan_crop, supported_ratios};
pub use types::{JsCropRect, JsFrame};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Nothing to set up yet. A panic hook belongs here if
    // console_error_panic_hook is added.
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
