//! WASM-compatible wrapper types for frame data.
//!
//! This module provides JavaScript-friendly types that wrap the core Snapframe
//! types, handling the conversion between Rust and JavaScript representations.

use snapframe_core::{CropRect, Frame};
use wasm_bindgen::prelude::*;
use wasm_bindgen::Clamped;

/// A captured RGBA frame for JavaScript.
///
/// The pixel layout matches `ImageData.data` from a 2D canvas: 4 bytes per
/// pixel, row-major. Construct one straight from `getImageData()`:
///
/// ```typescript
/// const data = ctx.getImageData(0, 0, video.videoWidth, video.videoHeight);
/// const frame = new JsFrame(data.width, data.height, new Uint8Array(data.data.buffer));
/// ```
///
/// The buffer is not validated on construction; every operation that reads
/// it checks the length first and throws on mismatch.
#[wasm_bindgen]
pub struct JsFrame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsFrame {
    /// Create a new JsFrame from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Frame width in pixels
    /// * `height` - Frame height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsFrame {
        JsFrame {
            width,
            height,
            pixels,
        }
    }

    /// Get the frame width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the frame height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Returns RGBA pixel data as Uint8ClampedArray, ready for
    /// `new ImageData(data, width, height)`.
    pub fn image_data(&self) -> Clamped<Vec<u8>> {
        Clamped(self.pixels.clone())
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsFrame {
    /// Wrap a core Frame, taking ownership of its buffer.
    pub(crate) fn from_frame(frame: Frame) -> Self {
        Self {
            width: frame.width,
            height: frame.height,
            pixels: frame.pixels,
        }
    }

    /// Convert back to a core Frame.
    ///
    /// Note: This clones the pixel data.
    pub(crate) fn to_frame(&self) -> Frame {
        Frame {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

/// A crop rectangle in source-frame pixels.
///
/// Hand it to `CanvasRenderingContext2D.drawImage` as the source rect, or to
/// `extract_crop` to copy the region inside WASM.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsCropRect {
    /// Left edge in pixels
    pub x: u32,
    /// Top edge in pixels
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

#[wasm_bindgen]
impl JsCropRect {
    #[wasm_bindgen(constructor)]
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> JsCropRect {
        JsCropRect {
            x,
            y,
            width,
            height,
        }
    }
}

impl From<CropRect> for JsCropRect {
    fn from(rect: CropRect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

impl From<JsCropRect> for CropRect {
    fn from(rect: JsCropRect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}
