//! Export encoding for captured stills.
//!
//! This module provides functionality for:
//! - Encoding RGBA frames to PNG, so the stamped filter survives export
//!   without compression artifacts
//!
//! # Examples
//!
//! ```ignore
//! use snapframe_core::encode::encode_png;
//!
//! let png_bytes = encode_png(&still)?;
//! println!("Encoded {} bytes", png_bytes.len());
//! ```

mod png;

pub use png::{encode_png, encode_png_rgba, EncodeError, PNG_SIGNATURE};
