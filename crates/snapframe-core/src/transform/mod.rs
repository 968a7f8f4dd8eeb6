//! Geometric transforms: aspect-fit cropping and mirroring.
//!
//! # Transform Order
//!
//! When a frame is captured, transforms are applied in this order:
//! 1. Crop planning (`plan_crop`)
//! 2. Region extraction, mirrored if requested (`extract_crop`)
//! 3. Pixel filter (`crate::filter`)
//!
//! # Coordinate System
//!
//! - Crop rectangles are in whole pixels relative to the source frame
//! - Origin is top-left corner
//! - Ratios are width:height

mod crop;
mod mirror;
mod ratio;

pub use crop::{extract_crop, plan_crop, plan_crop_with, CropRect};
pub(crate) use mirror::mirror_row;
pub use mirror::mirror_horizontal;
pub use ratio::AspectRatio;
