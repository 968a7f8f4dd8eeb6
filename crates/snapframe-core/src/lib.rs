//! Snapframe Core - still capture pipeline
//!
//! This crate turns a raw camera frame into an export-ready still: it plans
//! the centered crop for the chosen aspect ratio, copies that region out
//! (mirrored for selfie previews), stamps the chosen color filter onto every
//! pixel, and encodes the result as PNG.

pub mod capture;
pub mod encode;
pub mod error;
pub mod filter;
pub mod frame;
pub mod luminance;
pub mod transform;

pub use capture::{capture, export_filename};
pub use error::CaptureError;
pub use filter::{apply_filter, apply_filter_in_place, FilterKind};
pub use frame::Frame;
pub use transform::{extract_crop, mirror_horizontal, plan_crop, AspectRatio, CropRect};

/// Which camera feeds the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacingMode {
    /// Front (selfie) camera
    #[default]
    User,
    /// Rear camera
    Environment,
}

impl FacingMode {
    /// The other camera.
    pub fn toggled(self) -> Self {
        match self {
            FacingMode::User => FacingMode::Environment,
            FacingMode::Environment => FacingMode::User,
        }
    }

    /// Whether the preview is shown as a mirror image.
    pub fn mirrors_preview(self) -> bool {
        self == FacingMode::User
    }
}

/// Parameters of a single capture, owned by the calling session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CaptureSettings {
    /// Target width:height of the still
    pub ratio: AspectRatio,
    /// Filter stamped onto the still
    pub filter: FilterKind,
    /// Mirror the still left-to-right
    pub mirror: bool,
}

impl CaptureSettings {
    /// Create settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Default settings, mirrored the way `facing` previews.
    pub fn for_facing(facing: FacingMode) -> Self {
        Self {
            mirror: facing.mirrors_preview(),
            ..Self::default()
        }
    }

    /// Check if all values are at their defaults
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
