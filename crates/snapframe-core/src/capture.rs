//! End-to-end still capture: crop to ratio, mirror, stamp the filter.

use crate::error::CaptureError;
use crate::filter::{apply_filter_in_place, FilterKind};
use crate::frame::Frame;
use crate::transform::{extract_crop, plan_crop};
use crate::CaptureSettings;

/// Turn a raw camera frame into the export-ready still.
///
/// 1. Plan the centered crop for `settings.ratio`
/// 2. Copy that region out, mirrored if `settings.mirror`
/// 3. Apply `settings.filter` to the copy
///
/// The source frame is only read. On error nothing is produced.
pub fn capture(frame: &Frame, settings: &CaptureSettings) -> Result<Frame, CaptureError> {
    frame.validate()?;
    let rect = plan_crop(frame.width, frame.height, settings.ratio)?;
    let mut still = extract_crop(frame, rect, settings.mirror)?;
    apply_filter_in_place(&mut still, settings.filter, false)?;
    Ok(still)
}

/// File name offered when the still is downloaded.
pub fn export_filename(filter: FilterKind) -> String {
    format!("minha-foto-filtrada-{}.png", filter.as_str())
}
