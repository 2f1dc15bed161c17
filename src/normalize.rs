//! Greyscale → intensity map conversion.
//!
//! Scanned digits are dark ink on a light page. The segmenter wants the
//! opposite: background exactly `0.0` and ink in `(0, 1]`. `normalize` scales
//! each 8-bit sample to `[0, 1]`, inverts it and zeroes everything at or below
//! the threshold.
use crate::error::SplitError;
use crate::image::{ImageF32, ImageU8, ImageView};
use crate::params::validate_threshold;

#[inline]
fn threshold_px(v: f32, threshold: f32) -> f32 {
    if v > threshold {
        v
    } else {
        0.0
    }
}

/// Convert an 8-bit greyscale view into an inverted, thresholded intensity map.
pub fn normalize(gray: ImageU8<'_>, threshold: f32) -> Result<ImageF32, SplitError> {
    validate_threshold(threshold)?;
    if !gray.is_well_formed() {
        return Err(SplitError::InvalidParams(format!(
            "greyscale buffer of {} bytes is too short for {}x{} with stride {}",
            gray.data.len(),
            gray.w,
            gray.h,
            gray.stride
        )));
    }
    let mut out = ImageF32::new(gray.w, gray.h);
    for (y, src) in gray.rows().enumerate() {
        let dst = out.row_mut(y);
        for (d, &s) in dst.iter_mut().zip(src) {
            let inverted = 1.0 - s as f32 / 255.0;
            *d = threshold_px(inverted, threshold);
        }
    }
    Ok(out)
}

/// Apply only the threshold step to a map that is already inverted.
///
/// Idempotent: thresholding twice with the same value changes nothing.
pub fn apply_threshold(map: &ImageF32, threshold: f32) -> Result<ImageF32, SplitError> {
    validate_threshold(threshold)?;
    let data = map
        .as_slice()
        .iter()
        .map(|&v| threshold_px(v, threshold))
        .collect();
    Ok(ImageF32 {
        w: map.w,
        h: map.h,
        data,
    })
}

/// Number of foreground (non-zero) pixels.
pub fn count_foreground(map: &ImageF32) -> usize {
    map.as_slice().iter().filter(|&&v| v != 0.0).count()
}
