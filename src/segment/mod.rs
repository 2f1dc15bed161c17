//! Glyph segmentation: column runs → squared boxes → fixed-size rasters.
//!
//! Pipeline
//! - Profile the intensity map for columns holding any ink.
//! - Group those columns into runs; a new run starts only when the distance
//!   to the previous foreground column is strictly greater than `gap`.
//! - Per run, take the vertical ink extent, pad it by `expand_height / 2`
//!   on each side and square the box around the run midpoint.
//! - Crop (resolving out-of-image boxes with the `BoundsPolicy`) and resize
//!   bilinearly to `output_size`.
//!
//! Runs are independent; with the `parallel` feature the per-run work is
//! spread over rayon's pool and collected back in run order.
//!
//! Limitations
//! - Only columns are inspected, so two glyphs stacked vertically within the
//!   same columns merge into one run. Input is expected to be a single line.

pub mod bbox;
pub mod runs;

#[cfg(test)]
mod tests;

pub use bbox::{vertical_extent, CropRect, GlyphBox};
pub use runs::{detect_runs, ColumnRun, ForegroundProfile, RunAccumulator};

use crate::error::SplitError;
use crate::image::{resize_bilinear, ImageF32};
use crate::params::SegmentParams;
use log::debug;
use serde::Serialize;

/// One extracted glyph with the geometry that produced it.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Glyph {
    /// Position in left-to-right order.
    pub index: usize,
    pub run: ColumnRun,
    pub bbox: GlyphBox,
    /// Region actually read from the intensity map.
    pub crop: CropRect,
    /// Resized raster, exactly `output_size`.
    pub raster: ImageF32,
}

/// Detect the column runs of `image`.
pub fn find_runs(image: &ImageF32, gap: usize) -> Vec<ColumnRun> {
    let profile = ForegroundProfile::from_image(image);
    detect_runs(&profile.columns, gap)
}

/// Segment an intensity map into normalized glyph rasters, left to right.
///
/// An image without foreground yields an empty vector.
pub fn segment(image: &ImageF32, params: &SegmentParams) -> Result<Vec<Glyph>, SplitError> {
    params.validate()?;
    let runs = find_runs(image, params.gap);
    debug!(
        "segment: {}x{} map, gap={} -> {} runs",
        image.w,
        image.h,
        params.gap,
        runs.len()
    );
    extract_glyphs(image, &runs, params)
}

/// Build one glyph per run, preserving run order.
///
/// When several runs fail, the error of the leftmost one is returned. Runs
/// reaching past the image only read the columns inside it; a run with no
/// ink there is rejected with `SplitError::InvalidParams`.
#[cfg(feature = "parallel")]
pub fn extract_glyphs(
    image: &ImageF32,
    runs: &[ColumnRun],
    params: &SegmentParams,
) -> Result<Vec<Glyph>, SplitError> {
    use rayon::prelude::*;

    let results: Vec<Result<Glyph, SplitError>> = runs
        .par_iter()
        .enumerate()
        .map(|(index, &run)| extract_glyph(image, index, run, params))
        .collect();
    results.into_iter().collect()
}

/// Build one glyph per run, preserving run order.
///
/// When several runs fail, the error of the leftmost one is returned. Runs
/// reaching past the image only read the columns inside it; a run with no
/// ink there is rejected with `SplitError::InvalidParams`.
#[cfg(not(feature = "parallel"))]
pub fn extract_glyphs(
    image: &ImageF32,
    runs: &[ColumnRun],
    params: &SegmentParams,
) -> Result<Vec<Glyph>, SplitError> {
    runs.iter()
        .enumerate()
        .map(|(index, &run)| extract_glyph(image, index, run, params))
        .collect()
}

fn extract_glyph(
    image: &ImageF32,
    index: usize,
    run: ColumnRun,
    params: &SegmentParams,
) -> Result<Glyph, SplitError> {
    let (top, bottom) = vertical_extent(image, run).ok_or_else(|| {
        SplitError::InvalidParams(format!(
            "run {}..={} holds no foreground pixel inside the {}x{} image",
            run.start, run.end, image.w, image.h
        ))
    })?;
    let bbox = GlyphBox::from_extent(run, top, bottom, params.expand_height).ok_or_else(|| {
        SplitError::InvalidParams(format!(
            "expand_height {} overflows the box of run {}..={}",
            params.expand_height, run.start, run.end
        ))
    })?;
    let (crop, pixels) = bbox::crop_glyph(image, index, bbox, params.bounds)?;
    let (w, h) = params.output_size;
    Ok(Glyph {
        index,
        run,
        bbox,
        crop,
        raster: resize_bilinear(&pixels, w, h),
    })
}
