//! `GlyphSplitter`: normalize → segment with one validated parameter set.
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{InputDescriptor, SplitReport, TimingBreakdown};
use crate::error::SplitError;
use crate::image::{ImageF32, ImageU8};
use crate::normalize::{count_foreground, normalize};
use crate::params::SplitterParams;
use crate::segment::{detect_runs, extract_glyphs, segment, ForegroundProfile, Glyph};
use log::debug;
use std::time::Instant;

#[derive(Clone, Debug)]
pub struct GlyphSplitter {
    params: SplitterParams,
}

impl GlyphSplitter {
    /// Validate `params` once; later calls only fail on image-dependent errors.
    pub fn new(params: SplitterParams) -> Result<Self, SplitError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &SplitterParams {
        &self.params
    }

    /// Normalize the greyscale input into an intensity map.
    pub fn normalize(&self, gray: ImageU8<'_>) -> Result<ImageF32, SplitError> {
        normalize(gray, self.params.normalize.threshold)
    }

    /// Extract the glyph rasters of a single line of digits, left to right.
    pub fn process(&self, gray: ImageU8<'_>) -> Result<Vec<Glyph>, SplitError> {
        let intensity = self.normalize(gray)?;
        segment(&intensity, &self.params.segment)
    }

    /// Like [`process`](Self::process), also returning runs, statistics and timings.
    pub fn process_with_diagnostics(&self, gray: ImageU8<'_>) -> Result<SplitReport, SplitError> {
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let start = Instant::now();
        let intensity = self.normalize(gray)?;
        timings.push_since("normalize", start);

        let start = Instant::now();
        let profile = ForegroundProfile::from_image(&intensity);
        let runs = detect_runs(&profile.columns, self.params.segment.gap);
        timings.push_since("runs", start);

        let start = Instant::now();
        let glyphs = extract_glyphs(&intensity, &runs, &self.params.segment)?;
        let glyph_ms = timings.push_since("glyphs", start);

        timings.total_ms = elapsed_ms(total_start);
        debug!(
            "GlyphSplitter::process_with_diagnostics {} runs, {} glyphs in {:.3} ms (glyphs {:.3} ms)",
            runs.len(),
            glyphs.len(),
            timings.total_ms,
            glyph_ms
        );

        let input = InputDescriptor {
            width: intensity.w,
            height: intensity.h,
            threshold: self.params.normalize.threshold,
            foreground_pixels: count_foreground(&intensity),
            foreground_columns: profile.columns.len(),
            foreground_rows: profile.rows.len(),
        };
        Ok(SplitReport {
            input,
            runs,
            glyphs,
            timings,
            intensity,
        })
    }
}

/// Concatenate glyph rasters into one row-major `N × H × W` buffer.
///
/// All rasters come from the same `output_size`, so the result can be handed
/// to a classifier as a stacked tensor.
pub fn stack_rasters(glyphs: &[Glyph]) -> Vec<f32> {
    let len = glyphs.iter().map(|g| g.raster.data.len()).sum();
    let mut out = Vec::with_capacity(len);
    for g in glyphs {
        out.extend_from_slice(g.raster.as_slice());
    }
    out
}
