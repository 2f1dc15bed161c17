use super::TimingBreakdown;
use crate::image::ImageF32;
use crate::segment::{ColumnRun, Glyph};
use serde::Serialize;

/// Size and foreground statistics of the normalized input.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub threshold: f32,
    pub foreground_pixels: usize,
    pub foreground_columns: usize,
    pub foreground_rows: usize,
}

/// Result of [`GlyphSplitter::process_with_diagnostics`](crate::GlyphSplitter).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitReport {
    pub input: InputDescriptor,
    pub runs: Vec<ColumnRun>,
    pub glyphs: Vec<Glyph>,
    pub timings: TimingBreakdown,
    /// Intensity map the glyphs were cut from; not serialized.
    #[serde(skip)]
    pub intensity: ImageF32,
}

impl SplitReport {
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// Runs whose box had to be clamped or padded to fit the image.
    pub fn out_of_bounds(&self) -> impl Iterator<Item = &Glyph> {
        let (w, h) = (self.input.width, self.input.height);
        self.glyphs.iter().filter(move |g| !g.bbox.fits_within(w, h))
    }
}
