#![doc = include_str!("../README.md")]

// Public modules
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod normalize;
pub mod params;
pub mod segment;
pub mod splitter;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::SplitError;
pub use crate::normalize::normalize;
pub use crate::params::{BoundsPolicy, NormalizeParams, SegmentParams, SplitterParams};
pub use crate::segment::{segment, Glyph};
pub use crate::splitter::{stack_rasters, GlyphSplitter};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use glyph_splitter::prelude::*;
///
/// # fn main() -> Result<(), SplitError> {
/// let (w, h) = (200usize, 40usize);
/// let page = vec![255u8; w * h];
/// let img = ImageU8::packed(w, h, &page);
///
/// let splitter = GlyphSplitter::new(SplitterParams {
///     segment: SegmentParams::with_gap(6),
///     ..Default::default()
/// })?;
///
/// let glyphs = splitter.process(img)?;
/// println!("found {} glyphs", glyphs.len());
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageF32, ImageU8};
    pub use crate::{Glyph, GlyphSplitter, SegmentParams, SplitError, SplitterParams};
}
