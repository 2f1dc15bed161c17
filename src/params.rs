//! Parameter types configuring the normalizer and the segmenter.
//!
//! Every knob is a named field with a default, so configs only need to spell
//! out what they change. `validate()` is called once by `GlyphSplitter::new`
//! and by the free functions before they touch any pixel.

use crate::error::SplitError;
use serde::{Deserialize, Serialize};

/// Intensity threshold applied after inversion.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeParams {
    /// Inverted intensities `<= threshold` become background. Must lie in `[0, 1)`.
    pub threshold: f32,
}

impl Default for NormalizeParams {
    fn default() -> Self {
        Self { threshold: 0.7 }
    }
}

impl NormalizeParams {
    pub fn validate(&self) -> Result<(), SplitError> {
        validate_threshold(self.threshold)
    }
}

pub(crate) fn validate_threshold(threshold: f32) -> Result<(), SplitError> {
    if threshold.is_finite() && (0.0..1.0).contains(&threshold) {
        Ok(())
    } else {
        Err(SplitError::InvalidParams(format!(
            "threshold must lie in [0, 1), got {threshold}"
        )))
    }
}

/// What to do when a squared glyph box reaches past the image border.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundsPolicy {
    /// Clamp the box to the image and log a warning.
    #[default]
    Clamp,
    /// Keep the full box; pixels outside the image read as background.
    Pad,
    /// Reject the image with `SplitError::Bounds`.
    Fail,
}

/// Largest accepted `expand_height`; keeps box arithmetic far from `isize` overflow.
pub const MAX_EXPAND_HEIGHT: usize = isize::MAX as usize / 4;

/// Run detection and glyph normalization knobs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentParams {
    /// Column distance between consecutive foreground columns that must be
    /// exceeded (strictly) to start a new glyph. Must be `>= 1`.
    pub gap: usize,
    /// Extra vertical padding in pixels, split evenly above and below.
    pub expand_height: usize,
    /// Raster size `(width, height)` every glyph is resized to.
    pub output_size: (usize, usize),
    pub bounds: BoundsPolicy,
}

impl Default for SegmentParams {
    fn default() -> Self {
        Self {
            gap: 1,
            expand_height: 0,
            output_size: (28, 28),
            bounds: BoundsPolicy::Clamp,
        }
    }
}

impl SegmentParams {
    /// Defaults with the given gap.
    pub fn with_gap(gap: usize) -> Self {
        Self {
            gap,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), SplitError> {
        if self.gap < 1 {
            return Err(SplitError::InvalidParams(
                "gap must be at least 1".to_string(),
            ));
        }
        if self.expand_height > MAX_EXPAND_HEIGHT {
            return Err(SplitError::InvalidParams(format!(
                "expand_height must be at most {MAX_EXPAND_HEIGHT}, got {}",
                self.expand_height
            )));
        }
        let (w, h) = self.output_size;
        if w == 0 || h == 0 {
            return Err(SplitError::InvalidParams(format!(
                "output_size must be non-zero, got {w}x{h}"
            )));
        }
        Ok(())
    }
}

/// Full pipeline configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitterParams {
    pub normalize: NormalizeParams,
    pub segment: SegmentParams,
}

impl SplitterParams {
    pub fn validate(&self) -> Result<(), SplitError> {
        self.normalize.validate()?;
        self.segment.validate()
    }
}
