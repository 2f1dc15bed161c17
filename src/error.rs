//! Error type shared by the normalizer, the segmenter and the I/O helpers.
//!
//! An empty segmentation is not an error: `segment` returns `Ok(vec![])` when
//! the intensity map holds no foreground pixel.
use crate::segment::GlyphBox;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SplitError {
    /// The input could not be decoded as a greyscale image.
    #[error("failed to decode {source_name} as greyscale: {message}")]
    Decode {
        source_name: String,
        message: String,
    },
    /// A parameter failed validation.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),
    /// A glyph box reaches outside the image under `Fail`, or is too large to pad under `Pad`.
    #[error("glyph {index} box {bbox:?} exceeds image extents {width}x{height}")]
    Bounds {
        index: usize,
        bbox: GlyphBox,
        width: usize,
        height: usize,
    },
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// PNG or JSON encoding failed.
    #[error("encoding failed: {0}")]
    Encode(String),
}

impl SplitError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
