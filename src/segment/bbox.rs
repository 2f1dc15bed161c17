//! Per-run glyph boxes and their resolution against the image bounds.
use super::runs::ColumnRun;
use crate::error::SplitError;
use crate::image::{ImageF32, ImageView};
use crate::params::BoundsPolicy;
use log::warn;
use serde::Serialize;

/// Squared glyph box in signed pixel coordinates, all bounds inclusive.
///
/// Centered horizontally on the run midpoint with the same half-span as the
/// expanded ink height, so thin glyphs get side padding before resizing. May
/// extend past the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlyphBox {
    pub row_min: isize,
    pub row_max: isize,
    pub col_min: isize,
    pub col_max: isize,
}

impl GlyphBox {
    /// Build the box for `run`, or `None` if the run holds no ink inside the
    /// image or the expanded box does not fit in `isize` coordinates.
    pub fn from_run(image: &ImageF32, run: ColumnRun, expand_height: usize) -> Option<Self> {
        let (top, bottom) = vertical_extent(image, run)?;
        Self::from_extent(run, top, bottom, expand_height)
    }

    /// Expand the ink rows `top..=bottom` and square the box around `run`.
    pub fn from_extent(
        run: ColumnRun,
        top: usize,
        bottom: usize,
        expand_height: usize,
    ) -> Option<Self> {
        let half = isize::try_from(expand_height / 2).ok()?;
        let row_min = isize::try_from(top).ok()?.checked_sub(half)?;
        let row_max = isize::try_from(bottom).ok()?.checked_add(half)?;
        let height = row_max.checked_sub(row_min)?;
        let mid = isize::try_from(run.mid()).ok()?;
        Some(Self {
            row_min,
            row_max,
            col_min: mid.checked_sub(height / 2)?,
            col_max: mid.checked_add(height / 2)?,
        })
    }

    /// Number of columns covered.
    #[inline]
    pub fn width(&self) -> usize {
        (self.col_max - self.col_min + 1) as usize
    }

    /// Number of rows covered.
    #[inline]
    pub fn height(&self) -> usize {
        (self.row_max - self.row_min + 1) as usize
    }

    pub fn fits_within(&self, width: usize, height: usize) -> bool {
        self.row_min >= 0
            && self.col_min >= 0
            && self.row_max < height as isize
            && self.col_max < width as isize
    }

    /// Intersection with `[0, width) × [0, height)`.
    fn clamped(&self, width: usize, height: usize) -> CropRect {
        let max_x = width.saturating_sub(1) as isize;
        let max_y = height.saturating_sub(1) as isize;
        CropRect {
            x0: self.col_min.clamp(0, max_x) as usize,
            y0: self.row_min.clamp(0, max_y) as usize,
            x1: self.col_max.clamp(0, max_x) as usize,
            y1: self.row_max.clamp(0, max_y) as usize,
        }
    }
}

/// Inclusive in-image rectangle actually read from the intensity map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CropRect {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

impl CropRect {
    #[inline]
    pub fn width(&self) -> usize {
        self.x1 - self.x0 + 1
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.y1 - self.y0 + 1
    }
}

/// Topmost and bottommost ink rows within the run's columns.
///
/// Columns past the right edge are ignored; a run lying entirely outside the
/// image has no extent.
pub fn vertical_extent(image: &ImageF32, run: ColumnRun) -> Option<(usize, usize)> {
    let end = run.end.min(image.w.checked_sub(1)?);
    if run.start > end {
        return None;
    }
    let mut extent: Option<(usize, usize)> = None;
    for (y, row) in image.rows().enumerate() {
        if row[run.start..=end].iter().any(|&v| v != 0.0) {
            extent = Some(match extent {
                None => (y, y),
                Some((top, _)) => (top, y),
            });
        }
    }
    extent
}

/// A padded box may be at most this many times the larger image side.
pub const MAX_PAD_FACTOR: usize = 4;

/// Copy the pixels of `bbox` out of `image` according to `policy`.
///
/// Under `Pad` a box wider or taller than `MAX_PAD_FACTOR × max(w, h)` is
/// rejected with `SplitError::Bounds` instead of being allocated.
pub(crate) fn crop_glyph(
    image: &ImageF32,
    index: usize,
    bbox: GlyphBox,
    policy: BoundsPolicy,
) -> Result<(CropRect, ImageF32), SplitError> {
    let rect = bbox.clamped(image.w, image.h);
    let inside = bbox.fits_within(image.w, image.h);
    match policy {
        _ if inside => Ok((rect, copy_rect(image, rect))),
        BoundsPolicy::Fail => Err(SplitError::Bounds {
            index,
            bbox,
            width: image.w,
            height: image.h,
        }),
        BoundsPolicy::Clamp => {
            warn!(
                "glyph {index}: box {bbox:?} exceeds {}x{} image, clamped to {rect:?}",
                image.w, image.h
            );
            Ok((rect, copy_rect(image, rect)))
        }
        BoundsPolicy::Pad => {
            let limit = image.w.max(image.h).saturating_mul(MAX_PAD_FACTOR);
            if bbox.width() > limit || bbox.height() > limit {
                return Err(SplitError::Bounds {
                    index,
                    bbox,
                    width: image.w,
                    height: image.h,
                });
            }
            Ok((rect, copy_padded(image, bbox)))
        }
    }
}

fn copy_rect(image: &ImageF32, rect: CropRect) -> ImageF32 {
    let mut out = ImageF32::new(rect.width(), rect.height());
    for (dy, y) in (rect.y0..=rect.y1).enumerate() {
        out.row_mut(dy)
            .copy_from_slice(&image.row(y)[rect.x0..=rect.x1]);
    }
    out
}

fn copy_padded(image: &ImageF32, bbox: GlyphBox) -> ImageF32 {
    ImageF32::from_fn(bbox.width(), bbox.height(), |dx, dy| {
        let x = bbox.col_min + dx as isize;
        let y = bbox.row_min + dy as isize;
        if x < 0 || y < 0 || x >= image.w as isize || y >= image.h as isize {
            0.0
        } else {
            image.get(x as usize, y as usize)
        }
    })
}
