//! I/O helpers for greyscale images and JSON.
//!
//! - `load_grayscale_image` / `decode_grayscale_image`: read a PNG/JPEG/etc.
//!   from disk or memory into an owned 8-bit grey buffer.
//! - `save_grayscale_f32`: write an `ImageF32` (values in [0, 1]) as a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageF32, ImageU8, ImageView};
use crate::error::SplitError;
use image::{DynamicImage, GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned 8-bit greyscale buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct an owned greyscale buffer given tightly packed raw bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8::packed(self.width, self.height, &self.data)
    }
}

fn from_dynamic(img: DynamicImage) -> GrayImageU8 {
    let img = img.into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    GrayImageU8::new(width, height, img.into_raw())
}

/// Load an image from disk and convert to 8-bit greyscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8, SplitError> {
    let img = image::open(path).map_err(|e| SplitError::Decode {
        source_name: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(from_dynamic(img))
}

/// Decode an in-memory encoded image (format guessed from its header).
pub fn decode_grayscale_image(bytes: &[u8]) -> Result<GrayImageU8, SplitError> {
    let img = image::load_from_memory(bytes).map_err(|e| SplitError::Decode {
        source_name: format!("<{} byte buffer>", bytes.len()),
        message: e.to_string(),
    })?;
    Ok(from_dynamic(img))
}

/// Convert a float image to 8-bit grey, scaling by 255 and clamping.
pub fn to_gray_image(image: &ImageF32) -> GrayImage {
    let mut out = GrayImage::new(image.w as u32, image.h as u32);
    for (y, row) in image.rows().enumerate() {
        for (x, &px) in row.iter().enumerate() {
            let v = (px * 255.0).round().clamp(0.0, 255.0);
            out.put_pixel(x as u32, y as u32, Luma([v as u8]));
        }
    }
    out
}

/// Save a float image to a greyscale PNG.
pub fn save_grayscale_f32(image: &ImageF32, path: &Path) -> Result<(), SplitError> {
    ensure_parent_dir(path)?;
    to_gray_image(image)
        .save(path)
        .map_err(|e| SplitError::Encode(format!("failed to save {}: {e}", path.display())))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), SplitError> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|e| {
        SplitError::Encode(format!("failed to serialize JSON for {}: {e}", path.display()))
    })?;
    fs::write(path, json).map_err(|e| SplitError::io(path, e))
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), SplitError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| SplitError::io(parent, e))?;
        }
    }
    Ok(())
}
