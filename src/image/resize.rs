//! Bilinear resampling of `ImageF32` to an exact target size.
//!
//! Sample positions are pixel-centre aligned: destination pixel `x` reads the
//! source at `(x + 0.5) * src_w / dst_w - 0.5`. Positions outside the source
//! clamp to the border (replicate). The interpolation weights depend only on
//! the two sizes, so they are computed once per axis and reused per row.
use super::{ImageF32, ImageView};

/// Source taps for one destination coordinate along one axis.
#[derive(Clone, Copy, Debug)]
struct Tap {
    i0: usize,
    i1: usize,
    frac: f32,
}

fn axis_taps(src_len: usize, dst_len: usize) -> Vec<Tap> {
    let scale = src_len as f32 / dst_len as f32;
    let last = src_len - 1;
    (0..dst_len)
        .map(|d| {
            let s = ((d as f32 + 0.5) * scale - 0.5).clamp(0.0, last as f32);
            let i0 = s.floor() as usize;
            Tap {
                i0,
                i1: (i0 + 1).min(last),
                frac: s - i0 as f32,
            }
        })
        .collect()
}

/// Resize `src` to exactly `width × height` with bilinear interpolation.
///
/// An empty source yields an all-background image of the requested size.
pub fn resize_bilinear(src: &ImageF32, width: usize, height: usize) -> ImageF32 {
    let mut out = ImageF32::new(width, height);
    if src.is_empty() || width == 0 || height == 0 {
        return out;
    }
    if src.w == width && src.h == height {
        out.data.copy_from_slice(&src.data);
        return out;
    }

    let xs = axis_taps(src.w, width);
    let ys = axis_taps(src.h, height);
    for (y, ty) in ys.iter().enumerate() {
        let r0 = src.row(ty.i0);
        let r1 = src.row(ty.i1);
        let dst = out.row_mut(y);
        for (px, tx) in dst.iter_mut().zip(&xs) {
            let top = r0[tx.i0] + (r0[tx.i1] - r0[tx.i0]) * tx.frac;
            let bottom = r1[tx.i0] + (r1[tx.i1] - r1[tx.i0]) * tx.frac;
            *px = top + (bottom - top) * ty.frac;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_size_is_identity() {
        let img = ImageF32::from_fn(5, 3, |x, y| (x + 10 * y) as f32 / 30.0);
        assert_eq!(resize_bilinear(&img, 5, 3), img);
    }

    #[test]
    fn constant_image_stays_constant() {
        let img = ImageF32::from_fn(7, 11, |_, _| 0.8);
        let out = resize_bilinear(&img, 28, 28);
        assert_eq!((out.w, out.h), (28, 28));
        for &v in out.as_slice() {
            assert!((v - 0.8).abs() < 1e-6, "expected 0.8, got {v}");
        }
    }

    #[test]
    fn single_pixel_fills_target() {
        let img = ImageF32::from_fn(1, 1, |_, _| 0.9);
        let out = resize_bilinear(&img, 28, 28);
        assert!(out.as_slice().iter().all(|&v| (v - 0.9).abs() < 1e-6));
    }

    #[test]
    fn upsampled_ramp_is_monotonic_and_bounded() {
        let img = ImageF32::from_fn(4, 1, |x, _| x as f32 / 3.0);
        let out = resize_bilinear(&img, 16, 2);
        let row = out.row(0);
        assert!(row.windows(2).all(|w| w[0] <= w[1]), "row={row:?}");
        assert_eq!(row[0], 0.0);
        assert_eq!(row[15], 1.0);
    }

    #[test]
    fn empty_source_gives_background() {
        let out = resize_bilinear(&ImageF32::new(0, 0), 28, 28);
        assert_eq!((out.w, out.h), (28, 28));
        assert!(out.as_slice().iter().all(|&v| v == 0.0));
    }
}
