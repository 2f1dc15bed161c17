use super::*;
use crate::image::ImageView;
use crate::params::BoundsPolicy;

fn blocks(w: usize, h: usize, rects: &[(usize, usize, usize, usize, f32)]) -> ImageF32 {
    let mut img = ImageF32::new(w, h);
    for &(x0, y0, x1, y1, v) in rects {
        img.fill_rect(x0, y0, x1, y1, v);
    }
    img
}

fn max_value(img: &ImageF32) -> f32 {
    img.as_slice().iter().copied().fold(0.0, f32::max)
}

#[test]
fn two_blocks_give_two_square_rasters() {
    // columns [5,10) and [50,55), ten rows tall
    let img = blocks(100, 28, &[(5, 9, 9, 18, 1.0), (50, 9, 54, 18, 1.0)]);
    let glyphs = segment(&img, &SegmentParams::with_gap(10)).unwrap();
    assert_eq!(glyphs.len(), 2);
    assert_eq!(glyphs[0].run, ColumnRun { start: 5, end: 9 });
    assert_eq!(glyphs[1].run, ColumnRun { start: 50, end: 54 });
    for g in &glyphs {
        assert_eq!((g.raster.w, g.raster.h), (28, 28));
        assert!(max_value(&g.raster) > 0.0, "glyph {} lost its ink", g.index);
    }
}

#[test]
fn all_background_yields_empty_result() {
    for (w, h) in [(1, 1), (28, 100), (0, 0)] {
        let glyphs = segment(&ImageF32::new(w, h), &SegmentParams::with_gap(3)).unwrap();
        assert!(glyphs.is_empty(), "{w}x{h} produced {} glyphs", glyphs.len());
    }
}

#[test]
fn gap_boundary_is_strict() {
    let gap = 4;
    // first group ends at column 12; `gap` empty columns put the next one at 17
    let split = blocks(40, 10, &[(10, 2, 12, 6, 1.0), (12 + gap + 1, 2, 20, 6, 1.0)]);
    assert_eq!(find_runs(&split, gap).len(), 2);

    let merged = blocks(40, 10, &[(10, 2, 12, 6, 1.0), (12 + gap, 2, 20, 6, 1.0)]);
    // difference of exactly `gap` between foreground columns stays one run
    let merged_runs = find_runs(&merged, gap);
    assert_eq!(merged_runs, vec![ColumnRun { start: 10, end: 20 }]);

    let wider = blocks(40, 10, &[(10, 2, 12, 6, 1.0), (13 + gap, 2, 20, 6, 1.0)]);
    assert_eq!(find_runs(&wider, gap).len(), 2);
    assert_eq!(find_runs(&wider, gap + 1).len(), 1);
}

#[test]
fn output_order_follows_columns() {
    let img = blocks(
        120,
        30,
        &[
            (10, 5, 14, 14, 0.75),
            (50, 8, 54, 20, 0.85),
            (90, 3, 93, 25, 0.95),
        ],
    );
    let glyphs = segment(&img, &SegmentParams::with_gap(5)).unwrap();
    let peaks: Vec<f32> = glyphs.iter().map(|g| max_value(&g.raster)).collect();
    assert_eq!(peaks, vec![0.75, 0.85, 0.95]);
    let indices: Vec<usize> = glyphs.iter().map(|g| g.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    assert!(glyphs.windows(2).all(|w| w[0].run.end < w[1].run.start));
}

#[test]
fn every_raster_matches_output_size() {
    let img = blocks(
        80,
        40,
        &[(2, 1, 3, 38, 1.0), (20, 15, 45, 20, 1.0), (60, 10, 61, 11, 1.0)],
    );
    let params = SegmentParams {
        output_size: (16, 20),
        ..SegmentParams::with_gap(3)
    };
    let glyphs = segment(&img, &params).unwrap();
    assert_eq!(glyphs.len(), 3);
    for g in &glyphs {
        assert_eq!(g.raster.dims(), (16, 20), "glyph {}", g.index);
    }
}

#[test]
fn thin_glyph_is_padded_sideways() {
    // a "1": two columns wide, twenty rows tall
    let img = blocks(60, 30, &[(20, 5, 21, 24, 1.0)]);
    let glyphs = segment(&img, &SegmentParams::with_gap(3)).unwrap();
    assert_eq!(glyphs.len(), 1);
    let g = &glyphs[0];
    assert_eq!(g.bbox.width(), 19);
    assert_eq!(g.bbox.height(), 20);
    let raster = &g.raster;
    let left_edge: f32 = (0..raster.h).map(|y| raster.get(0, y)).sum();
    let center: f32 = (0..raster.h).map(|y| raster.get(raster.w / 2, y)).sum();
    assert_eq!(left_edge, 0.0, "side padding should be background");
    assert!(center > 0.0, "ink should sit in the middle columns");
}

#[test]
fn glyph_near_top_edge_is_clamped_by_default() {
    let img = blocks(40, 20, &[(10, 0, 14, 4, 1.0)]);
    let params = SegmentParams {
        expand_height: 4,
        ..SegmentParams::with_gap(3)
    };
    let glyphs = segment(&img, &params).unwrap();
    let g = &glyphs[0];
    assert_eq!(g.bbox.row_min, -2);
    assert_eq!(g.crop.y0, 0);
    assert_eq!(g.crop.y1, 6);
    assert!(
        g.raster.row(0).iter().any(|&v| v > 0.0),
        "clamped crop starts at the ink row"
    );
}

#[test]
fn glyph_near_top_edge_with_padding_keeps_offset() {
    let img = blocks(40, 20, &[(10, 0, 14, 4, 1.0)]);
    let params = SegmentParams {
        expand_height: 4,
        bounds: BoundsPolicy::Pad,
        ..SegmentParams::with_gap(3)
    };
    let glyphs = segment(&img, &params).unwrap();
    let raster = &glyphs[0].raster;
    assert_eq!(raster.dims(), (28, 28));
    assert!(raster.row(0).iter().all(|&v| v == 0.0));
    assert!(max_value(raster) > 0.0);
}

#[test]
fn glyph_near_top_edge_fails_under_strict_policy() {
    let img = blocks(40, 20, &[(10, 0, 14, 4, 1.0), (30, 8, 34, 12, 1.0)]);
    let params = SegmentParams {
        expand_height: 4,
        bounds: BoundsPolicy::Fail,
        ..SegmentParams::with_gap(3)
    };
    let err = segment(&img, &params).unwrap_err();
    assert!(
        matches!(err, SplitError::Bounds { index: 0, .. }),
        "unexpected error {err:?}"
    );
}

#[test]
fn boxes_inside_image_are_read_verbatim() {
    let img = blocks(60, 40, &[(20, 10, 24, 19, 1.0)]);
    let params = SegmentParams {
        bounds: BoundsPolicy::Fail,
        output_size: (9, 10),
        ..SegmentParams::with_gap(3)
    };
    let glyphs = segment(&img, &params).unwrap();
    let g = &glyphs[0];
    assert_eq!(
        g.crop,
        CropRect {
            x0: 18,
            y0: 10,
            x1: 26,
            y1: 19
        }
    );
    // crop is already 9x10, so the "resize" is a copy
    assert_eq!(g.raster.get(0, 0), 0.0);
    assert_eq!(g.raster.get(2, 0), 1.0);
    assert_eq!(g.raster.get(6, 9), 1.0);
    assert_eq!(g.raster.get(7, 9), 0.0);
}

#[test]
fn invalid_params_are_rejected() {
    let img = blocks(10, 10, &[(2, 2, 4, 4, 1.0)]);
    assert!(matches!(
        segment(&img, &SegmentParams::with_gap(0)),
        Err(SplitError::InvalidParams(_))
    ));
}

#[test]
fn overflowing_expand_height_is_an_error() {
    let img = blocks(40, 20, &[(10, 5, 14, 9, 1.0)]);
    let params = SegmentParams {
        expand_height: usize::MAX,
        ..SegmentParams::with_gap(3)
    };
    assert!(matches!(
        segment(&img, &params),
        Err(SplitError::InvalidParams(_))
    ));
}

#[test]
fn huge_padding_is_refused_before_allocating() {
    let img = blocks(40, 20, &[(10, 5, 14, 9, 1.0)]);
    let params = SegmentParams {
        expand_height: 200_000,
        bounds: BoundsPolicy::Pad,
        ..SegmentParams::with_gap(3)
    };
    assert!(matches!(
        segment(&img, &params),
        Err(SplitError::Bounds { index: 0, .. })
    ));
}

#[test]
fn runs_outside_image_are_rejected() {
    let img = blocks(10, 10, &[(2, 2, 4, 4, 1.0)]);
    let runs = [ColumnRun { start: 50, end: 60 }];
    let err = extract_glyphs(&img, &runs, &SegmentParams::with_gap(3)).unwrap_err();
    assert!(matches!(err, SplitError::InvalidParams(_)), "got {err:?}");
}

#[test]
fn leftmost_failing_glyph_is_reported() {
    // every glyph touches the top edge, so all of them fail
    let img = blocks(
        200,
        20,
        &[
            (10, 0, 14, 4, 1.0),
            (50, 0, 54, 4, 1.0),
            (90, 0, 94, 4, 1.0),
            (130, 0, 134, 4, 1.0),
        ],
    );
    let params = SegmentParams {
        expand_height: 4,
        bounds: BoundsPolicy::Fail,
        ..SegmentParams::with_gap(3)
    };
    for _ in 0..8 {
        let err = segment(&img, &params).unwrap_err();
        assert!(
            matches!(err, SplitError::Bounds { index: 0, .. }),
            "unexpected error {err:?}"
        );
    }
}
