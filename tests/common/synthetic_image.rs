/// Simple stroke descriptor drawn dark-on-light by [`digit_row_u8`].
#[derive(Clone, Copy, Debug)]
pub struct Stroke {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

impl Stroke {
    /// Inclusive rectangle `[x0, x1] × [y0, y1]`.
    pub fn new(x0: usize, y0: usize, x1: usize, y1: usize) -> Self {
        Self { x0, y0, x1, y1 }
    }
}

/// Generates a light page (value 245) with dark (value 12) rectangular strokes.
pub fn digit_row_u8(width: usize, height: usize, strokes: &[Stroke]) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = vec![245u8; width * height];
    for s in strokes {
        assert!(s.x1 < width && s.y1 < height, "stroke {s:?} outside image");
        for y in s.y0..=s.y1 {
            for x in s.x0..=s.x1 {
                img[y * width + x] = 12;
            }
        }
    }
    img
}

/// A "0"-like ring glyph: outer box with a hollow centre, `size` pixels square.
#[allow(dead_code)]
pub fn ring(x: usize, y: usize, size: usize, thickness: usize) -> Vec<Stroke> {
    let last = size - 1;
    vec![
        Stroke::new(x, y, x + last, y + thickness - 1),
        Stroke::new(x, y + last + 1 - thickness, x + last, y + last),
        Stroke::new(x, y, x + thickness - 1, y + last),
        Stroke::new(x + last + 1 - thickness, y, x + last, y + last),
    ]
}

/// A "1"-like vertical bar.
#[allow(dead_code)]
pub fn bar(x: usize, y: usize, width: usize, height: usize) -> Stroke {
    Stroke::new(x, y, x + width - 1, y + height - 1)
}
