//! Column-run detection.
//!
//! A run is a span of foreground columns whose consecutive members are at
//! most `gap` columns apart. The accumulator is a two-state machine so the
//! strict `>` split rule lives in exactly one place.
use crate::image::{ImageF32, ImageView};
use serde::Serialize;

/// Inclusive column interval `[start, end]` holding one glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ColumnRun {
    pub start: usize,
    pub end: usize,
}

impl ColumnRun {
    /// Number of columns spanned, including interior gaps.
    #[inline]
    pub fn width(&self) -> usize {
        self.end - self.start + 1
    }

    /// Horizontal midpoint, rounded down.
    #[inline]
    pub fn mid(&self) -> usize {
        (self.start + self.end) / 2
    }
}

/// Sorted indices of the columns and rows holding at least one non-zero pixel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForegroundProfile {
    pub columns: Vec<usize>,
    pub rows: Vec<usize>,
}

impl ForegroundProfile {
    pub fn from_image(image: &ImageF32) -> Self {
        let mut col_hit = vec![false; image.w];
        let mut rows = Vec::new();
        for (y, row) in image.rows().enumerate() {
            let mut any = false;
            for (hit, &v) in col_hit.iter_mut().zip(row) {
                if v != 0.0 {
                    *hit = true;
                    any = true;
                }
            }
            if any {
                rows.push(y);
            }
        }
        let columns = col_hit
            .iter()
            .enumerate()
            .filter_map(|(x, &hit)| hit.then_some(x))
            .collect();
        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RunState {
    Idle,
    Open { start: usize, prev: usize },
}

/// Streaming run builder fed with foreground columns in increasing order.
#[derive(Clone, Debug)]
pub struct RunAccumulator {
    gap: usize,
    state: RunState,
}

impl RunAccumulator {
    pub fn new(gap: usize) -> Self {
        Self {
            gap,
            state: RunState::Idle,
        }
    }

    /// Feed the next foreground column. Returns the run closed by this column,
    /// if the distance to the previous column exceeds the gap.
    pub fn push(&mut self, col: usize) -> Option<ColumnRun> {
        match self.state {
            RunState::Idle => {
                self.state = RunState::Open {
                    start: col,
                    prev: col,
                };
                None
            }
            RunState::Open { start, prev } => {
                debug_assert!(col > prev, "columns must be strictly increasing");
                if col - prev > self.gap {
                    self.state = RunState::Open {
                        start: col,
                        prev: col,
                    };
                    Some(ColumnRun { start, end: prev })
                } else {
                    self.state = RunState::Open { start, prev: col };
                    None
                }
            }
        }
    }

    /// Close the run still open, if any.
    pub fn finish(self) -> Option<ColumnRun> {
        match self.state {
            RunState::Idle => None,
            RunState::Open { start, prev } => Some(ColumnRun { start, end: prev }),
        }
    }
}

/// Group sorted foreground columns into runs.
pub fn detect_runs(columns: &[usize], gap: usize) -> Vec<ColumnRun> {
    let mut acc = RunAccumulator::new(gap);
    let mut runs: Vec<ColumnRun> = columns.iter().filter_map(|&c| acc.push(c)).collect();
    runs.extend(acc.finish());
    runs
}
