//! Diagnostics returned by the splitter and written by the demo binary.
//!
//! `SplitReport` bundles the glyphs with the detected runs, input
//! statistics and per-stage timings. Field names serialize as camelCase.

pub mod report;
pub mod timing;

pub use report::{InputDescriptor, SplitReport};
pub use timing::{StageTiming, TimingBreakdown};
