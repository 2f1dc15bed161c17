use glyph_splitter::config::split::load_config;
use glyph_splitter::diagnostics::SplitReport;
use glyph_splitter::image::io::{load_grayscale_image, save_grayscale_f32, write_json_file};
use glyph_splitter::segment::{ColumnRun, CropRect, GlyphBox};
use glyph_splitter::{stack_rasters, GlyphSplitter, SplitError};
use log::{debug, info};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), SplitError> {
    let config_path = env::args()
        .nth(1)
        .ok_or_else(|| SplitError::InvalidParams(usage()))?;
    let config = load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let splitter = GlyphSplitter::new(config.params)?;
    debug!("split parameters: {:?}", splitter.params());
    let report = splitter.process_with_diagnostics(gray.as_view())?;
    info!(
        "{}: {} glyphs from {}x{} image in {:.3} ms",
        config.input.display(),
        report.glyph_count(),
        report.input.width,
        report.input.height,
        report.timings.total_ms
    );
    for g in report.out_of_bounds() {
        info!("glyph {} box {:?} extends past the image", g.index, g.bbox);
    }

    if let Some(path) = &config.output.intensity_image {
        save_grayscale_f32(&report.intensity, path)?;
        println!("Saved intensity map to {}", path.display());
    }

    if let Some(dir) = &config.output.glyph_dir {
        for g in &report.glyphs {
            save_grayscale_f32(&g.raster, &dir.join(format!("glyph_{:03}.png", g.index)))?;
        }
        println!("Saved {} glyph images to {}", report.glyph_count(), dir.display());
    }

    let summary = SplitSummary::from_report(&report);
    match &config.output.report_json {
        Some(path) => {
            write_json_file(path, &summary)?;
            println!("Saved split summary to {}", path.display());
        }
        None => {
            let json = serde_json::to_string_pretty(&summary)
                .map_err(|e| SplitError::Encode(format!("failed to serialize JSON: {e}")))?;
            println!("{json}");
        }
    }
    Ok(())
}

fn usage() -> String {
    "Usage: split_digits <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GlyphSummary {
    index: usize,
    run: ColumnRun,
    bbox: GlyphBox,
    crop: CropRect,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SplitSummary<'a> {
    width: usize,
    height: usize,
    glyph_count: usize,
    /// `[count, height, width]` of `rasters`.
    raster_shape: [usize; 3],
    glyphs: Vec<GlyphSummary>,
    timings: &'a glyph_splitter::diagnostics::TimingBreakdown,
    rasters: Vec<f32>,
}

impl<'a> SplitSummary<'a> {
    fn from_report(report: &'a SplitReport) -> Self {
        let (raster_w, raster_h) = report
            .glyphs
            .first()
            .map(|g| (g.raster.w, g.raster.h))
            .unwrap_or((0, 0));
        Self {
            width: report.input.width,
            height: report.input.height,
            glyph_count: report.glyph_count(),
            raster_shape: [report.glyph_count(), raster_h, raster_w],
            glyphs: report
                .glyphs
                .iter()
                .map(|g| GlyphSummary {
                    index: g.index,
                    run: g.run,
                    bbox: g.bbox,
                    crop: g.crop,
                })
                .collect(),
            timings: &report.timings,
            rasters: stack_rasters(&report.glyphs),
        }
    }
}
