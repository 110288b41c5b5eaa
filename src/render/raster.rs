//! PNG export by rendering the chart's SVG form with resvg

use crate::io::error::{Result, StitchError, WithPath, computation_error};
use crate::render::Chart;
use crate::render::svg::chart_svg;
use image::RgbaImage;
use resvg::usvg::{self, Transform};
use std::path::Path;
use std::sync::{Arc, LazyLock};
use tiny_skia::Pixmap;

static SYSTEM_RASTERIZER: LazyLock<ChartRasterizer> = LazyLock::new(ChartRasterizer::new);

/// Turns charts into pixels, drawing symbols with the fonts it was given
pub struct ChartRasterizer {
    fontdb: Arc<fontdb::Database>,
}

impl ChartRasterizer {
    /// Rasterizer using the given font files first, then system fonts
    pub fn with_fonts(fonts: Vec<Vec<u8>>) -> Self {
        let mut fontdb = fontdb::Database::new();
        for data in fonts {
            fontdb.load_font_data(data);
        }
        fontdb.load_system_fonts();

        tracing::debug!(font_count = fontdb.len(), "loaded fonts for chart symbols");
        if fontdb.is_empty() {
            tracing::warn!("no fonts found; exported charts will have no symbols");
        }

        Self {
            fontdb: Arc::new(fontdb),
        }
    }

    /// Rasterizer using system fonts only
    pub fn new() -> Self {
        Self::with_fonts(Vec::new())
    }

    /// Number of font faces available for symbols
    pub fn font_count(&self) -> usize {
        self.fontdb.len()
    }

    /// Render a chart onto a white RGBA image
    ///
    /// # Errors
    ///
    /// Returns an error if the chart has a zero dimension or its SVG form is rejected
    pub fn rasterize(&self, chart: &Chart) -> Result<RgbaImage> {
        let options = usvg::Options {
            fontdb: Arc::clone(&self.fontdb),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(&chart_svg(chart), &options)
            .map_err(|e| computation_error("rasterize", &e))?;

        let mut pixmap = Pixmap::new(chart.width, chart.height).ok_or_else(|| {
            computation_error(
                "rasterize",
                &format!("cannot allocate a {}x{} surface", chart.width, chart.height),
            )
        })?;
        pixmap.fill(tiny_skia::Color::WHITE);
        resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

        let bytes: Vec<u8> = pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let color = pixel.demultiply();
                [color.red(), color.green(), color.blue(), color.alpha()]
            })
            .collect();
        RgbaImage::from_raw(chart.width, chart.height, bytes)
            .ok_or_else(|| computation_error("rasterize", &"pixel buffer size mismatch"))
    }
}

impl Default for ChartRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a chart with system fonts
///
/// # Errors
///
/// Returns an error if the chart cannot be rendered
pub fn rasterize(chart: &Chart) -> Result<RgbaImage> {
    SYSTEM_RASTERIZER.rasterize(chart)
}

/// Rasterize a chart and save it as PNG
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The chart cannot be rendered
/// - The image cannot be saved to the specified path
pub fn export_chart_png(chart: &Chart, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    let image = rasterize(chart)?;
    image
        .save(output_path)
        .map_err(|e| StitchError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    tracing::info!(
        path = %output_path.display(),
        width = chart.width,
        height = chart.height,
        "chart exported"
    );
    Ok(())
}
