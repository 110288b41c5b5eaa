//! Sample, quantize and resample in one call, optionally on a worker thread

use crate::io::configuration::MAX_SAMPLES;
use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::pattern::dimensions::target_height_for;
use crate::pattern::{Pattern, PixelBuffer, build_grid};
use crate::quantize::{build_palette, sample};
use std::any::Any;
use std::thread::JoinHandle;

/// Parameters for one pattern generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Maximum number of thread colors
    pub colors: usize,
    /// Grid width in stitches
    pub target_width: usize,
    /// Grid height in stitches
    pub target_height: usize,
    /// Upper bound on pixels sampled for quantization
    pub max_samples: usize,
}

impl GenerationConfig {
    /// Explicit grid dimensions with the default sampling bound
    pub const fn new(colors: usize, target_width: usize, target_height: usize) -> Self {
        Self {
            colors,
            target_width,
            target_height,
            max_samples: MAX_SAMPLES,
        }
    }

    /// Grid width chosen by the caller, height following the image aspect ratio
    pub fn for_image(image: &PixelBuffer, colors: usize, target_width: usize) -> Self {
        let target_height = target_height_for(image.width(), image.height(), target_width);
        Self::new(colors, target_width, target_height)
    }

    /// Reject zero-sized palettes and grids
    ///
    /// # Errors
    ///
    /// Returns an error if the color count or either grid dimension is zero
    pub fn validate(&self) -> Result<()> {
        if self.colors == 0 {
            return Err(invalid_parameter(
                "colors",
                &self.colors,
                &"at least one thread color is required",
            ));
        }
        if self.target_width == 0 || self.target_height == 0 {
            return Err(invalid_parameter(
                "target",
                &format!("{}x{}", self.target_width, self.target_height),
                &"grid dimensions must be positive",
            ));
        }
        Ok(())
    }
}

/// Build a complete pattern from a decoded image
///
/// # Errors
///
/// Returns an error if the configuration is invalid
pub fn generate(image: &PixelBuffer, config: &GenerationConfig) -> Result<Pattern> {
    config.validate()?;

    let samples = sample(image, config.max_samples);
    tracing::debug!(
        source_width = image.width(),
        source_height = image.height(),
        samples = samples.len(),
        "sampled source image"
    );

    let palette = build_palette(&samples, config.colors)?;
    let grid = build_grid(image, config.target_width, config.target_height, &palette)?;
    let pattern = Pattern::new(palette, grid, config.target_width, config.target_height)?;

    tracing::info!(
        width = pattern.width(),
        height = pattern.height(),
        colors = pattern.legend().len(),
        "pattern generated"
    );
    Ok(pattern)
}

/// A generation running on a worker thread
///
/// There are no partial results: the pattern is available only once the worker
/// has finished.
#[derive(Debug)]
pub struct PendingGeneration {
    handle: JoinHandle<Result<Pattern>>,
}

impl PendingGeneration {
    /// Check whether the worker is done without blocking
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the pattern is ready
    ///
    /// # Errors
    ///
    /// Returns the generation error, or a computation error if the worker panicked
    pub fn wait(self) -> Result<Pattern> {
        match self.handle.join() {
            Ok(result) => result,
            Err(payload) => Err(computation_error(
                "generate",
                &panic_message(payload.as_ref()),
            )),
        }
    }
}

/// Run [`generate`] off the calling thread
pub fn spawn_generation(image: PixelBuffer, config: GenerationConfig) -> PendingGeneration {
    let handle = std::thread::spawn(move || generate(&image, &config));
    PendingGeneration { handle }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "worker thread panicked".to_string())
}
