//! Load, mask, and save driver for background removal.

use std::path::Path;

use crate::error::Result;
use crate::image;

use super::mask::strip_background;

/// Default per-channel cutoff below which a pixel is treated as background.
pub const DEFAULT_THRESHOLD: i32 = 50;

/// Configuration for background removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripConfig {
    /// Per-channel cutoff. A pixel is stripped when red, green and blue are
    /// all strictly below this value. Values outside 0-255 are allowed:
    /// `<= 0` strips nothing and `>= 256` strips everything.
    pub threshold: i32,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl StripConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Never fails today; every integer threshold has a defined meaning.
    pub fn validate(&self) -> Result<()> {
        if !(0..=256).contains(&self.threshold) {
            tracing::warn!(
                threshold = self.threshold,
                "threshold outside 0-256, every pixel will be treated the same"
            );
        }
        Ok(())
    }
}

/// Outcome of a single [`Stripper::process`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripReport {
    pub width: u32,
    pub height: u32,
    /// Pixels whose alpha was set to 0.
    pub stripped: usize,
}

impl StripReport {
    /// Total pixel count of the processed image.
    #[must_use]
    pub fn total(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Removes near-black backgrounds from image files.
#[derive(Debug, Clone)]
pub struct Stripper {
    config: StripConfig,
}

impl Stripper {
    /// Create a new stripper with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: StripConfig) -> Result<Self> {
        config.validate()?;

        tracing::debug!("Initializing stripper with config: {config:?}");

        Ok(Self { config })
    }

    /// Strip the black background from `input_path` and write the result to
    /// `output_path`.
    ///
    /// The output format is checked first, then the whole image is decoded
    /// and masked in memory before anything is written. The input file is
    /// never modified.
    ///
    /// # Errors
    ///
    /// Returns an error if the output format cannot hold alpha, the input
    /// cannot be loaded, or the output cannot be written.
    pub fn process<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<StripReport> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        image::output_format(output_path)?;

        tracing::debug!("Processing image: {}", input_path.display());
        let mut img = image::load_rgba(input_path)?;
        let (width, height) = img.dimensions();

        let report = StripReport {
            width,
            height,
            stripped: strip_background(&mut img, self.config.threshold),
        };
        tracing::debug!(
            stripped = report.stripped,
            total = report.total(),
            threshold = self.config.threshold,
            "masked black background"
        );

        tracing::debug!("Saving output to: {}", output_path.display());
        image::save_rgba(&img, output_path)?;

        Ok(report)
    }
}
