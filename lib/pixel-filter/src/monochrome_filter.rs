use crate::{Filter, RasterBuffer, base_filter::GrayscaleWeights};
use derivative::Derivative;
use derive_setters::Setters;

/// Gray level separating black from white output.
pub const COLOR_THRESHOLD: f64 = 255.0 / 3.0;

/// Threshold filter configuration
///
/// Pixels whose gray value is strictly above `threshold` become white, all
/// others become black. Alpha is preserved.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct ThresholdConfig {
    #[derivative(Default(value = "COLOR_THRESHOLD"))]
    threshold: f64,

    weights: GrayscaleWeights,
}

impl ThresholdConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Filter for ThresholdConfig {
    fn apply(&self, mut buffer: RasterBuffer) -> RasterBuffer {
        log::debug!(
            "threshold pass (> {:.2}) over {} pixels",
            self.threshold,
            buffer.pixel_count()
        );

        for mut pixel in buffer.pixels_mut() {
            let gray = self
                .weights
                .compute(pixel.red(), pixel.green(), pixel.blue());

            let level = if gray > self.threshold { 255.0 } else { 0.0 };
            pixel.set_rgb(level, level, level);
        }

        buffer
    }
}

pub fn filter_threshold(buffer: RasterBuffer) -> RasterBuffer {
    ThresholdConfig::new().apply(buffer)
}
