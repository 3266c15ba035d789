use crate::{Filter, RasterBuffer};
use derivative::Derivative;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

pub const GRAYSCALE_WEIGHT_RED: f64 = 0.33;
pub const GRAYSCALE_WEIGHT_GREEN: f64 = 0.33;
pub const GRAYSCALE_WEIGHT_BLUE: f64 = 0.33;

/// Amount added to each color channel by one brightness pass.
pub const BRIGHTNESS_SHIFT: f64 = 50.0;

/// Per-channel weights used to collapse a color into a single gray value.
///
/// The defaults sum to 0.99, so a white pixel maps to 252.45 rather than 255.
#[derive(Debug, Clone, Copy, PartialEq, Derivative, Setters, Serialize, Deserialize)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[serde(default)]
#[non_exhaustive]
pub struct GrayscaleWeights {
    #[derivative(Default(value = "GRAYSCALE_WEIGHT_RED"))]
    pub red: f64,
    #[derivative(Default(value = "GRAYSCALE_WEIGHT_GREEN"))]
    pub green: f64,
    #[derivative(Default(value = "GRAYSCALE_WEIGHT_BLUE"))]
    pub blue: f64,
}

impl GrayscaleWeights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Weighted sum of the components. Not rounded and not clamped.
    pub fn compute(&self, red: f64, green: f64, blue: f64) -> f64 {
        self.red * red + self.blue * blue + self.green * green
    }
}

/// Gray value of a color using the default weights.
pub fn compute_grayscale(red: f64, green: f64, blue: f64) -> f64 {
    GrayscaleWeights::default().compute(red, green, blue)
}

/// Grayscale filter configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct GrayscaleConfig {
    weights: GrayscaleWeights,
}

impl GrayscaleConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Filter for GrayscaleConfig {
    fn apply(&self, mut buffer: RasterBuffer) -> RasterBuffer {
        log::debug!("grayscale pass over {} pixels", buffer.pixel_count());

        for mut pixel in buffer.pixels_mut() {
            let gray = self
                .weights
                .compute(pixel.red(), pixel.green(), pixel.blue());
            pixel.set_rgb(gray, gray, gray);
        }

        buffer
    }
}

/// Brightness filter configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct BrightnessConfig {
    #[derivative(Default(value = "BRIGHTNESS_SHIFT"))]
    shift: f64,
}

impl BrightnessConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Filter for BrightnessConfig {
    fn apply(&self, mut buffer: RasterBuffer) -> RasterBuffer {
        log::debug!(
            "brightness pass (+{}) over {} pixels",
            self.shift,
            buffer.pixel_count()
        );

        // No clamping here; the display surface resolves overflow on write.
        for mut pixel in buffer.pixels_mut() {
            pixel.set_rgb(
                pixel.red() + self.shift,
                pixel.green() + self.shift,
                pixel.blue() + self.shift,
            );
        }

        buffer
    }
}

pub fn filter_grayscale(buffer: RasterBuffer) -> RasterBuffer {
    GrayscaleConfig::new().apply(buffer)
}

pub fn filter_brighten(buffer: RasterBuffer) -> RasterBuffer {
    BrightnessConfig::new().apply(buffer)
}
