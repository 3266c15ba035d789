pub mod action;
pub mod base_filter;
pub mod engine;
pub mod monochrome_filter;
pub mod raster;
pub mod source;
pub mod surface;

pub use action::Action;
pub use engine::{FilterEngine, FilterSettings};
pub use raster::{Pixel, PixelMut, RasterBuffer};
pub use source::SourceImage;
pub use surface::{Canvas, DisplaySurface};

pub type PixelFilterResult<T> = Result<T, PixelFilterError>;

#[derive(thiserror::Error, Debug)]
pub enum PixelFilterError {
    #[error("Invalid raster buffer: {0}")]
    InvalidBuffer(String),
    #[error("Unknown action: {0}")]
    UnknownAction(String),
    #[error("Source image is not loaded yet")]
    NotLoaded,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// A transformation from one raster buffer to another.
///
/// Filters take the buffer by value, mutate it in place and hand it back.
pub trait Filter {
    fn apply(&self, buffer: RasterBuffer) -> RasterBuffer;
}

impl<F> Filter for F
where
    F: Fn(RasterBuffer) -> RasterBuffer,
{
    fn apply(&self, buffer: RasterBuffer) -> RasterBuffer {
        self(buffer)
    }
}

#[derive(Debug, Clone)]
pub enum PixelFilter {
    Grayscale(base_filter::GrayscaleConfig),
    Brighten(base_filter::BrightnessConfig),
    Threshold(monochrome_filter::ThresholdConfig),
}

impl Filter for PixelFilter {
    fn apply(&self, buffer: RasterBuffer) -> RasterBuffer {
        match self {
            PixelFilter::Grayscale(config) => config.apply(buffer),
            PixelFilter::Brighten(config) => config.apply(buffer),
            PixelFilter::Threshold(config) => config.apply(buffer),
        }
    }
}
