use crate::PixelFilterResult;
use image::{ImageReader, RgbaImage};
use std::path::Path;

/// The pristine image that filters are applied to and reset back to.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pixels: RgbaImage,
}

impl SourceImage {
    pub fn open(path: impl AsRef<Path>) -> PixelFilterResult<Self> {
        let path = path.as_ref();
        let pixels = ImageReader::open(path)?.decode()?.to_rgba8();

        log::info!(
            "loaded source image {} ({}x{})",
            path.display(),
            pixels.width(),
            pixels.height()
        );

        Ok(Self { pixels })
    }

    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}
