//! Display surfaces that filtered buffers are written back to.

use crate::{PixelFilterResult, RasterBuffer, SourceImage, raster::clamp_sample};
use image::{Rgba, RgbaImage};
use std::path::Path;

/// A fixed-size 2D raster target.
pub trait DisplaySurface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Read the whole surface.
    fn acquire(&self) -> RasterBuffer;

    /// Overwrite the region covered by `buffer` at the given origin.
    fn write(&mut self, buffer: &RasterBuffer, origin_x: u32, origin_y: u32);

    /// Copy `source` at its natural size to the given origin.
    fn draw_image(&mut self, source: &SourceImage, origin_x: u32, origin_y: u32);
}

/// In-memory RGBA8 surface. Anything falling outside it is clipped.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    /// A transparent black canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
        }
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn save(&self, path: impl AsRef<Path>) -> PixelFilterResult<()> {
        let path = path.as_ref();
        self.pixels.save(path)?;

        log::info!(
            "saved {}x{} canvas to {}",
            self.pixels.width(),
            self.pixels.height(),
            path.display()
        );
        Ok(())
    }

    fn clipped_extent(&self, width: u32, height: u32, origin_x: u32, origin_y: u32) -> (u32, u32) {
        (
            width.min(self.pixels.width().saturating_sub(origin_x)),
            height.min(self.pixels.height().saturating_sub(origin_y)),
        )
    }
}

impl DisplaySurface for Canvas {
    fn width(&self) -> u32 {
        self.pixels.width()
    }

    fn height(&self) -> u32 {
        self.pixels.height()
    }

    fn acquire(&self) -> RasterBuffer {
        RasterBuffer::from_rgba_image(&self.pixels)
    }

    fn write(&mut self, buffer: &RasterBuffer, origin_x: u32, origin_y: u32) {
        let (width, height) =
            self.clipped_extent(buffer.width(), buffer.height(), origin_x, origin_y);

        for y in 0..height {
            for x in 0..width {
                let Some(pixel) = buffer.pixel(x, y) else {
                    continue;
                };

                self.pixels.put_pixel(
                    origin_x + x,
                    origin_y + y,
                    Rgba([
                        clamp_sample(pixel.red()),
                        clamp_sample(pixel.green()),
                        clamp_sample(pixel.blue()),
                        clamp_sample(pixel.alpha()),
                    ]),
                );
            }
        }
    }

    fn draw_image(&mut self, source: &SourceImage, origin_x: u32, origin_y: u32) {
        let (width, height) =
            self.clipped_extent(source.width(), source.height(), origin_x, origin_y);

        for y in 0..height {
            for x in 0..width {
                let pixel = *source.pixels().get_pixel(x, y);
                self.pixels.put_pixel(origin_x + x, origin_y + y, pixel);
            }
        }
    }
}
