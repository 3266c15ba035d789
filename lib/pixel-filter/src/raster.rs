//! Flat RGBA sample buffers.
//!
//! A [`RasterBuffer`] stores `width * height` pixels as consecutive
//! `[R, G, B, A]` samples. Samples are kept as `f64` and are not clamped, so a
//! filter may leave fractional or out-of-range values behind. They are only
//! resolved to bytes when written to a display surface.

use crate::{PixelFilterError, PixelFilterResult};
use image::RgbaImage;
use std::slice::{ChunksExact, ChunksExactMut};

/// Number of samples in one pixel.
pub const CHANNELS: usize = 4;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    samples: Vec<f64>,
}

impl RasterBuffer {
    pub fn new(width: u32, height: u32, samples: Vec<f64>) -> PixelFilterResult<Self> {
        let expected = width as usize * height as usize * CHANNELS;
        if samples.len() != expected {
            return Err(PixelFilterError::InvalidBuffer(format!(
                "{}x{} needs {} samples, got {}",
                width,
                height,
                expected,
                samples.len()
            )));
        }

        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Wrap samples that carry no geometry as a single row of pixels.
    pub fn from_samples(samples: Vec<f64>) -> PixelFilterResult<Self> {
        if samples.len() % CHANNELS != 0 {
            return Err(PixelFilterError::InvalidBuffer(format!(
                "sample count {} is not a multiple of {}",
                samples.len(),
                CHANNELS
            )));
        }

        let width = u32::try_from(samples.len() / CHANNELS).map_err(|_| {
            PixelFilterError::InvalidBuffer(format!("{} samples do not fit one row", samples.len()))
        })?;

        let height = if width == 0 { 0 } else { 1 };
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_rgba_image(image: &RgbaImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            samples: image.as_raw().iter().map(|&v| v as f64).collect(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn pixel_count(&self) -> usize {
        self.samples.len() / CHANNELS
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel<'_>> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let offset = (y as usize * self.width as usize + x as usize) * CHANNELS;
        Some(Pixel(&self.samples[offset..offset + CHANNELS]))
    }

    pub fn pixels(&self) -> Pixels<'_> {
        Pixels(self.samples.chunks_exact(CHANNELS))
    }

    pub fn pixels_mut(&mut self) -> PixelsMut<'_> {
        PixelsMut(self.samples.chunks_exact_mut(CHANNELS))
    }
}

/// Resolve a sample the way an 8-bit clamped array does on assignment:
/// NaN becomes 0, the value is clamped to `[0, 255]` and rounded half to even.
pub fn clamp_sample(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }

    value.clamp(0.0, 255.0).round_ties_even() as u8
}

#[derive(Debug, Clone, Copy)]
pub struct Pixel<'a>(&'a [f64]);

impl Pixel<'_> {
    pub fn red(&self) -> f64 {
        self.0[0]
    }

    pub fn green(&self) -> f64 {
        self.0[1]
    }

    pub fn blue(&self) -> f64 {
        self.0[2]
    }

    pub fn alpha(&self) -> f64 {
        self.0[3]
    }
}

#[derive(Debug)]
pub struct PixelMut<'a>(&'a mut [f64]);

impl PixelMut<'_> {
    pub fn red(&self) -> f64 {
        self.0[0]
    }

    pub fn green(&self) -> f64 {
        self.0[1]
    }

    pub fn blue(&self) -> f64 {
        self.0[2]
    }

    pub fn alpha(&self) -> f64 {
        self.0[3]
    }

    /// Set the color channels. Alpha is left alone.
    pub fn set_rgb(&mut self, red: f64, green: f64, blue: f64) {
        self.0[0] = red;
        self.0[1] = green;
        self.0[2] = blue;
    }
}

pub struct Pixels<'a>(ChunksExact<'a, f64>);

impl<'a> Iterator for Pixels<'a> {
    type Item = Pixel<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Pixel)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

pub struct PixelsMut<'a>(ChunksExactMut<'a, f64>);

impl<'a> Iterator for PixelsMut<'a> {
    type Item = PixelMut<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(PixelMut)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}
