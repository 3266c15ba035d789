//! Acquire, transform and write back.
//!
//! [`FilterEngine`] owns the display surface and the source image for the
//! whole session. Every action runs one complete cycle before returning, so
//! there is never more than one writer.

use crate::{
    Action, Canvas, DisplaySurface, Filter, PixelFilter, PixelFilterError, PixelFilterResult,
    SourceImage,
    base_filter::{BRIGHTNESS_SHIFT, BrightnessConfig, GrayscaleConfig, GrayscaleWeights},
    monochrome_filter::{COLOR_THRESHOLD, ThresholdConfig},
};
use derivative::Derivative;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Tunables shared by the filters of one engine.
#[derive(Debug, Clone, PartialEq, Derivative, Setters, Serialize, Deserialize)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[serde(default)]
#[non_exhaustive]
pub struct FilterSettings {
    #[derivative(Default(value = "BRIGHTNESS_SHIFT"))]
    pub brightness_shift: f64,

    #[derivative(Default(value = "COLOR_THRESHOLD"))]
    pub threshold: f64,

    pub weights: GrayscaleWeights,
}

impl FilterSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// The filter bound to `action`, built from these settings.
    pub fn filter_for(&self, action: Action) -> Option<PixelFilter> {
        match action {
            Action::Grayscale => Some(PixelFilter::Grayscale(
                GrayscaleConfig::new().with_weights(self.weights),
            )),
            Action::Brighten => Some(PixelFilter::Brighten(
                BrightnessConfig::new().with_shift(self.brightness_shift),
            )),
            Action::Threshold => Some(PixelFilter::Threshold(
                ThresholdConfig::new()
                    .with_threshold(self.threshold)
                    .with_weights(self.weights),
            )),
            Action::Reset => None,
        }
    }
}

#[derive(Debug)]
pub struct FilterEngine<S: DisplaySurface> {
    surface: S,
    source: SourceImage,
    settings: FilterSettings,
    loaded: bool,
}

impl FilterEngine<Canvas> {
    /// Engine over a canvas sized to the source's natural dimensions.
    pub fn with_source_size(source: SourceImage, settings: FilterSettings) -> Self {
        let canvas = Canvas::new(source.width(), source.height());
        Self::new(canvas, source, settings)
    }
}

impl<S: DisplaySurface> FilterEngine<S> {
    pub fn new(surface: S, source: SourceImage, settings: FilterSettings) -> Self {
        Self {
            surface,
            source,
            settings,
            loaded: false,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Initial draw of the source. Only the first call has an effect.
    pub fn on_load(&mut self) {
        if self.loaded {
            log::debug!("source already drawn, ignoring repeated load");
            return;
        }

        self.surface.draw_image(&self.source, 0, 0);
        self.loaded = true;

        log::info!(
            "drew {}x{} source onto {}x{} surface",
            self.source.width(),
            self.source.height(),
            self.surface.width(),
            self.surface.height()
        );
    }

    /// Run `filter` over the full surface and write the result back at the origin.
    pub fn apply_filter(&mut self, filter: &impl Filter) {
        let buffer = self.surface.acquire();
        let buffer = filter.apply(buffer);
        self.surface.write(&buffer, 0, 0);
    }

    /// Redraw the pristine source, discarding every filter applied so far.
    pub fn reset(&mut self) {
        self.surface.draw_image(&self.source, 0, 0);
    }

    pub fn trigger(&mut self, action: Action) -> PixelFilterResult<()> {
        if !self.loaded {
            return Err(PixelFilterError::NotLoaded);
        }

        log::info!("trigger {action}");

        match self.settings.filter_for(action) {
            Some(filter) => self.apply_filter(&filter),
            None => self.reset(),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RasterBuffer, base_filter::filter_brighten, monochrome_filter::filter_threshold};
    use image::{Rgba, RgbaImage};

    fn source() -> SourceImage {
        let mut image = RgbaImage::new(2, 2);
        image.put_pixel(0, 0, Rgba([200, 100, 50, 255]));
        image.put_pixel(1, 0, Rgba([10, 10, 10, 255]));
        image.put_pixel(0, 1, Rgba([100, 100, 100, 128]));
        image.put_pixel(1, 1, Rgba([250, 240, 230, 0]));
        SourceImage::from_rgba(image)
    }

    fn loaded_engine() -> FilterEngine<Canvas> {
        let mut engine = FilterEngine::with_source_size(source(), FilterSettings::default());
        engine.on_load();
        engine
    }

    fn pixel(engine: &FilterEngine<Canvas>, x: u32, y: u32) -> Rgba<u8> {
        *engine.surface().pixels().get_pixel(x, y)
    }

    #[test]
    fn test_default_settings() {
        let settings = FilterSettings::new();
        assert_eq!(settings.brightness_shift, 50.0);
        assert!((settings.threshold - 85.0).abs() < 1e-4);
        assert_eq!(settings.weights, GrayscaleWeights::default());
    }

    #[test]
    fn test_trigger_before_load() {
        let mut engine = FilterEngine::with_source_size(source(), FilterSettings::default());
        assert!(matches!(
            engine.trigger(Action::Grayscale),
            Err(PixelFilterError::NotLoaded)
        ));
        assert_eq!(pixel(&engine, 0, 0), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_on_load_draws_once() {
        let mut engine = loaded_engine();
        assert!(engine.is_loaded());
        assert_eq!(pixel(&engine, 0, 0), Rgba([200, 100, 50, 255]));

        engine.trigger(Action::Threshold).unwrap();
        engine.on_load();
        assert_eq!(pixel(&engine, 0, 0), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_grayscale_action() {
        let mut engine = loaded_engine();
        engine.trigger(Action::Grayscale).unwrap();

        // 115.5 is written back rounded half to even.
        assert_eq!(pixel(&engine, 0, 0), Rgba([116, 116, 116, 255]));
        assert_eq!(pixel(&engine, 1, 1), Rgba([238, 238, 238, 0]));
    }

    #[test]
    fn test_grayscale_ties_round_to_even() {
        // 0.33 * 249 + 0.33 * 1 is exactly 82.5 in double precision.
        let image = RgbaImage::from_raw(
            3,
            1,
            vec![0, 1, 249, 255, 0, 2, 248, 255, 0, 9, 241, 255],
        )
        .unwrap();
        let mut engine =
            FilterEngine::with_source_size(SourceImage::from_rgba(image), FilterSettings::default());
        engine.on_load();
        engine.trigger(Action::Grayscale).unwrap();

        for x in 0..3 {
            assert_eq!(pixel(&engine, x, 0), Rgba([82, 82, 82, 255]));
        }
    }

    #[test]
    fn test_brighten_action_clamps_on_write() {
        let mut engine = loaded_engine();
        engine.trigger(Action::Brighten).unwrap();
        assert_eq!(pixel(&engine, 0, 0), Rgba([250, 150, 100, 255]));
        assert_eq!(pixel(&engine, 1, 1), Rgba([255, 255, 255, 0]));

        engine.trigger(Action::Brighten).unwrap();
        assert_eq!(pixel(&engine, 1, 0), Rgba([110, 110, 110, 255]));
    }

    #[test]
    fn test_threshold_action() {
        let mut engine = loaded_engine();
        engine.trigger(Action::Threshold).unwrap();

        assert_eq!(pixel(&engine, 0, 0), Rgba([255, 255, 255, 255]));
        assert_eq!(pixel(&engine, 1, 0), Rgba([0, 0, 0, 255]));
        assert_eq!(pixel(&engine, 0, 1), Rgba([255, 255, 255, 128]));

        let once = engine.surface().pixels().clone();
        engine.trigger(Action::Threshold).unwrap();
        assert_eq!(engine.surface().pixels(), &once);
    }

    #[test]
    fn test_reset_then_filter_matches_fresh_filter() {
        let mut fresh = loaded_engine();
        fresh.trigger(Action::Threshold).unwrap();

        let mut engine = loaded_engine();
        engine.trigger(Action::Brighten).unwrap();
        engine.trigger(Action::Grayscale).unwrap();
        engine.trigger(Action::Reset).unwrap();
        assert_eq!(engine.surface().pixels(), source().pixels());

        engine.trigger(Action::Threshold).unwrap();
        assert_eq!(engine.surface().pixels(), fresh.surface().pixels());
    }

    #[test]
    fn test_apply_plain_function() {
        let mut engine = loaded_engine();
        engine.apply_filter(&filter_brighten);
        engine.apply_filter(&filter_threshold);
        assert_eq!(pixel(&engine, 1, 0), Rgba([0, 0, 0, 255]));
        assert_eq!(pixel(&engine, 0, 0), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_custom_settings() {
        let settings = FilterSettings::new()
            .with_brightness_shift(5.0)
            .with_threshold(200.0);
        let mut engine = FilterEngine::with_source_size(source(), settings);
        engine.on_load();

        engine.trigger(Action::Brighten).unwrap();
        assert_eq!(pixel(&engine, 0, 0), Rgba([205, 105, 55, 255]));

        engine.trigger(Action::Threshold).unwrap();
        assert_eq!(pixel(&engine, 0, 0), Rgba([0, 0, 0, 255]));
        assert_eq!(pixel(&engine, 1, 1), Rgba([255, 255, 255, 0]));
    }

    #[test]
    fn test_canvas_smaller_than_source() {
        let mut engine = FilterEngine::new(Canvas::new(1, 1), source(), FilterSettings::default());
        engine.on_load();
        engine.trigger(Action::Brighten).unwrap();

        assert_eq!(engine.surface().acquire().len(), 4);
        assert_eq!(pixel(&engine, 0, 0), Rgba([250, 150, 100, 255]));
    }

    #[test]
    fn test_zero_size_surface() {
        let mut engine = FilterEngine::new(Canvas::new(0, 0), source(), FilterSettings::default());
        engine.on_load();
        for action in Action::all() {
            engine.trigger(*action).unwrap();
        }
        assert_eq!(engine.into_surface().acquire(), RasterBuffer::empty());
    }
}
