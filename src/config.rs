use crate::error::PlotError;
use eframe::egui::{self, Color32};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ViewConfig {
    pub initial_offset: egui::Vec2,
    pub initial_surface: egui::Vec2,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub zoom_in_factor: f32,
    pub zoom_out_factor: f32,
    pub drag_interval: Duration,
    /// Pixel distance between ticks at zoom 1.0.
    pub base_tick_spacing: f32,
    pub min_tick_spacing: f32,
    pub max_tick_spacing: f32,
    pub max_decimal_places: u32,
    pub tick_half_length: f32,
    pub label_top: f32,
    pub label_font_size: f32,
    pub axis_color: Color32,
    pub plot_color: Color32,
    pub plot_end: egui::Vec2,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            initial_offset: egui::vec2(300.0, 225.0),
            initial_surface: egui::vec2(600.0, 450.0),
            min_zoom: 0.001,
            max_zoom: 1000.0,
            zoom_in_factor: 1.1,
            zoom_out_factor: 0.9,
            drag_interval: Duration::from_millis(20),
            base_tick_spacing: 40.0,
            min_tick_spacing: 40.0,
            max_tick_spacing: 80.0,
            max_decimal_places: 5,
            tick_half_length: 5.0,
            label_top: 6.0,
            label_font_size: 12.0,
            axis_color: Color32::from_rgb(128, 128, 128),
            plot_color: Color32::BLACK,
            plot_end: egui::vec2(40.0, 40.0),
        }
    }
}

impl ViewConfig {
    pub fn validate(&self) -> Result<(), PlotError> {
        let (min, max) = (self.min_zoom, self.max_zoom);
        if !min.is_finite() || !max.is_finite() || min <= 0.0 || min >= max {
            return Err(PlotError::InvalidZoomRange { min, max });
        }

        let (min, max) = (self.min_tick_spacing, self.max_tick_spacing);
        // Halving lands inside the band only if it spans at least one octave.
        if !min.is_finite() || !max.is_finite() || min <= 0.0 || max < min * 2.0 {
            return Err(PlotError::InvalidTickBand { min, max });
        }

        let zoom_in_ok = self.zoom_in_factor.is_finite() && self.zoom_in_factor > 1.0;
        let zoom_out_ok = self.zoom_out_factor > 0.0 && self.zoom_out_factor < 1.0;
        if !zoom_in_ok || !zoom_out_ok {
            return Err(PlotError::InvalidScrollFactors {
                zoom_in: self.zoom_in_factor,
                zoom_out: self.zoom_out_factor,
            });
        }

        Ok(())
    }

    pub fn clamp_zoom(&self, zoom: f32) -> f32 {
        if zoom.is_nan() {
            return self.min_zoom;
        }
        zoom.clamp(self.min_zoom, self.max_zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(ViewConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_inverted_zoom_range() {
        let config = ViewConfig {
            min_zoom: 10.0,
            max_zoom: 1.0,
            ..Default::default()
        };

        assert!(matches!(
            config.validate(),
            Err(PlotError::InvalidZoomRange { .. })
        ));
    }

    #[test]
    fn rejects_zero_min_zoom() {
        let config = ViewConfig {
            min_zoom: 0.0,
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_band_narrower_than_an_octave() {
        let config = ViewConfig {
            min_tick_spacing: 40.0,
            max_tick_spacing: 60.0,
            ..Default::default()
        };

        assert!(matches!(
            config.validate(),
            Err(PlotError::InvalidTickBand { .. })
        ));
    }

    #[test]
    fn rejects_scroll_factors_that_do_not_zoom() {
        let config = ViewConfig {
            zoom_out_factor: 1.2,
            ..Default::default()
        };

        assert!(matches!(
            config.validate(),
            Err(PlotError::InvalidScrollFactors { .. })
        ));
    }

    #[test]
    fn clamp_keeps_zoom_positive_and_bounded() {
        let config = ViewConfig::default();
        assert_eq!(config.clamp_zoom(0.0), config.min_zoom);
        assert_eq!(config.clamp_zoom(-3.0), config.min_zoom);
        assert_eq!(config.clamp_zoom(f32::INFINITY), config.max_zoom);
        assert_eq!(config.clamp_zoom(f32::NAN), config.min_zoom);
        assert_eq!(config.clamp_zoom(2.5), 2.5);
    }
}
