use crate::config::ViewConfig;
use crate::format::format_tick_label;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSpacing {
    /// Screen pixels between adjacent ticks.
    pub spacing: f32,
    /// Logical units represented by one spacing.
    pub step: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Pixel position relative to the origin.
    pub position: f32,
    pub value: f32,
    pub label: String,
}

pub fn tick_spacing(zoom_x: f32, config: &ViewConfig) -> TickSpacing {
    let zoom_x = config.clamp_zoom(zoom_x);
    let mut spacing = config.base_tick_spacing * zoom_x;
    let mut step = 1.0_f32;

    while spacing > config.max_tick_spacing {
        spacing /= 2.0;
        step /= 2.0;
    }

    while spacing < config.min_tick_spacing {
        spacing *= 2.0;
        step *= 2.0;
    }

    TickSpacing { spacing, step }
}

/// `ceil(log2(zoom)) - 1`, clamped to `[0, max_decimal_places]`.
pub fn decimal_places(zoom_x: f32, config: &ViewConfig) -> u32 {
    let zoom_x = config.clamp_zoom(zoom_x);
    let exponent = zoom_x.log2().ceil() - 1.0;
    exponent.clamp(0.0, config.max_decimal_places as f32) as u32
}

/// Ticks at every multiple of the spacing between `left` and `right`,
/// both given in pixels relative to the origin.
pub fn visible_ticks(left: f32, right: f32, zoom_x: f32, config: &ViewConfig) -> Vec<Tick> {
    let TickSpacing { spacing, step } = tick_spacing(zoom_x, config);
    let places = decimal_places(zoom_x, config);

    if right < left {
        return Vec::new();
    }

    let first = (left / spacing).floor() as i64;
    let last = (right / spacing).floor() as i64;

    (first..=last)
        .map(|index| {
            let value = index as f32 * step;
            Tick {
                position: index as f32 * spacing,
                value,
                label: format_tick_label(value, places),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_zooms(config: &ViewConfig) -> Vec<f32> {
        let mut zooms = Vec::new();
        let mut zoom = config.min_zoom;
        while zoom <= config.max_zoom {
            zooms.push(zoom);
            zoom *= 1.07;
        }
        zooms.extend([0.5, 1.0, 2.0, 3.0, 8.0, 64.0, 100.0]);
        zooms
    }

    #[test]
    fn unit_zoom_starts_inside_band() {
        let config = ViewConfig::default();
        let spacing = tick_spacing(1.0, &config);
        assert_eq!(spacing, TickSpacing { spacing: 40.0, step: 1.0 });
        assert_eq!(decimal_places(1.0, &config), 0);
    }

    #[test]
    fn zoom_eight_halves_twice() {
        let config = ViewConfig::default();
        let spacing = tick_spacing(8.0, &config);
        assert_eq!(spacing, TickSpacing { spacing: 80.0, step: 0.25 });
        assert_eq!(decimal_places(8.0, &config), 2);
    }

    #[test]
    fn small_zoom_doubles_step() {
        let config = ViewConfig::default();
        let spacing = tick_spacing(0.3, &config);
        assert!((spacing.spacing - 48.0).abs() < 1e-4);
        assert_eq!(spacing.step, 4.0);
        assert_eq!(decimal_places(0.3, &config), 0);
    }

    #[test]
    fn spacing_converges_into_band_for_all_zooms() {
        let config = ViewConfig::default();
        for zoom in sample_zooms(&config) {
            let TickSpacing { spacing, step } = tick_spacing(zoom, &config);
            assert!(
                (config.min_tick_spacing..=config.max_tick_spacing).contains(&spacing),
                "spacing {spacing} out of band at zoom {zoom}"
            );
            let expected = config.base_tick_spacing * zoom * step;
            assert!(
                (spacing - expected).abs() <= expected * 1e-4,
                "spacing and step drifted apart at zoom {zoom}"
            );
        }
    }

    #[test]
    fn degenerate_zoom_still_terminates() {
        let config = ViewConfig::default();
        for zoom in [0.0, -1.0, f32::INFINITY, f32::NAN, f32::MIN_POSITIVE] {
            let TickSpacing { spacing, .. } = tick_spacing(zoom, &config);
            assert!(spacing >= config.min_tick_spacing && spacing <= config.max_tick_spacing);
        }
    }

    #[test]
    fn decimal_places_are_bounded_and_monotonic() {
        let config = ViewConfig::default();
        let mut zooms = sample_zooms(&config);
        zooms.sort_by(|a, b| a.total_cmp(b));

        let mut previous = 0;
        for zoom in zooms {
            let places = decimal_places(zoom, &config);
            assert!(places <= config.max_decimal_places);
            assert!(places >= previous, "places decreased at zoom {zoom}");
            previous = places;
        }
    }

    #[test]
    fn decimal_places_step_at_powers_of_two() {
        let config = ViewConfig::default();
        assert_eq!(decimal_places(2.0, &config), 0);
        assert_eq!(decimal_places(2.1, &config), 1);
        assert_eq!(decimal_places(4.0, &config), 1);
        assert_eq!(decimal_places(16.0, &config), 3);
        assert_eq!(decimal_places(1000.0, &config), 5);
    }

    #[test]
    fn unit_zoom_labels_integers() {
        let config = ViewConfig::default();
        let ticks = visible_ticks(-300.0, 300.0, 1.0, &config);

        assert_eq!(ticks.len(), 16);
        assert_eq!(ticks.first().map(|tick| tick.position), Some(-320.0));
        assert_eq!(ticks.last().map(|tick| tick.position), Some(280.0));

        let origin = ticks.iter().find(|tick| tick.position == 0.0);
        assert_eq!(origin.map(|tick| tick.label.as_str()), Some("0"));

        let one = ticks.iter().find(|tick| tick.position == 40.0);
        assert_eq!(one.map(|tick| tick.label.as_str()), Some("1"));

        let minus_two = ticks.iter().find(|tick| tick.position == -80.0);
        assert_eq!(minus_two.map(|tick| tick.label.as_str()), Some("-2"));
    }

    #[test]
    fn zoomed_in_labels_carry_decimals() {
        let config = ViewConfig::default();
        let ticks = visible_ticks(0.0, 240.0, 8.0, &config);
        let labels: Vec<&str> = ticks.iter().map(|tick| tick.label.as_str()).collect();
        assert_eq!(labels, vec!["0.0", "0.25", "0.5", "0.75"]);
    }

    #[test]
    fn empty_range_yields_no_ticks() {
        let config = ViewConfig::default();
        assert!(visible_ticks(10.0, -10.0, 1.0, &config).is_empty());
    }
}
