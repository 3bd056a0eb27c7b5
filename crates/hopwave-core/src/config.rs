use crate::color::Color;
use crate::geometry::Size;
use crate::measure::SizeConstraint;
use serde::{Deserialize, Serialize};

pub const DEFAULT_RADIUS: f64 = 15.0;
pub const DEFAULT_CIRCLE_COUNT: usize = 4;
pub const DEFAULT_WAVE_HEIGHT: f64 = 160.0;

/// Options shared by both indicators. `wave_height` is only read by the wave.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub radius: f64,
    pub circle_count: usize,
    pub colors: Vec<Color>,
    pub wave_height: f64,
    /// Exact width, otherwise the indicator's preferred width is used.
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            circle_count: DEFAULT_CIRCLE_COUNT,
            colors: Vec::new(),
            wave_height: DEFAULT_WAVE_HEIGHT,
            width: None,
            height: None,
        }
    }
}

impl IndicatorConfig {
    /// Color for slot `index`; black once the list runs out.
    pub fn color(&self, index: usize) -> Color {
        self.colors.get(index).copied().unwrap_or_default()
    }

    pub fn measure(&self, preferred: Size) -> Size {
        let width = self.width.map_or(SizeConstraint::Unspecified, SizeConstraint::Exactly);
        let height = self
            .height
            .map_or(SizeConstraint::Unspecified, SizeConstraint::Exactly);
        Size::new(
            width.reconcile(preferred.width),
            height.reconcile(preferred.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: IndicatorConfig = serde_json::from_str(r#"{"circle_count": 6}"#).unwrap();
        assert_eq!(config.circle_count, 6);
        assert_eq!(config.radius, DEFAULT_RADIUS);
        assert_eq!(config.wave_height, DEFAULT_WAVE_HEIGHT);
        assert!(config.colors.is_empty());
    }

    #[test]
    fn test_color_falls_back_to_black() {
        let config: IndicatorConfig =
            serde_json::from_str(r##"{"colors": ["#ff0000", "#00ff00"]}"##).unwrap();
        assert_eq!(config.color(0), Color::from_argb(0xff, 0xff, 0, 0));
        assert_eq!(config.color(1), Color::from_argb(0xff, 0, 0xff, 0));
        assert_eq!(config.color(2), Color::black());
        assert_eq!(config.color(99), Color::black());
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let result = serde_json::from_str::<IndicatorConfig>(r#"{"colors": ["nope"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_measure_uses_overrides() {
        let preferred = Size::new(200.0, 110.0);
        let config = IndicatorConfig::default();
        assert_eq!(config.measure(preferred), preferred);

        let config = IndicatorConfig {
            width: Some(320.0),
            ..Default::default()
        };
        assert_eq!(config.measure(preferred), Size::new(320.0, 110.0));
    }
}
