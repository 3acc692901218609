use serde::Deserialize;
use serde_json::Value;

use crate::shared::ui::theme::{ColorPalette, is_valid_hex_color};

const DEFAULT_FONT_SIZE: f32 = 14.0;

/// User settings read at startup.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AppConfig {
    pub(crate) palette: ColorPalette,
    pub(crate) font_size: f32,
    /// Path opened at startup in place of the splash.
    pub(crate) start_route: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            palette: ColorPalette::default(),
            font_size: DEFAULT_FONT_SIZE,
            start_route: None,
        }
    }
}

/// Typed view of the `ui` settings section.
#[derive(Debug, Default, Deserialize)]
struct UiSection {
    #[serde(default)]
    font_size: Option<f32>,
}

impl AppConfig {
    /// Build settings from parsed JSON. Each key falls back to its default
    /// on its own; unknown keys are ignored.
    pub(crate) fn from_json(value: &Value) -> Self {
        let mut config = AppConfig::default();

        if let Some(palette) = value
            .get("theme")
            .and_then(|theme| theme.get("palette"))
            .and_then(Value::as_object)
        {
            for (key, entry) in palette {
                let Some(color) = entry.as_str() else {
                    log::warn!("theme.palette.{key} is not a string");
                    continue;
                };
                if !is_valid_hex_color(color) {
                    log::warn!("theme.palette.{key} is not a hex color: {color}");
                    continue;
                }
                match config.palette.slot_mut(key) {
                    Some(slot) => *slot = color.to_string(),
                    None => log::debug!("unknown palette key {key}"),
                }
            }
        }

        let ui = match value.get("ui") {
            Some(ui) => serde_json::from_value::<UiSection>(ui.clone())
                .unwrap_or_else(|err| {
                    log::warn!("ui settings ignored: {err}");
                    UiSection::default()
                }),
            None => UiSection::default(),
        };
        if let Some(size) = ui
            .font_size
            .filter(|size| size.is_finite() && *size > 0.0)
        {
            config.font_size = size;
        }

        if let Some(route) = value
            .get("start_route")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|route| !route.is_empty())
        {
            config.start_route = Some(route.to_string());
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::AppConfig;
    use crate::shared::ui::theme::ColorPalette;

    #[test]
    fn given_empty_object_when_parsed_then_defaults_are_used() {
        assert_eq!(AppConfig::from_json(&json!({})), AppConfig::default());
    }

    #[test]
    fn given_full_settings_when_parsed_then_every_key_is_applied() {
        let config = AppConfig::from_json(&json!({
            "theme": { "palette": { "primary": "#112233" } },
            "ui": { "font_size": 16 },
            "start_route": "/dashboard/art-auction",
        }));

        assert_eq!(config.palette.primary, "#112233");
        assert_eq!(config.font_size, 16.0);
        assert_eq!(
            config.start_route.as_deref(),
            Some("/dashboard/art-auction")
        );
    }

    #[test]
    fn given_invalid_values_when_parsed_then_each_key_falls_back() {
        let config = AppConfig::from_json(&json!({
            "theme": { "palette": {
                "primary": "orange",
                "accent": 12,
                "sparkle": "#FFFFFF",
                "secondary": "#0A0B0C",
            } },
            "ui": { "font_size": "large" },
            "start_route": "   ",
        }));
        let defaults = ColorPalette::default();

        assert_eq!(config.palette.primary, defaults.primary);
        assert_eq!(config.palette.accent, defaults.accent);
        assert_eq!(config.palette.secondary, "#0A0B0C");
        assert_eq!(config.font_size, AppConfig::default().font_size);
        assert_eq!(config.start_route, None);
    }
}
