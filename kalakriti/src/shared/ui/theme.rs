use iced::theme::Palette;
use iced::{Color, Theme};

/// Raw dashboard palette as hex strings, the shape stored in settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ColorPalette {
    pub(crate) background: String,
    pub(crate) foreground: String,
    pub(crate) card: String,
    pub(crate) muted: String,
    pub(crate) muted_foreground: String,
    pub(crate) border: String,
    pub(crate) primary: String,
    pub(crate) primary_foreground: String,
    pub(crate) secondary: String,
    pub(crate) accent: String,
    pub(crate) success: String,
    pub(crate) warning: String,
    pub(crate) danger: String,
    pub(crate) overlay: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            background: String::from("#FBF7F2"),
            foreground: String::from("#2B1D14"),
            card: String::from("#FFFFFF"),
            muted: String::from("#F1E9DF"),
            muted_foreground: String::from("#7A6A5C"),
            border: String::from("#E4D7C8"),
            // BRAND COLORS
            primary: String::from("#C2410C"),
            primary_foreground: String::from("#FFF7ED"),
            secondary: String::from("#0F766E"),
            accent: String::from("#A21CAF"),
            // STATUS COLORS
            success: String::from("#16A34A"),
            warning: String::from("#D97706"),
            danger: String::from("#DC2626"),
            overlay: String::from("#1C130D"),
        }
    }
}

impl ColorPalette {
    /// Mutable access to a palette slot by its settings key.
    pub(crate) fn slot_mut(&mut self, key: &str) -> Option<&mut String> {
        let slot = match key {
            "background" => &mut self.background,
            "foreground" => &mut self.foreground,
            "card" => &mut self.card,
            "muted" => &mut self.muted,
            "muted_foreground" => &mut self.muted_foreground,
            "border" => &mut self.border,
            "primary" => &mut self.primary,
            "primary_foreground" => &mut self.primary_foreground,
            "secondary" => &mut self.secondary,
            "accent" => &mut self.accent,
            "success" => &mut self.success,
            "warning" => &mut self.warning,
            "danger" => &mut self.danger,
            "overlay" => &mut self.overlay,
            _ => return None,
        };
        Some(slot)
    }
}

/// Resolved iced colors for the dashboard palette.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IcedColorPalette {
    pub(crate) background: Color,
    pub(crate) foreground: Color,
    pub(crate) card: Color,
    pub(crate) muted: Color,
    pub(crate) muted_foreground: Color,
    pub(crate) border: Color,
    pub(crate) primary: Color,
    pub(crate) primary_foreground: Color,
    pub(crate) secondary: Color,
    pub(crate) accent: Color,
    pub(crate) success: Color,
    pub(crate) warning: Color,
    pub(crate) danger: Color,
    pub(crate) overlay: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        let fallback = ColorPalette::default();
        let resolve = |value: &str, default: &str| {
            parse_hex_color(value)
                .or_else(|| parse_hex_color(default))
                .unwrap_or(Color::BLACK)
        };

        Self {
            background: resolve(&p.background, &fallback.background),
            foreground: resolve(&p.foreground, &fallback.foreground),
            card: resolve(&p.card, &fallback.card),
            muted: resolve(&p.muted, &fallback.muted),
            muted_foreground: resolve(
                &p.muted_foreground,
                &fallback.muted_foreground,
            ),
            border: resolve(&p.border, &fallback.border),
            primary: resolve(&p.primary, &fallback.primary),
            primary_foreground: resolve(
                &p.primary_foreground,
                &fallback.primary_foreground,
            ),
            secondary: resolve(&p.secondary, &fallback.secondary),
            accent: resolve(&p.accent, &fallback.accent),
            success: resolve(&p.success, &fallback.success),
            warning: resolve(&p.warning, &fallback.warning),
            danger: resolve(&p.danger, &fallback.danger),
            overlay: resolve(&p.overlay, &fallback.overlay),
        }
    }
}

/// Optional overrides for widget/component styling.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct StyleOverrides {
    pub(crate) foreground: Option<Color>,
}

/// Global application theme.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::from_palette(String::from("kalakriti"), &ColorPalette::default())
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.primary,
            success: palette.success,
            danger: palette.danger,
            warning: palette.warning,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    /// Build an application theme from a raw palette.
    pub(crate) fn from_palette(id: String, raw_palette: &ColorPalette) -> Self {
        Self {
            id,
            iced_palette: IcedColorPalette::from(raw_palette),
        }
    }

    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed through App -> Widget -> Component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
    pub(crate) overrides: Option<StyleOverrides>,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self {
            theme,
            overrides: None,
        }
    }

    /// Same theme with a forced foreground, for controls on dark overlays.
    pub(crate) fn with_foreground(self, color: Color) -> Self {
        Self {
            overrides: Some(StyleOverrides {
                foreground: Some(color),
            }),
            ..self
        }
    }
}

/// Manages the current global theme.
#[derive(Debug, Clone)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new() -> Self {
        Self {
            current: AppTheme::default(),
        }
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }

    /// Replace the current theme with a custom palette.
    pub(crate) fn set_custom_palette(&mut self, palette: &ColorPalette) {
        self.current = AppTheme::from_palette(String::from("custom"), palette);
    }
}

/// Parse a `#RRGGBB` hex string into a color.
pub(crate) fn parse_hex_color(value: &str) -> Option<Color> {
    if !is_valid_hex_color(value) {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&value[range], 16).ok()
    };

    Some(Color::from_rgb8(channel(1..3)?, channel(3..5)?, channel(5..7)?))
}

/// Return whether the value is a `#RRGGBB` hex color.
pub(crate) fn is_valid_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|ch| ch.is_ascii_hexdigit())
}

/// Return a copy of `color` with the given alpha.
pub(crate) fn with_alpha(mut color: Color, alpha: f32) -> Color {
    color.a = alpha;
    color
}
