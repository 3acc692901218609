use iced::Font;
use iced::font::Weight;

const DEFAULT_UI_FONT_SIZE: f32 = 14.0;
const MIN_UI_FONT_SIZE: f32 = 10.0;
const MAX_UI_FONT_SIZE: f32 = 24.0;

/// UI font configuration.
#[derive(Debug, Clone)]
pub(crate) struct UiFonts {
    pub(crate) font_type: Font,
    pub(crate) size: f32,
}

impl Default for UiFonts {
    fn default() -> Self {
        Self {
            font_type: Font::default(),
            size: DEFAULT_UI_FONT_SIZE,
        }
    }
}

/// Heading font configuration.
#[derive(Debug, Clone)]
pub(crate) struct HeadingFonts {
    pub(crate) font_type: Font,
    pub(crate) scale: f32,
}

impl Default for HeadingFonts {
    fn default() -> Self {
        Self {
            font_type: Font {
                weight: Weight::Bold,
                ..Font::default()
            },
            scale: 1.7,
        }
    }
}

/// Combined font configuration for body text and headings.
#[derive(Debug, Default, Clone)]
pub(crate) struct FontsConfig {
    pub(crate) ui: UiFonts,
    pub(crate) heading: HeadingFonts,
}

impl FontsConfig {
    /// Build fonts with a configured body size, clamped to a readable range.
    pub(crate) fn with_ui_size(size: f32) -> Self {
        let mut fonts = Self::default();
        fonts.ui.size = size.clamp(MIN_UI_FONT_SIZE, MAX_UI_FONT_SIZE);
        fonts
    }

    /// Size used for page and card titles.
    pub(crate) fn heading_size(&self) -> f32 {
        self.ui.size * self.heading.scale
    }
}

#[cfg(test)]
mod tests {
    use super::FontsConfig;

    #[test]
    fn given_out_of_range_size_when_building_fonts_then_size_is_clamped() {
        assert_eq!(FontsConfig::with_ui_size(4.0).ui.size, 10.0);
        assert_eq!(FontsConfig::with_ui_size(80.0).ui.size, 24.0);
        assert_eq!(FontsConfig::with_ui_size(16.0).ui.size, 16.0);
    }
}
