use iced::widget::{button, container, scrollable};
use iced::{Background, Border, Color};

use super::theme::{IcedColorPalette, with_alpha};

const CARD_RADIUS: f32 = 10.0;
const CONTROL_RADIUS: f32 = 6.0;
const BADGE_RADIUS: f32 = 999.0;

/// Visual tone shared by badges and status labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tone {
    Neutral,
    Primary,
    Secondary,
    Accent,
    Success,
    Warning,
    Danger,
}

impl Tone {
    /// Base color of the tone in the given palette.
    pub(crate) fn color(self, palette: &IcedColorPalette) -> Color {
        match self {
            Tone::Neutral => palette.muted_foreground,
            Tone::Primary => palette.primary,
            Tone::Secondary => palette.secondary,
            Tone::Accent => palette.accent,
            Tone::Success => palette.success,
            Tone::Warning => palette.warning,
            Tone::Danger => palette.danger,
        }
    }
}

/// Button variants used across pages and the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ButtonVariant {
    Primary,
    Outline,
    Ghost,
}

pub(crate) fn card_style(
    palette: IcedColorPalette,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    move |_| container::Style {
        background: Some(palette.card.into()),
        text_color: Some(palette.foreground),
        border: Border {
            width: 1.0,
            color: palette.border,
            radius: CARD_RADIUS.into(),
        },
        ..Default::default()
    }
}

/// Highlighted card with a tinted background, used for welcome and help
/// panels.
pub(crate) fn tinted_card_style(
    palette: IcedColorPalette,
    tone: Tone,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let tint = tone.color(&palette);
    move |_| container::Style {
        background: Some(with_alpha(tint, 0.08).into()),
        text_color: Some(palette.foreground),
        border: Border {
            width: 1.0,
            color: with_alpha(tint, 0.25),
            radius: CARD_RADIUS.into(),
        },
        ..Default::default()
    }
}

pub(crate) fn muted_row_style(
    palette: IcedColorPalette,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    move |_| container::Style {
        background: Some(with_alpha(palette.muted, 0.6).into()),
        border: Border {
            radius: CONTROL_RADIUS.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

pub(crate) fn badge_style(
    palette: IcedColorPalette,
    tone: Tone,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let color = tone.color(&palette);
    move |_| container::Style {
        background: Some(with_alpha(color, 0.14).into()),
        text_color: Some(color),
        border: Border {
            radius: BADGE_RADIUS.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

pub(crate) fn button_style(
    palette: IcedColorPalette,
    variant: ButtonVariant,
) -> impl Fn(&iced::Theme, button::Status) -> button::Style + 'static {
    move |_, status| {
        let hovered =
            matches!(status, button::Status::Hovered | button::Status::Pressed);
        let (background, text_color, border_color) = match variant {
            ButtonVariant::Primary => {
                let background = if hovered {
                    with_alpha(palette.primary, 0.9)
                } else {
                    palette.primary
                };
                (Some(background), palette.primary_foreground, background)
            },
            ButtonVariant::Outline => {
                let background =
                    hovered.then(|| with_alpha(palette.primary, 0.08));
                (background, palette.foreground, palette.border)
            },
            ButtonVariant::Ghost => {
                let background = hovered.then(|| with_alpha(palette.muted, 0.9));
                (background, palette.foreground, Color::TRANSPARENT)
            },
        };

        button::Style {
            background: background.map(Background::Color),
            text_color,
            border: Border {
                width: 1.0,
                color: border_color,
                radius: CONTROL_RADIUS.into(),
            },
            ..Default::default()
        }
    }
}

pub(crate) fn thin_scroll_style(
    palette: IcedColorPalette,
) -> impl Fn(&iced::Theme, scrollable::Status) -> scrollable::Style + 'static {
    move |theme, status| {
        let mut style = scrollable::default(theme, status);
        let radius = iced::border::Radius::from(0.0);

        style.vertical_rail.border.radius = radius;
        style.vertical_rail.scroller.border.radius = radius;

        let mut scroller_color = match style.vertical_rail.scroller.background {
            Background::Color(color) => color,
            _ => palette.muted_foreground,
        };
        scroller_color.a = (scroller_color.a * 0.7).min(1.0);
        style.vertical_rail.scroller.background =
            Background::Color(scroller_color);

        style
    }
}

#[cfg(test)]
mod tests {
    use iced::Background;
    use iced::widget::button;

    use super::{ButtonVariant, Tone, button_style};
    use crate::shared::ui::theme::AppTheme;

    #[test]
    fn given_idle_outline_button_when_building_style_then_background_is_empty()
    {
        let theme = AppTheme::default();
        let palette = *theme.iced_palette();
        let style = button_style(palette, ButtonVariant::Outline)(
            &iced::Theme::Light,
            button::Status::Active,
        );

        assert!(style.background.is_none());
        assert_eq!(style.border.color, palette.border);
    }

    #[test]
    fn given_primary_button_when_building_style_then_uses_primary_colors() {
        let theme = AppTheme::default();
        let palette = *theme.iced_palette();
        let style = button_style(palette, ButtonVariant::Primary)(
            &iced::Theme::Light,
            button::Status::Active,
        );

        assert_eq!(style.background, Some(Background::Color(palette.primary)));
        assert_eq!(style.text_color, palette.primary_foreground);
    }

    #[test]
    fn given_tone_when_resolving_color_then_maps_to_palette_slot() {
        let theme = AppTheme::default();
        let palette = theme.iced_palette();

        assert_eq!(Tone::Danger.color(palette), palette.danger);
        assert_eq!(Tone::Secondary.color(palette), palette.secondary);
    }
}
