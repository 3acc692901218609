use iced::widget::{column, container, text};
use iced::{Element, Length, Theme};

use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::style::{self, Tone};
use crate::shared::ui::theme::ThemeProps;

const STAT_CARD_PADDING: f32 = 20.0;
const STAT_VALUE_SCALE: f32 = 1.7;

/// Props for a single metric card.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StatCardProps<'a> {
    pub(crate) title: &'a str,
    pub(crate) value: &'a str,
    pub(crate) change: &'a str,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render a metric card: title, large value, and change line.
pub(crate) fn view<'a, Message: 'a>(
    props: StatCardProps<'a>,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let change_color = change_tone(props.change).color(&palette);

    let body = column![
        text(props.title)
            .size(props.fonts.ui.size * 0.9)
            .color(palette.muted_foreground),
        text(props.value)
            .size(props.fonts.ui.size * STAT_VALUE_SCALE)
            .font(props.fonts.heading.font_type),
        text(props.change)
            .size(props.fonts.ui.size * 0.85)
            .color(change_color),
    ]
    .spacing(4);

    container(body)
        .width(Length::Fill)
        .padding(STAT_CARD_PADDING)
        .style(style::card_style(palette))
        .into()
}

/// Tone for a change label: falling values read as danger.
pub(crate) fn change_tone(change: &str) -> Tone {
    let trimmed = change.trim_start();
    if trimmed.starts_with('-') {
        Tone::Danger
    } else if trimmed.starts_with('+') {
        Tone::Success
    } else {
        Tone::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::change_tone;
    use crate::shared::ui::style::Tone;

    #[test]
    fn given_signed_changes_when_resolving_tone_then_sign_decides() {
        assert_eq!(change_tone("+18% this month"), Tone::Success);
        assert_eq!(change_tone("-12%"), Tone::Danger);
        assert_eq!(change_tone("0%"), Tone::Neutral);
    }
}
