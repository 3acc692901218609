use iced::widget::{container, text};
use iced::{Element, Theme};

use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::style::{self, Tone};
use crate::shared::ui::theme::ThemeProps;

const BADGE_PADDING_Y: f32 = 2.0;
const BADGE_PADDING_X: f32 = 8.0;
const BADGE_TEXT_SCALE: f32 = 0.75;

/// Props for rendering a badge.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BadgeProps<'a> {
    pub(crate) label: &'a str,
    pub(crate) tone: Tone,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render a pill-shaped status label.
pub(crate) fn view<'a, Message: 'a>(
    props: BadgeProps<'a>,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();

    container(text(props.label).size(props.fonts.ui.size * BADGE_TEXT_SCALE))
        .padding([BADGE_PADDING_Y, BADGE_PADDING_X])
        .style(style::badge_style(palette, props.tone))
        .into()
}
