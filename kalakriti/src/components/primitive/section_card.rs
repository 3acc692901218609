use iced::widget::{column, container, text};
use iced::{Element, Length, Theme};

use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::style;
use crate::shared::ui::theme::ThemeProps;

const SECTION_CARD_PADDING: f32 = 20.0;
const SECTION_TITLE_SCALE: f32 = 1.2;

/// Props for a titled card wrapping arbitrary content.
pub(crate) struct SectionCardProps<'a, Message> {
    pub(crate) title: &'a str,
    pub(crate) description: &'a str,
    pub(crate) content: Element<'a, Message, Theme, iced::Renderer>,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render a card with a header (title and description) above its content.
pub(crate) fn view<'a, Message: 'a>(
    props: SectionCardProps<'a, Message>,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();

    let header = column![
        text(props.title)
            .size(props.fonts.ui.size * SECTION_TITLE_SCALE)
            .font(props.fonts.heading.font_type),
        text(props.description)
            .size(props.fonts.ui.size * 0.9)
            .color(palette.muted_foreground),
    ]
    .spacing(2);

    container(column![header, props.content].spacing(16))
        .width(Length::Fill)
        .padding(SECTION_CARD_PADDING)
        .style(style::card_style(palette))
        .into()
}
