use iced::widget::{column, container, svg, text};
use iced::{Element, Length, Theme, alignment};

use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons;
use crate::shared::ui::theme::ThemeProps;

const SPLASH_ICON_SIZE: f32 = 72.0;
const SPLASH_TITLE_SCALE: f32 = 2.4;

/// Props for the splash screen.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SplashProps<'a> {
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Full-window brand screen shown before the dashboard.
pub(crate) fn view<'a, Message: 'a>(
    props: SplashProps<'a>,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let primary = palette.primary;

    let logo = svg::Svg::new(svg::Handle::from_memory(icons::LOGO_PALETTE))
        .width(Length::Fixed(SPLASH_ICON_SIZE))
        .height(Length::Fixed(SPLASH_ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(primary),
        });

    let content = column![
        logo,
        text("Kalakriti")
            .size(props.fonts.ui.size * SPLASH_TITLE_SCALE)
            .font(props.fonts.heading.font_type)
            .color(palette.primary),
        text("AI-powered tools for traditional artists")
            .size(props.fonts.ui.size)
            .color(palette.muted_foreground),
    ]
    .spacing(12)
    .align_x(alignment::Horizontal::Center);

    let background = palette.background;
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            background: Some(background.into()),
            ..Default::default()
        })
        .into()
}
