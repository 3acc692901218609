use iced::widget::{Space, button, column, container, row, svg, text};
use iced::{Border, Element, Length, Theme, alignment};

use crate::components::primitive::badge;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons;
use crate::shared::ui::style::{self, ButtonVariant, Tone};
use crate::shared::ui::theme::{ThemeProps, with_alpha};
use crate::widgets::navigation::NavigationIntent;
use crate::widgets::router::BackTarget;

pub(crate) const HEADER_HEIGHT: f32 = 84.0;
const HEADER_PADDING_X: f32 = 24.0;
const BACK_ICON_SIZE: f32 = 16.0;

/// Props for the shell header. Title and description are shown as given.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeaderProps<'a> {
    pub(crate) title: &'a str,
    pub(crate) description: &'a str,
    pub(crate) back: BackTarget,
    pub(crate) badge: Option<&'a str>,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the page header: Back link, title and description.
pub(crate) fn view<'a>(
    props: HeaderProps<'a>,
) -> Element<'a, NavigationIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();

    let back_icon = svg::Svg::new(svg::Handle::from_memory(icons::HEADER_BACK))
        .width(Length::Fixed(BACK_ICON_SIZE))
        .height(Length::Fixed(BACK_ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(palette.foreground),
        });

    let back_button = button(
        row![back_icon, text(props.back.label()).size(props.fonts.ui.size)]
            .spacing(8)
            .align_y(alignment::Vertical::Center),
    )
    .on_press(NavigationIntent::BackActivated(props.back))
    .padding([6.0, 10.0])
    .style(style::button_style(palette, ButtonVariant::Ghost));

    let heading = column![
        text(props.title)
            .size(props.fonts.heading_size())
            .font(props.fonts.heading.font_type)
            .color(palette.primary),
        text(props.description)
            .size(props.fonts.ui.size)
            .color(palette.muted_foreground),
    ]
    .spacing(2);

    let mut content = row![back_button, heading, Space::new().width(Length::Fill)]
        .spacing(16)
        .align_y(alignment::Vertical::Center);

    if let Some(label) = props.badge {
        content = content.push(badge::view(badge::BadgeProps {
            label,
            tone: Tone::Secondary,
            theme: props.theme,
            fonts: props.fonts,
        }));
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .padding([0.0, HEADER_PADDING_X])
        .align_y(alignment::Vertical::Center)
        .style(move |_| iced::widget::container::Style {
            background: Some(with_alpha(palette.card, 0.95).into()),
            border: Border {
                width: 1.0,
                color: palette.border,
                radius: iced::border::Radius::from(0.0),
            },
            ..Default::default()
        })
        .into()
}
