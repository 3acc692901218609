use iced::widget::{
    Column, Space, button, column, container, mouse_area, row, svg, text,
};
use iced::{Border, Color, Element, Length, Theme, alignment};

use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons;
use crate::shared::ui::style::{self, ButtonVariant, Tone};
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps, with_alpha};
use crate::widgets::navigation::NavigationIntent;
use crate::widgets::navigation::model::{
    NAVIGATION_ENTRIES, NavigationEntry, NavigationViewModel,
};
use crate::widgets::router::Location;

const RAIL_PADDING: f32 = 8.0;
const ENTRY_HEIGHT: f32 = 44.0;
const ENTRY_ICON_SIZE: f32 = 20.0;
const ENTRY_SPACING: f32 = 4.0;
const ENTRY_RADIUS: f32 = 8.0;
const ACTIVE_STRIP_WIDTH: f32 = 3.0;
const BRAND_ICON_SIZE: f32 = 24.0;
const BRAND_BADGE_PADDING: f32 = 8.0;
const BRAND_HEIGHT: f32 = 72.0;
const BORDER_WIDTH: f32 = 1.0;

/// Props for the rail view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RailProps<'a> {
    pub(crate) vm: NavigationViewModel,
    /// Rendered width, shared with the content offset.
    pub(crate) width: f32,
    pub(crate) location: Option<&'a Location>,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the navigation rail with its hover region.
pub(crate) fn view<'a>(
    props: RailProps<'a>,
) -> Element<'a, NavigationIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let expanded = props.vm.mode.is_expanded();

    let entries = NAVIGATION_ENTRIES
        .iter()
        .fold(Column::new(), |col, entry| {
            col.push(entry_button(
                entry,
                entry.is_active(props.location),
                expanded,
                palette,
                props.fonts,
            ))
        })
        .spacing(ENTRY_SPACING)
        .width(Length::Fill);

    let mut content = column![
        brand_header(expanded, palette, props.fonts),
        container(entries).padding(RAIL_PADDING),
        Space::new().height(Length::Fill),
    ]
    .width(Length::Fill)
    .height(Length::Fill);

    if expanded {
        content = content.push(support_card(palette, props.fonts));
    }

    let rail = container(content)
        .width(Length::Fixed(props.width))
        .height(Length::Fill)
        .clip(true)
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.card.into()),
            text_color: Some(palette.foreground),
            border: Border {
                width: BORDER_WIDTH,
                color: palette.border,
                radius: iced::border::Radius::from(0.0),
            },
            ..Default::default()
        });

    mouse_area(rail)
        .on_enter(NavigationIntent::PointerEnterRail)
        .on_exit(NavigationIntent::PointerLeaveRail)
        .into()
}

fn brand_header<'a>(
    expanded: bool,
    palette: IcedColorPalette,
    fonts: &'a FontsConfig,
) -> Element<'a, NavigationIntent, Theme, iced::Renderer> {
    let logo = svg::Svg::new(svg::Handle::from_memory(icons::LOGO_PALETTE))
        .width(Length::Fixed(BRAND_ICON_SIZE))
        .height(Length::Fixed(BRAND_ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(palette.primary_foreground),
        });

    let logo_badge = container(logo).padding(BRAND_BADGE_PADDING).style(
        move |_| iced::widget::container::Style {
            background: Some(palette.primary.into()),
            border: Border {
                radius: ENTRY_RADIUS.into(),
                ..Border::default()
            },
            ..Default::default()
        },
    );

    let mut brand = row![logo_badge]
        .spacing(12)
        .align_y(alignment::Vertical::Center);

    if expanded {
        let title = text("Kalakriti")
            .size(fonts.ui.size * 1.3)
            .font(fonts.heading.font_type)
            .color(palette.primary);
        let subtitle = text("Artist Dashboard")
            .size(fonts.ui.size * 0.8)
            .color(palette.muted_foreground);
        brand = brand.push(column![title, subtitle].spacing(2));
    }

    container(brand)
        .width(Length::Fill)
        .height(Length::Fixed(BRAND_HEIGHT))
        .padding([0.0, RAIL_PADDING * 1.5])
        .align_y(alignment::Vertical::Center)
        .style(move |_| iced::widget::container::Style {
            background: Some(with_alpha(palette.primary, 0.06).into()),
            ..Default::default()
        })
        .into()
}

fn entry_button<'a>(
    entry: &'a NavigationEntry,
    is_active: bool,
    expanded: bool,
    palette: IcedColorPalette,
    fonts: &'a FontsConfig,
) -> Element<'a, NavigationIntent, Theme, iced::Renderer> {
    let accent = entry.accent.tone().color(&palette);
    let base_color = palette.foreground;

    let icon = svg::Svg::new(svg::Handle::from_memory(entry.icon))
        .width(Length::Fixed(ENTRY_ICON_SIZE))
        .height(Length::Fixed(ENTRY_ICON_SIZE))
        .style(move |_, status| {
            let hovered = matches!(status, svg::Status::Hovered);
            let color = if is_active || hovered {
                accent
            } else {
                base_color
            };
            svg::Style { color: Some(color) }
        });

    let strip_color = if is_active {
        accent
    } else {
        Color::TRANSPARENT
    };
    let strip = container(Space::new())
        .width(Length::Fixed(ACTIVE_STRIP_WIDTH))
        .height(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(strip_color.into()),
            ..Default::default()
        });

    let mut content = row![strip, icon]
        .spacing(10)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center);

    if expanded {
        let label_color = if is_active { accent } else { base_color };
        content = content.push(
            text(entry.label)
                .size(fonts.ui.size)
                .color(label_color)
                .wrapping(iced::widget::text::Wrapping::None),
        );
    }

    button(content)
        .on_press(NavigationIntent::EntryActivated(entry.route))
        .padding([0.0, 6.0])
        .width(Length::Fill)
        .height(Length::Fixed(ENTRY_HEIGHT))
        .style(move |_, status| entry_style(accent, is_active, status))
        .into()
}

fn entry_style(
    accent: Color,
    is_active: bool,
    status: button::Status,
) -> button::Style {
    let hovered =
        matches!(status, button::Status::Hovered | button::Status::Pressed);
    let background = if is_active {
        Some(with_alpha(accent, 0.12).into())
    } else if hovered {
        Some(with_alpha(accent, 0.08).into())
    } else {
        None
    };
    let border_color = if hovered {
        with_alpha(accent, 0.2)
    } else {
        Color::TRANSPARENT
    };

    button::Style {
        background,
        border: Border {
            width: 1.0,
            color: border_color,
            radius: ENTRY_RADIUS.into(),
        },
        ..Default::default()
    }
}

fn support_card<'a>(
    palette: IcedColorPalette,
    fonts: &'a FontsConfig,
) -> Element<'a, NavigationIntent, Theme, iced::Renderer> {
    let support_icon = svg::Svg::new(svg::Handle::from_memory(icons::SUPPORT))
        .width(Length::Fixed(16.0))
        .height(Length::Fixed(16.0))
        .style(move |_, _| svg::Style {
            color: Some(palette.primary),
        });

    let contact = button(
        container(text("Contact Support").size(fonts.ui.size * 0.9))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .on_press(NavigationIntent::ContactSupport)
    .width(Length::Fill)
    .padding([6.0, 8.0])
    .style(style::button_style(palette, ButtonVariant::Outline));

    let card = column![
        row![support_icon, text("Need Help?").size(fonts.ui.size)]
            .spacing(8)
            .align_y(alignment::Vertical::Center),
        text("Get support from our team")
            .size(fonts.ui.size * 0.8)
            .color(palette.muted_foreground),
        contact,
    ]
    .spacing(6);

    container(
        container(card)
            .width(Length::Fill)
            .padding(14)
            .style(style::tinted_card_style(palette, Tone::Primary)),
    )
    .padding(16)
    .into()
}

#[cfg(test)]
mod tests {
    use iced::widget::button;

    use super::entry_style;

    #[test]
    fn given_active_entry_when_building_style_then_background_is_tinted() {
        let accent = iced::Color::from_rgb(0.8, 0.3, 0.1);
        let style = entry_style(accent, true, button::Status::Active);
        assert!(style.background.is_some());
    }

    #[test]
    fn given_idle_inactive_entry_when_building_style_then_background_is_empty()
    {
        let accent = iced::Color::from_rgb(0.8, 0.3, 0.1);
        let style = entry_style(accent, false, button::Status::Active);
        assert!(style.background.is_none());
    }

    #[test]
    fn given_hovered_inactive_entry_when_building_style_then_background_is_tinted()
     {
        let accent = iced::Color::from_rgb(0.8, 0.3, 0.1);
        let style = entry_style(accent, false, button::Status::Hovered);
        assert!(style.background.is_some());
    }
}
