use iced::widget::{Space, button, column, container, row, svg, text};
use iced::{Border, Color, Element, Length, Theme, alignment};

use crate::components::primitive::icon_button::{
    self, IconButtonEvent, IconButtonProps, IconButtonVariant,
};
use crate::components::primitive::section_card;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons;
use crate::shared::ui::style::{self, ButtonVariant, Tone};
use crate::shared::ui::theme::{ThemeProps, with_alpha};
use crate::widgets::pages::PagesIntent;
use crate::widgets::pages::catalog::{
    FEATURED_COURSE, WELCOME_TEXT, WELCOME_TITLE,
};
use crate::widgets::pages::model::{OverviewViewModel, format_count};
use crate::widgets::router::Route;

const CAROUSEL_HEIGHT: f32 = 260.0;
const CAROUSEL_CONTROL_SIZE: f32 = 36.0;
const CAROUSEL_ICON_SIZE: f32 = 18.0;
const WELCOME_ICON_SIZE: f32 = 32.0;
const COURSE_ICON_SIZE: f32 = 32.0;

/// Welcome card at the top of the overview.
pub(crate) fn welcome<'a>(
    theme: ThemeProps<'a>,
    fonts: &'a FontsConfig,
) -> Element<'a, PagesIntent, Theme, iced::Renderer> {
    let palette = *theme.theme.iced_palette();

    let logo = svg::Svg::new(svg::Handle::from_memory(icons::LOGO_PALETTE))
        .width(Length::Fixed(WELCOME_ICON_SIZE))
        .height(Length::Fixed(WELCOME_ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(palette.primary),
        });

    let content = row![
        column![
            text(WELCOME_TITLE)
                .size(fonts.ui.size * 1.3)
                .font(fonts.heading.font_type),
            text(WELCOME_TEXT)
                .size(fonts.ui.size)
                .color(palette.muted_foreground),
        ]
        .spacing(6)
        .width(Length::Fill),
        logo,
    ]
    .spacing(16)
    .align_y(alignment::Vertical::Center);

    container(content)
        .width(Length::Fill)
        .padding(24)
        .style(style::tinted_card_style(palette, Tone::Primary))
        .into()
}

/// Featured artwork carousel with previous/next and like controls.
pub(crate) fn carousel<'a>(
    vm: OverviewViewModel<'a>,
    theme: ThemeProps<'a>,
    fonts: &'a FontsConfig,
) -> Element<'a, PagesIntent, Theme, iced::Renderer> {
    let palette = *theme.theme.iced_palette();
    let on_overlay = theme.with_foreground(Color::WHITE);
    let artwork = vm.artwork;

    let previous = control(icons::CAROUSEL_PREVIOUS, on_overlay)
        .map(|event| match event {
            IconButtonEvent::Pressed => PagesIntent::CarouselPrevious,
        });
    let next = control(icons::CAROUSEL_NEXT, on_overlay).map(|event| {
        match event {
            IconButtonEvent::Pressed => PagesIntent::CarouselNext,
        }
    });

    let like_id = artwork.id;
    let like_button = if vm.liked {
        icon_button::view(IconButtonProps {
            icon: icons::LIKE_FILLED,
            theme,
            size: CAROUSEL_CONTROL_SIZE,
            icon_size: CAROUSEL_ICON_SIZE,
            variant: IconButtonVariant::Danger,
        })
    } else {
        control(icons::LIKE, on_overlay)
    };
    let like = like_button.map(move |event| match event {
        IconButtonEvent::Pressed => PagesIntent::ToggleLike(like_id),
    });

    let caption = column![
        text(artwork.title)
            .size(fonts.heading_size())
            .font(fonts.heading.font_type)
            .color(Color::WHITE),
        text(format!("by {}", artwork.artist))
            .size(fonts.ui.size)
            .color(with_alpha(Color::WHITE, 0.8)),
    ]
    .spacing(4)
    .align_x(alignment::Horizontal::Center);

    let stage = row![
        previous,
        container(caption)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
        next,
    ]
    .spacing(12)
    .align_y(alignment::Vertical::Center);

    let overlay = palette.overlay;
    let slide = container(
        column![
            row![Space::new().width(Length::Fill), like],
            container(stage)
                .height(Length::Fill)
                .align_y(alignment::Vertical::Center),
        ]
        .spacing(8),
    )
    .width(Length::Fill)
    .height(Length::Fixed(CAROUSEL_HEIGHT))
    .padding(16)
    .style(move |_| container::Style {
        background: Some(overlay.into()),
        border: Border {
            radius: 10.0.into(),
            ..Border::default()
        },
        ..Default::default()
    });

    let likes = artwork.displayed_likes(vm.liked);
    let footer = row![
        text(format!("{} likes", format_count(likes))).size(fonts.ui.size),
        text(format!("{} views", format_count(artwork.views)))
            .size(fonts.ui.size)
            .color(palette.muted_foreground),
        Space::new().width(Length::Fill),
        text(format!("{} / {}", vm.slide + 1, vm.slide_count))
            .size(fonts.ui.size * 0.9)
            .color(palette.muted_foreground),
    ]
    .spacing(16)
    .align_y(alignment::Vertical::Center);

    section_card::view(section_card::SectionCardProps {
        title: "Featured Artworks",
        description: "Most liked and viewed artworks from our community",
        content: column![slide, footer].spacing(12).into(),
        theme,
        fonts,
    })
}

/// Featured course card with links into the education and auction pages.
pub(crate) fn featured_course<'a>(
    theme: ThemeProps<'a>,
    fonts: &'a FontsConfig,
) -> Element<'a, PagesIntent, Theme, iced::Renderer> {
    let palette = *theme.theme.iced_palette();
    let secondary = palette.secondary;

    let play = svg::Svg::new(svg::Handle::from_memory(icons::PLAY))
        .width(Length::Fixed(COURSE_ICON_SIZE))
        .height(Length::Fixed(COURSE_ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(secondary),
        });

    let preview = container(
        column![
            play,
            text(FEATURED_COURSE.title)
                .size(fonts.ui.size * 1.1)
                .font(fonts.heading.font_type),
            text(FEATURED_COURSE.duration)
                .size(fonts.ui.size * 0.9)
                .color(palette.muted_foreground),
            link_button(
                "Start Learning",
                Route::ArtEducation,
                ButtonVariant::Primary,
                theme,
                fonts,
            ),
        ]
        .spacing(8)
        .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(24)
    .align_x(alignment::Horizontal::Center)
    .style(style::tinted_card_style(palette, Tone::Secondary));

    let links = row![
        link_button(
            "Browse All Courses",
            Route::ArtEducation,
            ButtonVariant::Outline,
            theme,
            fonts,
        ),
        link_button(
            "View All Auctions",
            Route::ArtAuction,
            ButtonVariant::Outline,
            theme,
            fonts,
        ),
    ]
    .spacing(12);

    section_card::view(section_card::SectionCardProps {
        title: "Featured Course",
        description: FEATURED_COURSE.description,
        content: column![preview, links].spacing(16).into(),
        theme,
        fonts,
    })
}

fn control<'a>(
    icon: &'static [u8],
    theme: ThemeProps<'a>,
) -> Element<'a, IconButtonEvent, Theme, iced::Renderer> {
    icon_button::view(IconButtonProps {
        icon,
        theme,
        size: CAROUSEL_CONTROL_SIZE,
        icon_size: CAROUSEL_ICON_SIZE,
        variant: IconButtonVariant::Standard,
    })
}

fn link_button<'a>(
    label: &'a str,
    route: Route,
    variant: ButtonVariant,
    theme: ThemeProps<'a>,
    fonts: &'a FontsConfig,
) -> Element<'a, PagesIntent, Theme, iced::Renderer> {
    let palette = *theme.theme.iced_palette();

    button(text(label).size(fonts.ui.size))
        .on_press(PagesIntent::OpenRoute(route))
        .padding([8.0, 16.0])
        .style(style::button_style(palette, variant))
        .into()
}
