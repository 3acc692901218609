use iced::widget::{Column, text};
use iced::{Element, Length, Theme};

use crate::components::primitive::section_card;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::pages::PagesIntent;
use crate::widgets::pages::catalog::page_content;
use crate::widgets::pages::model::PagesViewModel;
use crate::widgets::pages::view::{card_grid, overview};
use crate::widgets::router::{Location, Route};

const PAGE_SPACING: f32 = 24.0;

/// Props for the page area below the header.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PageProps<'a> {
    pub(crate) vm: PagesViewModel,
    pub(crate) location: &'a Location,
    pub(crate) content_width: f32,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the page for the current location.
pub(crate) fn view<'a>(
    props: PageProps<'a>,
) -> Element<'a, PagesIntent, Theme, iced::Renderer> {
    let Some(route) = props.location.route() else {
        return not_found(props.location.path(), props.theme, props.fonts);
    };

    let content = page_content(route);
    let mut page = Column::new().spacing(PAGE_SPACING).width(Length::Fill);

    if route == Route::Overview {
        page = page.push(overview::welcome(props.theme, props.fonts));
        if let Some(vm) = props.vm.overview {
            page = page.push(overview::carousel(vm, props.theme, props.fonts));
        }
    }

    if !content.stats.is_empty() {
        page = page.push(card_grid::stats(
            content.stats,
            props.content_width,
            props.theme,
            props.fonts,
        ));
    }

    for section in content.sections {
        page = page.push(card_grid::section(
            section,
            props.content_width,
            props.theme,
            props.fonts,
        ));
    }

    if route == Route::Overview {
        page = page.push(overview::featured_course(props.theme, props.fonts));
    }

    page.into()
}

fn not_found<'a>(
    path: &str,
    theme: ThemeProps<'a>,
    fonts: &'a FontsConfig,
) -> Element<'a, PagesIntent, Theme, iced::Renderer> {
    section_card::view(section_card::SectionCardProps {
        title: "Nothing here yet",
        description: "Pick a page from the navigation rail",
        content: text(format!("No dashboard page exists at {path}"))
            .size(fonts.ui.size)
            .into(),
        theme,
        fonts,
    })
}
