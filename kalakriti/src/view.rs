use iced::widget::{Stack, column, container, scrollable};
use iced::{Element, Length, Padding, Theme};

use super::{App, AppEvent};
use crate::layout::{CONTENT_PADDING, ShellLayout};
use crate::shared::ui::style;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::navigation::NavigationEvent;
use crate::widgets::navigation::view::{header, rail};
use crate::widgets::pages::PagesEvent;
use crate::widgets::pages::catalog::{not_found_meta, page_meta};
use crate::widgets::pages::view::{page, splash};

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme = app.theme_manager.current();
    let theme_props: ThemeProps<'_> = ThemeProps::new(theme);
    let palette = *theme.iced_palette();

    let router_vm = app.widgets.router.vm();
    let Some(location) = router_vm.location() else {
        return splash::view(splash::SplashProps {
            theme: theme_props,
            fonts: &app.fonts,
        });
    };

    let navigation_vm = app.widgets.navigation.vm();
    let layout = ShellLayout::for_mode(navigation_vm.mode);
    let meta = location.route().map_or_else(not_found_meta, page_meta);

    let header = header::view(header::HeaderProps {
        title: meta.title,
        description: meta.description,
        back: meta.back,
        badge: meta.badge,
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(|event| AppEvent::Navigation(NavigationEvent::Intent(event)));

    let page = page::view(page::PageProps {
        vm: app.widgets.pages.vm(),
        location,
        content_width: app.state.content_width(layout),
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(|event| AppEvent::Pages(PagesEvent::Intent(event)));

    let body = scrollable(
        container(page)
            .width(Length::Fill)
            .padding(CONTENT_PADDING),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(style::thin_scroll_style(palette));

    let background = palette.background;
    let content = container(column![header, body])
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            left: layout.content_offset(),
            ..Padding::ZERO
        })
        .style(move |_| container::Style {
            background: Some(background.into()),
            ..Default::default()
        });

    let rail = rail::view(rail::RailProps {
        vm: navigation_vm,
        width: layout.rail_width(),
        location: Some(location),
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(|event| AppEvent::Navigation(NavigationEvent::Intent(event)));

    Stack::with_children(vec![content.into(), rail])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
