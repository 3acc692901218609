use iced::{Task, window};

use super::{App, AppEvent};
use crate::routers;
use crate::widgets::router::{RouterEvent, RouterIntent};

/// Thin dispatch: route each event to its owning router or handler.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::Navigation(event) => routers::navigation::route(app, event),
        AppEvent::Router(event) => routers::router::route(app, event),
        AppEvent::Pages(event) => routers::pages::route(app, event),
        AppEvent::SplashTick => routers::router::route(
            app,
            RouterEvent::Intent(RouterIntent::SplashElapsed),
        ),
        AppEvent::Window(window::Event::Resized(size)) => {
            routers::window::handle_resize(app, size)
        },
        AppEvent::Window(_) => Task::none(),
    }
}
