use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::pages::{PagesEvent, PagesIntent};
use crate::widgets::router::{RouterEffect, RouterEvent, RouterIntent};

/// Route a router event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: RouterEvent) -> Task<AppEvent> {
    match event {
        RouterEvent::Intent(event) => route_intent(app, event),
        RouterEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_intent(app: &mut App, event: RouterIntent) -> Task<AppEvent> {
    app.widgets.router.reduce(event).map(AppEvent::Router)
}

fn route_effect(effect: RouterEffect) -> Task<AppEvent> {
    match effect {
        // Page content remounts on every location change; the shell keeps
        // its state.
        RouterEffect::LocationChanged { route } => {
            log::debug!("remounting page content for {route:?}");
            Task::done(AppEvent::Pages(PagesEvent::Intent(PagesIntent::Reset)))
        },
    }
}
