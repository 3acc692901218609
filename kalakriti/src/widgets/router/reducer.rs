use iced::Task;

use super::event::{RouterEffect, RouterEvent, RouterIntent};
use super::model::{BackTarget, Location, Route, SPLASH_PATH};
use super::state::RouterState;

/// Reduce a router intent into state updates and effect events.
pub(super) fn reduce(
    state: &mut RouterState,
    event: RouterIntent,
) -> Task<RouterEvent> {
    match event {
        RouterIntent::SplashElapsed => {
            if !state.is_splash() {
                return Task::none();
            }
            enter(state, Location::from_route(Route::Overview))
        },
        RouterIntent::Navigate(route) => {
            enter(state, Location::from_route(route))
        },
        RouterIntent::OpenPath(path) => {
            if path == SPLASH_PATH {
                state.show_splash();
                return Task::none();
            }
            enter(state, Location::from_path(path))
        },
        RouterIntent::GoBack(BackTarget::Splash) => {
            log::debug!("returning to splash screen");
            state.show_splash();
            Task::none()
        },
        RouterIntent::GoBack(BackTarget::Route(route)) => {
            enter(state, Location::from_route(route))
        },
    }
}

fn enter(state: &mut RouterState, location: Location) -> Task<RouterEvent> {
    let route = location.route();
    let path = location.path().to_string();

    if !state.enter(location) {
        log::debug!("already at {path}");
        return Task::none();
    }

    match route {
        Some(_) => log::info!("navigated to {path}"),
        None => log::warn!("navigated to unknown location {path}"),
    }

    Task::done(RouterEvent::Effect(RouterEffect::LocationChanged { route }))
}

#[cfg(test)]
mod tests {
    use super::reduce;
    use crate::widgets::router::event::RouterIntent;
    use crate::widgets::router::model::{BackTarget, Route, Screen};
    use crate::widgets::router::state::RouterState;

    #[test]
    fn given_splash_when_delay_elapses_then_overview_is_entered() {
        let mut state = RouterState::default();
        assert!(state.is_splash());

        let _task = reduce(&mut state, RouterIntent::SplashElapsed);

        assert_eq!(
            state.location().and_then(|location| location.route()),
            Some(Route::Overview)
        );
    }

    #[test]
    fn given_dashboard_when_splash_tick_arrives_late_then_location_is_kept() {
        let mut state = RouterState::default();
        let _task =
            reduce(&mut state, RouterIntent::Navigate(Route::SupplyChain));

        let _task = reduce(&mut state, RouterIntent::SplashElapsed);

        assert_eq!(
            state.location().and_then(|location| location.route()),
            Some(Route::SupplyChain)
        );
    }

    #[test]
    fn given_sub_page_when_back_pressed_then_overview_is_entered() {
        let mut state = RouterState::default();
        let _task =
            reduce(&mut state, RouterIntent::Navigate(Route::ArtAuction));

        let _task = reduce(
            &mut state,
            RouterIntent::GoBack(BackTarget::Route(Route::Overview)),
        );

        assert_eq!(
            state.location().and_then(|location| location.route()),
            Some(Route::Overview)
        );
    }

    #[test]
    fn given_overview_when_back_to_home_pressed_then_splash_is_shown() {
        let mut state = RouterState::default();
        let _task = reduce(&mut state, RouterIntent::Navigate(Route::Overview));

        let _task = reduce(&mut state, RouterIntent::GoBack(BackTarget::Splash));

        assert_eq!(state.screen(), &Screen::Splash);
    }

    #[test]
    fn given_unknown_path_when_opened_then_location_has_no_route() {
        let mut state = RouterState::default();

        let _task = reduce(
            &mut state,
            RouterIntent::OpenPath(String::from("/dashboard/unknown")),
        );

        let location = state.location().expect("dashboard should be shown");
        assert_eq!(location.path(), "/dashboard/unknown");
        assert_eq!(location.route(), None);
    }

    #[test]
    fn given_root_path_when_opened_then_splash_is_shown() {
        let mut state = RouterState::default();
        let _task = reduce(&mut state, RouterIntent::Navigate(Route::Overview));

        let _task = reduce(&mut state, RouterIntent::OpenPath(String::from("/")));

        assert!(state.is_splash());
    }

    #[test]
    fn given_current_route_when_navigating_again_then_state_is_unchanged() {
        let mut state = RouterState::default();
        let _task =
            reduce(&mut state, RouterIntent::Navigate(Route::MarketTrends));

        assert!(!state.enter(
            crate::widgets::router::model::Location::from_route(
                Route::MarketTrends
            )
        ));
    }
}
