use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::navigation::{
    NavigationEffect, NavigationEvent, NavigationIntent,
};
use crate::widgets::router::{RouterEvent, RouterIntent};

/// Route a navigation event through widget reduction or app orchestration.
pub(crate) fn route(app: &mut App, event: NavigationEvent) -> Task<AppEvent> {
    match event {
        NavigationEvent::Intent(event) => route_intent(app, event),
        NavigationEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_intent(app: &mut App, event: NavigationIntent) -> Task<AppEvent> {
    app.widgets
        .navigation
        .reduce(event)
        .map(AppEvent::Navigation)
}

fn route_effect(effect: NavigationEffect) -> Task<AppEvent> {
    match router_intent(effect) {
        Some(intent) => {
            Task::done(AppEvent::Router(RouterEvent::Intent(intent)))
        },
        None => {
            log::info!("support requested from the navigation rail");
            Task::none()
        },
    }
}

/// Router intent carrying out a navigation effect, if it moves the location.
fn router_intent(effect: NavigationEffect) -> Option<RouterIntent> {
    match effect {
        NavigationEffect::Navigate(route) => {
            Some(RouterIntent::Navigate(route))
        },
        NavigationEffect::GoBack(target) => Some(RouterIntent::GoBack(target)),
        NavigationEffect::SupportRequested => None,
    }
}

#[cfg(test)]
mod tests {
    use super::router_intent;
    use crate::widgets::navigation::NavigationEffect;
    use crate::widgets::navigation::model::NAVIGATION_ENTRIES;
    use crate::widgets::router::{
        BackTarget, Route, RouterIntent, RouterWidget,
    };

    fn active_labels(router: &RouterWidget) -> Vec<&'static str> {
        let vm = router.vm();
        NAVIGATION_ENTRIES
            .iter()
            .filter(|entry| entry.is_active(vm.location()))
            .map(|entry| entry.label)
            .collect()
    }

    #[test]
    fn given_entry_link_effect_when_routed_then_router_marks_that_entry_active()
    {
        let mut router = RouterWidget::new();
        let _open = router.reduce(RouterIntent::Navigate(Route::Overview));

        let intent = router_intent(NavigationEffect::Navigate(
            Route::SupplyChain,
        ));
        assert!(matches!(
            intent,
            Some(RouterIntent::Navigate(Route::SupplyChain))
        ));

        if let Some(intent) = intent {
            let _task = router.reduce(intent);
        }

        assert_eq!(active_labels(&router), vec!["Supply Chain"]);
    }

    #[test]
    fn given_back_effect_when_routed_then_router_go_back_intent_is_built() {
        let intent =
            router_intent(NavigationEffect::GoBack(BackTarget::Splash));
        assert!(matches!(
            intent,
            Some(RouterIntent::GoBack(BackTarget::Splash))
        ));
    }

    #[test]
    fn given_support_effect_when_routed_then_no_router_intent_is_built() {
        assert!(router_intent(NavigationEffect::SupportRequested).is_none());
    }
}
