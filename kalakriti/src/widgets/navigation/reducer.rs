use iced::Task;

use super::event::{NavigationEffect, NavigationEvent, NavigationIntent};
use super::state::ShellState;

/// Reduce a navigation intent into state updates and effect events.
pub(super) fn reduce(
    state: &mut ShellState,
    event: NavigationIntent,
) -> Task<NavigationEvent> {
    match event {
        NavigationIntent::PointerEnterRail => {
            state.expand();
            Task::none()
        },
        NavigationIntent::PointerLeaveRail => {
            state.collapse();
            Task::none()
        },
        NavigationIntent::EntryActivated(route) => Task::done(
            NavigationEvent::Effect(NavigationEffect::Navigate(route)),
        ),
        NavigationIntent::BackActivated(target) => Task::done(
            NavigationEvent::Effect(NavigationEffect::GoBack(target)),
        ),
        NavigationIntent::ContactSupport => Task::done(
            NavigationEvent::Effect(NavigationEffect::SupportRequested),
        ),
    }
}
