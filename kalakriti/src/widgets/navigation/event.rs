use crate::widgets::router::{BackTarget, Route};

/// Intent events handled by the navigation shell.
#[derive(Debug, Clone)]
pub(crate) enum NavigationIntent {
    PointerEnterRail,
    PointerLeaveRail,
    EntryActivated(Route),
    BackActivated(BackTarget),
    ContactSupport,
}

/// Effect events produced by the navigation reducer.
#[derive(Debug, Clone)]
pub(crate) enum NavigationEffect {
    Navigate(Route),
    GoBack(BackTarget),
    SupportRequested,
}

/// Navigation event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum NavigationEvent {
    /// Intent event reduced by the navigation widget.
    Intent(NavigationIntent),
    /// External effect orchestrated by app-level routing.
    Effect(NavigationEffect),
}
