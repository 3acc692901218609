use super::model::{BackTarget, Route};

/// Intent events handled by the router.
#[derive(Debug, Clone)]
pub(crate) enum RouterIntent {
    /// The splash delay elapsed.
    SplashElapsed,
    /// Plain link activation towards a dashboard route.
    Navigate(Route),
    /// Open a raw location path.
    OpenPath(String),
    /// Header Back link activation.
    GoBack(BackTarget),
}

/// Effect events produced by the router reducer.
#[derive(Debug, Clone)]
pub(crate) enum RouterEffect {
    /// A dashboard location was entered; page content remounts.
    LocationChanged { route: Option<Route> },
}

/// Router event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum RouterEvent {
    /// Intent event reduced by the router widget.
    Intent(RouterIntent),
    /// External effect orchestrated by app-level routing.
    Effect(RouterEffect),
}
