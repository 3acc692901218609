use crate::widgets::router::Route;

/// Intent events handled by the pages widget.
#[derive(Debug, Clone)]
pub(crate) enum PagesIntent {
    CarouselPrevious,
    CarouselNext,
    /// Toggle the viewer's like on the artwork with this id.
    ToggleLike(u32),
    /// In-page link towards another dashboard route.
    OpenRoute(Route),
    /// Drop page-local state after a location change.
    Reset,
}

/// Effect events produced by the pages reducer.
#[derive(Debug, Clone)]
pub(crate) enum PagesEffect {
    Navigate(Route),
}

/// Pages event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum PagesEvent {
    /// Intent event reduced by the pages widget.
    Intent(PagesIntent),
    /// External effect orchestrated by app-level routing.
    Effect(PagesEffect),
}
