mod event;
pub(crate) mod model;
mod reducer;
mod state;

use iced::Task;

pub(crate) use self::event::{RouterEffect, RouterEvent, RouterIntent};
pub(crate) use self::model::{BackTarget, Location, Route, RouterViewModel};
use self::state::RouterState;

/// Splash screen duration before redirecting to the overview.
pub(crate) const SPLASH_DELAY_MS: u64 = 2000;

/// Routing/navigation provider owning the current location.
pub(crate) struct RouterWidget {
    state: RouterState,
}

impl RouterWidget {
    /// Start on the splash screen.
    pub(crate) fn new() -> Self {
        Self {
            state: RouterState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(&mut self, event: RouterIntent) -> Task<RouterEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> RouterViewModel<'_> {
        RouterViewModel {
            screen: self.state.screen(),
        }
    }

    /// Return whether the splash screen is shown.
    pub(crate) fn is_splash(&self) -> bool {
        self.state.is_splash()
    }
}
