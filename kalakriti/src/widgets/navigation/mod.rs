mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::event::{
    NavigationEffect, NavigationEvent, NavigationIntent,
};
use self::model::NavigationViewModel;
use self::state::ShellState;

/// Navigation shell owning the rail's expand/collapse state.
///
/// One instance is owned by the app for the whole dashboard; pages only
/// supply their header text and content.
pub(crate) struct NavigationWidget {
    state: ShellState,
}

impl NavigationWidget {
    /// Mount the shell with a collapsed rail.
    pub(crate) fn new() -> Self {
        Self {
            state: ShellState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: NavigationIntent,
    ) -> Task<NavigationEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> NavigationViewModel {
        NavigationViewModel {
            mode: self.state.mode(),
        }
    }
}
