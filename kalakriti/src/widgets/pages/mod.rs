pub(crate) mod catalog;
mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::event::{PagesEffect, PagesEvent, PagesIntent};
use self::catalog::FEATURED_ARTWORKS;
use self::model::{OverviewViewModel, PagesViewModel};
use self::state::PagesState;

/// Page content provider holding page-local interaction state.
pub(crate) struct PagesWidget {
    state: PagesState,
}

impl PagesWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: PagesState::new(FEATURED_ARTWORKS),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(&mut self, event: PagesIntent) -> Task<PagesEvent> {
        reducer::reduce(&mut self.state, event)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> PagesViewModel {
        let slide = self.state.slide();
        let overview =
            FEATURED_ARTWORKS
                .get(slide)
                .map(|artwork| OverviewViewModel {
                    artwork,
                    slide,
                    slide_count: FEATURED_ARTWORKS.len(),
                    liked: self.state.is_liked(artwork.id),
                });

        PagesViewModel { overview }
    }
}
