use iced::Task;

use super::catalog::FEATURED_ARTWORKS;
use super::event::{PagesEffect, PagesEvent, PagesIntent};
use super::state::PagesState;

/// Reduce a pages intent into state updates and effect events.
pub(super) fn reduce(
    state: &mut PagesState,
    event: PagesIntent,
) -> Task<PagesEvent> {
    match event {
        PagesIntent::CarouselPrevious => {
            state.step_slide(FEATURED_ARTWORKS.len(), false);
            Task::none()
        },
        PagesIntent::CarouselNext => {
            state.step_slide(FEATURED_ARTWORKS.len(), true);
            Task::none()
        },
        PagesIntent::ToggleLike(id) => {
            let liked = state.toggle_like(id);
            log::debug!("artwork {id} liked={liked}");
            Task::none()
        },
        PagesIntent::OpenRoute(route) => {
            Task::done(PagesEvent::Effect(PagesEffect::Navigate(route)))
        },
        PagesIntent::Reset => {
            *state = PagesState::new(FEATURED_ARTWORKS);
            Task::none()
        },
    }
}
