use std::collections::BTreeSet;

use super::model::FeaturedArtwork;

/// Page-local interaction state. Rebuilt whenever the location changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PagesState {
    slide: usize,
    liked: BTreeSet<u32>,
}

impl PagesState {
    /// Fresh state for the given artworks, liked flags taken from data.
    pub(crate) fn new(artworks: &[FeaturedArtwork]) -> Self {
        Self {
            slide: 0,
            liked: artworks
                .iter()
                .filter(|artwork| artwork.liked_by_default)
                .map(|artwork| artwork.id)
                .collect(),
        }
    }

    pub(crate) fn slide(&self) -> usize {
        self.slide
    }

    pub(crate) fn is_liked(&self, id: u32) -> bool {
        self.liked.contains(&id)
    }

    /// Step the carousel, wrapping modulo `count`.
    pub(crate) fn step_slide(&mut self, count: usize, forward: bool) {
        if count == 0 {
            self.slide = 0;
            return;
        }

        let current = self.slide % count;
        self.slide = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
    }

    /// Flip the like flag of one artwork. Returns the new flag.
    pub(crate) fn toggle_like(&mut self, id: u32) -> bool {
        if self.liked.remove(&id) {
            false
        } else {
            self.liked.insert(id);
            true
        }
    }
}
