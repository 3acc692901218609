use crate::shared::ui::style::Tone;
use crate::widgets::router::BackTarget;

/// Header text and Back target supplied by a page to the shell.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PageMeta {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) back: BackTarget,
    pub(crate) badge: Option<&'static str>,
}

/// A headline metric.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StatCard {
    pub(crate) title: &'static str,
    pub(crate) value: &'static str,
    pub(crate) change: &'static str,
}

/// A short status label attached to a card item.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Badge {
    pub(crate) label: &'static str,
    pub(crate) tone: Tone,
}

/// One row/card inside a section.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CardItem {
    pub(crate) title: &'static str,
    pub(crate) subtitle: &'static str,
    pub(crate) detail: &'static str,
    pub(crate) badges: &'static [Badge],
    pub(crate) trailing: Option<&'static str>,
}

/// A titled group of items laid out as a grid.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CardSection {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) items: &'static [CardItem],
    /// Widest column count the section uses on large windows.
    pub(crate) columns: usize,
}

/// Static content of one page.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PageContent {
    pub(crate) stats: &'static [StatCard],
    pub(crate) sections: &'static [CardSection],
}

/// An artwork shown in the overview carousel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FeaturedArtwork {
    pub(crate) id: u32,
    pub(crate) title: &'static str,
    pub(crate) artist: &'static str,
    pub(crate) likes: u32,
    pub(crate) views: u32,
    pub(crate) liked_by_default: bool,
}

impl FeaturedArtwork {
    /// Like count as displayed, adjusted for the viewer's own toggle.
    pub(crate) fn displayed_likes(&self, liked: bool) -> u32 {
        match (self.liked_by_default, liked) {
            (false, true) => self.likes + 1,
            (true, false) => self.likes.saturating_sub(1),
            _ => self.likes,
        }
    }
}

/// Read-only projection of overview interaction state.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OverviewViewModel<'a> {
    pub(crate) artwork: &'a FeaturedArtwork,
    pub(crate) slide: usize,
    pub(crate) slide_count: usize,
    pub(crate) liked: bool,
}

/// Read-only projection of pages widget state.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PagesViewModel {
    pub(crate) overview: Option<OverviewViewModel<'static>>,
}

/// Format a count with thousands separators, e.g. `8934` -> `8,934`.
pub(crate) fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::{FeaturedArtwork, format_count};

    const ARTWORK: FeaturedArtwork = FeaturedArtwork {
        id: 7,
        title: "Test",
        artist: "Artist",
        likes: 10,
        views: 20,
        liked_by_default: false,
    };

    #[test]
    fn given_counts_when_formatting_then_thousands_are_separated() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1247), "1,247");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn given_unliked_artwork_when_viewer_likes_then_count_increments() {
        assert_eq!(ARTWORK.displayed_likes(false), 10);
        assert_eq!(ARTWORK.displayed_likes(true), 11);
    }

    #[test]
    fn given_liked_by_default_artwork_when_viewer_unlikes_then_count_decrements()
    {
        let artwork = FeaturedArtwork {
            liked_by_default: true,
            ..ARTWORK
        };
        assert_eq!(artwork.displayed_likes(true), 10);
        assert_eq!(artwork.displayed_likes(false), 9);
    }
}
