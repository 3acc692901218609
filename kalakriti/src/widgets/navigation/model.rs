use crate::shared::ui::icons;
use crate::shared::ui::style::Tone;
use crate::widgets::router::{Location, Route};

/// Rail width while collapsed (icon-only).
pub(crate) const RAIL_COLLAPSED_WIDTH: f32 = 64.0;
/// Rail width while expanded (icon and label).
pub(crate) const RAIL_EXPANDED_WIDTH: f32 = 256.0;

/// Hover accent assigned to a navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RailAccent {
    Primary,
    Secondary,
    Accent,
}

impl RailAccent {
    pub(crate) fn tone(self) -> Tone {
        match self {
            RailAccent::Primary => Tone::Primary,
            RailAccent::Secondary => Tone::Secondary,
            RailAccent::Accent => Tone::Accent,
        }
    }
}

/// A single rail entry.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavigationEntry {
    pub(crate) label: &'static str,
    pub(crate) icon: &'static [u8],
    pub(crate) route: Route,
    pub(crate) accent: RailAccent,
}

impl NavigationEntry {
    /// Whether this entry's route is the current location.
    pub(crate) fn is_active(&self, location: Option<&Location>) -> bool {
        location.and_then(Location::route) == Some(self.route)
    }
}

/// Rail entries in visual order, top to bottom.
pub(crate) static NAVIGATION_ENTRIES: [NavigationEntry; 9] = [
    NavigationEntry {
        label: "Overview",
        icon: icons::NAV_OVERVIEW,
        route: Route::Overview,
        accent: RailAccent::Primary,
    },
    NavigationEntry {
        label: "Market Trends",
        icon: icons::NAV_MARKET_TRENDS,
        route: Route::MarketTrends,
        accent: RailAccent::Secondary,
    },
    NavigationEntry {
        label: "Art Education",
        icon: icons::NAV_ART_EDUCATION,
        route: Route::ArtEducation,
        accent: RailAccent::Accent,
    },
    NavigationEntry {
        label: "Social Promotion",
        icon: icons::NAV_SOCIAL_PROMOTION,
        route: Route::SocialPromotion,
        accent: RailAccent::Primary,
    },
    NavigationEntry {
        label: "Crypto Valuation",
        icon: icons::NAV_CRYPTO_VALUATION,
        route: Route::CryptoValuation,
        accent: RailAccent::Secondary,
    },
    NavigationEntry {
        label: "Supply Chain",
        icon: icons::NAV_SUPPLY_CHAIN,
        route: Route::SupplyChain,
        accent: RailAccent::Accent,
    },
    NavigationEntry {
        label: "Art Auction",
        icon: icons::NAV_ART_AUCTION,
        route: Route::ArtAuction,
        accent: RailAccent::Primary,
    },
    NavigationEntry {
        label: "Multimodal Experience",
        icon: icons::NAV_MULTIMODAL,
        route: Route::MultimodalExperience,
        accent: RailAccent::Secondary,
    },
    NavigationEntry {
        label: "Inclusive Promotion",
        icon: icons::NAV_INCLUSIVE,
        route: Route::InclusivePromotion,
        accent: RailAccent::Accent,
    },
];

/// Rail state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum RailMode {
    #[default]
    Collapsed,
    Expanded,
}

impl RailMode {
    pub(crate) fn is_expanded(self) -> bool {
        matches!(self, RailMode::Expanded)
    }

    /// Rendered rail width for this mode.
    pub(crate) fn width(self) -> f32 {
        match self {
            RailMode::Collapsed => RAIL_COLLAPSED_WIDTH,
            RailMode::Expanded => RAIL_EXPANDED_WIDTH,
        }
    }
}

/// Read-only projection of shell state for the presentation layer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavigationViewModel {
    pub(crate) mode: RailMode,
}

#[cfg(test)]
mod tests {
    use super::{NAVIGATION_ENTRIES, RailMode};
    use crate::widgets::router::{Location, Route};

    fn active_routes(location: Option<&Location>) -> Vec<Route> {
        NAVIGATION_ENTRIES
            .iter()
            .filter(|entry| entry.is_active(location))
            .map(|entry| entry.route)
            .collect()
    }

    #[test]
    fn given_each_entry_route_when_checking_active_then_only_that_entry_is_active()
     {
        for entry in &NAVIGATION_ENTRIES {
            let location = Location::from_route(entry.route);
            assert_eq!(active_routes(Some(&location)), vec![entry.route]);
        }
    }

    #[test]
    fn given_supply_chain_path_when_checking_active_then_supply_chain_entry_is_active()
     {
        let location = Location::from_path("/dashboard/supply-chain");
        let active: Vec<&str> = NAVIGATION_ENTRIES
            .iter()
            .filter(|entry| entry.is_active(Some(&location)))
            .map(|entry| entry.label)
            .collect();

        assert_eq!(active, vec!["Supply Chain"]);
    }

    #[test]
    fn given_unknown_path_when_checking_active_then_no_entry_is_active() {
        let location = Location::from_path("/dashboard/unknown");
        assert!(active_routes(Some(&location)).is_empty());
    }

    #[test]
    fn given_no_location_when_checking_active_then_no_entry_is_active() {
        assert!(active_routes(None).is_empty());
    }

    #[test]
    fn given_entry_table_when_compared_with_route_table_then_order_and_routes_match()
     {
        let routes: Vec<Route> =
            NAVIGATION_ENTRIES.iter().map(|entry| entry.route).collect();
        assert_eq!(routes, Route::ALL.to_vec());
    }

    #[test]
    fn given_rail_modes_when_measuring_width_then_expanded_is_wider() {
        assert!(RailMode::Expanded.width() > RailMode::Collapsed.width());
        assert!(!RailMode::default().is_expanded());
    }
}
