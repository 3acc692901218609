/// Path of the splash screen that redirects into the dashboard.
pub(crate) const SPLASH_PATH: &str = "/";

/// Closed set of dashboard routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) enum Route {
    Overview,
    MarketTrends,
    ArtEducation,
    SocialPromotion,
    CryptoValuation,
    SupplyChain,
    ArtAuction,
    MultimodalExperience,
    InclusivePromotion,
}

impl Route {
    /// Every route in navigation order.
    pub(crate) const ALL: [Route; 9] = [
        Route::Overview,
        Route::MarketTrends,
        Route::ArtEducation,
        Route::SocialPromotion,
        Route::CryptoValuation,
        Route::SupplyChain,
        Route::ArtAuction,
        Route::MultimodalExperience,
        Route::InclusivePromotion,
    ];

    pub(crate) fn path(self) -> &'static str {
        match self {
            Route::Overview => "/dashboard",
            Route::MarketTrends => "/dashboard/market-trends",
            Route::ArtEducation => "/dashboard/art-education",
            Route::SocialPromotion => "/dashboard/social-promotion",
            Route::CryptoValuation => "/dashboard/crypto-valuation",
            Route::SupplyChain => "/dashboard/supply-chain",
            Route::ArtAuction => "/dashboard/art-auction",
            Route::MultimodalExperience => "/dashboard/multimodal-experience",
            Route::InclusivePromotion => "/dashboard/inclusive-promotion",
        }
    }

    /// Resolve a path by exact string equality.
    pub(crate) fn from_path(path: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|route| route.path() == path)
    }
}

/// The router's current dashboard location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Location {
    path: String,
    route: Option<Route>,
}

impl Location {
    /// Location of a known route.
    pub(crate) fn from_route(route: Route) -> Self {
        Self {
            path: route.path().to_string(),
            route: Some(route),
        }
    }

    /// Location of an arbitrary path, resolved against the route table.
    pub(crate) fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        let route = Route::from_path(&path);
        Self { path, route }
    }

    pub(crate) fn path(&self) -> &str {
        &self.path
    }

    pub(crate) fn route(&self) -> Option<Route> {
        self.route
    }
}

/// Target of the header's Back link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BackTarget {
    Splash,
    Route(Route),
}

impl BackTarget {
    pub(crate) fn label(self) -> &'static str {
        match self {
            BackTarget::Splash => "Back to Home",
            BackTarget::Route(_) => "Back",
        }
    }
}

/// Top-level screen currently shown by the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Screen {
    Splash,
    Dashboard(Location),
}

/// Read-only projection of router state for views.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RouterViewModel<'a> {
    pub(crate) screen: &'a Screen,
}

impl<'a> RouterViewModel<'a> {
    /// Current dashboard location, if the dashboard is shown.
    pub(crate) fn location(&self) -> Option<&'a Location> {
        match self.screen {
            Screen::Splash => None,
            Screen::Dashboard(location) => Some(location),
        }
    }
}
