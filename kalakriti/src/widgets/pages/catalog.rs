use crate::shared::ui::style::Tone;
use crate::widgets::router::{BackTarget, Route};

use super::model::{
    Badge, CardItem, CardSection, FeaturedArtwork, PageContent, PageMeta,
    StatCard,
};

/// Badge shown next to the overview header.
const ACTIVE_ARTIST_BADGE: &str = "Active Artist";

/// Header text and Back target for a route.
pub(crate) fn page_meta(route: Route) -> PageMeta {
    let (title, description) = match route {
        Route::Overview => (
            "Dashboard Overview",
            "Manage your artistic journey with AI-powered tools",
        ),
        Route::MarketTrends => (
            "Market Trend Analysis",
            "AI-powered insights into art market trends and opportunities",
        ),
        Route::ArtEducation => (
            "Art Education Platform",
            "Comprehensive learning platform for traditional and modern art techniques",
        ),
        Route::SocialPromotion => (
            "AI-Powered Social Promotion",
            "Intelligent strategies to maximize your art visibility across social platforms",
        ),
        Route::CryptoValuation => (
            "Crypto Art Valuation",
            "Blockchain-based art valuation system for collateral and micro-loans",
        ),
        Route::SupplyChain => (
            "Supply Chain Network",
            "Connect directly with verified material suppliers for seamless procurement",
        ),
        Route::ArtAuction => (
            "Art Auction Marketplace",
            "Dynamic auction platform for buying and selling art with transparent pricing",
        ),
        Route::MultimodalExperience => (
            "Multimodal Art Experience",
            "Transform paintings into videos, audio descriptions for accessibility and enhanced engagement",
        ),
        Route::InclusivePromotion => (
            "Inclusive Art Promotion",
            "Dedicated support and promotion for women artists and differently-abled creators",
        ),
    };

    let (back, badge) = match route {
        Route::Overview => (BackTarget::Splash, Some(ACTIVE_ARTIST_BADGE)),
        _ => (BackTarget::Route(Route::Overview), None),
    };

    PageMeta {
        title,
        description,
        back,
        badge,
    }
}

/// Header text for a location that matches no route.
pub(crate) fn not_found_meta() -> PageMeta {
    PageMeta {
        title: "Page Not Found",
        description: "This location is not part of the dashboard",
        back: BackTarget::Route(Route::Overview),
        badge: None,
    }
}

/// Static stats and sections of a route's page.
pub(crate) fn page_content(route: Route) -> PageContent {
    match route {
        Route::Overview => PageContent {
            stats: &[],
            sections: &[TOP_AUCTIONS],
        },
        Route::MarketTrends => PageContent {
            stats: MARKET_INSIGHTS,
            sections: &[TRENDING_STYLES, AI_RECOMMENDATIONS],
        },
        Route::ArtEducation => PageContent {
            stats: LEARNING_PROGRESS,
            sections: &[MY_COURSES, SKILL_CATEGORIES, ACHIEVEMENTS],
        },
        Route::SocialPromotion => PageContent {
            stats: CAMPAIGN_METRICS,
            sections: &[SOCIAL_PLATFORMS, CONTENT_SUGGESTIONS, SCHEDULED_POSTS],
        },
        Route::CryptoValuation => PageContent {
            stats: VALUATION_METRICS,
            sections: &[ART_PORTFOLIO, LOAN_APPLICATIONS],
        },
        Route::SupplyChain => PageContent {
            stats: SUPPLY_STATS,
            sections: &[SUPPLIERS, RECENT_ORDERS, MATERIAL_CATEGORIES],
        },
        Route::ArtAuction => PageContent {
            stats: AUCTION_STATS,
            sections: &[LIVE_AUCTIONS, MY_AUCTIONS],
        },
        Route::MultimodalExperience => PageContent {
            stats: ACCESSIBILITY_METRICS,
            sections: &[MULTIMODAL_ARTWORKS, MULTIMODAL_FEATURES],
        },
        Route::InclusivePromotion => PageContent {
            stats: IMPACT_METRICS,
            sections: &[SUPPORT_PROGRAMS, FEATURED_ARTISTS, UPCOMING_EVENTS],
        },
    }
}

/// Artworks cycled by the overview carousel.
pub(crate) const FEATURED_ARTWORKS: &[FeaturedArtwork] = &[
    FeaturedArtwork {
        id: 1,
        title: "Madhubani Harmony",
        artist: "Priya Sharma",
        likes: 1247,
        views: 8934,
        liked_by_default: false,
    },
    FeaturedArtwork {
        id: 2,
        title: "Tanjore Elegance",
        artist: "Rajesh Kumar",
        likes: 892,
        views: 5621,
        liked_by_default: true,
    },
    FeaturedArtwork {
        id: 3,
        title: "Warli Village Life",
        artist: "Meera Patel",
        likes: 1456,
        views: 9876,
        liked_by_default: false,
    },
];

/// Course promoted on the overview.
pub(crate) struct FeaturedCourse {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) duration: &'static str,
}

pub(crate) const FEATURED_COURSE: FeaturedCourse = FeaturedCourse {
    title: "Madhubani Art Basics",
    description: "Learn traditional Madhubani painting techniques",
    duration: "Duration: 45 minutes",
};

pub(crate) const WELCOME_TITLE: &str = "Welcome back, Artist!";
pub(crate) const WELCOME_TEXT: &str = "Explore our AI-powered tools to enhance your artistic journey and reach global audiences.";

const fn stat(
    title: &'static str,
    value: &'static str,
    change: &'static str,
) -> StatCard {
    StatCard {
        title,
        value,
        change,
    }
}

const fn item(
    title: &'static str,
    subtitle: &'static str,
    detail: &'static str,
    badges: &'static [Badge],
    trailing: Option<&'static str>,
) -> CardItem {
    CardItem {
        title,
        subtitle,
        detail,
        badges,
        trailing,
    }
}

const TOP_AUCTIONS: CardSection = CardSection {
    title: "Top Auctions",
    description: "Live auctions with highest current bids",
    items: &[
        item(
            "Royal Miniature",
            "Current bid",
            "Ends in 2h 15m",
            &[Badge { label: "Live", tone: Tone::Danger }],
            Some("₹45,000"),
        ),
        item(
            "Kalamkari Masterpiece",
            "Current bid",
            "Ends in 5h 42m",
            &[Badge { label: "Live", tone: Tone::Danger }],
            Some("₹32,000"),
        ),
        item(
            "Pattachitra Story",
            "Current bid",
            "Ends in 1d 3h",
            &[Badge { label: "Live", tone: Tone::Danger }],
            Some("₹28,500"),
        ),
    ],
    columns: 1,
};

const MARKET_INSIGHTS: &[StatCard] = &[
    stat("Peak Selling Season", "Oct - Dec", "Festival season shows 3x higher sales"),
    stat("Top Buyer Demographics", "25-45 years", "Urban professionals are primary buyers"),
    stat("Engagement Rate", "4.2%", "Average social media engagement"),
    stat("Price Range Sweet Spot", "₹5K - ₹25K", "Optimal pricing for maximum sales"),
];

const TRENDING_STYLES: CardSection = CardSection {
    title: "Trending Art Styles",
    description: "Current market trends and style popularity",
    items: &[
        item(
            "Contemporary Madhubani",
            "Popularity 85%",
            "Modern interpretations of traditional Madhubani art are gaining global attention",
            &[Badge { label: "+45%", tone: Tone::Success }],
            None,
        ),
        item(
            "Digital Warli Art",
            "Popularity 72%",
            "Traditional Warli paintings adapted for digital platforms",
            &[Badge { label: "+32%", tone: Tone::Success }],
            None,
        ),
        item(
            "Fusion Tanjore",
            "Popularity 68%",
            "Classical Tanjore paintings with contemporary themes",
            &[Badge { label: "+28%", tone: Tone::Success }],
            None,
        ),
        item(
            "Miniature Portraits",
            "Popularity 45%",
            "Traditional miniature painting style seeing reduced demand",
            &[Badge { label: "-12%", tone: Tone::Danger }],
            None,
        ),
    ],
    columns: 2,
};

const AI_RECOMMENDATIONS: CardSection = CardSection {
    title: "AI Recommendations",
    description: "Personalized suggestions to boost your art sales",
    items: &[
        item(
            "Focus on Contemporary Madhubani",
            "Revenue +30%",
            "This style is trending upward with 45% growth. Consider creating pieces in this style.",
            &[Badge { label: "High", tone: Tone::Danger }],
            None,
        ),
        item(
            "Optimize for Festival Season",
            "Sales +200%",
            "Prepare inventory for Oct-Dec period when sales are 3x higher.",
            &[Badge { label: "Medium", tone: Tone::Warning }],
            None,
        ),
        item(
            "Target Urban Professionals",
            "Reach +150%",
            "Focus marketing efforts on 25-45 age group in urban areas.",
            &[Badge { label: "High", tone: Tone::Danger }],
            None,
        ),
    ],
    columns: 1,
};

const LEARNING_PROGRESS: &[StatCard] = &[
    stat("Courses Enrolled", "3", "2 in progress"),
    stat("Courses Completed", "1", "Certificate earned"),
    stat("Learning Time", "42h", "This month"),
    stat("Average Score", "85%", "Across all courses"),
];

const MY_COURSES: CardSection = CardSection {
    title: "My Courses",
    description: "Continue your learning journey",
    items: &[
        item(
            "Madhubani Painting Masterclass",
            "Sita Devi · 6 weeks · 24 lessons",
            "Learn the traditional art of Madhubani painting with modern techniques",
            &[Badge { label: "Beginner", tone: Tone::Secondary }, Badge { label: "Not started", tone: Tone::Neutral }],
            Some("★ 4.9"),
        ),
        item(
            "Digital Art for Traditional Artists",
            "Raj Kumar · 4 weeks · 18 lessons",
            "Bridge traditional skills with digital art tools and techniques",
            &[Badge { label: "Intermediate", tone: Tone::Accent }, Badge { label: "65% complete", tone: Tone::Primary }],
            Some("★ 4.7"),
        ),
        item(
            "Warli Art: From Village to Gallery",
            "Meera Patil · 5 weeks · 20 lessons",
            "Master the ancient Warli art form and prepare for gallery exhibitions",
            &[Badge { label: "Beginner", tone: Tone::Secondary }, Badge { label: "30% complete", tone: Tone::Primary }],
            Some("★ 4.8"),
        ),
    ],
    columns: 3,
};

const SKILL_CATEGORIES: CardSection = CardSection {
    title: "Explore by Category",
    description: "Discover courses in different art disciplines",
    items: &[
        item("Traditional Techniques", "45 courses", "Master classical Indian art forms", &[], None),
        item("Digital Art", "32 courses", "Modern digital painting and design", &[], None),
        item("Business Skills", "28 courses", "Art marketing and entrepreneurship", &[], None),
        item("Art History", "22 courses", "Cultural context and art movements", &[], None),
    ],
    columns: 4,
};

const ACHIEVEMENTS: CardSection = CardSection {
    title: "Achievements",
    description: "Your learning milestones",
    items: &[
        item(
            "First Course Completed",
            "",
            "Completed your first art course",
            &[Badge { label: "Earned", tone: Tone::Success }],
            None,
        ),
        item(
            "Traditional Master",
            "",
            "Completed 5 traditional art courses",
            &[Badge { label: "Earned", tone: Tone::Success }],
            None,
        ),
        item(
            "Digital Pioneer",
            "",
            "Completed 3 digital art courses",
            &[Badge { label: "Locked", tone: Tone::Neutral }],
            None,
        ),
        item(
            "Community Contributor",
            "",
            "Helped 10 fellow students",
            &[Badge { label: "Locked", tone: Tone::Neutral }],
            None,
        ),
    ],
    columns: 2,
};

const CAMPAIGN_METRICS: &[StatCard] = &[
    stat("Reach", "45.2K", "+18%"),
    stat("Engagement", "3.8K", "+25%"),
    stat("Shares", "892", "+12%"),
    stat("Comments", "456", "+8%"),
];

const SOCIAL_PLATFORMS: CardSection = CardSection {
    title: "Social Platform Performance",
    description: "Overview of your presence across different platforms",
    items: &[
        item(
            "Instagram",
            "12.5K followers · 156 posts",
            "Engagement 4.2%",
            &[Badge { label: "Connected", tone: Tone::Success }],
            Some("+15%"),
        ),
        item(
            "Facebook",
            "8.3K followers · 89 posts",
            "Engagement 3.1%",
            &[Badge { label: "Connected", tone: Tone::Success }],
            Some("+8%"),
        ),
        item(
            "Twitter",
            "5.2K followers · 234 posts",
            "Engagement 2.8%",
            &[Badge { label: "Not connected", tone: Tone::Neutral }],
            Some("+12%"),
        ),
        item(
            "YouTube",
            "3.1K followers · 24 posts",
            "Engagement 6.5%",
            &[Badge { label: "Not connected", tone: Tone::Neutral }],
            Some("+22%"),
        ),
    ],
    columns: 4,
};

const CONTENT_SUGGESTIONS: CardSection = CardSection {
    title: "AI Content Suggestions",
    description: "Personalized content ideas to boost engagement",
    items: &[
        item(
            "Behind the Scenes",
            "Best time 6-8 PM · Instagram, Facebook",
            "Show your painting process with time-lapse videos. #ArtProcess #IndianArt #Madhubani",
            &[Badge { label: "High", tone: Tone::Success }],
            None,
        ),
        item(
            "Art Tutorial",
            "Best time 2-4 PM · YouTube, Instagram",
            "Step-by-step guide for basic Warli patterns. #ArtTutorial #WarliArt #LearnArt",
            &[Badge { label: "Very High", tone: Tone::Success }],
            None,
        ),
        item(
            "Cultural Story",
            "Best time 7-9 AM · Facebook, Twitter",
            "Share the history behind your art style. #ArtHistory #Culture #Tradition",
            &[Badge { label: "Medium", tone: Tone::Warning }],
            None,
        ),
    ],
    columns: 1,
};

const SCHEDULED_POSTS: CardSection = CardSection {
    title: "Scheduled Posts",
    description: "Your upcoming content",
    items: &[
        item(
            "New Madhubani painting completed!",
            "Instagram · Today, 6:00 PM",
            "Predicted: 450 likes",
            &[Badge { label: "Scheduled", tone: Tone::Primary }],
            None,
        ),
        item(
            "Art tutorial: Basic brush techniques",
            "YouTube · Tomorrow, 3:00 PM",
            "Predicted: 1.2K views",
            &[Badge { label: "Draft", tone: Tone::Neutral }],
            None,
        ),
        item(
            "Behind the scenes: Studio setup",
            "Facebook · Dec 18, 7:00 PM",
            "Predicted: 280 reactions",
            &[Badge { label: "Scheduled", tone: Tone::Primary }],
            None,
        ),
    ],
    columns: 1,
};

const VALUATION_METRICS: &[StatCard] = &[
    stat("Total Portfolio Value", "₹1,55,000", "+12%"),
    stat("Available Collateral", "₹1,05,000", "+8%"),
    stat("Active Loans", "₹25,000", "0%"),
    stat("Credit Score", "785", "+15"),
];

const ART_PORTFOLIO: CardSection = CardSection {
    title: "Art Portfolio Valuation",
    description: "Real-time blockchain-based valuations of your artworks",
    items: &[
        item(
            "Madhubani Village Scene",
            "Last valuation ₹42,000 · change +7.1%",
            "Collateral used ₹30,000",
            &[Badge { label: "Active", tone: Tone::Success }],
            Some("₹45,000"),
        ),
        item(
            "Warli Tribal Dance",
            "Last valuation ₹35,000 · change -8.6%",
            "Collateral used ₹20,000",
            &[Badge { label: "Active", tone: Tone::Success }],
            Some("₹32,000"),
        ),
        item(
            "Tanjore Krishna",
            "Last valuation ₹75,000 · change +4.0%",
            "Collateral used ₹0",
            &[Badge { label: "Pending", tone: Tone::Warning }],
            Some("₹78,000"),
        ),
    ],
    columns: 1,
};

const LOAN_APPLICATIONS: CardSection = CardSection {
    title: "Micro-Loan Applications",
    description: "Track your loan applications using art as collateral",
    items: &[
        item(
            "Art supplies and materials",
            "Collateral: Madhubani Village Scene",
            "8.5% interest · 12 months",
            &[Badge { label: "Approved", tone: Tone::Success }],
            Some("₹25,000"),
        ),
        item(
            "Studio rent",
            "Collateral: Warli Tribal Dance",
            "9.0% interest · 6 months",
            &[Badge { label: "Under Review", tone: Tone::Warning }],
            Some("₹15,000"),
        ),
    ],
    columns: 2,
};

const SUPPLY_STATS: &[StatCard] = &[
    stat("Verified Suppliers", "500+", "Across India"),
    stat("Total Savings", "₹45K", "This year"),
    stat("Orders Placed", "24", "This month"),
    stat("Avg Rating", "4.8", "Supplier quality"),
];

const SUPPLIERS: CardSection = CardSection {
    title: "Recommended Suppliers",
    description: "Verified suppliers near your location",
    items: &[
        item(
            "Rajesh Art Supplies",
            "Mumbai, Maharashtra · 12 km · Same day",
            "Traditional Pigments: Natural pigments, Brushes, Canvas",
            &[Badge { label: "Verified", tone: Tone::Success }],
            Some("★ 4.8"),
        ),
        item(
            "Heritage Craft Materials",
            "Jaipur, Rajasthan · 285 km · 2-3 days",
            "Gold Leaf & Foils: Gold leaf, Silver foil, Adhesives",
            &[Badge { label: "Verified", tone: Tone::Success }],
            Some("★ 4.6"),
        ),
        item(
            "Eco Art Supplies",
            "Pune, Maharashtra · 45 km · Next day",
            "Organic Materials: Organic colors, Bamboo brushes, Handmade paper",
            &[Badge { label: "Verified", tone: Tone::Success }],
            Some("★ 4.9"),
        ),
    ],
    columns: 3,
};

const RECENT_ORDERS: CardSection = CardSection {
    title: "Recent Orders",
    description: "Track your recent material orders",
    items: &[
        item(
            "ORD001",
            "Rajesh Art Supplies · Dec 10, 2024",
            "Natural pigments, Canvas",
            &[Badge { label: "Delivered", tone: Tone::Success }],
            Some("₹2,450"),
        ),
        item(
            "ORD002",
            "Heritage Craft Materials · Dec 12, 2024",
            "Gold leaf sheets",
            &[Badge { label: "In Transit", tone: Tone::Primary }],
            Some("₹5,200"),
        ),
        item(
            "ORD003",
            "Eco Art Supplies · Dec 14, 2024",
            "Organic colors set",
            &[Badge { label: "Processing", tone: Tone::Warning }],
            Some("₹1,800"),
        ),
    ],
    columns: 1,
};

const MATERIAL_CATEGORIES: CardSection = CardSection {
    title: "Categories",
    description: "Browse by material type",
    items: &[
        item("Pigments & Colors", "45 products", "", &[], None),
        item("Brushes & Tools", "32 products", "", &[], None),
        item("Canvas & Paper", "28 products", "", &[], None),
        item("Gold & Silver Leaf", "15 products", "", &[], None),
        item("Adhesives", "12 products", "", &[], None),
        item("Frames", "20 products", "", &[], None),
    ],
    columns: 3,
};

const AUCTION_STATS: &[StatCard] = &[
    stat("Total Sales", "₹2,45,000", "+18%"),
    stat("Active Auctions", "3", "+2"),
    stat("Avg Sale Price", "₹28,500", "+12%"),
    stat("Success Rate", "92%", "+5%"),
];

const LIVE_AUCTIONS: CardSection = CardSection {
    title: "Live Auctions",
    description: "Bid on artworks from talented artists across India",
    items: &[
        item(
            "Contemporary Madhubani Art",
            "Priya Sharma · 12 bidders · 234 views",
            "Starting bid ₹15,000 · ends in 2h 45m",
            &[Badge { label: "Traditional", tone: Tone::Primary }],
            Some("₹25,000"),
        ),
        item(
            "Digital Warli Fusion",
            "Amit Patel · 8 bidders · 189 views",
            "Starting bid ₹10,000 · ends in 5h 20m",
            &[Badge { label: "Digital", tone: Tone::Secondary }],
            Some("₹18,500"),
        ),
        item(
            "Tanjore Gold Leaf Painting",
            "Meera Devi · 18 bidders · 456 views",
            "Starting bid ₹30,000 · ends in 1h 15m",
            &[Badge { label: "Classical", tone: Tone::Accent }],
            Some("₹45,000"),
        ),
    ],
    columns: 3,
};

const MY_AUCTIONS: CardSection = CardSection {
    title: "My Auctions",
    description: "Track your listed artworks and sales",
    items: &[
        item(
            "Village Life Madhubani",
            "9 bidders · 167 views",
            "Starting bid ₹15,000 · ends in 3h 30m",
            &[Badge { label: "Active", tone: Tone::Success }],
            Some("₹22,000"),
        ),
        item(
            "Modern Warli Art",
            "15 bidders · 289 views",
            "Starting bid ₹20,000 · sold Dec 10, 2024",
            &[Badge { label: "Sold", tone: Tone::Neutral }],
            Some("₹35,000"),
        ),
    ],
    columns: 2,
};

const ACCESSIBILITY_METRICS: &[StatCard] = &[
    stat("Accessibility Score", "95%", "+8%"),
    stat("Audio Descriptions", "18", "+6"),
    stat("Video Views", "4.2K", "+25%"),
    stat("Downloads", "892", "+15%"),
];

const MULTIMODAL_ARTWORKS: CardSection = CardSection {
    title: "Multimodal Artworks",
    description: "Your artworks enhanced with video, audio, and interactive elements",
    items: &[
        item(
            "Madhubani Village Festival",
            "Hindi, English, Bengali · 1,250 views",
            "Processed in 2 minutes",
            &[
                Badge { label: "Video", tone: Tone::Primary },
                Badge { label: "Audio", tone: Tone::Secondary },
                Badge { label: "Complete", tone: Tone::Success },
            ],
            None,
        ),
        item(
            "Warli Tribal Dance",
            "Hindi, English · 890 views",
            "Processing, 65% done",
            &[Badge { label: "Audio", tone: Tone::Secondary }, Badge { label: "Processing", tone: Tone::Warning }],
            None,
        ),
        item(
            "Tanjore Krishna Portrait",
            "Hindi, English, Tamil · 2,100 views",
            "Processed in 3 minutes",
            &[Badge { label: "Video", tone: Tone::Primary }, Badge { label: "Complete", tone: Tone::Success }],
            None,
        ),
    ],
    columns: 3,
};

const MULTIMODAL_FEATURES: CardSection = CardSection {
    title: "Features",
    description: "Available transformation and accessibility features",
    items: &[
        item(
            "Video Transformation",
            "12 artworks transformed",
            "Convert static paintings into dynamic video experiences",
            &[],
            None,
        ),
        item(
            "Audio Descriptions",
            "18 descriptions created",
            "AI-generated audio descriptions for accessibility",
            &[],
            None,
        ),
        item(
            "Multi-language Support",
            "8 languages supported",
            "Descriptions available in multiple Indian languages",
            &[],
            None,
        ),
        item(
            "Interactive Elements",
            "25 interactive elements",
            "Add clickable hotspots and information layers",
            &[],
            None,
        ),
    ],
    columns: 2,
};

const IMPACT_METRICS: &[StatCard] = &[
    stat("Artists Supported", "1,230", "+18%"),
    stat("Grants Distributed", "₹43.3L", "+25%"),
    stat("Success Stories", "89%", "+12%"),
    stat("Community Reach", "25K+", "+30%"),
];

const SUPPORT_PROGRAMS: CardSection = CardSection {
    title: "Support Programs",
    description: "Inclusive initiatives empowering diverse artists",
    items: &[
        item(
            "Women Artists Empowerment",
            "450 participants · grants ₹12,50,000",
            "Special support and promotion for women artists",
            &[Badge { label: "92% success", tone: Tone::Success }],
            None,
        ),
        item(
            "Differently-Abled Creators",
            "180 participants · grants ₹8,75,000",
            "Inclusive platform for artists with disabilities",
            &[Badge { label: "88% success", tone: Tone::Success }],
            None,
        ),
        item(
            "Rural Artist Initiative",
            "320 participants · grants ₹15,25,000",
            "Supporting artists from remote villages",
            &[Badge { label: "85% success", tone: Tone::Success }],
            None,
        ),
        item(
            "Youth Art Program",
            "280 participants · grants ₹6,80,000",
            "Encouraging young artists under 25",
            &[Badge { label: "90% success", tone: Tone::Success }],
            None,
        ),
    ],
    columns: 2,
};

const FEATURED_ARTISTS: CardSection = CardSection {
    title: "Featured Success Stories",
    description: "Artists who have thrived through our inclusive programs",
    items: &[
        item(
            "Priya Sharma",
            "Madhubani, Bihar · Traditional Madhubani",
            "Empowering women through traditional art forms",
            &[Badge { label: "Women Artist", tone: Tone::Accent }, Badge { label: "+35%", tone: Tone::Success }],
            Some("₹45,000"),
        ),
        item(
            "Ravi Kumar",
            "Udaipur, Rajasthan · Miniature Paintings",
            "Creating beautiful art despite physical challenges",
            &[Badge { label: "Differently-Abled", tone: Tone::Secondary }, Badge { label: "+28%", tone: Tone::Success }],
            Some("₹32,000"),
        ),
        item(
            "Meera Devi",
            "Warli Village, Maharashtra · Warli Art",
            "Bringing village art to global platforms",
            &[Badge { label: "Rural Artist", tone: Tone::Primary }, Badge { label: "+42%", tone: Tone::Success }],
            Some("₹28,500"),
        ),
    ],
    columns: 3,
};

const UPCOMING_EVENTS: CardSection = CardSection {
    title: "Upcoming Events",
    description: "Inclusive art events and workshops",
    items: &[
        item(
            "Women Artists Exhibition",
            "Dec 20, 2024 · Mumbai Art Gallery",
            "25 participants",
            &[Badge { label: "Exhibition", tone: Tone::Accent }],
            None,
        ),
        item(
            "Inclusive Art Workshop",
            "Dec 25, 2024 · Online",
            "50 participants",
            &[Badge { label: "Workshop", tone: Tone::Secondary }],
            None,
        ),
        item(
            "Rural Art Fair",
            "Jan 5, 2025 · Delhi",
            "40 participants",
            &[Badge { label: "Fair", tone: Tone::Primary }],
            None,
        ),
    ],
    columns: 1,
};

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::{FEATURED_ARTWORKS, page_content, page_meta};
    use crate::widgets::router::{BackTarget, Route};

    #[test]
    fn given_each_route_when_reading_meta_then_header_text_is_present() {
        for route in Route::ALL {
            let meta = page_meta(route);
            assert!(!meta.title.is_empty(), "{route:?} has no title");
            assert!(!meta.description.is_empty(), "{route:?} has no description");
        }
    }

    #[test]
    fn given_sub_page_when_reading_meta_then_back_targets_overview() {
        for route in Route::ALL.into_iter().filter(|r| *r != Route::Overview) {
            assert_eq!(page_meta(route).back, BackTarget::Route(Route::Overview));
            assert!(page_meta(route).badge.is_none());
        }
    }

    #[test]
    fn given_overview_when_reading_meta_then_back_targets_splash_with_badge() {
        let meta = page_meta(Route::Overview);
        assert_eq!(meta.back, BackTarget::Splash);
        assert_eq!(meta.badge, Some("Active Artist"));
    }

    #[test]
    fn given_sub_page_when_reading_content_then_sections_have_items() {
        for route in Route::ALL {
            let content = page_content(route);
            assert!(!content.sections.is_empty(), "{route:?} has no sections");
            for section in content.sections {
                assert!(!section.items.is_empty(), "{} is empty", section.title);
                assert!(section.columns >= 1);
            }
        }
    }

    #[test]
    fn given_featured_artworks_when_collecting_ids_then_ids_are_unique() {
        let ids: BTreeSet<u32> =
            FEATURED_ARTWORKS.iter().map(|artwork| artwork.id).collect();
        assert_eq!(ids.len(), FEATURED_ARTWORKS.len());
    }
}
