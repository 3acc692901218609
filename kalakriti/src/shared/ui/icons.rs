pub(crate) const LOGO_PALETTE: &[u8] =
    include_bytes!("../../../assets/svg/palette.svg");
pub(crate) const NAV_OVERVIEW: &[u8] =
    include_bytes!("../../../assets/svg/home.svg");
pub(crate) const NAV_MARKET_TRENDS: &[u8] =
    include_bytes!("../../../assets/svg/trending-up.svg");
pub(crate) const NAV_ART_EDUCATION: &[u8] =
    include_bytes!("../../../assets/svg/graduation-cap.svg");
pub(crate) const NAV_SOCIAL_PROMOTION: &[u8] =
    include_bytes!("../../../assets/svg/camera.svg");
pub(crate) const NAV_CRYPTO_VALUATION: &[u8] =
    include_bytes!("../../../assets/svg/coins.svg");
pub(crate) const NAV_SUPPLY_CHAIN: &[u8] =
    include_bytes!("../../../assets/svg/package.svg");
pub(crate) const NAV_ART_AUCTION: &[u8] =
    include_bytes!("../../../assets/svg/shopping-cart.svg");
pub(crate) const NAV_MULTIMODAL: &[u8] =
    include_bytes!("../../../assets/svg/eye.svg");
pub(crate) const NAV_INCLUSIVE: &[u8] =
    include_bytes!("../../../assets/svg/users.svg");
pub(crate) const HEADER_BACK: &[u8] =
    include_bytes!("../../../assets/svg/arrow-left.svg");
pub(crate) const CAROUSEL_PREVIOUS: &[u8] =
    include_bytes!("../../../assets/svg/chevron-left.svg");
pub(crate) const CAROUSEL_NEXT: &[u8] =
    include_bytes!("../../../assets/svg/chevron-right.svg");
pub(crate) const LIKE: &[u8] = include_bytes!("../../../assets/svg/heart.svg");
pub(crate) const LIKE_FILLED: &[u8] =
    include_bytes!("../../../assets/svg/heart-filled.svg");
pub(crate) const PLAY: &[u8] = include_bytes!("../../../assets/svg/play.svg");
pub(crate) const SUPPORT: &[u8] =
    include_bytes!("../../../assets/svg/life-buoy.svg");
