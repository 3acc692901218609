pub(crate) mod navigation;
pub(crate) mod pages;
pub(crate) mod router;

use self::navigation::NavigationWidget;
use self::pages::PagesWidget;
use self::router::RouterWidget;

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) navigation: NavigationWidget,
    pub(crate) router: RouterWidget,
    pub(crate) pages: PagesWidget,
}
