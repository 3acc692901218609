pub(crate) mod navigation;
pub(crate) mod pages;
pub(crate) mod router;
pub(crate) mod window;
