pub(crate) mod card_grid;
pub(crate) mod overview;
pub(crate) mod page;
pub(crate) mod splash;
