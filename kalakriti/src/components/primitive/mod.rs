pub(crate) mod badge;
pub(crate) mod icon_button;
pub(crate) mod section_card;
pub(crate) mod stat_card;
