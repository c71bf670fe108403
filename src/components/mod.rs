//! UI components for the gallery page.

pub mod card_grid;
pub mod card_tile;
pub mod lightbox_host;
pub mod nav_bar;
pub mod site_footer;
