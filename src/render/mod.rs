//! Card Renderer: turns the record list and a category into display items.
//!
//! DESIGN
//! ======
//! Rendering is written against [`target::RenderTarget`] ("clear, then
//! append") instead of the DOM, so filtering and formatting are tested as
//! plain data. The `CardGrid` component collects items into a `Vec` and
//! maps each one to markup.

pub mod cards;
pub mod target;

pub use cards::{
    CardDetails, CardView, DetailLine, EMPTY_CATEGORY_MESSAGE, LOAD_ERROR_MESSAGE, display_cards, display_load_error,
    filter_cards,
};
pub use target::{GalleryItem, RenderTarget};
