#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::config::DEFAULT_HOME_CATEGORY;
use crate::net::api::LoadError;
use crate::net::types::CardRecord;
use crate::render::{GalleryItem, display_cards, display_load_error};

/// Card data plus the active filter.
#[derive(Clone, Debug)]
pub struct GalleryState {
    pub records: Records,
    pub active_category: String,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self { records: Records::default(), active_category: DEFAULT_HOME_CATEGORY.to_owned() }
    }
}

/// Lifecycle of the card list. Leaves `Loading` exactly once.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Records {
    #[default]
    Loading,
    Loaded(Vec<CardRecord>),
    Failed,
}

impl GalleryState {
    /// Settle the initial fetch. On success the gallery shows `home`.
    ///
    /// Returns `false` (and changes nothing) if the load already settled.
    pub fn finish_load(&mut self, result: Result<Vec<CardRecord>, LoadError>, home: &str) -> bool {
        if self.records != Records::Loading {
            log::warn!("card data already settled; ignoring second load result");
            return false;
        }
        match result {
            Ok(cards) => {
                log::info!("loaded {} cards", cards.len());
                self.records = Records::Loaded(cards);
                self.active_category = home.to_owned();
            }
            Err(err) => {
                log::error!("error loading cards: {err}");
                self.records = Records::Failed;
            }
        }
        true
    }

    /// Make `category` the active filter.
    pub fn select(&mut self, category: &str) {
        category.clone_into(&mut self.active_category);
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.records == Records::Loading
    }

    /// Current contents of the card display container.
    ///
    /// Empty while loading; the error message once a load has failed,
    /// whatever the active category.
    #[must_use]
    pub fn items(&self, home: &str) -> Vec<GalleryItem> {
        let mut items = Vec::new();
        match &self.records {
            Records::Loading => {}
            Records::Failed => display_load_error(&mut items),
            Records::Loaded(cards) => display_cards(&mut items, cards, &self.active_category, home),
        }
        items
    }
}
