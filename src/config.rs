//! Gallery configuration: data location, the "show everything" key, and
//! the navigation links.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_DATA_URL: &str = "cards.json";
pub const DEFAULT_HOME_CATEGORY: &str = "home";

/// One entry in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub category: String,
}

impl NavLink {
    #[must_use]
    pub fn new(label: &str, category: &str) -> Self {
        Self { label: label.to_owned(), category: category.to_owned() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    /// Relative URL of the JSON card list.
    pub data_url: String,
    /// Category key that disables filtering.
    pub home_category: String,
    pub nav: Vec<NavLink>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_owned(),
            home_category: DEFAULT_HOME_CATEGORY.to_owned(),
            nav: vec![
                NavLink::new("Home", DEFAULT_HOME_CATEGORY),
                NavLink::new("Rookies", "rookie"),
                NavLink::new("Veterans", "veteran"),
                NavLink::new("Vintage", "vintage"),
            ],
        }
    }
}

impl GalleryConfig {
    /// Build config from values baked in at compile time.
    ///
    /// Optional:
    /// - `CARD_GALLERY_DATA_URL`: card list location (default `cards.json`)
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::with_data_url(option_env!("CARD_GALLERY_DATA_URL"))
    }

    fn with_data_url(raw: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = raw.map(str::trim).filter(|url| !url.is_empty()) {
            config.data_url = url.to_owned();
        }
        config
    }

    #[must_use]
    pub fn is_home(&self, category: &str) -> bool {
        category == self.home_category
    }
}
