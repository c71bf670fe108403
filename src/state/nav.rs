#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Which navigation link is highlighted.
///
/// `None` until the user clicks a link; afterwards exactly one is active.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub active: Option<String>,
}

impl NavState {
    pub fn activate(&mut self, category: &str) {
        self.active = Some(category.to_owned());
    }

    #[must_use]
    pub fn is_active(&self, category: &str) -> bool {
        self.active.as_deref() == Some(category)
    }
}
