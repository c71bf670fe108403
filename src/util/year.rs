//! Current calendar year for the footer stamp.
//!
//! Read from the browser clock (`js_sys::Date`). Native builds have no page
//! to stamp and return `None`.

#[cfg(test)]
#[path = "year_test.rs"]
mod year_test;

/// The current year in the user's local time zone.
pub fn current_year() -> Option<u32> {
    #[cfg(feature = "csr")]
    {
        Some(js_sys::Date::new_0().get_full_year())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Footer text for `year`; empty when unknown.
#[must_use]
pub fn year_text(year: Option<u32>) -> String {
    year.map(|y| y.to_string()).unwrap_or_default()
}
