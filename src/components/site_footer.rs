//! Page footer with the current year.

use leptos::prelude::*;

use crate::util::year::{current_year, year_text};

/// Footer; `#current-year` is stamped once when the page mounts.
#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = year_text(current_year());

    view! {
        <footer class="site-footer">
            <p>
                "\u{00A9} "
                <span id="current-year">{year}</span>
                " Card Collection"
            </p>
        </footer>
    }
}
