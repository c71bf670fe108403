//! Category navigation links.

use leptos::prelude::*;

use crate::config::GalleryConfig;
use crate::state::gallery::GalleryState;
use crate::state::nav::NavState;

/// Horizontal list of category links.
///
/// A click never follows the link: it highlights the link and re-filters
/// the card grid with the link's `data-category`.
#[component]
pub fn NavBar() -> impl IntoView {
    let config = expect_context::<GalleryConfig>();
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let nav = expect_context::<RwSignal<NavState>>();

    let links = config
        .nav
        .into_iter()
        .map(|link| {
            let category = link.category;

            let is_active = {
                let category = category.clone();
                move || nav.with(|n| n.is_active(&category))
            };
            let on_click = {
                let category = category.clone();
                move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    nav.update(|n| n.activate(&category));
                    gallery.update(|g| g.select(&category));
                }
            };

            view! {
                <li class="site-nav__item">
                    <a
                        class="nav-link"
                        href="#"
                        data-category=category
                        class:active=is_active
                        on:click=on_click
                    >
                        {link.label}
                    </a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav class="site-nav">
            <ul class="site-nav__list">{links}</ul>
        </nav>
    }
}
