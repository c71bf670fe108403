//! Root application component with context providers and page layout.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::card_grid::CardGrid;
use crate::components::lightbox_host::{LightboxHandle, LightboxHost};
use crate::components::nav_bar::NavBar;
use crate::components::site_footer::SiteFooter;
use crate::config::GalleryConfig;
use crate::state::{gallery::GalleryState, nav::NavState};

/// Root application component.
///
/// Provides all shared state contexts and starts the one-shot card fetch.
/// Nothing reads the records until that fetch settles.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = GalleryConfig::from_build_env();
    let gallery = RwSignal::new(GalleryState::default());
    let nav = RwSignal::new(NavState::default());
    let lightbox = LightboxHandle::new();

    #[cfg(feature = "csr")]
    {
        let data_url = config.data_url.clone();
        let home = config.home_category.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_cards(&data_url).await;
            gallery.update(|g| {
                g.finish_load(result, &home);
            });
        });
    }

    provide_context(config);
    provide_context(gallery);
    provide_context(nav);
    provide_context(lightbox);

    view! {
        <Title text="Card Collection"/>

        <header class="site-header">
            <h1 class="site-header__title">"Card Collection"</h1>
            <NavBar/>
        </header>
        <main class="site-main">
            <CardGrid/>
        </main>
        <LightboxHost/>
        <SiteFooter/>
    }
}
