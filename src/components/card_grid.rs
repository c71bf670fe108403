//! The card display container.

use leptos::prelude::*;

use crate::components::card_tile::CardTile;
use crate::config::GalleryConfig;
use crate::render::GalleryItem;
use crate::state::gallery::GalleryState;

/// `#cards-section`: re-rendered from scratch whenever the records settle
/// or the active category changes.
#[component]
pub fn CardGrid() -> impl IntoView {
    let config = expect_context::<GalleryConfig>();
    let gallery = expect_context::<RwSignal<GalleryState>>();

    let home = config.home_category;
    let items = move || gallery.with(|g| g.items(&home));

    view! {
        <section id="cards-section" class="cards-section">
            {move || {
                items()
                    .into_iter()
                    .map(|item| match item {
                        GalleryItem::Message(text) => view! { <p class="cards-section__message">{text}</p> }.into_any(),
                        GalleryItem::Card(card) => view! { <CardTile card=card/> }.into_any(),
                    })
                    .collect::<Vec<_>>()
            }}
        </section>
    }
}
