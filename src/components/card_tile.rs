//! A single rendered card: image plus optional details block.

use leptos::prelude::*;

use crate::components::lightbox_host::LightboxHandle;
use crate::render::{CardDetails, CardView};

/// One card. Clicking the image opens it in the lightbox.
#[component]
pub fn CardTile(card: CardView) -> impl IntoView {
    let lightbox = expect_context::<LightboxHandle>();

    let src = card.image_src.clone();
    let on_image_click = move |_| lightbox.open(&src);

    view! {
        <div class="card">
            <img src=card.image_src alt=card.image_alt on:click=on_image_click/>
            {card.details.map(|details| view! { <CardDetailsBlock details=details/> })}
        </div>
    }
}

#[component]
fn CardDetailsBlock(details: CardDetails) -> impl IntoView {
    let lines = details
        .lines
        .into_iter()
        .map(|line| {
            view! {
                <p>
                    <strong>{line.label}</strong>
                    " "
                    {line.value}
                </p>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="card-details">
            {details.heading.map(|heading| view! { <h3>{heading}</h3> })}
            {lines}
        </div>
    }
}
