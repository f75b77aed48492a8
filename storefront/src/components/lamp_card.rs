//! Product card that lights its own photo when clicked.

#[cfg(test)]
#[path = "lamp_card_test.rs"]
mod lamp_card_test;

use leptos::prelude::*;

use crate::catalog::{LampProduct, or_placeholder};

/// Hover hint over the photo.
pub fn hint_label(lit: bool) -> &'static str {
    if lit { "\u{1f4a1} Click to turn off" } else { "\u{1f319} Click to light up" }
}

/// CSS filter for the product photo.
pub fn photo_filter(lit: bool) -> &'static str {
    if lit { "brightness(1.3) saturate(1.2)" } else { "brightness(1)" }
}

/// Flip one card's lamp. Each card owns its own signal.
pub fn toggle_lit(lit: RwSignal<bool>) {
    lit.update(|on| *on = !*on);
}

#[component]
pub fn LampCard(lamp: LampProduct) -> impl IntoView {
    let lit = RwSignal::new(false);
    let on_click = move |_| toggle_lit(lit);

    let alt = lamp.alt_text();
    let name = or_placeholder(&lamp.name).to_owned();
    let price = or_placeholder(&lamp.price).to_owned();
    let category = or_placeholder(&lamp.category).to_owned();

    view! {
        <article class="lamp-card" class:lamp-card--lit=move || lit.get() on:click=on_click>
            <Show when=move || lit.get()>
                <div class="lamp-card__glow"></div>
            </Show>
            <div class="lamp-card__media">
                <img
                    class="lamp-card__photo"
                    src=lamp.image
                    alt=alt
                    loading="lazy"
                    style:filter=move || photo_filter(lit.get())
                />
                <span class="lamp-card__indicator"></span>
                <div class="lamp-card__hint">
                    <span class="lamp-card__hint-label">{move || hint_label(lit.get())}</span>
                </div>
            </div>
            <div class="lamp-card__body">
                <div class="lamp-card__heading">
                    <h3 class="lamp-card__name">{name}</h3>
                    <span class="lamp-card__price">{price}</span>
                </div>
                <p class="lamp-card__category">{category}</p>
                <button class="lamp-card__cart" type="button">"Add to Cart"</button>
            </div>
        </article>
    }
}
