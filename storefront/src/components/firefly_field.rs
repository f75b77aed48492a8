//! Fireflies drifting over the hero while the lamp is lit.

use leptos::prelude::*;

use crate::util::fireflies::Firefly;

#[component]
pub fn FireflyField(fireflies: Vec<Firefly>) -> impl IntoView {
    view! {
        <div class="firefly-field" aria-hidden="true">
            {fireflies
                .into_iter()
                .map(|firefly| view! { <span class="firefly" style=firefly.style()></span> })
                .collect_view()}
        </div>
    }
}
