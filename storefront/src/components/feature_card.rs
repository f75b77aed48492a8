//! "Why Choose Us" selling point.

use leptos::prelude::*;

use crate::catalog::{Feature, or_placeholder};

#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="feature-card__icon">{feature.icon}</div>
            <h3 class="feature-card__title">{or_placeholder(&feature.title).to_owned()}</h3>
            <p class="feature-card__description">{feature.description}</p>
        </div>
    }
}
