//! Shop-by-category tile.

use leptos::prelude::*;

use crate::catalog::{Category, or_placeholder};

#[component]
pub fn CategoryCard(category: Category) -> impl IntoView {
    view! {
        <div class="category-card">
            <div class="category-card__icon">{category.icon}</div>
            <h3 class="category-card__name">{or_placeholder(&category.name).to_owned()}</h3>
            <p class="category-card__description">{category.description}</p>
        </div>
    }
}
