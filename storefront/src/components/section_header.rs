//! Centered heading and subtitle above each catalog section.

use leptos::prelude::*;

#[component]
pub fn SectionHeader(title: &'static str, subtitle: &'static str, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <header class="section-header">
            <h2 class="section-header__title">{title}</h2>
            <p class="section-header__subtitle">{subtitle}</p>
            {children.map(|children| children())}
        </header>
    }
}
