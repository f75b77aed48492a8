//! Store landing page.
//!
//! ARCHITECTURE
//! ============
//! Hero first, then the three catalog sections and the footer. The catalog
//! is read once per render from the embedded dataset; sections with no
//! records render only their headers.

use leptos::prelude::*;

use crate::catalog::Catalog;
use crate::components::category_card::CategoryCard;
use crate::components::feature_card::FeatureCard;
use crate::components::hero::Hero;
use crate::components::lamp_card::LampCard;
use crate::components::section_header::SectionHeader;
use crate::components::site_footer::SiteFooter;
use crate::state::mode::ModeState;

#[component]
pub fn StorePage() -> impl IntoView {
    let mode_state = expect_context::<RwSignal<ModeState>>();
    let catalog = Catalog::load();
    let credits = catalog.photo_credits();
    let Catalog { categories, products, features } = catalog;

    view! {
        <main class="store" class:store--lit=move || mode_state.get().is_illuminated()>
            <Hero/>

            <section class="store-section store-section--categories">
                <SectionHeader
                    title="Shop by Category"
                    subtitle="Find the perfect lighting solution for every space"
                />
                <div class="store-section__grid">
                    {categories
                        .into_iter()
                        .map(|category| view! { <CategoryCard category=category/> })
                        .collect_view()}
                </div>
            </section>

            <section class="store-section store-section--products">
                <SectionHeader title="Featured Lamps" subtitle="Click any lamp to see it light up! \u{2728}">
                    <div class="store-section__tip">
                        <span class="store-section__tip-icon">"\u{1f4a1}"</span>
                        <span>"Interactive lighting - Try clicking the lamps!"</span>
                    </div>
                </SectionHeader>
                <div class="store-section__grid">
                    {products.into_iter().map(|lamp| view! { <LampCard lamp=lamp/> }).collect_view()}
                </div>
            </section>

            <section class="store-section store-section--features">
                <SectionHeader
                    title="Why Choose Us"
                    subtitle="Quality lighting solutions with exceptional service"
                />
                <div class="store-section__grid store-section__grid--wide">
                    {features.into_iter().map(|feature| view! { <FeatureCard feature=feature/> }).collect_view()}
                </div>
            </section>

            <SiteFooter credits=credits/>
        </main>
    }
}
