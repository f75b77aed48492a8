//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::store::StorePage;
use crate::state::mode::ModeState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="dim">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the page-wide lighting mode and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let mode = RwSignal::new(ModeState::default());
    provide_context(mode);

    view! {
        <Stylesheet id="leptos" href="/pkg/lampstore.css"/>
        <Title text="LampStore"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=StorePage/>
            </Routes>
        </Router>
    }
}
