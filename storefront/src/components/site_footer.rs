//! Page footer with brand, link columns, newsletter, and photo credits.

use leptos::prelude::*;

pub const SHOP_LINKS: [&str; 4] = ["Desk Lamps", "Floor Lamps", "Pendant Lights", "Smart Lamps"];
pub const SUPPORT_LINKS: [&str; 4] = ["Contact Us", "Shipping Info", "Returns", "FAQ"];

#[component]
pub fn SiteFooter(credits: Vec<(String, String)>) -> impl IntoView {
    let link_list = |links: &'static [&'static str]| {
        links
            .iter()
            .map(|label| view! { <li class="site-footer__link">{*label}</li> })
            .collect_view()
    };

    view! {
        <footer class="site-footer">
            <div class="site-footer__columns">
                <div>
                    <h3 class="site-footer__brand">"LampStore"</h3>
                    <p class="site-footer__muted">"Illuminating your world with quality lighting solutions."</p>
                </div>
                <div>
                    <h4 class="site-footer__heading">"Shop"</h4>
                    <ul class="site-footer__links">{link_list(&SHOP_LINKS)}</ul>
                </div>
                <div>
                    <h4 class="site-footer__heading">"Support"</h4>
                    <ul class="site-footer__links">{link_list(&SUPPORT_LINKS)}</ul>
                </div>
                <div>
                    <h4 class="site-footer__heading">"Newsletter"</h4>
                    <p class="site-footer__muted">"Subscribe for exclusive offers"</p>
                    <div class="site-footer__newsletter">
                        <input class="site-footer__email" type="email" placeholder="Your email"/>
                        <button class="site-footer__join" type="button">"Join"</button>
                    </div>
                </div>
            </div>
            <div class="site-footer__credits">
                "Photos: "
                {credits
                    .into_iter()
                    .map(|(name, url)| view! { <a class="site-footer__credit" href=url>{name}</a> })
                    .collect_view()}
            </div>
            <div class="site-footer__legal">
                <p>"\u{a9} 2025 LampStore. All rights reserved."</p>
            </div>
        </footer>
    }
}
