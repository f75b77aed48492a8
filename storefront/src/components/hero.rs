//! Hero section: lamp, pull cord, and the copy around them.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here restyles from the shared `ModeState`; only the embedded
//! `HeroHanger` writes to it.

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

use leptos::prelude::*;

use crate::components::firefly_field::FireflyField;
use crate::components::hero_hanger::HeroHanger;
use crate::state::mode::ModeState;
use crate::util::fireflies::{self, FIREFLY_COUNT};

pub const LAMP_IMAGE: &str = "/lamp.svg";

/// A short selling point shown beside the lamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroNote {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const HERO_NOTES: [HeroNote; 2] = [
    HeroNote {
        icon: "\u{1faa2}",
        title: "Stretchable Rope",
        body: "The cord flexes and bends realistically, built from chained physics bodies for smooth, natural motion.",
    },
    HeroNote {
        icon: "\u{2728}",
        title: "Realistic Feel",
        body: "Pull, release, and watch the rope sway and stretch with physics-driven realism.",
    },
];

/// CSS filter for the lamp photo.
pub fn lamp_filter(lit: bool) -> &'static str {
    if lit { "brightness(1.5) drop-shadow(0 0 80px rgba(251,191,36,0.8))" } else { "brightness(0.8)" }
}

#[component]
pub fn Hero() -> impl IntoView {
    let mode_state = expect_context::<RwSignal<ModeState>>();
    let lit = move || mode_state.get().is_illuminated();
    let swarm = fireflies::generate(FIREFLY_COUNT, fireflies::page_seed());

    view! {
        <section class="hero" class:hero--lit=lit>
            <Show when=lit>
                <FireflyField fireflies=swarm.clone()/>
            </Show>
            <div class="hero__grid">
                <div class="hero__lamp-column">
                    <div class="hero__lamp">
                        <img
                            class="hero__lamp-image"
                            src=LAMP_IMAGE
                            alt="Lamp"
                            style:filter=move || lamp_filter(lit())
                        />
                        <Show when=lit>
                            <div class="hero__glow"></div>
                        </Show>
                        <div class="hero__cord">
                            <HeroHanger/>
                        </div>
                    </div>
                    <div class="hero__instructions">
                        <p class="hero__instruction">
                            <span class="hero__pulse"></span>
                            "Pull the cord to toggle"
                        </p>
                        <p class="hero__pulls">{move || mode_state.get().pulls_label()}</p>
                    </div>
                </div>
                <div class="hero__copy">
                    <h1 class="hero__title">"Pull to Illuminate"</h1>
                    <p class="hero__lede">
                        "Experience dark mode like never before, with a real rope-style pull cord that moves and stretches naturally!"
                    </p>
                    <div class="hero__notes">
                        {HERO_NOTES
                            .iter()
                            .map(|note| {
                                view! {
                                    <div class="hero-note">
                                        <h3 class="hero-note__title">
                                            <span class="hero-note__icon">{note.icon}</span>
                                            {note.title}
                                        </h3>
                                        <p class="hero-note__body">{note.body}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="hero__badge">
                        <span class="hero__badge-icon">{move || mode_state.get().badge_icon()}</span>
                        <span class="hero__badge-label">{move || mode_state.get().badge_label()}</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
