//! Coming Soon Card Component

use leptos::prelude::*;

use crate::components::GitHubIcon;
use crate::utils::constants::{
    AVATAR_INITIAL, CARD_ENTERED_CLASS, CARD_ENTER_CLASS, DESCRIPTION_LINES, HEADING, OWNER_NAME,
    PROFILE_LABEL, PROFILE_URL,
};
use crate::utils::date::footer_text;

/// Class list of the card wrapper for the given entrance state.
pub fn card_class(mounted: bool) -> &'static str {
    if mounted {
        CARD_ENTERED_CLASS
    } else {
        CARD_ENTER_CLASS
    }
}

#[component]
pub fn ComingSoonCard(mounted: ReadSignal<bool>) -> impl IntoView {
    let footer = footer_text();

    view! {
        <main class=move || card_class(mounted.get())>
            <div
                class="card"
                style="background: linear-gradient(135deg, rgba(22, 16, 42, 0.7), rgba(30, 22, 56, 0.5)); \
                       box-shadow: 0 0 80px rgba(124, 58, 237, 0.08), 0 25px 50px -12px rgba(0, 0, 0, 0.5);"
            >
                <div class="avatar">
                    <span class="avatar-initial">{AVATAR_INITIAL}</span>
                </div>

                <h1 class="heading pulse-glow">{HEADING}</h1>
                <p class="subtitle">{OWNER_NAME}</p>
                <p class="description">
                    {DESCRIPTION_LINES[0]}
                    <br/>
                    {DESCRIPTION_LINES[1]}
                </p>

                <div class="divider"></div>

                <div class="links">
                    <a
                        href=PROFILE_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="social-link"
                        aria-label=PROFILE_LABEL
                    >
                        <GitHubIcon/>
                        <span>"GitHub"</span>
                    </a>
                </div>
            </div>

            <p class="footer">{footer}</p>
        </main>
    }
}
