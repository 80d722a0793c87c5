//! Landing Page App - Leptos Frontend
//!
//! Deep violet "coming soon" page: animated backdrop, floating particles and
//! a centered card that eases in one frame after mount.

use leptos::prelude::*;
use shared::ParticleField;

use crate::components::{Backdrop, ComingSoonCard, ParticleLayer};
use crate::hooks::use_entrance;
use crate::services::JsMathRandom;

#[component]
pub fn App() -> impl IntoView {
    // Component bodies run once per instance, so the field is never regenerated
    let field = ParticleField::generate(&mut JsMathRandom);
    log::info!("Generated {} particles", field.len());

    let mounted = use_entrance();

    view! {
        <div class="page">
            <Backdrop/>
            <ParticleLayer field=field/>
            <ComingSoonCard mounted=mounted/>
        </div>
    }
}
