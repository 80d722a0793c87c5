//! Floating Particles Component

use leptos::prelude::*;
use shared::ParticleField;

/// Renders every particle of `field` as an absolutely positioned dot.
///
/// The field is generated by the caller once per page instance.
#[component]
pub fn ParticleLayer(field: ParticleField) -> impl IntoView {
    field
        .iter()
        .map(|particle| {
            view! {
                <div
                    class="particle"
                    data-particle=particle.id.to_string()
                    style=particle.inline_style()
                ></div>
            }
        })
        .collect_view()
}
