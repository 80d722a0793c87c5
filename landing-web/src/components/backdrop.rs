//! Backdrop Component
//! Animated gradient, radial glow and a single orbiting light

use leptos::prelude::*;

use crate::utils::constants::{BACKDROP_GRADIENT, ORBIT_DOT_STYLE, RADIAL_GLOW};

#[component]
pub fn Backdrop() -> impl IntoView {
    view! {
        <div
            class="backdrop-layer animate-gradient"
            style=format!("background: {}; background-size: 400% 400%;", BACKDROP_GRADIENT)
        ></div>
        <div class="backdrop-layer" style=format!("background: {};", RADIAL_GLOW)></div>
        <div class="orbit-anchor">
            <div class="orbit-dot" style=ORBIT_DOT_STYLE></div>
        </div>
    }
}
