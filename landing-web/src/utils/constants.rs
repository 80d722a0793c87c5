//! Application constants

pub use shared::constants::{
    AVATAR_INITIAL, DESCRIPTION_LINES, HEADING, OWNER_NAME, PROFILE_LABEL, PROFILE_URL,
};

// Backdrop
pub const BACKDROP_GRADIENT: &str =
    "linear-gradient(-45deg, #050208, #1a0533, #0c1445, #12082e, #050208)";
pub const RADIAL_GLOW: &str =
    "radial-gradient(ellipse 60% 50% at 50% 45%, rgba(124, 58, 237, 0.12) 0%, transparent 70%)";
pub const ORBIT_DOT_STYLE: &str =
    "background: radial-gradient(circle, rgba(168, 139, 250, 0.7), transparent); \
     box-shadow: 0 0 15px 5px rgba(168, 139, 250, 0.3);";

// Entrance classes (see style/main.css)
pub const CARD_ENTER_CLASS: &str = "card-shell card-enter";
pub const CARD_ENTERED_CLASS: &str = "card-shell card-entered";
