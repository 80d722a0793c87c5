//! Page constants

use std::ops::Range;

/// Number of decorative particles in the field.
pub const PARTICLE_COUNT: usize = 30;

// Particle value ranges (half-open)
pub const X_RANGE: Range<f64> = 0.0..100.0; // percent of width
pub const Y_RANGE: Range<f64> = 0.0..100.0; // percent of height
pub const SIZE_RANGE: Range<f64> = 1.0..4.0; // px
pub const DURATION_RANGE: Range<f64> = 6.0..14.0; // seconds
pub const DELAY_RANGE: Range<f64> = 0.0..5.0; // seconds
pub const OPACITY_RANGE: Range<f64> = 0.1..0.5;

/// Every n-th particle (by id) gets the cyan tint.
pub const CYAN_EVERY: u32 = 3;

// Profile link
pub const OWNER_NAME: &str = "NatsumeAoii";
pub const PROFILE_URL: &str = "https://github.com/NatsumeAoii";
pub const PROFILE_LABEL: &str = "Visit NatsumeAoii on GitHub";

// Card copy
pub const AVATAR_INITIAL: &str = "N";
pub const HEADING: &str = "Coming Soon";
pub const DESCRIPTION_LINES: [&str; 2] = [
    "Something amazing is being crafted.",
    "Stay tuned for the launch.",
];
