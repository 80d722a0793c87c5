//! # Shared Text Helpers
//!
//! Formatting used by the landing page front-end.
//!
//! ```rust
//! use shared::utils::copyright_line;
//!
//! assert_eq!(copyright_line(2025, "NatsumeAoii"), "© 2025 NatsumeAoii");
//! ```

/// Footer copyright notice, e.g. `© 2025 NatsumeAoii`.
pub fn copyright_line(year: i32, owner: &str) -> String {
    format!("\u{a9} {} {}", year, owner)
}
