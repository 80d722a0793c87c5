//! Utilities

pub mod constants;
pub mod date;
