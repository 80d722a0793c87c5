//! Reactive hooks

pub mod entrance;

pub use entrance::use_entrance;
