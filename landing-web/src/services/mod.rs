//! Browser-backed implementations of the `shared` seams

pub mod frames;
pub mod random;

pub use frames::BrowserFrames;
pub use random::JsMathRandom;
