//! # Landing Page Core Library
//!
//! Platform-independent logic behind the "coming soon" landing page. The
//! browser front-end (`landing-web`) renders what this crate computes, and
//! everything here builds and tests on native targets.
//!
//! ## Structure
//!
//! - **[`particle`]**: Decorative particle descriptors and the field generator
//!   - **[`particle::ParticleField`]**: The fixed set of 30 particles, generated once
//!   - **[`particle::RandomSource`]**: Source of unit draws in `[0, 1)`
//! - **[`mount`]**: One-shot entrance transition
//!   - **[`mount::MountTransition`]**: `Unmounted -> Mounted` state machine
//!   - **[`mount::FrameScheduler`]**: Display-refresh callback abstraction
//! - **[`constants`]**: Particle ranges, profile link and page copy
//! - **[`utils`]**: Text formatting helpers
//!
//! ## Usage
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use shared::particle::ParticleField;
//! use shared::constants::PARTICLE_COUNT;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let field = ParticleField::generate(&mut rng);
//! assert_eq!(field.len(), PARTICLE_COUNT);
//! ```

pub mod constants;
pub mod mount;
pub mod particle;
pub mod utils;

pub use mount::{
    cancel_entrance, schedule_entrance, FrameScheduler, MountState, MountTransition,
    SharedTransition,
};
pub use particle::{generate_particles, Particle, ParticleField, ParticleTint, RandomSource};
pub use utils::copyright_line;
