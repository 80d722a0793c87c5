//! # Particle Field
//!
//! Decorative particles floating over the landing page backdrop. A field of
//! [`PARTICLE_COUNT`] particles is generated once per page instance and is
//! read-only afterwards.
//!
//! ## Value Ranges
//!
//! | Field      | Range        | Unit            |
//! |------------|--------------|-----------------|
//! | `x`, `y`   | `[0, 100)`   | percent         |
//! | `size`     | `[1, 4)`     | px              |
//! | `duration` | `[6, 14)`    | seconds         |
//! | `delay`    | `[0, 5)`     | seconds         |
//! | `opacity`  | `[0.1, 0.5)` | alpha           |

use std::ops::Range;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{
    CYAN_EVERY, DELAY_RANGE, DURATION_RANGE, OPACITY_RANGE, PARTICLE_COUNT, SIZE_RANGE, X_RANGE,
    Y_RANGE,
};

/// Source of uniformly distributed draws in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl RandomSource for StdRng {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// A single decorative particle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub duration: f64,
    pub delay: f64,
    pub opacity: f64,
}

/// Colour pair a particle renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleTint {
    Cyan,
    Violet,
}

impl ParticleTint {
    pub fn for_id(id: u32) -> Self {
        if id % CYAN_EVERY == 0 {
            ParticleTint::Cyan
        } else {
            ParticleTint::Violet
        }
    }

    pub fn fill(self) -> &'static str {
        match self {
            ParticleTint::Cyan => "rgba(6, 182, 212, 0.6)",
            ParticleTint::Violet => "rgba(168, 139, 250, 0.5)",
        }
    }

    pub fn glow(self) -> &'static str {
        match self {
            ParticleTint::Cyan => "0 0 8px rgba(6, 182, 212, 0.4)",
            ParticleTint::Violet => "0 0 8px rgba(168, 139, 250, 0.3)",
        }
    }
}

impl Particle {
    /// Draw one particle. Fields are drawn in declaration order.
    pub fn random<R: RandomSource + ?Sized>(id: u32, source: &mut R) -> Self {
        Self {
            id,
            x: draw(source, &X_RANGE),
            y: draw(source, &Y_RANGE),
            size: draw(source, &SIZE_RANGE),
            duration: draw(source, &DURATION_RANGE),
            delay: draw(source, &DELAY_RANGE),
            opacity: draw(source, &OPACITY_RANGE),
        }
    }

    pub fn tint(&self) -> ParticleTint {
        ParticleTint::for_id(self.id)
    }

    /// Inline CSS for the particle element.
    pub fn inline_style(&self) -> String {
        let tint = self.tint();
        format!(
            "left: {}%; top: {}%; width: {}px; height: {}px; background: {}; \
             box-shadow: {}; animation: float {}s ease-in-out {}s infinite; opacity: {};",
            self.x,
            self.y,
            self.size,
            self.size,
            tint.fill(),
            tint.glow(),
            self.duration,
            self.delay,
            self.opacity
        )
    }
}

/// Map a unit draw onto a half-open range.
///
/// Rounding in `start + u * span` can land exactly on `end` for `u` close to
/// one; such values are pulled back to the largest float below `end`. A NaN
/// draw yields `start`.
fn draw<R: RandomSource + ?Sized>(source: &mut R, range: &Range<f64>) -> f64 {
    let span = range.end - range.start;
    let value = range.start + source.next_unit() * span;
    if value.is_nan() || value < range.start {
        range.start
    } else if value >= range.end {
        just_below(range.end)
    } else {
        value
    }
}

fn just_below(end: f64) -> f64 {
    if end > 0.0 {
        f64::from_bits(end.to_bits() - 1)
    } else {
        end - f64::EPSILON
    }
}

/// Generate [`PARTICLE_COUNT`] particles with ids `0..PARTICLE_COUNT`.
pub fn generate_particles<R: RandomSource + ?Sized>(source: &mut R) -> Vec<Particle> {
    (0..PARTICLE_COUNT as u32)
        .map(|id| Particle::random(id, source))
        .collect()
}

/// The particle set of one page instance.
///
/// Clones share the same allocation, so every render reads the same sequence.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Arc<[Particle]>,
}

impl ParticleField {
    pub fn generate<R: RandomSource + ?Sized>(source: &mut R) -> Self {
        Self {
            particles: generate_particles(source).into(),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// `true` when both fields are the same generated sequence.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.particles, &other.particles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    /// Returns the same draw every time.
    struct Fixed(f64);

    impl RandomSource for Fixed {
        fn next_unit(&mut self) -> f64 {
            self.0
        }
    }

    /// Largest f64 below 1.0.
    const ALMOST_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

    fn assert_in_range(particle: &Particle) {
        assert!(
            X_RANGE.contains(&particle.x),
            "x out of range: {particle:?}"
        );
        assert!(
            Y_RANGE.contains(&particle.y),
            "y out of range: {particle:?}"
        );
        assert!(
            SIZE_RANGE.contains(&particle.size),
            "size out of range: {particle:?}"
        );
        assert!(
            DURATION_RANGE.contains(&particle.duration),
            "duration out of range: {particle:?}"
        );
        assert!(
            DELAY_RANGE.contains(&particle.delay),
            "delay out of range: {particle:?}"
        );
        assert!(
            OPACITY_RANGE.contains(&particle.opacity),
            "opacity out of range: {particle:?}"
        );
    }

    #[test]
    fn test_generates_exactly_thirty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate_particles(&mut rng).len(), 30);
        assert_eq!(PARTICLE_COUNT, 30);
    }

    #[test]
    fn test_values_within_ranges_across_seeds() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            for particle in generate_particles(&mut rng) {
                assert_in_range(&particle);
            }
        }
    }

    #[test]
    fn test_ids_are_ordinal() {
        let mut rng = StdRng::seed_from_u64(42);
        let ids: Vec<u32> = generate_particles(&mut rng).iter().map(|p| p.id).collect();
        assert_eq!(ids, (0..30).collect::<Vec<u32>>());
    }

    #[test]
    fn test_zero_draw_hits_range_starts() {
        let particle = Particle::random(0, &mut Fixed(0.0));
        assert_eq!(particle.x, 0.0);
        assert_eq!(particle.y, 0.0);
        assert_eq!(particle.size, 1.0);
        assert_eq!(particle.duration, 6.0);
        assert_eq!(particle.delay, 0.0);
        assert_eq!(particle.opacity, 0.1);
    }

    #[test]
    fn test_maximal_draw_stays_below_range_ends() {
        let particle = Particle::random(0, &mut Fixed(ALMOST_ONE));
        assert_in_range(&particle);
    }

    #[test]
    fn test_out_of_contract_draws_are_clamped() {
        assert_in_range(&Particle::random(0, &mut Fixed(1.0)));
        assert_in_range(&Particle::random(0, &mut Fixed(-0.25)));
    }

    #[test]
    fn test_non_finite_draws_are_clamped() {
        let particle = Particle::random(0, &mut Fixed(f64::NAN));
        assert_in_range(&particle);
        assert_eq!(particle.x, X_RANGE.start);
        assert_eq!(particle.opacity, OPACITY_RANGE.start);

        assert_in_range(&Particle::random(0, &mut Fixed(f64::INFINITY)));
        assert_in_range(&Particle::random(0, &mut Fixed(f64::NEG_INFINITY)));
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = generate_particles(&mut StdRng::seed_from_u64(9));
        let b = generate_particles(&mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_tint_follows_id() {
        assert_eq!(ParticleTint::for_id(0), ParticleTint::Cyan);
        assert_eq!(ParticleTint::for_id(1), ParticleTint::Violet);
        assert_eq!(ParticleTint::for_id(2), ParticleTint::Violet);
        assert_eq!(ParticleTint::for_id(3), ParticleTint::Cyan);
        assert_eq!(ParticleTint::for_id(29), ParticleTint::Violet);
    }

    #[test]
    fn test_inline_style() {
        let particle = Particle {
            id: 3,
            x: 12.5,
            y: 40.0,
            size: 2.0,
            duration: 8.0,
            delay: 1.5,
            opacity: 0.3,
        };

        let style = particle.inline_style();

        assert!(style.starts_with("left: 12.5%; top: 40%; width: 2px; height: 2px;"));
        assert!(style.contains("background: rgba(6, 182, 212, 0.6);"));
        assert!(style.contains("box-shadow: 0 0 8px rgba(6, 182, 212, 0.4);"));
        assert!(style.contains("animation: float 8s ease-in-out 1.5s infinite;"));
        assert!(style.ends_with("opacity: 0.3;"));
    }

    #[test]
    fn test_field_clones_share_sequence() {
        let field = ParticleField::generate(&mut StdRng::seed_from_u64(5));
        let rendered = field.clone();

        assert!(field.ptr_eq(&rendered));
        assert_eq!(field.particles(), rendered.particles());
    }

    #[test]
    fn test_separate_fields_are_distinct() {
        let mut rng = StdRng::seed_from_u64(5);
        let first = ParticleField::generate(&mut rng);
        let second = ParticleField::generate(&mut rng);

        assert!(!first.ptr_eq(&second));
        assert_ne!(first.particles(), second.particles());
    }

    #[test]
    fn test_particle_json_field_names() {
        let particle = Particle::random(7, &mut Fixed(0.5));
        let json = serde_json::to_value(particle).expect("particle should serialize");

        assert_eq!(json["id"], 7);
        assert_eq!(json["x"], 50.0);
        assert_eq!(json["size"], 2.5);
        assert_eq!(json["duration"], 10.0);
        assert_eq!(json["delay"], 2.5);
        let opacity = json["opacity"]
            .as_f64()
            .expect("opacity should be a number");
        assert!((opacity - 0.3).abs() < 1e-9);
    }
}
