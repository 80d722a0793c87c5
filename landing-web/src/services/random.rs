//! `Math.random()` as a particle random source

use shared::RandomSource;

/// Draws from the browser's `Math.random()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsMathRandom;

impl RandomSource for JsMathRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}
