//! Box-Muller, cosine branch only.

use std::f64::consts::PI;

use crate::core::rng::UniformSource;

/// Draws until the source yields something other than exactly zero.
#[inline]
fn draw_nonzero<S: UniformSource + ?Sized>(src: &mut S) -> f64 {
    loop {
        let x = src.draw_uniform();
        if x != 0.0 {
            return x;
        }
    }
}

/// Standard normal 𝒩(0, 1) sample from two independent uniform draws.
///
/// Both draws are retried on an exact zero so `ln(u)` never sees 0; `v` only
/// feeds the cosine but is guarded the same way.
#[inline]
pub fn sample_standard_normal<S: UniformSource + ?Sized>(src: &mut S) -> f64 {
    let u = draw_nonzero(src);
    let v = draw_nonzero(src);
    (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos()
}
