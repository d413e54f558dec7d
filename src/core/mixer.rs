//! Per-call choice between a centred Gaussian sample and a plain uniform one.
//!
//! The coin flip, the Gaussian inputs and the unbiased fallback are all
//! separate draws, so which branch fired says nothing about the value's bits.

use crate::core::{
    config::BiasConfig, constants::CENTER, gaussian::sample_standard_normal, rng::UniformSource,
};

/// Which branch produced a sample.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Branch {
    Biased,
    Unbiased,
}

/// Pins into `[0, 1]`; NaN cannot reach here because the deviation is finite.
#[inline]
fn clamp_unit(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x > 1.0 {
        1.0
    } else {
        x
    }
}

/// One mixed draw plus the branch that produced it.
pub fn sample_with_branch<S: UniformSource + ?Sized>(
    src: &mut S,
    cfg: &BiasConfig,
) -> (f64, Branch) {
    if src.draw_uniform() < cfg.bias_probability() {
        let g = sample_standard_normal(src);
        let value = clamp_unit(CENTER + g * cfg.standard_deviation());
        (value, Branch::Biased)
    } else {
        (src.draw_uniform(), Branch::Unbiased)
    }
}

/// One mixed draw in the closed interval `[0, 1]`.
#[inline]
pub fn biased_random<S: UniformSource + ?Sized>(src: &mut S, cfg: &BiasConfig) -> f64 {
    sample_with_branch(src, cfg).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::Lcg;

    #[test]
    fn unbiased_branch_uses_a_fresh_draw() {
        let cfg = BiasConfig::builder().bias_probability(0.5).build();
        let mut script = [0.9, 0.125].into_iter();
        let mut src = || script.next().unwrap_or(0.0);
        assert_eq!(sample_with_branch(&mut src, &cfg), (0.125, Branch::Unbiased));
    }

    #[test]
    fn biased_value_is_center_plus_scaled_normal() {
        let cfg = BiasConfig::builder()
            .bias_probability(1.0)
            .standard_deviation(0.1)
            .build();
        // coin, then u = 0.5 and v = 0.125 for the Gaussian
        let mut script = [0.0, 0.5, 0.125].into_iter();
        let mut src = || script.next().unwrap_or(0.5);
        let (value, branch) = sample_with_branch(&mut src, &cfg);

        let g = (-2.0 * 0.5_f64.ln()).sqrt() * (2.0 * std::f64::consts::PI * 0.125).cos();
        assert_eq!(branch, Branch::Biased);
        assert_eq!(value.to_bits(), (0.5 + g * 0.1).to_bits());
    }

    #[test]
    fn zero_deviation_pins_to_center() {
        let cfg = BiasConfig::builder()
            .bias_probability(1.0)
            .standard_deviation(0.0)
            .build();
        let mut rng = Lcg::seed(11);
        for _ in 0..1_000 {
            assert_eq!(biased_random(&mut rng, &cfg), 0.5);
        }
    }

    #[test]
    fn huge_deviation_stays_in_unit_interval() {
        let cfg = BiasConfig::builder()
            .bias_probability(1.0)
            .standard_deviation(f64::INFINITY)
            .build();
        let mut rng = Lcg::seed(3);
        for _ in 0..1_000 {
            let v = biased_random(&mut rng, &cfg);
            assert!((0.0..=1.0).contains(&v), "{v}");
        }
    }

    #[test]
    fn zero_probability_is_plain_uniform() {
        let cfg = BiasConfig::builder().bias_probability(0.0).build();
        let mut rng = Lcg::seed(5);
        let n = 1_000;
        let biased = (0..n)
            .filter(|_| sample_with_branch(&mut rng, &cfg).1 == Branch::Biased)
            .count();
        assert_eq!(biased, 0);
    }
}
