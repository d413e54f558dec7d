//! Bias strength: the clamped run-time configuration, its builder, and
//! partial updates.

use crate::core::constants::{DEFAULT_BIAS_PROBABILITY, DEFAULT_STANDARD_DEVIATION};

/// `None` for NaN, otherwise the value pinned into `[0, 1]`.
#[inline]
fn clamp_probability(p: f64) -> Option<f64> {
    (!p.is_nan()).then(|| p.clamp(0.0, 1.0))
}

/// `None` for NaN, otherwise the value pinned into `[0, f64::MAX]`.
///
/// Capping infinity keeps `g * std` from ever producing `0 * ∞ = NaN`.
#[inline]
fn clamp_std(s: f64) -> Option<f64> {
    (!s.is_nan()).then(|| s.clamp(0.0, f64::MAX))
}

/// How hard draws are pulled towards the centre.
///
/// Fields are only reachable through clamping writers, so a `BiasConfig`
/// always holds a probability in `[0, 1]` and a non-negative deviation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiasConfig {
    bias_probability: f64,
    standard_deviation: f64,
}

impl Default for BiasConfig {
    fn default() -> Self {
        Self {
            bias_probability: DEFAULT_BIAS_PROBABILITY,
            standard_deviation: DEFAULT_STANDARD_DEVIATION,
        }
    }
}

impl BiasConfig {
    #[inline]
    #[must_use]
    pub fn builder() -> BiasConfigBuilder {
        BiasConfigBuilder::default()
    }

    /// Probability that a single draw takes the biased branch.
    #[inline]
    #[must_use]
    pub fn bias_probability(&self) -> f64 {
        self.bias_probability
    }

    #[inline]
    #[must_use]
    pub fn standard_deviation(&self) -> f64 {
        self.standard_deviation
    }

    pub fn set_bias_probability(&mut self, p: f64) {
        if let Some(p) = clamp_probability(p) {
            self.bias_probability = p;
        }
    }

    pub fn set_standard_deviation(&mut self, s: f64) {
        if let Some(s) = clamp_std(s) {
            self.standard_deviation = s;
        }
    }

    /// Overwrites the fields present in `update`; absent fields stay put.
    pub fn apply(&mut self, update: &StrengthUpdate) {
        if let Some(p) = update.bias_prob {
            self.set_bias_probability(p);
        }
        if let Some(s) = update.std {
            self.set_standard_deviation(s);
        }
    }
}

/// Fluent builder starting from the defaults.  `build` cannot fail.
#[derive(Debug, Default)]
pub struct BiasConfigBuilder {
    update: StrengthUpdate,
}

impl BiasConfigBuilder {
    #[inline]
    #[must_use]
    pub fn bias_probability(mut self, p: f64) -> Self {
        self.update.bias_prob = Some(p);
        self
    }
    #[inline]
    #[must_use]
    pub fn standard_deviation(mut self, s: f64) -> Self {
        self.update.std = Some(s);
        self
    }

    #[must_use]
    pub fn build(self) -> BiasConfig {
        let mut cfg = BiasConfig::default();
        cfg.apply(&self.update);
        cfg
    }
}

/// Partial strength change; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StrengthUpdate {
    pub bias_prob: Option<f64>,
    pub std: Option<f64>,
}

impl StrengthUpdate {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    #[inline]
    #[must_use]
    pub fn bias_prob(mut self, p: f64) -> Self {
        self.bias_prob = Some(p);
        self
    }
    #[inline]
    #[must_use]
    pub fn std(mut self, s: f64) -> Self {
        self.std = Some(s);
        self
    }

    /// Fields set in `other` win.
    #[must_use]
    pub fn merge(self, other: &StrengthUpdate) -> Self {
        Self {
            bias_prob: other.bias_prob.or(self.bias_prob),
            std: other.std.or(self.std),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bias_prob.is_none() && self.std.is_none()
    }

    /// Lenient `key=value` list, e.g. `"biasProb=0.9, std=0.05"`.
    ///
    /// Entries are separated by `,` or `;`.  Unknown keys and values that are
    /// not floats are skipped one entry at a time; this never fails.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let mut out = Self::default();
        for entry in s.split([',', ';']) {
            let Some((key, value)) = entry.split_once('=') else {
                continue;
            };
            let Ok(v) = lexical_core::parse::<f64>(value.trim().as_bytes()) else {
                continue;
            };
            match key.trim() {
                "biasProb" | "bias_prob" | "bias_probability" | "p" => out.bias_prob = Some(v),
                "std" | "standard_deviation" | "sigma" => out.std = Some(v),
                _ => {}
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = BiasConfig::default();
        assert_eq!(cfg.bias_probability(), 0.97);
        assert_eq!(cfg.standard_deviation(), 0.06);
    }

    #[test]
    fn writes_are_clamped() {
        let mut cfg = BiasConfig::default();
        cfg.apply(&StrengthUpdate::new().bias_prob(5.0));
        assert_eq!(cfg.bias_probability(), 1.0);
        cfg.apply(&StrengthUpdate::new().std(-3.0));
        assert_eq!(cfg.standard_deviation(), 0.0);
        cfg.set_bias_probability(-0.5);
        assert_eq!(cfg.bias_probability(), 0.0);
        cfg.set_standard_deviation(f64::INFINITY);
        assert_eq!(cfg.standard_deviation(), f64::MAX);
    }

    #[test]
    fn nan_and_missing_fields_leave_values_alone() {
        let mut cfg = BiasConfig::builder().standard_deviation(0.2).build();
        cfg.apply(&StrengthUpdate::new().bias_prob(f64::NAN));
        assert_eq!(cfg.bias_probability(), 0.97);
        assert_eq!(cfg.standard_deviation(), 0.2);
        cfg.apply(&StrengthUpdate::new());
        assert_eq!(cfg, BiasConfig::builder().standard_deviation(0.2).build());
    }

    #[test]
    fn builder_clamps() {
        let cfg = BiasConfig::builder()
            .bias_probability(1.5)
            .standard_deviation(-1.0)
            .build();
        assert_eq!(cfg.bias_probability(), 1.0);
        assert_eq!(cfg.standard_deviation(), 0.0);
    }

    #[test]
    fn parse_is_lenient_per_entry() {
        let u = StrengthUpdate::parse("biasProb=0.8, std=oops");
        assert_eq!(u.bias_prob, Some(0.8));
        assert_eq!(u.std, None);

        let u = StrengthUpdate::parse(" sigma = 0.1 ; color=red ; nonsense");
        assert_eq!(u.bias_prob, None);
        assert_eq!(u.std, Some(0.1));

        assert!(StrengthUpdate::parse("").is_empty());
    }

    #[test]
    fn merge_prefers_newer_fields() {
        let a = StrengthUpdate::new().bias_prob(0.1).std(0.2);
        let b = StrengthUpdate::new().std(0.3);
        assert_eq!(a.merge(&b), StrengthUpdate::new().bias_prob(0.1).std(0.3));
    }
}
