//! Public-facing crate root – re-exports + the process-wide entry point.
//!
//! ```
//! use rng_bias::{Lcg, RngService, StrengthUpdate};
//!
//! let mut svc = RngService::new(Lcg::seed(7));
//! svc.install();
//! svc.configure(&StrengthUpdate::new().bias_prob(1.0).std(0.0));
//! assert_eq!(svc.random(), 0.5);
//! ```

pub mod cli;
pub mod core;
pub mod global;
pub mod render;

pub use crate::core::{
    config::{BiasConfig, BiasConfigBuilder, StrengthUpdate},
    error::BiasError,
    mixer::Branch,
    rng::{Lcg, UniformSource},
    service::{Draw, RngService, Settings, Status, Variant},
    stats::Summary,
};

pub use render::{Histogram, terminal_width};

/// Convenience: one draw from the process-wide biased source, installing it
/// on first use.
#[inline]
pub fn random() -> f64 {
    global::random()
}
