//! Aggregates the “business logic” layer.

pub mod config;
pub mod constants;
pub mod error;
pub mod gaussian;
pub mod mixer;
pub mod rng;
pub mod service;
pub mod stats;

// re-export frequently-used items for convenience
pub use config::{BiasConfig, BiasConfigBuilder, StrengthUpdate};
pub use constants::{CENTER, DEFAULT_BIAS_PROBABILITY, DEFAULT_STANDARD_DEVIATION, TURBO_VALUE};
pub use error::BiasError;
pub use gaussian::sample_standard_normal;
pub use mixer::{Branch, biased_random, sample_with_branch};
pub use rng::{Lcg, UniformSource};
pub use service::{Draw, RngService, Settings, Status, Variant};
pub use stats::Summary;
