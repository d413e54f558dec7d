//! A collection of constants.

/// 97% of draws take the biased branch unless reconfigured.
pub const DEFAULT_BIAS_PROBABILITY: f64 = 0.97;
/// Spread of the biased distribution around [`CENTER`].
pub const DEFAULT_STANDARD_DEVIATION: f64 = 0.06;

/// Biased samples are centred here.
pub const CENTER: f64 = 0.5;
/// What every draw returns while the deterministic override is on.
pub const TURBO_VALUE: f64 = 0.5;

/// Draw count used by the CLI when `-n` is omitted.
pub const DEFAULT_SAMPLE_COUNT: usize = 10_000;
/// Histogram buckets when `--bins` is omitted.
pub const DEFAULT_BINS: usize = 20;
/// Upper bound accepted for `--bins`.
pub const MAX_BINS: u64 = 1_000;
