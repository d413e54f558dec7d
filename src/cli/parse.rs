use clap::{Args, Parser, Subcommand, builder::RangedU64ValueParser};

use crate::core::constants::{DEFAULT_BINS, DEFAULT_SAMPLE_COUNT, MAX_BINS};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "rng-bias",
    about = "Uniform randomness, pulled hard towards 0.5"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print raw draws, one per line
    Sample(SampleArgs),
    /// Summarise a batch of draws
    Stats(SampleArgs),
    /// Text histogram of a batch of draws
    Histogram(HistogramArgs),
    /// Show the current bias settings
    Settings(SourceArgs),
    /// Print example invocations
    Examples,
}

/// Knobs shared by every command that touches the biased source.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Seed for the underlying uniform generator (clock if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Probability of a biased draw, clamped to [0, 1]
    #[arg(long, allow_hyphen_values = true)]
    pub bias_prob: Option<f64>,

    /// Spread around 0.5, clamped to >= 0
    #[arg(long, allow_hyphen_values = true)]
    pub std: Option<f64>,

    /// Lenient `biasProb=…, std=…` list; bad entries are skipped
    #[arg(long)]
    pub strength: Option<String>,

    /// Every draw returns exactly 0.5
    #[arg(long)]
    pub turbo: bool,

    /// Draw from the original uniform source instead
    #[arg(long, conflicts_with = "turbo")]
    pub restore: bool,

    /// Verbose tracing output on stderr
    #[arg(long)]
    pub debug: bool,
}

/// `rng-bias sample|stats …`
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Number of draws
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    pub count: usize,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// `rng-bias histogram …`
#[derive(Args, Debug)]
pub struct HistogramArgs {
    /// Number of draws
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    pub count: usize,

    /// Buckets across [0, 1]
    #[arg(
        long,
        default_value_t = DEFAULT_BINS,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_BINS)
    )]
    pub bins: usize,

    #[command(flatten)]
    pub source: SourceArgs,
}
