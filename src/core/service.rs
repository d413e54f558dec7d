//! The biased random service: owns the original uniform source, the strength
//! configuration, and the install / restore / turbo lifecycle.
//!
//! Callers draw through [`RngService::random`].  Which generator answers is a
//! tagged [`Variant`] derived from the lifecycle state and dispatched from one
//! `match`; nothing is ever rebound.
//!
//! ```text
//! NotInstalled ──install──▶ Biased ──turbo(true)──▶ Deterministic
//!      ▲                    │    ◀──turbo(false)──        │
//!      └──────restore───────┴──────────restore────────────┘
//! ```

use tracing::{debug, info};

use crate::core::{
    config::{BiasConfig, StrengthUpdate},
    constants::TURBO_VALUE,
    mixer::{Branch, sample_with_branch},
    rng::UniformSource,
};

/// Generator currently answering [`RngService::random`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Variant {
    /// The bias mixer, reading the live configuration.
    Biased,
    /// The untouched original source.
    Original,
    /// Always exactly 0.5.
    ConstantHalf,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum Mode {
    #[default]
    NotInstalled,
    Biased,
    Deterministic,
}

/// One draw, tagged with where it came from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Draw {
    Mixed(f64, Branch),
    Original(f64),
    Constant(f64),
}

impl Draw {
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::Mixed(v, _) | Self::Original(v) | Self::Constant(v) => v,
        }
    }

    /// `Some` only for draws that went through the mixer.
    #[inline]
    #[must_use]
    pub fn branch(self) -> Option<Branch> {
        match self {
            Self::Mixed(_, b) => Some(b),
            _ => None,
        }
    }
}

/// Read-only snapshot of the service.
///
/// `deterministic` is reported separately; turning turbo on does not rewrite
/// `bias_probability`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Status {
    pub bias_probability: f64,
    pub standard_deviation: f64,
    pub installed: bool,
    pub deterministic: bool,
}

/// The `{ biasProb, std, enabled }` triple handed out by the control surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    pub bias_prob: f64,
    pub std: f64,
    pub enabled: bool,
}

impl From<Status> for Settings {
    fn from(s: Status) -> Self {
        Self {
            bias_prob: s.bias_probability,
            std: s.standard_deviation,
            enabled: s.installed,
        }
    }
}

pub struct RngService<S> {
    original: S,
    config: BiasConfig,
    mode: Mode,
}

impl<S: UniformSource> RngService<S> {
    /// Takes ownership of the original source; starts uninstalled with the
    /// default strength.
    pub fn new(original: S) -> Self {
        Self {
            original,
            config: BiasConfig::default(),
            mode: Mode::NotInstalled,
        }
    }

    /// Switches the entry point to the bias mixer.  No-op when installed.
    pub fn install(&mut self) {
        if self.is_installed() {
            return;
        }
        self.mode = Mode::Biased;
        info!(
            bias_probability = self.config.bias_probability(),
            standard_deviation = self.config.standard_deviation(),
            "RNG bias installed, heavy bias active"
        );
    }

    /// Hands the entry point back to the original source.  No-op when not
    /// installed.
    pub fn restore(&mut self) {
        if !self.is_installed() {
            return;
        }
        self.mode = Mode::NotInstalled;
        info!("RNG bias removed, original source restored");
    }

    /// Clamped partial update of the strength.
    pub fn configure(&mut self, update: &StrengthUpdate) {
        self.config.apply(update);
        debug!(
            bias_probability = self.config.bias_probability(),
            standard_deviation = self.config.standard_deviation(),
            "bias strength updated"
        );
    }

    /// Turbo: every draw returns exactly 0.5 while enabled.  Disabling goes
    /// back to the mixer, never to the original.  Ignored when not installed.
    pub fn set_deterministic_override(&mut self, enabled: bool) {
        if !self.is_installed() {
            debug!(enabled, "deterministic override ignored, bias not installed");
            return;
        }
        self.mode = if enabled {
            Mode::Deterministic
        } else {
            Mode::Biased
        };
        debug!(enabled, "deterministic override toggled");
    }

    #[must_use]
    pub fn status(&self) -> Status {
        Status {
            bias_probability: self.config.bias_probability(),
            standard_deviation: self.config.standard_deviation(),
            installed: self.is_installed(),
            deterministic: self.mode == Mode::Deterministic,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.mode != Mode::NotInstalled
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &BiasConfig {
        &self.config
    }

    #[must_use]
    pub fn active_variant(&self) -> Variant {
        match self.mode {
            Mode::NotInstalled => Variant::Original,
            Mode::Biased => Variant::Biased,
            Mode::Deterministic => Variant::ConstantHalf,
        }
    }

    /// Unbiased draw straight from the original source, whatever the state.
    #[inline]
    pub fn draw_uniform(&mut self) -> f64 {
        self.original.draw_uniform()
    }

    /// One draw from the active variant, tagged with its origin.
    pub fn draw(&mut self) -> Draw {
        match self.active_variant() {
            Variant::Biased => {
                let (v, branch) = sample_with_branch(&mut self.original, &self.config);
                Draw::Mixed(v, branch)
            }
            Variant::Original => Draw::Original(self.original.draw_uniform()),
            Variant::ConstantHalf => Draw::Constant(TURBO_VALUE),
        }
    }

    /// The entry point.  `[0, 1]` while biased, `[0, 1)` when restored.
    #[inline]
    pub fn random(&mut self) -> f64 {
        self.draw().value()
    }
}
