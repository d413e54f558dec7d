//! Fixed-bin histogram over `[0, 1]` with a plain-text bar renderer.

use std::fmt::Write;

use terminal_size::{Width, terminal_size};

use crate::core::error::BiasError;

/// Narrowest bar area we will draw, even on a tiny terminal.
const MIN_BAR_WIDTH: usize = 10;
/// `"0.45-0.50 │"`
const LABEL_WIDTH: usize = 11;

/// Current terminal width (80 column fallback).
#[inline]
#[must_use]
pub fn terminal_width() -> usize {
    terminal_size().map_or(80, |(Width(w), _)| usize::from(w))
}

#[derive(Debug, Clone)]
pub struct Histogram {
    counts: Vec<usize>,
    total: usize,
}

impl Histogram {
    pub fn new(bins: usize) -> Result<Self, BiasError> {
        if bins == 0 {
            return Err(BiasError::InvalidBins);
        }
        Ok(Self {
            counts: vec![0; bins],
            total: 0,
        })
    }

    pub fn from_values<I: IntoIterator<Item = f64>>(
        values: I,
        bins: usize,
    ) -> Result<Self, BiasError> {
        let mut h = Self::new(bins)?;
        for v in values {
            h.add(v);
        }
        Ok(h)
    }

    /// Buckets are half-open except the last, which also takes 1.0.
    pub fn add(&mut self, v: f64) {
        let bins = self.counts.len();
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let idx = ((v.clamp(0.0, 1.0) * bins as f64) as usize).min(bins - 1);
        self.counts[idx] += 1;
        self.total += 1;
    }

    #[inline]
    #[must_use]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// One line per bin, bars scaled so the fullest bin spans the bar area.
    #[must_use]
    pub fn render(&self, width: usize) -> String {
        let peak = self.counts.iter().copied().max().unwrap_or(0);
        let count_w = peak.to_string().len();
        let bar_w = width
            .saturating_sub(LABEL_WIDTH + count_w + 2)
            .max(MIN_BAR_WIDTH);

        #[allow(clippy::cast_precision_loss)]
        let step = 1.0 / self.counts.len() as f64;
        let mut out = String::new();
        for (i, &c) in self.counts.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let lo = i as f64 * step;
            let len = if peak == 0 { 0 } else { c * bar_w / peak };
            // writing into a String cannot fail
            let _ = writeln!(
                out,
                "{lo:.2}-{:.2} │{:<bar_w$} {c:>count_w$}",
                lo + step,
                "█".repeat(len),
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bins_rejected() {
        assert!(matches!(Histogram::new(0), Err(BiasError::InvalidBins)));
    }

    #[test]
    fn edges_land_in_end_bins() {
        let h = Histogram::from_values([0.0, 0.5, 0.999, 1.0, -2.0, 3.0], 4).unwrap();
        assert_eq!(h.counts(), &[2, 0, 1, 3]);
        assert_eq!(h.total(), 6);
    }

    #[test]
    fn render_scales_to_peak() {
        let h = Histogram::from_values([0.1, 0.1, 0.9], 2).unwrap();
        let text = h.render(40);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let bar_w = 40 - (LABEL_WIDTH + 1 + 2);
        assert_eq!(lines[0].matches('█').count(), bar_w);
        assert_eq!(lines[1].matches('█').count(), bar_w / 2);
        assert!(lines[0].starts_with("0.00-0.50 │"));
    }
}
