//! Descriptive statistics over a batch of draws.

use crate::core::{error::BiasError, mixer::Branch, service::Draw};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    /// Share of mixer draws that took the biased branch; `None` if no draw
    /// went through the mixer (restored or turbo).
    pub biased_fraction: Option<f64>,
}

impl Summary {
    pub fn from_draws(draws: &[Draw]) -> Result<Self, BiasError> {
        if draws.is_empty() {
            return Err(BiasError::EmptySample);
        }
        #[allow(clippy::cast_precision_loss)]
        let n = draws.len() as f64;

        let (mut sum, mut min, mut max) = (0.0, f64::INFINITY, f64::NEG_INFINITY);
        let (mut mixed, mut biased) = (0usize, 0usize);
        for d in draws {
            let v = d.value();
            sum += v;
            min = min.min(v);
            max = max.max(v);
            match d.branch() {
                Some(Branch::Biased) => {
                    mixed += 1;
                    biased += 1;
                }
                Some(Branch::Unbiased) => mixed += 1,
                None => {}
            }
        }
        let mean = sum / n;
        let var = draws
            .iter()
            .map(|d| (d.value() - mean).powi(2))
            .sum::<f64>()
            / n;

        #[allow(clippy::cast_precision_loss)]
        let biased_fraction = (mixed > 0).then(|| biased as f64 / mixed as f64);

        Ok(Self {
            count: draws.len(),
            mean,
            std_dev: var.sqrt(),
            min,
            max,
            biased_fraction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_an_error() {
        assert!(matches!(
            Summary::from_draws(&[]),
            Err(BiasError::EmptySample)
        ));
    }

    #[test]
    fn small_batch() {
        let draws = [
            Draw::Mixed(0.25, Branch::Biased),
            Draw::Mixed(0.75, Branch::Unbiased),
            Draw::Mixed(0.5, Branch::Biased),
            Draw::Mixed(0.5, Branch::Biased),
        ];
        let s = Summary::from_draws(&draws).unwrap();
        assert_eq!(s.count, 4);
        assert!((s.mean - 0.5).abs() < 1e-12);
        assert!((s.std_dev - (0.125_f64 / 4.0).sqrt()).abs() < 1e-12);
        assert_eq!((s.min, s.max), (0.25, 0.75));
        assert_eq!(s.biased_fraction, Some(0.75));
    }

    #[test]
    fn constant_draws_have_no_branch_fraction() {
        let s = Summary::from_draws(&[Draw::Constant(0.5); 3]).unwrap();
        assert_eq!(s.biased_fraction, None);
        assert_eq!(s.std_dev, 0.0);
    }
}
