//! Weighted categorical sampling over cumulative thresholds.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejection reasons for a malformed cumulative table.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DistributionError {
    #[error("cumulative distribution is empty")]
    Empty,

    #[error("threshold at index {index} is not finite")]
    NotFinite { index: usize },

    #[error("thresholds decrease at index {index}")]
    NotMonotonic { index: usize },

    #[error("final threshold is {last}, expected exactly 1.0")]
    Incomplete { last: f32 },
}

/// A monotone non-decreasing cumulative distribution whose final threshold
/// is exactly 1.0.
///
/// Malformed tables are rejected at construction rather than silently
/// defaulting at sample time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CumulativeDistribution {
    thresholds: Vec<f32>,
}

impl CumulativeDistribution {
    pub fn new(thresholds: &[f32]) -> Result<Self, DistributionError> {
        let last = *thresholds.last().ok_or(DistributionError::Empty)?;
        for (index, &t) in thresholds.iter().enumerate() {
            if !t.is_finite() {
                return Err(DistributionError::NotFinite { index });
            }
        }
        for (index, pair) in thresholds.windows(2).enumerate() {
            if pair[1] < pair[0] {
                return Err(DistributionError::NotMonotonic { index: index + 1 });
            }
        }
        if last != 1.0 {
            return Err(DistributionError::Incomplete { last });
        }
        Ok(Self {
            thresholds: thresholds.to_vec(),
        })
    }

    /// Construct from a table known to be well formed.
    pub(crate) fn from_table(thresholds: &[f32]) -> Self {
        debug_assert!(Self::new(thresholds).is_ok());
        Self {
            thresholds: thresholds.to_vec(),
        }
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    /// Draw one uniform f32 in [0, 1) and return the index of the first
    /// threshold strictly greater than it. Falls back to index 0 if no
    /// threshold exceeds the draw, which cannot happen for a validated
    /// table since the final threshold is 1.0.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        let draw = rng.gen_range(0.0f32..1.0);
        self.thresholds.iter().position(|&t| t > draw).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DelveRng;

    #[test]
    fn test_rejects_empty() {
        assert_eq!(
            CumulativeDistribution::new(&[]),
            Err(DistributionError::Empty)
        );
    }

    #[test]
    fn test_rejects_decreasing() {
        assert_eq!(
            CumulativeDistribution::new(&[0.5, 0.3, 1.0]),
            Err(DistributionError::NotMonotonic { index: 1 })
        );
    }

    #[test]
    fn test_rejects_incomplete() {
        assert_eq!(
            CumulativeDistribution::new(&[0.2, 0.9]),
            Err(DistributionError::Incomplete { last: 0.9 })
        );
        assert!(CumulativeDistribution::new(&[0.2, 1.5]).is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        // NaN compares false both ways, so the monotonicity check alone
        // would let it through
        assert_eq!(
            CumulativeDistribution::new(&[f32::NAN, 1.0]),
            Err(DistributionError::NotFinite { index: 0 })
        );
        assert_eq!(
            CumulativeDistribution::new(&[0.2, f32::NAN, 1.0]),
            Err(DistributionError::NotFinite { index: 1 })
        );
        assert_eq!(
            CumulativeDistribution::new(&[f32::INFINITY, 1.0]),
            Err(DistributionError::NotFinite { index: 0 })
        );
    }

    #[test]
    fn test_accepts_plateaus() {
        let cdf = CumulativeDistribution::new(&[0.4, 0.4, 1.0]).unwrap();
        assert_eq!(cdf.len(), 3);
    }

    #[test]
    fn test_sample_in_bounds() {
        let cdf = CumulativeDistribution::new(&[0.1, 0.6, 0.9, 1.0]).unwrap();
        let mut rng = DelveRng::from_pair(9, 9);
        for _ in 0..1000 {
            assert!(cdf.sample(&mut rng) < 4);
        }
    }

    #[test]
    fn test_sample_tracks_weights() {
        // ~90% index 0, ~5% each for 1 and 2
        let cdf = CumulativeDistribution::new(&[0.90, 0.95, 1.0]).unwrap();
        let mut rng = DelveRng::from_pair(1234, 5678);
        let mut counts = [0usize; 3];
        for _ in 0..10_000 {
            counts[cdf.sample(&mut rng)] += 1;
        }
        assert!(counts[0] > 8_500 && counts[0] < 9_500, "{counts:?}");
        assert!(counts[1] > 200 && counts[1] < 900, "{counts:?}");
        assert!(counts[2] > 200 && counts[2] < 900, "{counts:?}");
    }

    #[test]
    fn test_degenerate_single_category() {
        let cdf = CumulativeDistribution::new(&[1.0]).unwrap();
        let mut rng = DelveRng::from_pair(0, 0);
        for _ in 0..100 {
            assert_eq!(cdf.sample(&mut rng), 0);
        }
    }
}
