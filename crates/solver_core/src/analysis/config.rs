//! Sampling configuration for critical-point detection.

use crate::math::solvers::positive;
use crate::types::ConfigError;

/// Sampling window and refinement settings.
///
/// # Example
///
/// ```
/// use solver_core::analysis::ScanConfig;
///
/// let config = ScanConfig::default();
/// assert_eq!(config.samples, 1000);
/// assert!((config.spacing() - 0.1).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScanConfig {
    /// Left end of the sampled window.
    pub domain_min: f64,
    /// Right end of the sampled window.
    pub domain_max: f64,
    /// Number of sub-intervals; `samples + 1` points are evaluated.
    pub samples: usize,
    /// Halvings applied to each sampled sign change.
    pub bisection_iterations: usize,
    /// Boundaries (and interval ends) closer than this are the same point.
    pub boundary_tolerance: f64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            domain_min: -50.0,
            domain_max: 50.0,
            samples: 1000,
            bisection_iterations: 20,
            boundary_tolerance: 1e-6,
        }
    }
}

impl ScanConfig {
    /// Distance between consecutive samples.
    pub fn spacing(&self) -> f64 {
        (self.domain_max - self.domain_min) / self.samples as f64
    }

    /// The `samples + 1` sample abscissae, left to right.
    pub fn sample_points(&self) -> impl Iterator<Item = f64> + '_ {
        let width = self.domain_max - self.domain_min;
        (0..=self.samples).map(move |i| self.domain_min + width * (i as f64 / self.samples as f64))
    }

    /// Check every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.domain_min.is_finite()
            && self.domain_max.is_finite()
            && self.domain_min < self.domain_max)
        {
            return Err(ConfigError::EmptyRange {
                name: "domain",
                min: self.domain_min,
                max: self.domain_max,
            });
        }
        if self.samples == 0 {
            return Err(ConfigError::ZeroCount { name: "samples" });
        }
        positive("boundary_tolerance", self.boundary_tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_points_cover_window() {
        let config = ScanConfig::default();
        let xs: Vec<f64> = config.sample_points().collect();
        assert_eq!(xs.len(), 1001);
        assert_eq!(xs[0], -50.0);
        assert_eq!(xs[1000], 50.0);
        assert_eq!(xs[500], 0.0);
    }

    #[test]
    fn test_validate() {
        assert!(ScanConfig::default().validate().is_ok());

        let empty = ScanConfig {
            domain_min: 1.0,
            domain_max: 1.0,
            ..ScanConfig::default()
        };
        assert!(matches!(empty.validate(), Err(ConfigError::EmptyRange { .. })));

        let no_samples = ScanConfig {
            samples: 0,
            ..ScanConfig::default()
        };
        assert!(matches!(
            no_samples.validate(),
            Err(ConfigError::ZeroCount { name: "samples" })
        ));

        let bad_tol = ScanConfig {
            boundary_tolerance: f64::NAN,
            ..ScanConfig::default()
        };
        assert!(bad_tol.validate().is_err());
    }
}
