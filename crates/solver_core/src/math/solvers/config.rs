//! Solver configuration types.

use crate::types::ConfigError;

/// Stopping rules for one Newton run.
///
/// Built from [`MultiStartConfig::newton`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Step size `|x_{n+1} - x_n|` below which the run has converged.
    pub tolerance: f64,
    /// Iterations before giving up with `SolverError::MaxIterationsExceeded`.
    pub max_iterations: usize,
    /// `|f'(x)|` below which the run stops with `SolverError::DerivativeNearZero`.
    pub derivative_floor: f64,
}

/// Configuration for multi-start root isolation.
///
/// Seeds are `seed_start, seed_start + seed_step, …` up to and including
/// `seed_end`. Each seed runs an independent step-based Newton iteration.
///
/// # Example
///
/// ```
/// use solver_core::math::solvers::MultiStartConfig;
///
/// let config = MultiStartConfig::default();
/// assert_eq!(config.seed_count(), 41);
/// assert_eq!(config.max_roots, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MultiStartConfig {
    /// First seed.
    pub seed_start: f64,
    /// Last seed (inclusive).
    pub seed_end: f64,
    /// Spacing between seeds.
    pub seed_step: f64,
    /// Newton iterations per seed.
    pub max_iterations: usize,
    /// Step size below which a seed is considered converged.
    pub step_tolerance: f64,
    /// `|f'(x)|` below which a seed is abandoned.
    pub derivative_floor: f64,
    /// Roots closer than this to an accepted root are duplicates.
    pub dedup_tolerance: f64,
    /// Seeding stops once this many roots are accepted.
    pub max_roots: usize,
}

impl Default for MultiStartConfig {
    fn default() -> Self {
        Self {
            seed_start: -10.0,
            seed_end: 10.0,
            seed_step: 0.5,
            max_iterations: 50,
            step_tolerance: 1e-7,
            derivative_floor: 1e-12,
            dedup_tolerance: 1e-4,
            max_roots: 10,
        }
    }
}

impl MultiStartConfig {
    /// Number of seeds in `[seed_start, seed_end]`.
    pub fn seed_count(&self) -> usize {
        let span = (self.seed_end - self.seed_start) / self.seed_step;
        // Guard against 39.999999 from inexact steps.
        (span + 1e-9).floor() as usize + 1
    }

    /// Seeds in ascending order.
    pub fn seeds(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.seed_count()).map(move |i| self.seed_start + i as f64 * self.seed_step)
    }

    /// Per-seed Newton configuration.
    pub fn newton(&self) -> SolverConfig {
        SolverConfig {
            tolerance: self.step_tolerance,
            max_iterations: self.max_iterations,
            derivative_floor: self.derivative_floor,
        }
    }

    /// Check every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("seed_step", self.seed_step)?;
        positive("step_tolerance", self.step_tolerance)?;
        positive("dedup_tolerance", self.dedup_tolerance)?;
        if !(self.derivative_floor.is_finite() && self.derivative_floor >= 0.0) {
            return Err(ConfigError::NonPositive {
                name: "derivative_floor",
                value: self.derivative_floor,
            });
        }
        if !(self.seed_start.is_finite()
            && self.seed_end.is_finite()
            && self.seed_start <= self.seed_end)
        {
            return Err(ConfigError::EmptyRange {
                name: "seed range",
                min: self.seed_start,
                max: self.seed_end,
            });
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroCount {
                name: "max_iterations",
            });
        }
        if self.max_roots == 0 {
            return Err(ConfigError::ZeroCount { name: "max_roots" });
        }
        Ok(())
    }
}

pub(crate) fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}
