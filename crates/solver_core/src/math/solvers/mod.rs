//! Root-finding solvers for scalar functions.
//!
//! ## Available Solvers
//!
//! - [`NewtonRaphsonSolver`]: Newton iteration from one seed with a
//!   step-size stopping rule and a derivative floor
//! - [`MultiStartNewton`]: Newton from a grid of seeds with deduplication and
//!   a result cap, used to isolate every real root in a practical window
//! - [`Bisection`]: Fixed-iteration bracket halving for sampled sign changes
//!
//! [`MultiStartNewton`] uses [`MultiStartConfig`] (41 seeds in `[-10, 10]`,
//! 50 iterations, step tolerance 1e-7, derivative floor 1e-12, dedup 1e-4,
//! at most 10 roots); [`MultiStartConfig::newton`] derives the per-seed
//! [`SolverConfig`].
//!
//! ## Examples
//!
//! ```
//! use solver_core::math::solvers::MultiStartNewton;
//!
//! // Both roots of x² - 2
//! let roots = MultiStartNewton::with_defaults()
//!     .find_roots(&|x: f64| x * x - 2.0, &|x: f64| 2.0 * x);
//! assert_eq!(roots.len(), 2);
//! assert!((roots[1] - std::f64::consts::SQRT_2).abs() < 1e-9);
//! ```

mod bisection;
mod config;
mod multi_start;
mod newton_raphson;

// Re-export public types at module level
pub use bisection::Bisection;
pub(crate) use config::positive;
pub use config::{MultiStartConfig, SolverConfig};
pub use multi_start::MultiStartNewton;
pub use newton_raphson::NewtonRaphsonSolver;
