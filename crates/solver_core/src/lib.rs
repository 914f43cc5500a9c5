//! # solver_core: Real Roots and Sign Intervals of Scalar Functions
//!
//! solver_core answers two questions about a function `f` of one real
//! variable that it can only evaluate numerically:
//!
//! - where is `f(x) = 0`? (`math::solvers::MultiStartNewton`)
//! - where is `f(x) <op> 0` for `op` one of `<`, `<=`, `>`, `>=`?
//!   (`analysis`)
//!
//! Statement text such as `x^2 - 4 = 0` is handled by `problems`, which
//! reduces `lhs <op> rhs` to `f(x) = lhs - rhs` and borrows an
//! [`ExpressionCompiler`](traits::ExpressionCompiler) to turn the text into a
//! [`ScalarFunction`](traits::ScalarFunction).
//!
//! ## Usage Examples
//!
//! ```rust
//! use solver_core::analysis::{classify, merge, CriticalPointDetector, DEFAULT_MERGE_TOLERANCE};
//! use solver_core::format::format_intervals;
//! use solver_core::math::solvers::MultiStartNewton;
//! use solver_core::types::Relation;
//!
//! // Roots of x³ - 4x + 1
//! let roots = MultiStartNewton::with_defaults()
//!     .find_roots(&|x: f64| x * x * x - 4.0 * x + 1.0, &|x: f64| 3.0 * x * x - 4.0);
//! assert_eq!(roots.len(), 3);
//!
//! // Where is x² - 4 > 0?
//! let f = |x: f64| x * x - 4.0;
//! let boundaries = CriticalPointDetector::with_defaults().find(&f);
//! let kept = classify(&f, &boundaries, Relation::Gt);
//! let set = merge(&kept, DEFAULT_MERGE_TOLERANCE);
//! assert_eq!(format_intervals(&set), "(-∞, -2) ∪ (2, ∞)");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: serialisation of configuration, statements, and solutions

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analysis;
pub mod format;
pub mod math;
pub mod problems;
pub mod traits;
pub mod types;
