//! Capabilities the engine borrows from its collaborators.
//!
//! This module defines:
//! - Real-valued evaluation of one variable (`ScalarFunction` trait)
//! - Compilation of text into functions (`ExpressionCompiler` trait)
//!
//! The engine never owns an expression. It borrows a `ScalarFunction` for the
//! duration of one call and evaluates it at arbitrary points, so
//! implementations must be free of side effects.

pub mod compiler;
pub mod function;

pub use compiler::ExpressionCompiler;
pub use function::ScalarFunction;
