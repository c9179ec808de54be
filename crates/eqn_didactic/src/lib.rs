//! Didactic layer: base step generation and explanation enhancement.
//!
//! [`generate`] turns a solved problem into numbered base steps tailored to
//! the strategy that produced the answer. [`enhance`] wraps those steps with
//! level-dependent explanations, bridges and learning aids. Both are pure.

mod bridges;
mod error_prevention;
mod exponential_steps;
mod growth_steps;
mod linear_steps;
pub mod names;
mod phrases;
mod quadratic_steps;
mod scaffolding;
mod vocabulary;

pub mod enhance;
pub mod steps;

pub use enhance::{enhance, EnhancerOptions};
pub use steps::generate;
pub use vocabulary::apply_vocabulary;
