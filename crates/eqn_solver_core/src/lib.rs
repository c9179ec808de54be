//! Solver registry and verifier.
//!
//! Every [`ProblemType`](eqn_model::ProblemType) has exactly one solving
//! function; [`registry::solve`] dispatches with an exhaustive match.

pub mod completing_square;
pub mod exponential;
pub mod factoring;
pub mod graph;
pub mod growth;
pub mod inequality;
pub mod linear;
mod params;
pub mod projectile;
pub mod quadratic_formula;
pub mod registry;
pub mod verification;
pub mod vertex_analysis;

pub use graph::graph_data;
pub use registry::solve;
pub use verification::verify;
