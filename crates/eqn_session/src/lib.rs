//! Solve pipeline and session state.
//!
//! A [`Session`] runs classification, extraction, solving, step generation,
//! enhancement and verification for one request and keeps the most recent
//! problem so its steps can be regenerated at another explanation level.

pub mod config;
pub mod json;
mod session;

pub use config::{ConfigError, SessionConfig};
pub use session::{CurrentProblem, Session, SolveRequest, SolveResponse};
