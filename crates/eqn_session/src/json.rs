//! JSON envelopes for machine consumers.

use crate::session::SolveResponse;
use eqn_model::SolveError;
use serde::Serialize;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize, Debug)]
struct SolveJsonOutput<'a> {
    schema_version: u32,
    ok: bool,
    #[serde(flatten)]
    response: &'a SolveResponse,
}

/// An error result
#[derive(Serialize, Debug)]
pub struct ErrorJsonOutput {
    pub schema_version: u32,
    pub ok: bool,
    /// Stable code from [`SolveError::code`], or `E_INTERNAL`.
    pub code: String,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
}

impl ErrorJsonOutput {
    pub fn from_solve_error(err: &SolveError, input: Option<&str>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            ok: false,
            code: err.code().to_string(),
            error: err.to_string(),
            input: input.map(str::to_string),
        }
    }

    pub fn new(error: impl Into<String>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            ok: false,
            code: "E_INTERNAL".to_string(),
            error: error.into(),
            input: None,
        }
    }
}

pub fn to_json_pretty(response: &SolveResponse) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&SolveJsonOutput {
        schema_version: SCHEMA_VERSION,
        ok: true,
        response,
    })
}

pub fn error_to_json_pretty(error: &ErrorJsonOutput) -> serde_json::Result<String> {
    serde_json::to_string_pretty(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Session, SolveRequest};
    use serde_json::Value;

    #[test]
    fn envelope_carries_schema_version() {
        let mut session = Session::default();
        let response = session.solve(&SolveRequest::equation("x^2 - 5x + 6 = 0")).unwrap();
        let json: Value = serde_json::from_str(&to_json_pretty(&response).unwrap()).unwrap();
        assert_eq!(json["schema_version"], 1);
        assert_eq!(json["ok"], true);
        assert_eq!(json["problem"]["problem_type"], "standard_quadratic");
        assert!(json["steps"].as_array().is_some_and(|s| !s.is_empty()));
    }

    #[test]
    fn error_envelope_uses_stable_code() {
        let err = SolveError::NoActiveProblem;
        let out = ErrorJsonOutput::from_solve_error(&err, None);
        let json: Value = serde_json::from_str(&error_to_json_pretty(&out).unwrap()).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["code"], "E_NO_ACTIVE_PROBLEM");
        assert!(json.get("input").is_none());
    }
}
