//! Wire schema for `POST /calculate`.
//!
//! The request always carries the full canvas image and the full variable
//! dictionary. Response entries are coerced to strings here so the rest of the
//! client only ever sees text.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Remembered assignments, keyed by expression text.
pub type VariableMap = BTreeMap<String, String>;

/// Body of `POST /calculate`.
#[derive(Debug, Serialize)]
pub struct CalculateRequest<'a> {
    /// PNG data URL of the canvas.
    pub image: &'a str,
    pub dict_of_vars: &'a VariableMap,
}

/// Body returned by `POST /calculate`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CalculateResponse {
    pub data: Vec<ResponseEntry>,
}

/// One recognized expression.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResponseEntry {
    #[serde(deserialize_with = "text")]
    pub expr: String,
    #[serde(deserialize_with = "text")]
    pub result: String,
    /// Whether `expr` names a variable to remember rather than a result to show.
    #[serde(default)]
    pub assign: bool,
}

/// Accept a JSON string, number, or bool and keep its text form.
fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Bool(b) => Ok(b.to_string()),
        other => Err(D::Error::custom(format!("expected text, found {other}"))),
    }
}

/// Parse a `/calculate` response body into its ordered entries.
///
/// # Errors
///
/// Returns the `serde_json` error if the body is not a `{ "data": [...] }` object.
pub fn parse_response(body: &str) -> Result<Vec<ResponseEntry>, serde_json::Error> {
    serde_json::from_str::<CalculateResponse>(body).map(|r| r.data)
}
