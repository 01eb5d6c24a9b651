use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const ERROR_MESSAGE: &str = "API request failed";

/// The only failure shape the panel ever shows.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ErrorMarker {
    pub error: String,
}

impl Default for ErrorMarker {
    fn default() -> Self {
        Self {
            error: ERROR_MESSAGE.to_string(),
        }
    }
}

/// Outcome of one settled dispatch.
///
/// Serialises untagged so the panel shows exactly what the backend returned:
/// a single body, the ordered burst array, or `{"error": "API request failed"}`.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum RequestResult {
    Single(Value),
    Burst(Vec<Value>),
    Failed(ErrorMarker),
}

impl RequestResult {
    pub fn failed() -> Self {
        RequestResult::Failed(ErrorMarker::default())
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RequestResult::Failed(_))
    }

    /// A single body of `null`, `false`, `0` or `""` counts as no result.
    /// Burst arrays and the error marker always show.
    pub fn is_blank(&self) -> bool {
        match self {
            RequestResult::Single(Value::Null) => true,
            RequestResult::Single(Value::Bool(b)) => !b,
            RequestResult::Single(Value::Number(n)) => n.as_f64() == Some(0.0),
            RequestResult::Single(Value::String(s)) => s.is_empty(),
            _ => false,
        }
    }

    /// Pretty, multi-line JSON with two-space indentation.
    pub fn to_pretty_json(&self) -> String {
        // Value and Vec<Value> cannot fail to serialise; keep the marker text as a floor.
        serde_json::to_string_pretty(self).unwrap_or_else(|_| {
            format!("{{\n  \"error\": \"{}\"\n}}", ERROR_MESSAGE)
        })
    }
}
