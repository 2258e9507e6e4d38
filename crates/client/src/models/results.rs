//! Search result models.
//!
//! Each result row carries a raw event payload (`_raw`), which may itself be
//! a JSON document or a free-text log line, plus `host` and `_time`.
//! Fields beyond those are kept in an opaque remainder map.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `GET /services/search/jobs/{sid}/results?output_mode=json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultsResponse {
    #[serde(default)]
    pub results: Vec<RawResult>,
}

/// One result row as returned by Splunk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawResult {
    #[serde(rename = "_raw", default)]
    pub raw: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::serde_helpers::opt_string_from_number_or_string"
    )]
    pub host: Option<String>,
    #[serde(
        rename = "_time",
        default,
        deserialize_with = "crate::serde_helpers::opt_string_from_number_or_string"
    )]
    pub time: Option<String>,
    /// Every other field of the row.
    #[serde(flatten)]
    pub remainder: Map<String, Value>,
}

/// A result row ready to print.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultRecord {
    /// JSON object: the parsed `_raw` payload augmented with `_host` and `_time`,
    /// or the row's own fields when it has no `_raw`.
    Structured(Map<String, Value>),
    /// `_raw` that is not a JSON object, emitted verbatim.
    Unstructured(String),
}

impl ResultRecord {
    /// Render as a single output line.
    pub fn to_line(&self) -> String {
        match self {
            Self::Structured(map) => {
                serde_json::to_string(map).unwrap_or_else(|_| format!("{:?}", map))
            }
            Self::Unstructured(raw) => raw.clone(),
        }
    }
}

impl From<RawResult> for ResultRecord {
    fn from(row: RawResult) -> Self {
        let RawResult {
            raw,
            host,
            time,
            mut remainder,
        } = row;

        match raw {
            Some(raw) => match serde_json::from_str::<Value>(&raw) {
                Ok(Value::Object(mut object)) => {
                    object.insert("_host".to_string(), Value::String(host.unwrap_or_default()));
                    object.insert("_time".to_string(), Value::String(time.unwrap_or_default()));
                    Self::Structured(object)
                }
                _ => Self::Unstructured(raw),
            },
            None => {
                if let Some(host) = host {
                    remainder.insert("host".to_string(), Value::String(host));
                }
                if let Some(time) = time {
                    remainder.insert("_time".to_string(), Value::String(time));
                }
                Self::Structured(remainder)
            }
        }
    }
}

impl ResultsResponse {
    /// Parse a results body; an empty body means no results.
    ///
    /// Accepts both `{"results": [...]}` and a bare top-level array.
    pub fn parse(body: &str) -> serde_json::Result<Self> {
        if body.trim().is_empty() {
            return Ok(Self::default());
        }
        match serde_json::from_str::<Value>(body)? {
            Value::Array(rows) => Ok(Self {
                results: serde_json::from_value(Value::Array(rows))?,
            }),
            other => serde_json::from_value(other),
        }
    }

    pub fn into_records(self) -> Vec<ResultRecord> {
        self.results.into_iter().map(ResultRecord::from).collect()
    }
}
