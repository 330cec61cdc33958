//! Common Types and Constants
//!
//! Shared records and derived results used across all metric modules.
//! Records serialize with camelCase keys so hosts can pass them through their
//! own APIs unchanged.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{MetricsError, Result};

// ==================== Constants ====================

/// Weight applied to an assessment category missing from the weight table
pub const NEUTRAL_WEIGHT: f64 = 1.0;

/// Default exam weight
pub const DEFAULT_EXAM_WEIGHT: f64 = 0.5;

/// Default quiz weight
pub const DEFAULT_QUIZ_WEIGHT: f64 = 0.3;

/// Default homework weight
pub const DEFAULT_HOMEWORK_WEIGHT: f64 = 0.2;

/// Recency decay constant: weight of position i is e^(-i / 120)
pub const DEFAULT_DECAY_CONSTANT: f64 = 120.0;

/// Complexity level that maps to a complexity weight of 1.0
pub const NEUTRAL_COMPLEXITY: f64 = 3.0;

/// Default growth window size
pub const DEFAULT_GROWTH_WINDOW: usize = 5;

/// Default number of weakest topics surfaced to instructors
pub const DEFAULT_WORST_TOPIC_COUNT: usize = 3;

/// Default maximum score of a single assessment, used for normalization
pub const DEFAULT_MAX_SCORE: f64 = 100.0;

// ==================== Records ====================

/// One graded artifact (exam, quiz, homework, ...)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    /// Category label, looked up in the weight table
    #[serde(rename = "type")]
    pub kind: String,
    pub score: f64,
}

impl AssessmentRecord {
    pub fn new(kind: impl Into<String>, score: f64) -> Self {
        Self {
            kind: kind.into(),
            score,
        }
    }

    /// Decode one record from loosely typed JSON, rejecting missing or
    /// non-numeric fields instead of coercing them.
    pub fn from_value(value: &Value, index: usize) -> Result<Self> {
        decode(value, "assessment", index)
    }
}

/// One query posed to the tutoring assistant.
///
/// Sequences of queries are ordered most-recent-first. Position in the slice
/// is the only recency signal; nothing here re-sorts by time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryRecord {
    /// Relevance/quality score, typically [0, 1]
    pub score: f64,
    /// Complexity level, typically [1, 5]
    pub complexity: f64,
}

impl QueryRecord {
    pub fn new(score: f64, complexity: f64) -> Self {
        Self { score, complexity }
    }

    pub fn from_value(value: &Value, index: usize) -> Result<Self> {
        decode(value, "query", index)
    }
}

/// Score of one topic, per student or per class
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopicScore {
    /// Numeric ids are accepted and kept in their JSON text form
    #[serde(deserialize_with = "topic_id")]
    pub topic: String,
    pub score: f64,
}

impl TopicScore {
    pub fn new(topic: impl Into<String>, score: f64) -> Self {
        Self {
            topic: topic.into(),
            score,
        }
    }

    pub fn from_value(value: &Value, index: usize) -> Result<Self> {
        decode(value, "topic", index)
    }
}

fn topic_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TopicId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match TopicId::deserialize(deserializer)? {
        TopicId::Text(topic) => topic,
        TopicId::Number(id) => id.to_string(),
    })
}

// ==================== Derived Results ====================

/// Complexity growth between the two growth windows
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthResult {
    /// Percentage change of average complexity; `None` when the initial
    /// window averages to zero
    pub complexity_growth: Option<f64>,
    /// Absolute change of average complexity
    pub level_change: f64,
}

impl GrowthResult {
    /// Result reported when the history is too short to compare windows
    pub fn no_growth() -> Self {
        Self {
            complexity_growth: Some(0.0),
            level_change: 0.0,
        }
    }
}

impl Default for GrowthResult {
    fn default() -> Self {
        Self::no_growth()
    }
}

// ==================== JSON Decoding ====================

pub fn parse_assessments(json: &str) -> Result<Vec<AssessmentRecord>> {
    parse_array(json, "assessments")?
        .iter()
        .enumerate()
        .map(|(i, value)| AssessmentRecord::from_value(value, i))
        .collect()
}

pub fn parse_queries(json: &str) -> Result<Vec<QueryRecord>> {
    parse_array(json, "queries")?
        .iter()
        .enumerate()
        .map(|(i, value)| QueryRecord::from_value(value, i))
        .collect()
}

pub fn parse_topic_scores(json: &str) -> Result<Vec<TopicScore>> {
    parse_array(json, "topic scores")?
        .iter()
        .enumerate()
        .map(|(i, value)| TopicScore::from_value(value, i))
        .collect()
}

fn parse_array(json: &str, what: &str) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| MetricsError::InvalidInput(format!("{what}: {e}")))?;
    match value {
        Value::Array(items) => Ok(items),
        _ => Err(MetricsError::InvalidInput(format!(
            "{what} must be a JSON array"
        ))),
    }
}

/// Typed decode of one array element; the error names the element.
fn decode<T: DeserializeOwned>(value: &Value, record: &str, index: usize) -> Result<T> {
    T::deserialize(value)
        .map_err(|e| MetricsError::InvalidInput(format!("{record}[{index}]: {e}")))
}
