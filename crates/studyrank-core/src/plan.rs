use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Subtopic identifier. Source documents use both bare integers and strings;
/// both forms round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubtopicId {
    Int(i64),
    Text(String),
}

impl fmt::Display for SubtopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubtopicId::Int(n) => write!(f, "{n}"),
            SubtopicId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for SubtopicId {
    fn from(n: i64) -> Self {
        SubtopicId::Int(n)
    }
}

impl From<&str> for SubtopicId {
    fn from(s: &str) -> Self {
        SubtopicId::Text(s.to_string())
    }
}

/// Diagnostic scoring trail, attached to a subtopic when breakdown output is
/// enabled on the engine. Not load-bearing: the normalized weight is the
/// contract, this triple exists for auditing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Composite score before depth decay.
    pub raw: f64,
    /// Score after depth decay, before normalization.
    pub adjusted: f64,
    /// Longest resolvable prerequisite chain below this subtopic.
    pub depth: u32,
}

/// One study item inside a subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subtopic {
    /// Unique within its subject (caller contract).
    pub id: SubtopicId,
    /// Estimated study hours. Absent, malformed, or negative values coerce
    /// to 0.
    #[serde(default, deserialize_with = "lenient_non_negative")]
    pub hours_required: f64,
    /// Historical question count. Absent, malformed, or negative values
    /// coerce to 0.
    #[serde(default, deserialize_with = "lenient_non_negative")]
    pub pyqs: f64,
    /// Ids of subtopics in the same subject this one builds on. May contain
    /// ids that do not exist in the subject; those are ignored.
    #[serde(default)]
    pub prerequisites: Vec<SubtopicId>,
    /// Normalized weight in [0, 1]; set by the weighting engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computed_weight: Option<f64>,
    /// Diagnostic scoring trail; set only when enabled on the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_breakdown: Option<ScoreBreakdown>,
    /// Caller fields passed through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A subject: an ordered list of subtopics plus caller fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    #[serde(default)]
    pub subtopics: Vec<Subtopic>,
    /// Mean adjusted (pre-normalization) score across the subject's
    /// subtopics; set by the weighting engine. Comparable only within a
    /// single processing run, not normalized across subjects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computed_importance: Option<f64>,
    /// Caller fields passed through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Top-level document: an ordered list of subjects plus caller fields.
/// The weighting engine mutates it in place; nothing is removed and nothing
/// is added beyond the derived fields on [`Subject`] and [`Subtopic`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyPlan {
    #[serde(default)]
    pub subjects: Vec<Subject>,
    /// Caller fields passed through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Accept numbers, numeric strings, or anything else; everything that is not
/// a finite non-negative number coerces to 0.
fn lenient_non_negative<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    let parsed = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(match parsed {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    })
}
