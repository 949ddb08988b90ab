//! Evaluation log data model.
//!
//! Logs arrive from hand-edited or model-generated JSON, so every field below
//! the `samples` array is read leniently: a field of the wrong type is treated
//! as absent instead of rejecting the whole log. Only the overall shape
//! (an object holding a `samples` sequence of objects) is enforced, by
//! [`crate::ingest::validate`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One named quality score attached to a sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl Score {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            explanation: None,
            answer: None,
        }
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = Some(answer.into());
        self
    }

    /// Read a raw score entry. Entries whose `value` is missing or not a
    /// finite number yield `None`.
    pub fn from_json(entry: &Value) -> Option<Self> {
        let obj = entry.as_object()?;
        let value = obj
            .get("value")
            .and_then(Value::as_f64)
            .filter(|v| v.is_finite())?;
        let text = |key: &str| obj.get(key).and_then(Value::as_str).map(str::to_owned);

        Some(Self {
            value,
            explanation: text("explanation"),
            answer: text("answer"),
        })
    }

    fn to_json(&self) -> Value {
        let mut obj = Map::new();
        // Non-finite values serialize as null and read back as absent.
        obj.insert("value".to_string(), Value::from(self.value));
        if let Some(explanation) = &self.explanation {
            obj.insert("explanation".to_string(), Value::String(explanation.clone()));
        }
        if let Some(answer) = &self.answer {
            obj.insert("answer".to_string(), Value::String(answer.clone()));
        }
        Value::Object(obj)
    }
}

/// Score entries keyed by scorer name, in the order they appeared in the log.
///
/// Entries are kept raw so that one malformed score does not hide its
/// siblings; typed access goes through [`Score::from_json`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreMap(Map<String, Value>);

impl ScoreMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, name: impl Into<String>, score: Score) {
        self.0.insert(name.into(), score.to_json());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<Score> {
        self.0.get(name).and_then(Score::from_json)
    }

    /// Finite value of the named score, if present.
    pub fn value_of(&self, name: &str) -> Option<f64> {
        self.get(name).map(|score| score.value)
    }

    /// Finite value of the first entry in insertion order.
    ///
    /// Only the first entry is consulted; a malformed first entry yields
    /// `None` even when later entries are valid.
    pub fn first_value(&self) -> Option<f64> {
        self.0
            .values()
            .next()
            .and_then(Score::from_json)
            .map(|score| score.value)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<String>> FromIterator<(K, Score)> for ScoreMap {
    fn from_iter<I: IntoIterator<Item = (K, Score)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, score) in iter {
            map.insert(name, score);
        }
        map
    }
}

/// Reference ("actual") statistic for a sample, e.g. a country's GDP.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReferenceValue {
    Number(f64),
    Text(String),
    Other(Value),
}

impl ReferenceValue {
    /// The numeric value, if this reference is a finite number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) if v.is_finite() => Some(*v),
            _ => None,
        }
    }
}

// Read through `Value` so that numbers outside the f64 range, and numbers
// buffered by the flattened metadata map, still land in a variant.
impl<'de> Deserialize<'de> for ReferenceValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => match n.as_f64() {
                Some(v) => Self::Number(v),
                None => Self::Other(Value::Number(n)),
            },
            Value::String(s) => Self::Text(s),
            other => Self::Other(other),
        })
    }
}

impl Default for ReferenceValue {
    fn default() -> Self {
        Self::Other(Value::Null)
    }
}

impl From<f64> for ReferenceValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ReferenceValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleMetadata {
    /// Join key to geography; expected to be a standard English country name.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    #[serde(default)]
    pub actual_value: ReferenceValue,
    /// Extension fields carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One evaluated data point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    #[serde(default, deserialize_with = "lenient_text")]
    pub input: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub target: String,
    /// Model answer: either a bare string or an output object's `completion`.
    #[serde(
        default,
        deserialize_with = "lenient_completion",
        skip_serializing_if = "Option::is_none"
    )]
    pub output: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_or_default",
        skip_serializing_if = "ScoreMap::is_empty"
    )]
    pub scores: ScoreMap,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub metadata: SampleMetadata,
}

impl Sample {
    /// Country key for this sample; empty when the log omits it.
    pub fn country(&self) -> &str {
        self.metadata.country.as_deref().unwrap_or_default()
    }

    /// Non-empty model answer, if the log recorded one.
    pub fn answer(&self) -> Option<&str> {
        self.output.as_deref().filter(|a| !a.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogMeta {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
}

/// A complete evaluation log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Log {
    pub samples: Vec<Sample>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub meta: Option<LogMeta>,
}

impl Log {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self {
            samples,
            status: None,
            meta: None,
        }
    }

    pub fn with_meta(mut self, meta: LogMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Non-empty topic from the log metadata.
    pub fn topic(&self) -> Option<&str> {
        self.meta
            .as_ref()
            .and_then(|m| m.topic.as_deref())
            .filter(|t| !t.is_empty())
    }

    /// Non-empty metric label from the log metadata.
    pub fn metric(&self) -> Option<&str> {
        self.meta
            .as_ref()
            .and_then(|m| m.metric.as_deref())
            .filter(|m| !m.is_empty())
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(raw).ok())
}

fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

fn lenient_completion<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Object(obj) => obj
            .get("completion")
            .and_then(Value::as_str)
            .map(str::to_owned),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn score_map_keeps_insertion_order() {
        let map: ScoreMap = serde_json::from_value(json!({
            "zeta": {"value": 0.9},
            "alpha": {"value": 0.1}
        }))
        .unwrap();
        assert_eq!(map.first_value(), Some(0.9));
        assert_eq!(map.names().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
    }

    #[test]
    fn non_numeric_score_is_absent() {
        let map: ScoreMap = serde_json::from_value(json!({
            "model_grader": {"value": "high"},
            "mpe_scorer": {"value": null}
        }))
        .unwrap();
        assert!(map.contains("model_grader"));
        assert_eq!(map.value_of("model_grader"), None);
        assert_eq!(map.value_of("mpe_scorer"), None);
        assert_eq!(map.first_value(), None);
    }

    #[test]
    fn score_fields_round_trip_through_map() {
        let mut map = ScoreMap::new();
        map.insert(
            "mpe_scorer",
            Score::new(0.25).with_explanation("close").with_answer("1200"),
        );
        let score = map.get("mpe_scorer").unwrap();
        assert_eq!(score.value, 0.25);
        assert_eq!(score.explanation.as_deref(), Some("close"));
        assert_eq!(score.answer.as_deref(), Some("1200"));
    }

    #[test]
    fn nan_score_reads_back_as_absent() {
        let mut map = ScoreMap::new();
        map.insert("metric", Score::new(f64::NAN));
        assert_eq!(map.first_value(), None);
    }

    #[test]
    fn metadata_tolerates_wrong_types() {
        let sample: Sample = serde_json::from_value(json!({
            "input": "q",
            "target": 12345,
            "scores": [],
            "metadata": {"country": 7, "year": "2022", "actual_value": 3.5, "source": "wb"}
        }))
        .unwrap();
        assert_eq!(sample.target, "12345");
        assert!(sample.scores.is_empty());
        assert_eq!(sample.metadata.country, None);
        assert_eq!(sample.country(), "");
        assert_eq!(sample.metadata.year, None);
        assert_eq!(sample.metadata.actual_value, ReferenceValue::Number(3.5));
        assert_eq!(sample.metadata.extra.get("source"), Some(&json!("wb")));
    }

    #[test]
    fn reference_value_variants() {
        let numeric: ReferenceValue = serde_json::from_value(json!(2_500_000_000_000u64)).unwrap();
        assert_eq!(numeric.as_number(), Some(2.5e12));

        let text: ReferenceValue = serde_json::from_value(json!("n/a")).unwrap();
        assert_eq!(text, ReferenceValue::Text("n/a".into()));
        assert_eq!(text.as_number(), None);

        assert_eq!(ReferenceValue::default().as_number(), None);
    }

    #[test]
    fn out_of_range_numbers_do_not_reject_the_sample() {
        let sample: Sample = serde_json::from_str(
            r#"{
                "scores": {"model_grader": {"value": 1e400}, "mpe_scorer": {"value": 0.4}},
                "metadata": {"country": "France", "actual_value": 1e400, "source": "wb"}
            }"#,
        )
        .unwrap();
        assert_eq!(sample.scores.value_of("model_grader"), None);
        assert_eq!(sample.scores.value_of("mpe_scorer"), Some(0.4));
        assert_eq!(sample.metadata.actual_value.as_number(), None);
        assert_eq!(sample.country(), "France");
    }

    #[test]
    fn flattened_metadata_keeps_numeric_reference() {
        let sample: Sample =
            serde_json::from_str(r#"{"metadata": {"actual_value": 2500000000000, "year": 2022}}"#)
                .unwrap();
        assert_eq!(sample.metadata.actual_value.as_number(), Some(2.5e12));
        assert_eq!(sample.metadata.year, Some(2022));
    }

    #[test]
    fn output_reads_string_or_completion() {
        let bare: Sample = serde_json::from_value(json!({"output": "$3 trillion"})).unwrap();
        assert_eq!(bare.answer(), Some("$3 trillion"));

        let nested: Sample =
            serde_json::from_value(json!({"output": {"model": "m", "completion": "3000"}})).unwrap();
        assert_eq!(nested.answer(), Some("3000"));

        let blank: Sample = serde_json::from_value(json!({"output": ["x"]})).unwrap();
        assert_eq!(blank.answer(), None);
    }

    #[test]
    fn empty_topic_counts_as_missing() {
        let log = Log::new(vec![]).with_meta(LogMeta {
            topic: Some(String::new()),
            description: None,
            metric: Some("USD".into()),
        });
        assert_eq!(log.topic(), None);
        assert_eq!(log.metric(), Some("USD"));
    }
}
