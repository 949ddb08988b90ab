//! Shape validation for ingested logs.

use crate::core::{Error, Log, Result};
use serde::Deserialize;
use serde_json::Value;

/// Validate a raw JSON document as a [`Log`].
///
/// Only the envelope is checked: `samples` must be present and be an array of
/// objects. Per-sample content is read leniently (see [`crate::core::types`]),
/// so a sample without `metadata.country` is accepted and keyed by the empty
/// string downstream.
pub fn validate(raw: &Value) -> Result<Log> {
    let obj = raw
        .as_object()
        .ok_or_else(|| Error::format(format!("expected a log object, found {}", kind(raw))))?;

    match obj.get("samples") {
        None => return Err(Error::format("'samples' array missing")),
        Some(Value::Array(_)) => {}
        Some(other) => {
            return Err(Error::format(format!(
                "'samples' must be an array, found {}",
                kind(other)
            )))
        }
    }

    Log::deserialize(raw).map_err(|e| Error::format(format!("malformed sample: {e}")))
}

/// Wrap a bare array of samples as `{ "samples": [...] }`.
///
/// Older exports (and hand-pasted model output) sometimes omit the envelope.
/// Anything else is returned unchanged.
pub fn normalize_legacy_shape(raw: Value) -> Value {
    match raw {
        Value::Array(samples) => {
            let mut envelope = serde_json::Map::new();
            envelope.insert("samples".to_string(), Value::Array(samples));
            Value::Object(envelope)
        }
        other => other,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_missing_samples() {
        let err = validate(&json!({"status": "success"})).unwrap_err();
        assert!(err.is_format());
        assert!(err.to_string().contains("'samples' array missing"));
    }

    #[test]
    fn rejects_non_array_samples() {
        for bad in [json!({"samples": {}}), json!({"samples": "x"}), json!({"samples": null})] {
            assert!(validate(&bad).unwrap_err().is_format(), "{bad}");
        }
    }

    #[test]
    fn rejects_non_object_document() {
        assert!(validate(&json!(42)).unwrap_err().is_format());
        assert!(validate(&json!([{"input": "q"}])).unwrap_err().is_format());
    }

    #[test]
    fn rejects_samples_that_are_not_objects() {
        assert!(validate(&json!({"samples": [1, 2]})).unwrap_err().is_format());
    }

    #[test]
    fn accepts_empty_samples() {
        let log = validate(&json!({"samples": []})).unwrap();
        assert!(log.is_empty());
    }

    #[test]
    fn tolerates_missing_country() {
        let log = validate(&json!({"samples": [{"input": "q", "metadata": {}}]})).unwrap();
        assert_eq!(log.samples[0].country(), "");
    }

    #[test]
    fn carries_meta_and_status() {
        let log = validate(&json!({
            "samples": [],
            "status": "success",
            "meta": {"topic": "Pet Ownership", "metric": "% of households"}
        }))
        .unwrap();
        assert_eq!(log.status.as_deref(), Some("success"));
        assert_eq!(log.topic(), Some("Pet Ownership"));
        assert_eq!(log.metric(), Some("% of households"));
    }

    #[test]
    fn legacy_array_is_wrapped() {
        let wrapped = normalize_legacy_shape(json!([{"input": "q"}]));
        assert_eq!(wrapped, json!({"samples": [{"input": "q"}]}));
        let log = validate(&wrapped).unwrap();
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn objects_pass_through_normalization() {
        let doc = json!({"samples": []});
        assert_eq!(normalize_legacy_shape(doc.clone()), doc);
    }
}
