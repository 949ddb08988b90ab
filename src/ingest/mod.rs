//! Log ingestion: turning raw text, files and JSON values into validated logs.
//!
//! Every entry point funnels into [`validate`], so a log that reaches the
//! aggregator always has a well-formed `samples` sequence.

mod validator;

pub use validator::{normalize_legacy_shape, validate};

use crate::core::{Error, Log, Result};
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Strip a markdown code fence wrapped around pasted JSON.
///
/// Model output frequently arrives as "```json ... ```" despite being asked
/// for raw JSON. Only a leading fence (with or without the `json` tag) and a
/// trailing fence are removed; text without a leading fence is returned
/// trimmed but otherwise untouched.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let body = if let Some(rest) = trimmed.strip_prefix("```json") {
        rest
    } else if let Some(rest) = trimmed.strip_prefix("```") {
        rest
    } else {
        return trimmed;
    };
    body.strip_suffix("```").unwrap_or(body).trim()
}

/// Parse pasted or dropped text into a validated log.
pub fn parse_log_text(text: &str) -> Result<Log> {
    let body = strip_code_fence(text);
    let raw: Value = serde_json::from_str(body)?;
    validate(&normalize_legacy_shape(raw))
}

/// Read and validate a log file.
pub fn read_log_file(path: &Path) -> Result<Log> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::io(e, path))?;
    debug!(path = %path.display(), bytes = text.len(), "Read log file");
    parse_log_text(&text)
}

/// Read and validate a log from any reader (stdin in the CLI).
pub fn read_log<R: Read>(mut reader: R) -> Result<Log> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| Error::io(e, "<stdin>"))?;
    parse_log_text(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tagged_fence() {
        assert_eq!(strip_code_fence("```json\n{\"samples\": []}\n```"), "{\"samples\": []}");
    }

    #[test]
    fn strips_bare_fence() {
        assert_eq!(strip_code_fence("  ```\n[]\n```  "), "[]");
    }

    #[test]
    fn leaves_unfenced_text_alone() {
        assert_eq!(strip_code_fence("  {\"a\": 1}\n"), "{\"a\": 1}");
    }

    #[test]
    fn unterminated_fence_is_tolerated() {
        assert_eq!(strip_code_fence("```json\n[]"), "[]");
    }

    #[test]
    fn parses_fenced_legacy_array() {
        let log = parse_log_text(
            "```json\n[{\"input\": \"q\", \"metadata\": {\"country\": \"Peru\"}}]\n```",
        )
        .unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log.samples[0].country(), "Peru");
    }

    #[test]
    fn invalid_json_is_a_format_error() {
        let err = parse_log_text("Sure! Here is your JSON:").unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn reads_from_reader() {
        let log = read_log("{\"samples\": []}".as_bytes()).unwrap();
        assert!(log.is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_log_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
