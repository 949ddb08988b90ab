//! Prompt for producing a log with an external chat model.
//!
//! The prompt pins the model to the log format accepted by
//! [`crate::ingest::parse_log_text`], including the `meta` block used to
//! label the context channel.

use indoc::formatdoc;

pub const DEFAULT_TOPIC: &str = "Global GDP 2024";

/// Render the data-generation prompt for `topic`. A blank topic falls back
/// to [`DEFAULT_TOPIC`].
pub fn research_prompt(topic: &str) -> String {
    let topic = match topic.trim() {
        "" => DEFAULT_TOPIC,
        trimmed => trimmed,
    };

    formatdoc! {r#"
        SYSTEM INSTRUCTION: You are a strict JSON Data Generator.
        Topic: "{topic}"

        TASK:
        Generate a JSON object containing statistical accuracy tests for the above topic.
        1. Output MUST be valid, parseable JSON.
        2. Do NOT wrap output in markdown code blocks.
        3. Structure MUST match:

        {{
          "meta": {{
            "topic": "Short Title (e.g. 'Pet Ownership Rates')",
            "description": "Brief explanation of what '1.0' error means in this context",
            "metric": "Unit (e.g. % of households)"
          }},
          "samples": [
            {{
              "input": "Question...",
              "target": "Real Answer",
              "scores": {{
                "metric": {{ "value": 0.5 }}
              }},
              "metadata": {{
                "country": "Country Name",
                "actual_value": 12345
              }}
            }}
          ]
        }}

        REQUIREMENTS:
        - Generate 20+ diverse countries.
        - "value" 0.0 = Accurate.
        - "value" 1.0 = Massive Hallucination / Fabrication.
        - Use standard English country names.

        BEGIN JSON OUTPUT:"#}
}
