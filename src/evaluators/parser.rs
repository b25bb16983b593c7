//! Defensive parsing of model output
//!
//! The single chokepoint protecting the pipeline from malformed model
//! responses. Extraction tolerates markdown fencing and surrounding prose;
//! anything that still fails to deserialize becomes the caller-supplied
//! fallback. This module never panics and never returns partial data.

use serde::de::DeserializeOwned;
use tracing::warn;

/// Outcome of parsing one evaluator response.
///
/// Both variants carry the same shape; the tag records whether the value
/// came from the model or from the conservative fallback, so a metrics
/// layer can distinguish trusted from degraded outputs.
#[derive(Debug, Clone)]
pub enum Parsed<T> {
    /// Deserialized from the model's response
    Trusted(T),

    /// The supplied fallback; the response was unusable
    Fallback(T),
}

impl<T> Parsed<T> {
    /// Whether this value is the fallback
    pub fn is_fallback(&self) -> bool {
        matches!(self, Parsed::Fallback(_))
    }

    /// Borrow the inner value regardless of provenance
    pub fn get(&self) -> &T {
        match self {
            Parsed::Trusted(v) | Parsed::Fallback(v) => v,
        }
    }

    /// Consume into the inner value regardless of provenance
    pub fn into_inner(self) -> T {
        match self {
            Parsed::Trusted(v) | Parsed::Fallback(v) => v,
        }
    }
}

/// Strip one leading/trailing markdown code fence if present
fn strip_fences(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

/// Slice the candidate region between the first `open` and last `close`
/// delimiter, if both exist in that order; otherwise the whole text.
fn candidate_region(text: &str, open: char, close: char) -> &str {
    match (text.find(open), text.rfind(close)) {
        (Some(start), Some(end)) if end > start => &text[start..=end],
        _ => text,
    }
}

/// Parse an evaluator's raw response into `T`, or return `fallback`.
///
/// Algorithm: trim, strip fences, slice first `{` to last `}` when
/// well-ordered (else keep the whole trimmed text), deserialize. Any
/// failure logs a warning with the raw text and yields the fallback
/// unchanged.
pub fn parse_or_fallback<T: DeserializeOwned>(raw: &str, fallback: T) -> Parsed<T> {
    let cleaned = strip_fences(raw);
    let candidate = candidate_region(cleaned, '{', '}');

    match serde_json::from_str(candidate) {
        Ok(value) => Parsed::Trusted(value),
        Err(err) => {
            warn!(error = %err, raw = %raw, "unparseable evaluator response, using fallback");
            Parsed::Fallback(fallback)
        }
    }
}

/// Parse a raw response as a JSON array of strings, or return `fallback`.
///
/// Same discipline as [`parse_or_fallback`] with `[`/`]` delimiters; used
/// by the task-improvement operation.
pub fn parse_string_array(raw: &str, fallback: Vec<String>) -> Parsed<Vec<String>> {
    let cleaned = strip_fences(raw);
    let candidate = candidate_region(cleaned, '[', ']');

    match serde_json::from_str(candidate) {
        Ok(value) => Parsed::Trusted(value),
        Err(err) => {
            warn!(error = %err, raw = %raw, "unparseable suggestion list, using fallback");
            Parsed::Fallback(fallback)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Probe {
        score: i64,
    }

    fn fallback() -> Probe {
        Probe { score: 50 }
    }

    #[test]
    fn test_parse_bare_json() {
        let parsed = parse_or_fallback(r#"{"score": 80}"#, fallback());
        assert!(!parsed.is_fallback());
        assert_eq!(parsed.get().score, 80);
    }

    #[test]
    fn test_parse_fenced_json() {
        let raw = "```json\n{\"score\": 72}\n```";
        let parsed = parse_or_fallback(raw, fallback());
        assert!(!parsed.is_fallback());
        assert_eq!(parsed.get().score, 72);
    }

    #[test]
    fn test_parse_plain_fence() {
        let raw = "```\n{\"score\": 64}\n```";
        let parsed = parse_or_fallback(raw, fallback());
        assert_eq!(parsed.get().score, 64);
    }

    #[test]
    fn test_parse_json_embedded_in_prose() {
        let raw = "Sure! Here is the review you asked for:\n{\"score\": 91}\nLet me know.";
        let parsed = parse_or_fallback(raw, fallback());
        assert!(!parsed.is_fallback());
        assert_eq!(parsed.get().score, 91);
    }

    #[test]
    fn test_empty_input_returns_fallback() {
        let parsed = parse_or_fallback("", fallback());
        assert!(parsed.is_fallback());
        assert_eq!(parsed.into_inner(), fallback());
    }

    #[test]
    fn test_garbage_returns_fallback_unchanged() {
        let parsed = parse_or_fallback("I am unable to help with that.", fallback());
        assert!(parsed.is_fallback());
        assert_eq!(parsed.into_inner(), fallback());
    }

    #[test]
    fn test_truncated_json_returns_fallback() {
        let parsed = parse_or_fallback(r#"{"score": 8"#, fallback());
        assert!(parsed.is_fallback());
    }

    #[test]
    fn test_reversed_braces_returns_fallback() {
        let parsed = parse_or_fallback("} not json {", fallback());
        assert!(parsed.is_fallback());
    }

    #[test]
    fn test_string_array_parsing() {
        let raw = "```json\n[\"tighten the deadline wording\", \"add examples\"]\n```";
        let parsed = parse_string_array(raw, vec!["fallback".to_string()]);
        assert!(!parsed.is_fallback());
        assert_eq!(parsed.get().len(), 2);
    }

    #[test]
    fn test_string_array_fallback() {
        let parsed = parse_string_array("no list here", vec!["fallback".to_string()]);
        assert!(parsed.is_fallback());
        assert_eq!(parsed.into_inner(), vec!["fallback".to_string()]);
    }

    #[test]
    fn test_string_array_rejects_mixed_types() {
        let parsed = parse_string_array(r#"["ok", 42]"#, vec![]);
        assert!(parsed.is_fallback());
    }

    // Spec-level guarantee: any input yields the parsed value or the
    // fallback, never a panic.
    #[quickcheck]
    fn prop_parser_never_panics(raw: String) -> bool {
        let parsed = parse_or_fallback(&raw, fallback());
        parsed.get().score == 50 || !parsed.is_fallback()
    }

    // Fallback comes back unchanged: an empty fallback stays empty.
    #[quickcheck]
    fn prop_array_fallback_unchanged(raw: String) -> bool {
        let parsed = parse_string_array(&raw, vec![]);
        !parsed.is_fallback() || parsed.get().is_empty()
    }
}
