//! Generator response parsing
//!
//! Generators return free-form LLM text that should contain JSON. These
//! functions extract and validate it — pure domain logic, no I/O, lenient
//! wherever leniency cannot corrupt the claim set (a bad entry is skipped,
//! a missing optional field defaults) and strict where shape matters (no
//! JSON at all, or a decomposition in an unrecognized shape).
//!
//! # Functions
//!
//! | Function | Input | Output |
//! |----------|-------|--------|
//! | [`parse_claims`] | critique response | `Vec<DraftClaim>` |
//! | [`parse_revisions`] | self-critique response | `Vec<ClaimRevision>` |
//! | [`parse_decomposition`] | decomposition JSON value | `Vec<String>` sub-points |
//! | [`parse_arbiter`] | arbitration response | [`ArbiterVerdict`] |

use crate::arbitration::entities::{ArbiterVerdict, ArbitrationAdjustment};
use crate::claim::entities::{ClaimId, ClaimRevision, DraftClaim};
use crate::claim::severity::Severity;
use serde_json::Value;
use thiserror::Error;

/// Errors extracting structured data from a generator response
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("No JSON found in response")]
    NoJson,

    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),
}

/// The decomposition response matched neither accepted shape
///
/// Accepted shapes: a bare JSON list of strings, or an object exposing a
/// list of strings under `topics` (preferred), `items`, or `subtopics`.
#[derive(Error, Debug)]
#[error("Decomposition matched neither a list of strings nor a known list-valued key")]
pub struct DecompositionShapeError;

/// Extract the first JSON value from a response
///
/// Tries, in order: the whole string, a fenced ```json block, the outermost
/// `{...}` span, the outermost `[...]` span.
pub fn extract_json(response: &str) -> Option<Value> {
    let trimmed = response.trim();
    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return Some(value);
    }

    // Fenced code block
    if let Some(start) = trimmed.find("```") {
        let after_fence = &trimmed[start + 3..];
        let body_start = after_fence.find('\n').map(|i| i + 1).unwrap_or(0);
        if let Some(end) = after_fence[body_start..].find("```")
            && let Ok(value) =
                serde_json::from_str::<Value>(after_fence[body_start..body_start + end].trim())
        {
            return Some(value);
        }
    }

    // Outermost object/array span — whichever delimiter opens first wins,
    // so an array of objects is not mistaken for its first element
    let object = delimited_span(trimmed, '{', '}');
    let array = delimited_span(trimmed, '[', ']');
    match (trimmed.find('{'), trimmed.find('[')) {
        (Some(obj_at), Some(arr_at)) if arr_at < obj_at => array.or(object),
        (Some(_), _) => object.or(array),
        (None, Some(_)) => array,
        (None, None) => None,
    }
}

fn delimited_span(text: &str, open: char, close: char) -> Option<Value> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}

/// Parse a critique response into draft claims
///
/// Accepts a bare array of claim objects or an object with a `claims` key.
/// Individual entries that fail to deserialize are skipped — one bad entry
/// should not discard a perspective's whole critique.
pub fn parse_claims(response: &str) -> Result<Vec<DraftClaim>, ParseError> {
    let value = extract_json(response).ok_or(ParseError::NoJson)?;

    let entries = match &value {
        Value::Array(entries) => entries.as_slice(),
        Value::Object(map) => match map.get("claims") {
            Some(Value::Array(entries)) => entries.as_slice(),
            _ => {
                return Err(ParseError::UnexpectedShape(
                    "expected an array or an object with a 'claims' array".to_string(),
                ));
            }
        },
        _ => {
            return Err(ParseError::UnexpectedShape(format!(
                "expected array or object, got {}",
                type_name(&value)
            )));
        }
    };

    Ok(entries
        .iter()
        .filter_map(|entry| serde_json::from_value::<DraftClaim>(entry.clone()).ok())
        .filter(|draft| !draft.claim_text.trim().is_empty())
        .collect())
}

/// Parse a self-critique response into claim revisions
///
/// Accepts a bare array of revision objects or an object with a `revisions`
/// key. Entries without a target id are skipped.
pub fn parse_revisions(response: &str) -> Result<Vec<ClaimRevision>, ParseError> {
    let value = extract_json(response).ok_or(ParseError::NoJson)?;

    let entries = match &value {
        Value::Array(entries) => entries.as_slice(),
        Value::Object(map) => match map.get("revisions") {
            Some(Value::Array(entries)) => entries.as_slice(),
            _ => {
                return Err(ParseError::UnexpectedShape(
                    "expected an array or an object with a 'revisions' array".to_string(),
                ));
            }
        },
        _ => {
            return Err(ParseError::UnexpectedShape(format!(
                "expected array or object, got {}",
                type_name(&value)
            )));
        }
    };

    Ok(entries
        .iter()
        .filter_map(|entry| serde_json::from_value::<ClaimRevision>(entry.clone()).ok())
        .collect())
}

/// Keys accepted for an object-shaped decomposition, in preference order
const DECOMPOSITION_KEYS: [&str; 3] = ["topics", "items", "subtopics"];

/// Parse a decomposition value into sub-point strings
///
/// Two valid shapes (anything else is a [`DecompositionShapeError`]):
/// - a bare list of strings: `["point one", "point two"]`
/// - an object exposing a list of strings under `topics` / `items` /
///   `subtopics`
///
/// An empty list is valid — the tree treats it as depth exhausted.
pub fn parse_decomposition(value: &Value) -> Result<Vec<String>, DecompositionShapeError> {
    match value {
        Value::Array(entries) => string_list(entries).ok_or(DecompositionShapeError),
        Value::Object(map) => {
            for key in DECOMPOSITION_KEYS {
                if let Some(Value::Array(entries)) = map.get(key) {
                    return string_list(entries).ok_or(DecompositionShapeError);
                }
            }
            Err(DecompositionShapeError)
        }
        _ => Err(DecompositionShapeError),
    }
}

fn string_list(entries: &[Value]) -> Option<Vec<String>> {
    entries
        .iter()
        .map(|entry| match entry {
            Value::String(s) => Some(s.trim().to_string()),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()
        .map(|points| points.into_iter().filter(|p| !p.is_empty()).collect())
}

/// Parse an arbitration response into a verdict
///
/// Lenient per entry: an adjustment needs a target id and a numeric delta,
/// everything else is optional. The overall score accepts `overall_score`
/// or `score`, clamped into 0-100; a missing score yields `None` rather
/// than an error (the orchestrator treats it as arbitration-unavailable).
pub fn parse_arbiter(response: &str) -> Result<ArbiterVerdict, ParseError> {
    let value = extract_json(response).ok_or(ParseError::NoJson)?;
    let Value::Object(map) = &value else {
        return Err(ParseError::UnexpectedShape(format!(
            "expected an object, got {}",
            type_name(&value)
        )));
    };

    let mut adjustments = Vec::new();
    if let Some(Value::Array(entries)) = map.get("adjustments") {
        for entry in entries {
            let Value::Object(fields) = entry else { continue };
            let Some(target) = fields
                .get("target_claim_id")
                .or_else(|| fields.get("claim_id"))
                .and_then(Value::as_str)
            else {
                continue;
            };
            let Some(delta) = fields
                .get("confidence_delta")
                .or_else(|| fields.get("delta"))
                .and_then(Value::as_f64)
            else {
                continue;
            };

            let mut adjustment = ArbitrationAdjustment::new(ClaimId::new(target), delta);
            if let Some(severity) = fields.get("severity_override").and_then(Value::as_str) {
                adjustment = adjustment.with_severity(Severity::parse_lenient(severity));
            }
            if let Some(comment) = fields.get("comment").and_then(Value::as_str) {
                adjustment = adjustment.with_comment(comment);
            }
            adjustments.push(adjustment);
        }
    }

    let overall_score = map
        .get("overall_score")
        .or_else(|| map.get("score"))
        .and_then(Value::as_f64)
        .map(|score| score.clamp(0.0, 100.0) as u8);

    let justification = map
        .get("justification")
        .or_else(|| map.get("reasoning"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Ok(ArbiterVerdict {
        adjustments,
        overall_score,
        justification,
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
