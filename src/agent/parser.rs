// Normalizes the model's free-form reply into a structured analysis.
//
// The model is instructed to answer with bare JSON but often wraps it in a
// markdown code fence. Extraction strategies are tried in order; if none of
// them yields valid JSON with the required fields, a fixed fallback analysis
// is returned so callers never see a parse failure.

use serde::Deserialize;
use tracing::{debug, error, warn};

use crate::models::Suggestion;

const FENCE: &str = "```";
const TAGGED_FENCE: &str = "```json";

const REQUIRED_FIELDS: &[&str] = &["score", "optimized_content", "suggestions"];

/// Structured analysis decoded from the model reply (or the fallback).
#[derive(Debug, Clone, Deserialize)]
pub struct NormalizedAnalysis {
    pub score: f64,
    pub optimized_content: String,
    pub suggestions: Vec<Suggestion>,
    #[serde(default)]
    pub reasoning: Option<String>,
}

#[derive(Debug, thiserror::Error)]
enum NormalizeError {
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("suggestion priority out of range: {0}")]
    PriorityOutOfRange(u8),
}

/// Normalize a raw model reply. Total function: any parse or shape failure
/// yields the fallback analysis instead of an error.
pub fn normalize(raw: &str) -> NormalizedAnalysis {
    match try_normalize(raw) {
        Ok(mut analysis) => {
            if !(0.0..=100.0).contains(&analysis.score) {
                warn!(
                    score = analysis.score,
                    "Score out of range, clamping to 0-100"
                );
                analysis.score = analysis.score.clamp(0.0, 100.0);
            }
            analysis
        }
        Err(e) => {
            error!(error = %e, "Failed to parse agent response, using fallback");
            debug!(raw_response = raw, "Unparseable agent response");
            fallback()
        }
    }
}

fn try_normalize(raw: &str) -> Result<NormalizedAnalysis, NormalizeError> {
    let payload = extract_payload(raw);
    let value: serde_json::Value = serde_json::from_str(payload)?;

    for field in REQUIRED_FIELDS {
        if value.get(field).is_none() {
            return Err(NormalizeError::MissingField(field));
        }
    }

    // A wrong-typed field (e.g. a non-numeric score) fails here and takes
    // the same fallback path as malformed JSON.
    let analysis: NormalizedAnalysis = serde_json::from_value(value)?;

    // Priority is 1-5 (1 = highest); anything else counts as a shape failure.
    if let Some(bad) = analysis
        .suggestions
        .iter()
        .find(|s| !(1..=5).contains(&s.priority))
    {
        return Err(NormalizeError::PriorityOutOfRange(bad.priority));
    }

    Ok(analysis)
}

/// Extraction strategies, most specific first. The raw trimmed text is the
/// final catch-all.
const STRATEGIES: &[fn(&str) -> Option<&str>] = &[extract_tagged_fence, extract_bare_fence];

fn extract_payload(raw: &str) -> &str {
    STRATEGIES
        .iter()
        .find_map(|strategy| strategy(raw))
        .unwrap_or_else(|| raw.trim())
}

/// Text between a ```json fence and the next closing fence.
fn extract_tagged_fence(raw: &str) -> Option<&str> {
    let start = raw.find(TAGGED_FENCE)? + TAGGED_FENCE.len();
    let rest = &raw[start..];
    let end = rest.find(FENCE)?;
    Some(rest[..end].trim())
}

/// Text between the first and second plain fence markers.
fn extract_bare_fence(raw: &str) -> Option<&str> {
    let start = raw.find(FENCE)? + FENCE.len();
    let rest = &raw[start..];
    let end = rest.find(FENCE)?;
    Some(rest[..end].trim())
}

/// The fixed fallback analysis. Valid under the same schema as a parsed
/// reply, so downstream consumers never see a second failure mode.
fn fallback() -> NormalizedAnalysis {
    NormalizedAnalysis {
        score: 70.0,
        optimized_content: "Analysis parsing failed. Original content returned.".to_string(),
        suggestions: vec![Suggestion {
            category: "System".to_string(),
            description: "Unable to parse AI response. Please try again.".to_string(),
            priority: 1,
        }],
        reasoning: Some("Response parsing error".to_string()),
    }
}
