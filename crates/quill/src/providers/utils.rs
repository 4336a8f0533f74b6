use serde_json::{json, Value};

use super::base::Usage;
use crate::errors::{ProviderError, ProviderResult};

/// Build a `generateContent` request body carrying a single user turn
pub fn prompt_to_gemini_spec(prompt: &str) -> Value {
    json!({
        "contents": [{
            "parts": [{ "text": prompt }]
        }]
    })
}

/// Pull `candidates[0].content.parts[0].text` out of a `generateContent` response.
///
/// Every step is checked; any missing key, empty array or non-string text is
/// reported as a malformed response instead of panicking.
pub fn gemini_response_to_text(response: &Value) -> ProviderResult<String> {
    response
        .get("candidates")
        .and_then(|candidates| candidates.get(0))
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(|parts| parts.get(0))
        .and_then(|part| part.get("text"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            let reason = match block_reason(response) {
                Some(reason) => format!("prompt blocked ({})", reason),
                None => "expected candidates[0].content.parts[0].text".to_string(),
            };
            ProviderError::MalformedResponse(reason)
        })
}

fn block_reason(response: &Value) -> Option<&str> {
    response
        .get("promptFeedback")?
        .get("blockReason")?
        .as_str()
}

pub fn gemini_usage(response: &Value) -> Usage {
    let Some(metadata) = response.get("usageMetadata") else {
        return Usage::default();
    };

    let count = |key: &str| {
        metadata
            .get(key)
            .and_then(Value::as_i64)
            .and_then(|v| i32::try_from(v).ok())
    };

    let input_tokens = count("promptTokenCount");
    let output_tokens = count("candidatesTokenCount");
    let total_tokens = count("totalTokenCount").or_else(|| match (input_tokens, output_tokens) {
        (Some(input), Some(output)) => input.checked_add(output),
        _ => None,
    });

    Usage::new(input_tokens, output_tokens, total_tokens)
}

/// An `error` object in an otherwise successful body
pub fn check_gemini_error(response: &Value) -> Option<ProviderError> {
    let error = response.get("error")?;
    let message = error
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| error.to_string());
    Some(ProviderError::Api(message))
}
