use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("No JSON object found in model output.")]
    NoJsonObject,
    #[error("Failed to parse JSON from model output.")]
    InvalidJson(#[source] serde_json::Error),
}

/// Pull a JSON object out of free-form model output.
///
/// The candidate is the greedy span from the first `{` to the last `}`, so
/// chatter before and after the object (or a markdown fence around it) is
/// ignored, while two separate objects in one reply fail to parse.
pub fn extract_json_object(text: &str) -> Result<Map<String, Value>, ExtractError> {
    let start = text.find('{').ok_or(ExtractError::NoJsonObject)?;
    let end = text.rfind('}').ok_or(ExtractError::NoJsonObject)?;
    if end < start {
        return Err(ExtractError::NoJsonObject);
    }

    serde_json::from_str::<Map<String, Value>>(&text[start..=end])
        .map_err(ExtractError::InvalidJson)
}
