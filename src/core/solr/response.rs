//! Parsing of Solr JSON responses.
//!
//! The extract handler keys its payload by the uploaded stream name and
//! puts metadata next to it under `<name>_metadata`, as a flat list of
//! alternating names and value lists.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::core::error::{DocSyncError, Result};
use crate::core::types::{Extraction, SearchHit};

const METADATA_SUFFIX: &str = "_metadata";

/// Longest error body echoed back to the user
const MAX_ERROR_LEN: usize = 300;

/// Parse an extract-only response for the stream `file_name`
pub fn parse_extract_response(body: &Value, file_name: &str) -> Result<Extraction> {
    let object = body.as_object().ok_or_else(|| {
        DocSyncError::UnexpectedResponse("extract response is not a JSON object".to_string())
    })?;

    let key = [file_name, "file", ""]
        .into_iter()
        .find(|k| object.get(*k).is_some_and(Value::is_string))
        .map(str::to_string)
        .or_else(|| {
            object.keys().find_map(|k| {
                let stem = k.strip_suffix(METADATA_SUFFIX)?;
                object
                    .get(stem)
                    .is_some_and(Value::is_string)
                    .then(|| stem.to_string())
            })
        })
        .ok_or_else(|| {
            DocSyncError::UnexpectedResponse(format!(
                "no extracted content for '{file_name}' in response"
            ))
        })?;

    let contents = object
        .get(&key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let metadata = object
        .get(&format!("{key}{METADATA_SUFFIX}"))
        .map(parse_metadata)
        .unwrap_or_default();

    Ok(Extraction { contents, metadata })
}

/// Parse extractor metadata in either flat-list or map form
pub fn parse_metadata(raw: &Value) -> BTreeMap<String, Vec<String>> {
    let mut metadata = BTreeMap::new();

    match raw {
        Value::Array(items) => {
            for pair in items.chunks(2) {
                if let [Value::String(name), values] = pair {
                    metadata.insert(name.clone(), value_strings(values));
                }
            }
        }
        Value::Object(map) => {
            for (name, values) in map {
                metadata.insert(name.clone(), value_strings(values));
            }
        }
        _ => {}
    }

    metadata
}

fn value_strings(value: &Value) -> Vec<String> {
    match value {
        Value::Array(values) => values.iter().map(scalar_string).collect(),
        Value::Null => Vec::new(),
        other => vec![scalar_string(other)],
    }
}

fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Pull a readable message out of an error body
///
/// Solr reports errors as `{"error": {"msg": "..."}}`; anything else is
/// echoed back, shortened.
pub fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(msg) = value.pointer("/error/msg").and_then(Value::as_str) {
            return msg.to_string();
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".to_string();
    }

    trimmed.chars().take(MAX_ERROR_LEN).collect()
}

#[derive(Debug, Deserialize)]
struct SelectResponse {
    response: SelectDocs,
}

#[derive(Debug, Deserialize)]
struct SelectDocs {
    #[serde(rename = "numFound")]
    num_found: u64,
    docs: Vec<SelectDoc>,
}

#[derive(Debug, Deserialize)]
struct SelectDoc {
    id: Value,
    #[serde(default)]
    score: Option<f32>,
}

/// Parse a `/select` response into (total hits, returned hits)
pub fn parse_search_response(body: &str) -> Result<(u64, Vec<SearchHit>)> {
    let parsed: SelectResponse = serde_json::from_str(body)?;

    let hits = parsed
        .response
        .docs
        .into_iter()
        .map(|doc| SearchHit {
            id: scalar_string(&doc.id),
            score: doc.score,
        })
        .collect();

    Ok((parsed.response.num_found, hits))
}
