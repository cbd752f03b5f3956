#![deny(missing_docs)]

//! # Example Synthesis
//!
//! Derives illustrative request payloads for a method, either from the
//! examples declared on its bodies or from its parameter list.

use crate::document::{Method, ParamType, Parameter};
use crate::error::{AppError, AppResult};
use crate::model::RequestExample;
use log::{debug, trace};
use serde_json::{Map, Value};

/// Prefix of the placeholder generated for `string` parameters.
pub const STRING_PLACEHOLDER_PREFIX: &str = "EXAMPLE: ";

/// Placeholder generated for `number` parameters.
pub const NUMBER_PLACEHOLDER: u64 = 1234567890;

/// Produces the request examples for one method.
///
/// Declared bodies take precedence over parameters and yield one slot per
/// content type, in declared order; a content type without an example leaves
/// its slot empty. Returns `Ok(None)` when the method has neither a body nor
/// any parameter.
///
/// # Errors
///
/// Fails with [`AppError::UnsupportedParameterType`] when a parameter without
/// a literal example has a type we cannot build a placeholder for.
pub fn synthesize_request_examples(
    method: &Method,
) -> AppResult<Option<Vec<Option<RequestExample>>>> {
    if let Some(body) = &method.body {
        let mut examples = Vec::with_capacity(body.len());
        for (content_type, schema) in body {
            let Some(example) = schema.as_ref().and_then(|s| s.example.as_ref()) else {
                trace!("{} {}: no example declared", method.method, content_type);
                examples.push(None);
                continue;
            };
            examples.push(Some(RequestExample::Text(pretty_example(example)?)));
        }
        return Ok(Some(examples));
    }

    match &method.params {
        Some(params) if !params.is_empty() => {
            Ok(Some(vec![Some(RequestExample::Composite(compose(params)?))]))
        }
        _ => Ok(None),
    }
}

/// Pretty-prints an example with a 2-space indent.
///
/// Strings are parsed as JSON first; text that is not JSON is returned
/// verbatim.
pub fn pretty_example(example: &Value) -> AppResult<String> {
    match example {
        Value::String(text) => match serde_json::from_str::<Value>(text) {
            Ok(parsed) => to_pretty(&parsed),
            Err(e) => {
                debug!("Keeping non-JSON example verbatim: {}", e);
                Ok(text.clone())
            }
        },
        structured => to_pretty(structured),
    }
}

fn to_pretty(value: &Value) -> AppResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::General(format!("Failed to format example: {}", e)))
}

/// Builds one object holding every parameter's example or placeholder.
fn compose(params: &[Parameter]) -> AppResult<Map<String, Value>> {
    let mut composite = Map::new();
    for param in params {
        let value = match &param.example {
            Some(example) => example.clone(),
            None => placeholder(param)?,
        };
        insert_at_path(&mut composite, &param.display_name, value);
    }
    Ok(composite)
}

fn placeholder(param: &Parameter) -> AppResult<Value> {
    match &param.kind {
        ParamType::String => Ok(Value::String(format!(
            "{}{}",
            STRING_PLACEHOLDER_PREFIX, param.display_name
        ))),
        ParamType::Number => Ok(Value::from(NUMBER_PLACEHOLDER)),
        ParamType::Unsupported(kind) => Err(AppError::UnsupportedParameterType {
            name: param.display_name.clone(),
            kind: kind.clone(),
        }),
    }
}

/// Writes `value` at a dotted path, creating intermediate objects.
///
/// An intermediate key that holds a non-object is replaced by an object.
fn insert_at_path(target: &mut Map<String, Value>, path: &str, value: Value) {
    let mut segments: Vec<&str> = path.split('.').collect();
    let last = segments.pop().unwrap_or_default();

    let mut current = target;
    for segment in segments {
        let entry = current
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        current = match entry {
            Value::Object(map) => map,
            _ => return,
        };
    }
    current.insert(last.to_string(), value);
}
