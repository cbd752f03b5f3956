#![deny(missing_docs)]

//! # Method Flattening
//!
//! Enriches each method with request examples and a flat response list.

use crate::document::Method;
use crate::error::AppResult;
use crate::flatten::examples::synthesize_request_examples;
use crate::model::{FlatMethod, ResponseSummary};
use indexmap::IndexMap;
use serde_json::Value;

/// Flattens a resource's methods, keeping declared order.
pub fn flatten_methods(methods: &[Method]) -> AppResult<Vec<FlatMethod>> {
    methods.iter().map(flatten_method).collect()
}

fn flatten_method(method: &Method) -> AppResult<FlatMethod> {
    let request_examples = synthesize_request_examples(method)?;

    let mut extra = method.extra.clone();
    extra.remove("requestExamples");

    Ok(FlatMethod {
        method: method.method.clone(),
        body: method.body.clone(),
        params: method.params.clone(),
        request_examples,
        responses: summarize_responses(method),
        extra,
    })
}

/// Collapses `code -> variant -> content type -> schema` into one summary per
/// status code.
///
/// Every content type under every object-valued variant is visited; for a
/// code with several of them only the last visited survives.
pub fn summarize_responses(method: &Method) -> Vec<ResponseSummary> {
    let mut by_code: IndexMap<&str, ResponseSummary> = IndexMap::new();

    for (code, response) in method.responses.iter().flatten() {
        let Some(variants) = response else { continue };
        for variant in variants.values() {
            // Scalar variants such as `description` carry no content types.
            let Value::Object(content_types) = variant else {
                continue;
            };
            for schema in content_types.values() {
                by_code.insert(
                    code.as_str(),
                    ResponseSummary {
                        code: code.to_string(),
                        method: method.method.clone(),
                        example: schema.get("example").cloned(),
                    },
                );
            }
        }
    }

    by_code.into_values().collect()
}
