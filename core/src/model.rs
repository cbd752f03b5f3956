#![deny(missing_docs)]

//! # Render Model
//!
//! The flat, render-ready structures produced by the flattener.
//!
//! Field names on the wire (`basePath`, `requestExamples`, ...) are the
//! contract with the template renderer and must not change.

use crate::document::{BodySchema, Parameter};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

/// Trait name to trait definition.
pub type TraitMap = IndexMap<String, Value>;

/// The flattened document handed to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatDocument {
    /// API title.
    pub title: String,
    /// API version, if declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Base URI, if declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_uri: Option<String>,
    /// Resolved traits.
    pub traits: TraitMap,
    /// Every resource of the tree, in pre-order.
    pub resources: Vec<FlatResource>,
}

/// One resource with its children stripped and its path resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatResource {
    /// Concatenated `relativeUri` of all ancestors, root first.
    pub base_path: String,
    /// This resource's own `relativeUri`.
    pub path: String,
    /// The source `relativeUri`, passed through alongside `path`.
    pub relative_uri: String,
    /// Flattened methods in declared order.
    pub methods: Vec<FlatMethod>,
    /// Descriptive fields copied from the source resource.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FlatResource {
    /// The absolute path of the resource.
    pub fn full_path(&self) -> String {
        format!("{}{}", self.base_path, self.path)
    }
}

/// A method enriched with request examples and response summaries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatMethod {
    /// The verb.
    pub method: String,
    /// Request bodies as declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<IndexMap<String, Option<BodySchema>>>,
    /// Parameters as declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<Parameter>>,
    /// Synthesized request payloads. Absent when the method has neither a
    /// body nor parameters. Body examples keep one slot per content type,
    /// `None` where the content type declares no example.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_examples: Option<Vec<Option<RequestExample>>>,
    /// One summary per status code.
    pub responses: Vec<ResponseSummary>,
    /// Descriptive fields copied from the source method.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A synthesized request payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RequestExample {
    /// A declared body example, pretty-printed when it is structured data.
    Text(String),
    /// An object assembled from parameter examples and placeholders.
    Composite(Map<String, Value>),
}

/// The surviving example for one status code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseSummary {
    /// Status code as written in the source.
    pub code: String,
    /// Verb of the owning method.
    pub method: String,
    /// Declared example, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
}
