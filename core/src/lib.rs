#![deny(missing_docs)]

//! # RAMLDoc Core
//!
//! Turns a parsed, hierarchical API description into a flat, render-ready
//! model: one record per resource with its resolved path, its methods and
//! synthesized request/response examples.

/// Shared error types.
pub mod error;

/// Input tree definitions and loading.
pub mod document;

/// Render model definitions.
pub mod model;

/// Flattening of the resource hierarchy.
pub mod flatten;

pub use document::{
    parse_document, ApiDocument, BodySchema, Method, ParamType, Parameter, Resource, StatusCode,
};
pub use error::{AppError, AppResult};
pub use flatten::{
    flatten_document, flatten_methods, flatten_resources, resolve_traits,
    synthesize_request_examples,
};
pub use model::{FlatDocument, FlatMethod, FlatResource, RequestExample, ResponseSummary, TraitMap};

/// Parses a description and flattens it in one step.
pub fn flatten_str(content: &str) -> AppResult<FlatDocument> {
    let document = parse_document(content)?;
    flatten_document(&document)
}
