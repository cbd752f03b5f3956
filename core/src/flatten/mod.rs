#![deny(missing_docs)]

//! # Hierarchy Flattening
//!
//! - **traits**: trait list to lookup map.
//! - **examples**: request example synthesis.
//! - **methods**: method and response flattening.
//! - **resources**: recursive resource walk.

pub mod examples;
pub mod methods;
pub mod resources;
pub mod traits;

pub use examples::synthesize_request_examples;
pub use methods::{flatten_methods, summarize_responses};
pub use resources::flatten_resources;
pub use traits::resolve_traits;

use crate::document::ApiDocument;
use crate::error::AppResult;
use crate::model::FlatDocument;
use log::debug;

/// Flattens a whole document into the render model.
///
/// The document root is itself the root of the resource tree, so the first
/// record describes the root (empty path, no methods) and is followed by
/// every declared resource in pre-order. The input is never modified.
pub fn flatten_document(document: &ApiDocument) -> AppResult<FlatDocument> {
    let traits = resolve_traits(&document.traits);
    let resources = flatten_resources(&document.root, &traits)?;
    debug!(
        "Flattened '{}' into {} resources and {} traits",
        document.title,
        resources.len(),
        traits.len()
    );

    Ok(FlatDocument {
        title: document.title.clone(),
        version: document.version.clone(),
        base_uri: document.base_uri.clone(),
        traits,
        resources,
    })
}
