#![deny(missing_docs)]

//! # Resource Flattening
//!
//! Pre-order walk of the resource tree producing one self-contained record
//! per node.

use crate::document::Resource;
use crate::error::AppResult;
use crate::flatten::methods::flatten_methods;
use crate::model::{FlatResource, TraitMap};
use log::debug;

/// Flattens `root` and all of its descendants.
///
/// Records come out in pre-order: a parent before its descendants, siblings
/// in declared order. `basePath + path` of every record is the node's
/// absolute path. Traits are accepted but not applied to resources.
pub fn flatten_resources(root: &Resource, _traits: &TraitMap) -> AppResult<Vec<FlatResource>> {
    let mut flat = Vec::new();
    let mut ancestors = Vec::new();
    visit(root, &mut ancestors, &mut flat)?;
    Ok(flat)
}

fn visit<'a>(
    node: &'a Resource,
    ancestors: &mut Vec<&'a str>,
    out: &mut Vec<FlatResource>,
) -> AppResult<()> {
    let base_path = ancestors.concat();
    debug!("Flattening resource {}{}", base_path, node.relative_uri);

    let mut extra = node.extra.clone();
    extra.remove("basePath");
    extra.remove("path");

    out.push(FlatResource {
        base_path,
        path: node.relative_uri.clone(),
        relative_uri: node.relative_uri.clone(),
        methods: flatten_methods(&node.methods)?,
        extra,
    });

    ancestors.push(&node.relative_uri);
    for child in &node.resources {
        visit(child, ancestors, out)?;
    }
    ancestors.pop();

    Ok(())
}
