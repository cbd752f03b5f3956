#![deny(missing_docs)]

//! # API Description Document
//!
//! Owned representation of an already-parsed API description tree.
//!
//! These structs map directly onto the parse tree emitted by the description
//! parser (as YAML or JSON). Fields the flattener does not interpret are kept
//! in `extra` maps and passed through to the render model untouched.

use crate::error::{AppError, AppResult};
use indexmap::IndexMap;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// The document root.
///
/// The root doubles as the top of the resource tree: it has no `relativeUri`
/// or methods of its own, and its `resources` are the top-level endpoints.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDocument {
    /// Human readable API title.
    #[serde(default, deserialize_with = "scalar_string")]
    pub title: String,
    /// Declared API version.
    #[serde(
        default,
        deserialize_with = "opt_scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,
    /// Declared base URI (may contain `{version}`).
    #[serde(
        default,
        deserialize_with = "opt_scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_uri: Option<String>,
    /// Trait definitions, each a single-entry `name -> definition` mapping.
    #[serde(default, deserialize_with = "null_as_default")]
    pub traits: Vec<IndexMap<String, Value>>,
    /// Remaining root fields, including the top-level `resources`.
    #[serde(flatten)]
    pub root: Resource,
}

impl ApiDocument {
    /// Top-level resources in declared order.
    pub fn resources(&self) -> &[Resource] {
        &self.root.resources
    }
}

/// One node of the resource tree.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Path segment relative to the parent resource, e.g. `/users`.
    #[serde(default, deserialize_with = "scalar_string")]
    pub relative_uri: String,
    /// Methods declared on this resource.
    #[serde(default, deserialize_with = "null_as_default")]
    pub methods: Vec<Method>,
    /// Nested resources. Null entries in the source are dropped.
    #[serde(
        default,
        deserialize_with = "present_nodes",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub resources: Vec<Resource>,
    /// Descriptive fields passed through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An HTTP method declared on a resource.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Method {
    /// The verb, e.g. `get`.
    #[serde(deserialize_with = "scalar_string")]
    pub method: String,
    /// Request bodies keyed by content type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<IndexMap<String, Option<BodySchema>>>,
    /// Request parameters used for example synthesis when no body is declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<Parameter>>,
    /// Responses keyed by status code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responses: Option<IndexMap<StatusCode, Option<Response>>>,
    /// Descriptive fields passed through unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A response: body-variant name (e.g. `body`) to a content-type mapping.
pub type Response = IndexMap<String, Value>;

/// Schema of one request body content type.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct BodySchema {
    /// Literal example, usually a JSON string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
    /// Remaining schema fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A request parameter descriptor.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Display name; dots denote nesting in synthesized examples.
    #[serde(deserialize_with = "scalar_string")]
    pub display_name: String,
    /// Declared type. Missing or null types default to `string`.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: ParamType,
    /// Literal example, used verbatim when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
}

/// The closed set of parameter types we can synthesize placeholders for.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum ParamType {
    /// `string`
    #[default]
    String,
    /// `number`
    Number,
    /// Any other declared type, kept by name for error reporting.
    Unsupported(String),
}

impl ParamType {
    /// The declared type name.
    pub fn as_str(&self) -> &str {
        match self {
            ParamType::String => "string",
            ParamType::Number => "number",
            ParamType::Unsupported(name) => name,
        }
    }
}

impl From<String> for ParamType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "string" => ParamType::String,
            "number" => ParamType::Number,
            _ => ParamType::Unsupported(name),
        }
    }
}

impl From<ParamType> for String {
    fn from(kind: ParamType) -> Self {
        kind.as_str().to_string()
    }
}

/// A response status code key.
///
/// YAML documents usually write codes as bare integers (`200:`), JSON as
/// strings; both deserialize to the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StatusCode(String);

impl StatusCode {
    /// Creates a status code key.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StatusCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        scalar_string(deserializer).map(StatusCode)
    }
}

/// A string field that also accepts plain numeric or boolean scalars, as a
/// YAML author would write `displayName: 2024` or `version: 1`.
struct LenientString(String);

impl<'de> Deserialize<'de> for LenientString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScalarVisitor;

        impl Visitor<'_> for ScalarVisitor {
            type Value = LenientString;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string, number or boolean")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<LenientString, E> {
                Ok(LenientString(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<LenientString, E> {
                Ok(LenientString(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<LenientString, E> {
                Ok(LenientString(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<LenientString, E> {
                Ok(LenientString(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<LenientString, E> {
                Ok(LenientString(v.to_string()))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<LenientString, E> {
                Ok(LenientString(v.to_string()))
            }
        }

        deserializer.deserialize_any(ScalarVisitor)
    }
}

fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    LenientString::deserialize(deserializer).map(|s| s.0)
}

fn opt_scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<LenientString>::deserialize(deserializer)?.map(|s| s.0))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn present_nodes<'de, D>(deserializer: D) -> Result<Vec<Resource>, D::Error>
where
    D: Deserializer<'de>,
{
    let nodes: Option<Vec<Option<Resource>>> = Option::deserialize(deserializer)?;
    Ok(nodes.unwrap_or_default().into_iter().flatten().collect())
}

/// Parses a YAML or JSON dump of the description tree.
///
/// The text is read into a YAML value and normalized to JSON first, so that
/// mapping keys of any scalar type (`200:`, `1: one`) become string keys
/// before the typed structs see them.
pub fn parse_document(content: &str) -> AppResult<ApiDocument> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .map_err(|e| AppError::Parse(format!("Failed to parse API description: {}", e)))?;
    serde_json::from_value(yaml_to_json(raw))
        .map_err(|e| AppError::Parse(format!("Failed to parse API description: {}", e)))
}

fn yaml_to_json(value: serde_yaml::Value) -> Value {
    use serde_yaml::Value as Yaml;

    match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(Value::Number)
                    .unwrap_or(Value::Null)
            }
        }
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(items.into_iter().map(yaml_to_json).collect()),
        Yaml::Mapping(entries) => Value::Object(
            entries
                .into_iter()
                .map(|(k, v)| (mapping_key(k), yaml_to_json(v)))
                .collect(),
        ),
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn mapping_key(key: serde_yaml::Value) -> String {
    use serde_yaml::Value as Yaml;

    match key {
        Yaml::String(s) => s,
        Yaml::Number(n) => n.to_string(),
        Yaml::Bool(b) => b.to_string(),
        Yaml::Null => "null".to_string(),
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
