//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// The API description could not be read into the expected shape.
    #[from(ignore)]
    #[display("Parse Error: {_0}")]
    Parse(String),

    /// A parameter needs a synthesized example but declares a type we cannot
    /// produce a placeholder for.
    #[from(ignore)]
    #[display("Unsupported parameter type '{kind}' for parameter '{name}'")]
    UnsupportedParameterType {
        /// Display name of the offending parameter.
        name: String,
        /// The declared type string.
        kind: String,
    },

    /// Failure while turning the flat model into markup.
    #[from(ignore)]
    #[display("Render Error: {_0}")]
    Render(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
