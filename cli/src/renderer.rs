#![deny(missing_docs)]

//! # Renderers
//!
//! Turns the flat model into output markup. The flattener knows nothing
//! about renderers; they only ever see a finished [`FlatDocument`].

use ramldoc_core::{AppError, AppResult, FlatDocument};
use serde::Serialize;
use tera::{Context, Tera};

const PAGE_TEMPLATE: &str = "index.html";

/// A strategy for rendering a flat model.
pub trait Renderer {
    /// Renders the whole document.
    fn render(&self, model: &FlatDocument) -> AppResult<String>;
}

/// Output formats selectable on the command line.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Single HTML page.
    #[default]
    Html,
    /// The flat model as pretty JSON.
    Json,
}

impl OutputFormat {
    /// Returns the renderer for this format.
    pub fn renderer(self) -> AppResult<Box<dyn Renderer>> {
        Ok(match self {
            OutputFormat::Html => Box::new(HtmlRenderer::new()?),
            OutputFormat::Json => Box::new(JsonRenderer),
        })
    }
}

/// Emits the model as pretty-printed JSON.
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, model: &FlatDocument) -> AppResult<String> {
        serde_json::to_string_pretty(model)
            .map_err(|e| AppError::Render(format!("JSON serialization failed: {}", e)))
    }
}

/// Renders a single HTML page from the embedded templates.
pub struct HtmlRenderer {
    tera: Tera,
}

/// Navigation entry for one resource.
#[derive(Serialize)]
struct NavEntry {
    anchor: String,
    full_path: String,
    has_methods: bool,
}

impl HtmlRenderer {
    /// Loads the embedded templates.
    pub fn new() -> AppResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(PAGE_TEMPLATE, include_str!("../templates/index.html"))
            .map_err(|e| AppError::Render(format!("Invalid template: {}", e)))?;
        Ok(Self { tera })
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, model: &FlatDocument) -> AppResult<String> {
        let nav: Vec<NavEntry> = model
            .resources
            .iter()
            .enumerate()
            .map(|(idx, resource)| NavEntry {
                anchor: format!("resource-{}", idx),
                full_path: resource.full_path(),
                has_methods: !resource.methods.is_empty(),
            })
            .collect();

        let mut context = Context::new();
        context.insert("title", &model.title);
        context.insert("version", &model.version);
        context.insert("base_uri", &model.base_uri);
        context.insert("traits", &model.traits);
        context.insert("resources", &model.resources);
        context.insert("nav", &nav);

        self.tera.render(PAGE_TEMPLATE, &context).map_err(|e| {
            let detail = std::error::Error::source(&e)
                .map(|s| format!(": {}", s))
                .unwrap_or_default();
            AppError::Render(format!("{}{}", e, detail))
        })
    }
}
