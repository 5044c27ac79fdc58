//! Template engine and rendering functionality
//!
//! Prompt lead-ins are Liquid templates with string arguments. Undefined
//! variables are an error, so a prompt can never render with a hole in it.

use crate::{CodeAnalysisError, Result};
use liquid::{Object, Parser};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

fn template_error(e: liquid::Error) -> CodeAnalysisError {
    CodeAnalysisError::Template(e.to_string())
}

/// A parsed Liquid template, ready to render
#[derive(Clone)]
pub struct Template {
    source: String,
    template: Arc<liquid::Template>,
}

impl Template {
    /// Parse a template with a fresh engine
    pub fn new(template_str: &str) -> Result<Self> {
        TemplateEngine::new()?.parse(template_str)
    }

    /// Render the template with given arguments
    pub fn render(&self, args: &HashMap<String, String>) -> Result<String> {
        let mut object = Object::new();
        for (key, value) in args {
            object.insert(
                key.clone().into(),
                liquid::model::Value::scalar(value.clone()),
            );
        }

        self.template.render(&object).map_err(template_error)
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("source", &self.source)
            .finish()
    }
}

/// Template engine with Liquid configuration
pub struct TemplateEngine {
    parser: Parser,
}

impl TemplateEngine {
    /// Create a new template engine with the standard Liquid filters
    pub fn new() -> Result<Self> {
        let parser = liquid::ParserBuilder::with_stdlib()
            .build()
            .map_err(template_error)?;
        Ok(Self { parser })
    }

    /// Parse a template string
    pub fn parse(&self, template_str: &str) -> Result<Template> {
        let template = self.parser.parse(template_str).map_err(template_error)?;
        Ok(Template {
            source: template_str.to_string(),
            template: Arc::new(template),
        })
    }
}
