//! Prompt registry
//!
//! Each tool has a matching `prompt_{tool}` prompt. A prompt substitutes the
//! path into a short lead-in sentence and appends the same instructions the
//! tool would return. Prompts never read the filesystem: they are meant for
//! agents that already have the code in context.

use crate::catalog::{
    CatalogEntry, ContentSource, InstructionCatalog, DRAW_GRIDMAT, REVIEW_COHESION,
    REVIEW_COMMENTS, REVIEW_NAMES, REVIEW_PERFORMANCE, REVIEW_TEST_COVERAGE,
};
use crate::template::{Template, TemplateEngine};
use crate::{CodeAnalysisError, Result};
use indexmap::IndexMap;
use rmcp::model::{Prompt, PromptArgument};
use std::collections::HashMap;

/// Naming convention linking a prompt to its tool
pub const PROMPT_PREFIX: &str = "prompt_";

/// Prompt name for a tool name
pub fn prompt_name(tool_name: &str) -> String {
    format!("{PROMPT_PREFIX}{tool_name}")
}

/// Lead-in template and description for the built-in tools
fn builtin_lead_in(tool_name: &str) -> Option<(&'static str, &'static str)> {
    let lead_in = match tool_name {
        REVIEW_COMMENTS => (
            "Please review the file at `{{ filepath }}` for comment quality.",
            "Prompt template for reviewing comments in a source file.",
        ),
        REVIEW_NAMES => (
            "Please review the file at `{{ filepath }}` for naming quality.",
            "Prompt template for reviewing names in a source file.",
        ),
        REVIEW_COHESION => (
            "Please review the file at `{{ filepath }}` for cohesion issues.",
            "Prompt template for reviewing cohesion in a source file.",
        ),
        REVIEW_PERFORMANCE => (
            "Please review the file at `{{ filepath }}` for performance issues.",
            "Prompt template for reviewing performance in a source file.",
        ),
        REVIEW_TEST_COVERAGE => (
            "Please review the file at `{{ filepath }}` for test coverage gaps.",
            "Prompt template for reviewing test coverage of a source file.",
        ),
        DRAW_GRIDMAT => (
            "Please draw an execution-path diagram for the codebase at `{{ directory }}`.",
            "Prompt template for drawing a gridmat diagram of a directory.",
        ),
        _ => return None,
    };
    Some(lead_in)
}

/// Lead-in for tools without a dedicated one
fn generic_lead_in(source: ContentSource) -> &'static str {
    match source {
        ContentSource::File => "Please review the file at `{{ filepath }}`.",
        ContentSource::Directory => "Please review the codebase at `{{ directory }}`.",
    }
}

/// One renderable prompt
#[derive(Debug, Clone)]
pub struct PromptDefinition {
    name: String,
    description: String,
    entry: CatalogEntry,
    lead_in: Template,
}

impl PromptDefinition {
    /// Build the prompt for a catalog entry, parsing its lead-in with `engine`
    pub fn for_entry(entry: CatalogEntry, engine: &TemplateEngine) -> Result<Self> {
        let (lead_in, description) = builtin_lead_in(entry.name)
            .map(|(lead_in, description)| (lead_in, description.to_string()))
            .unwrap_or_else(|| {
                (
                    generic_lead_in(entry.source),
                    format!("Prompt template for {}.", entry.name),
                )
            });

        Ok(Self {
            name: prompt_name(entry.name),
            description,
            entry,
            lead_in: engine.parse(lead_in)?,
        })
    }

    /// Prompt name, `prompt_{tool}`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tool whose instructions this prompt carries
    pub fn tool_name(&self) -> &'static str {
        self.entry.name
    }

    /// Name of the single required argument
    pub fn argument_name(&self) -> &'static str {
        self.entry.source.argument_name()
    }

    /// Short human-readable description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Render the lead-in followed by the instructions
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<String> {
        let argument = self.argument_name();
        if !arguments.contains_key(argument) {
            return Err(CodeAnalysisError::InvalidArguments(format!(
                "prompt '{}' requires the '{}' argument",
                self.name, argument
            )));
        }

        let lead_in = self.lead_in.render(arguments)?;
        Ok(format!("{lead_in}\n\n{}", self.entry.instructions))
    }

    /// Listing entry for `prompts/list`
    pub fn to_prompt(&self) -> Prompt {
        let argument = self.argument_name();
        Prompt {
            name: self.name.clone(),
            description: Some(self.description.clone()),
            arguments: Some(vec![PromptArgument {
                name: argument.to_string(),
                description: Some(match self.entry.source {
                    ContentSource::File => "Path to the file to review".to_string(),
                    ContentSource::Directory => "Path to the directory to diagram".to_string(),
                }),
                required: Some(true),
            }]),
        }
    }
}

/// All prompts, keyed by prompt name, in catalog order
#[derive(Debug, Clone, Default)]
pub struct PromptRegistry {
    prompts: IndexMap<String, PromptDefinition>,
}

impl PromptRegistry {
    /// One prompt per catalog entry
    pub fn from_catalog(catalog: &InstructionCatalog) -> Result<Self> {
        let engine = TemplateEngine::new()?;
        let mut prompts = IndexMap::new();
        for entry in catalog.entries() {
            let prompt = PromptDefinition::for_entry(*entry, &engine)?;
            prompts.insert(prompt.name.clone(), prompt);
        }
        Ok(Self { prompts })
    }

    /// Look up a prompt by exact name
    pub fn get(&self, name: &str) -> Option<&PromptDefinition> {
        self.prompts.get(name)
    }

    /// Prompts in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &PromptDefinition> {
        self.prompts.values()
    }

    /// Listing for `prompts/list`
    pub fn list_prompts(&self) -> Vec<Prompt> {
        self.iter().map(PromptDefinition::to_prompt).collect()
    }

    /// Render a prompt by name
    pub fn render_prompt(&self, name: &str, arguments: &HashMap<String, String>) -> Result<String> {
        let prompt = self
            .get(name)
            .ok_or_else(|| CodeAnalysisError::PromptNotFound(name.to_string()))?;
        tracing::debug!("Rendering prompt '{}'", name);
        prompt.render(arguments)
    }

    /// Number of prompts
    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> PromptRegistry {
        PromptRegistry::from_catalog(InstructionCatalog::global()).unwrap()
    }

    fn args(key: &str, value: &str) -> HashMap<String, String> {
        HashMap::from([(key.to_string(), value.to_string())])
    }

    #[test]
    fn test_prompt_names_mirror_tools() {
        let names: Vec<_> = registry().iter().map(|p| p.name().to_string()).collect();
        assert_eq!(
            names,
            vec![
                "prompt_review_comments",
                "prompt_review_names",
                "prompt_review_cohesion",
                "prompt_review_performance",
                "prompt_review_test_coverage",
                "prompt_draw_gridmat",
            ]
        );
    }

    #[test]
    fn test_render_review_names_without_filesystem() {
        let rendered = registry()
            .render_prompt("prompt_review_names", &args("filepath", "foo.py"))
            .unwrap();

        assert!(rendered.contains("foo.py"));
        assert!(rendered.contains(
            InstructionCatalog::global()
                .instructions(REVIEW_NAMES)
                .unwrap()
        ));
    }

    #[test]
    fn test_exact_prompt_text() {
        let instructions = InstructionCatalog::global()
            .instructions(REVIEW_COMMENTS)
            .unwrap();
        let rendered = registry()
            .render_prompt(
                "prompt_review_comments",
                &args("filepath", "/no/such/dir/a.py"),
            )
            .unwrap();
        assert_eq!(
            rendered,
            format!(
                "Please review the file at `/no/such/dir/a.py` for comment quality.\n\n{instructions}"
            )
        );
    }

    #[test]
    fn test_gridmat_prompt_uses_directory() {
        let rendered = registry()
            .render_prompt("prompt_draw_gridmat", &args("directory", "src"))
            .unwrap();
        assert!(rendered
            .starts_with("Please draw an execution-path diagram for the codebase at `src`.\n\n"));
    }

    #[test]
    fn test_wrong_argument_is_rejected() {
        let error = registry()
            .render_prompt("prompt_draw_gridmat", &args("filepath", "src"))
            .unwrap_err();
        assert!(matches!(error, CodeAnalysisError::InvalidArguments(_)));
        assert!(error.to_string().contains("directory"));
    }

    #[test]
    fn test_unknown_prompt_is_an_error() {
        let error = registry()
            .render_prompt("prompt_review_everything", &args("filepath", "a"))
            .unwrap_err();
        assert!(matches!(error, CodeAnalysisError::PromptNotFound(_)));
        assert!(registry()
            .render_prompt("review_names", &args("filepath", "a"))
            .is_err());
    }

    #[test]
    fn test_listing_declares_required_argument() {
        let prompts = registry().list_prompts();
        assert_eq!(prompts.len(), 6);
        for prompt in &prompts {
            let arguments = prompt.arguments.as_ref().unwrap();
            assert_eq!(arguments.len(), 1);
            assert_eq!(arguments[0].required, Some(true));
            let expected = if prompt.name == "prompt_draw_gridmat" {
                "directory"
            } else {
                "filepath"
            };
            assert_eq!(arguments[0].name, expected);
        }
    }

    #[test]
    fn test_custom_entries_get_generic_lead_in() {
        let catalog = InstructionCatalog::new([CatalogEntry {
            name: "review_style",
            source: ContentSource::File,
            summary: "Review style",
            minimal_description: "Style",
            full_description: "Review code style in detail",
            instructions: "Check the style.",
        }]);
        let registry = PromptRegistry::from_catalog(&catalog).unwrap();

        let rendered = registry
            .render_prompt("prompt_review_style", &args("filepath", "a.rs"))
            .unwrap();
        assert_eq!(rendered, "Please review the file at `a.rs`.\n\nCheck the style.");
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
    }
}
