//! Full tool description resources
//!
//! Each tool's full description is addressable as
//! `{scheme}://{collection}/{tool_name}`, by default
//! `ctroy://tool-descriptions/review_comments` and so on.

use crate::config::Config;
use rmcp::model::{
    Annotated, RawResource, RawResourceTemplate, ReadResourceResult, Resource, ResourceContents,
    ResourceTemplate,
};

/// MIME type of description texts
pub const DESCRIPTION_MIME_TYPE: &str = "text/markdown";

const TOOL_NAME_PLACEHOLDER: &str = "{tool_name}";

/// Builds and parses description resource addresses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionResources {
    scheme: String,
    collection: String,
}

impl DescriptionResources {
    /// Addresses under `{scheme}://{collection}/`
    pub fn new(scheme: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            collection: collection.into(),
        }
    }

    /// Addresses as configured
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.resource_scheme, &config.resource_collection)
    }

    fn prefix(&self) -> String {
        format!("{}://{}/", self.scheme, self.collection)
    }

    /// Address of one tool's full description
    pub fn uri(&self, tool_name: &str) -> String {
        format!("{}{}", self.prefix(), tool_name)
    }

    /// RFC 6570 template covering every description address
    pub fn uri_template(&self) -> String {
        self.uri(TOOL_NAME_PLACEHOLDER)
    }

    /// Extract the tool name from an address
    ///
    /// Returns `None` when the scheme or collection do not match, or the name
    /// segment is empty or nested. Any other name is returned as-is, whether
    /// or not such a tool exists.
    pub fn parse<'a>(&self, uri: &'a str) -> Option<&'a str> {
        let name = uri.strip_prefix(&self.prefix())?;
        if name.is_empty() || name.contains('/') {
            None
        } else {
            Some(name)
        }
    }

    /// Template advertised through `resources/templates/list`
    pub fn template(&self) -> ResourceTemplate {
        Annotated::new(
            RawResourceTemplate {
                uri_template: self.uri_template(),
                name: "tool-description".to_string(),
                description: Some(
                    "Full description of a tool: what it looks for, when to use it, and what it returns"
                        .to_string(),
                ),
                mime_type: Some(DESCRIPTION_MIME_TYPE.to_string()),
            },
            None,
        )
    }

    /// Concrete resource advertised for one tool
    pub fn resource(&self, tool_name: &str, minimal_description: Option<&str>) -> Resource {
        let mut raw = RawResource::new(self.uri(tool_name), format!("{tool_name} description"));
        raw.description = minimal_description.map(str::to_string);
        raw.mime_type = Some(DESCRIPTION_MIME_TYPE.to_string());
        Annotated::new(raw, None)
    }

    /// Wrap description text as the result of `resources/read`
    pub fn contents(&self, uri: &str, text: impl Into<String>) -> ReadResourceResult {
        ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: Some(DESCRIPTION_MIME_TYPE.to_string()),
                text: text.into(),
            }],
        }
    }
}

impl Default for DescriptionResources {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
