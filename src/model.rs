//! Identifier types for the plugins and recipes a run targets.
//!
//! Both are opaque to the configuration core: it never interprets a plugin
//! name, and the only recipe name it recognizes is the reserved
//! metadata-fetch recipe (see [`crate::settings::FETCH_METADATA_RECIPE`]).

use serde::{Deserialize, Serialize};

/// One target plugin to modernize, identified by its short name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Plugin {
    name: String,
}

impl Plugin {
    /// Creates a plugin identifier from its short name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The plugin's short name, e.g. `git-client`.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Plugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// One transformation recipe to apply, in declaration order.
///
/// The optional description is carried verbatim into pull-request bodies by
/// the source-control layer; this core never reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Recipe {
    /// Creates a recipe identifier with no description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Creates a recipe identifier with a human-readable description.
    pub fn with_description(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: Some(description.into()),
        }
    }

    /// The recipe's fully-qualified name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The human-readable description, if one was supplied.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl std::fmt::Display for Recipe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
