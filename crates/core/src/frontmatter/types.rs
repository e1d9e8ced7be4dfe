//! Frontmatter types and data structures.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::HashMap;

use crate::host::AliasField;

/// Represents parsed YAML frontmatter from a markdown document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Frontmatter {
    /// Fields as key-value pairs.
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

impl Frontmatter {
    /// Alias metadata.
    ///
    /// A non-empty `alias` field wins over `aliases`. `aliases` may be a YAML
    /// list or a comma-separated string. Blank entries are dropped.
    pub fn alias_field(&self) -> AliasField {
        if let Some(alias) = self.fields.get("alias").and_then(scalar_to_string)
            && !alias.trim().is_empty()
        {
            return AliasField::Single(alias);
        }

        let aliases: Vec<String> = match self.fields.get("aliases") {
            Some(Value::String(s)) => s.split(',').map(|a| a.trim().to_string()).collect(),
            Some(Value::Sequence(seq)) => seq.iter().filter_map(scalar_to_string).collect(),
            Some(other) => scalar_to_string(other).into_iter().collect(),
            None => Vec::new(),
        };
        let aliases: Vec<String> = aliases.into_iter().filter(|a| !a.trim().is_empty()).collect();

        if aliases.is_empty() { AliasField::None } else { AliasField::Multiple(aliases) }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Result of splitting frontmatter from markdown.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    /// Parsed frontmatter (if present).
    pub frontmatter: Option<Frontmatter>,
    /// The markdown body (everything after frontmatter).
    pub body: String,
}
