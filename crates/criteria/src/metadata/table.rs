use serde::{Deserialize, Serialize};

/// The base-table binding of a criteria type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRef {
    pub name: String,
    pub alias: Option<String>,
}

impl TableRef {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            alias: None,
        }
    }

    pub fn aliased(name: &str, alias: &str) -> Self {
        Self {
            name: name.to_string(),
            alias: Some(alias.to_string()),
        }
    }

    /// Qualifier placed in front of column references; the alias, once
    /// declared, is the sole qualifier used for this table.
    pub fn qualifier(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

/// Strips bracket-style identifier delimiters, e.g. `[tn]` -> `tn`.
///
/// Bracketed names pass through to SQL verbatim but must not leak into
/// parameter names or split markers.
pub(crate) fn strip_brackets(name: &str) -> String {
    name.replace(['[', ']'], "")
}
