use serde::{Deserialize, Serialize};

/// A projection-override declaration on a criteria field.
///
/// With `columns` set the list is fixed at declaration time; without it
/// the field's live string value supplies the list on every build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectSpec {
    pub columns: Option<String>,
    pub parser_tag: Option<String>,
}

impl SelectSpec {
    /// Column list taken from the field value at build time.
    pub fn from_value() -> Self {
        Self::default()
    }

    pub fn columns(raw: &str) -> Self {
        Self {
            columns: Some(raw.to_string()),
            parser_tag: None,
        }
    }

    pub fn parser(mut self, tag: &str) -> Self {
        self.parser_tag = Some(tag.to_string());
        self
    }
}
