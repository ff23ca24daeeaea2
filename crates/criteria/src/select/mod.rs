//! Column-list parsing for projection overrides.

mod parser;

pub use parser::SelectParser;

use crate::error::BuildError;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// One parsed projection entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectColumn {
    pub table: String,
    pub text: String,
    /// Expressions are emitted verbatim, with no table qualifier.
    pub is_expression: bool,
}

impl SelectColumn {
    /// The fragment as it appears in the SELECT list.
    pub fn fragment(&self) -> String {
        if self.is_expression {
            self.text.clone()
        } else {
            format!("{}.{}", self.table, self.text)
        }
    }
}

/// Parsed column lists grouped per table, tables in first-encounter
/// order; repeated table groups accumulate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedColumns {
    groups: Vec<(String, Vec<SelectColumn>)>,
}

impl ParsedColumns {
    /// True when not even an empty table group was declared.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn tables(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(table, _)| table.as_str())
    }

    pub fn columns(&self, table: &str) -> Option<&[SelectColumn]> {
        self.groups
            .iter()
            .find(|(name, _)| name == table)
            .map(|(_, columns)| columns.as_slice())
    }

    /// All columns, grouped by table in encounter order.
    pub fn iter(&self) -> impl Iterator<Item = &SelectColumn> {
        self.groups.iter().flat_map(|(_, columns)| columns.iter())
    }

    /// SELECT-list fragments for every column, in emission order.
    pub fn fragments(&self) -> Vec<String> {
        self.iter().map(SelectColumn::fragment).collect()
    }

    fn ensure_table(&mut self, table: &str) {
        if !self.groups.iter().any(|(name, _)| name == table) {
            self.groups.push((table.to_string(), Vec::new()));
        }
    }

    fn contains(&self, table: &str, text: &str) -> bool {
        self.columns(table)
            .is_some_and(|columns| columns.iter().any(|column| column.text == text))
    }

    fn push(&mut self, column: SelectColumn) {
        self.ensure_table(&column.table);
        if let Some((_, columns)) = self.groups.iter_mut().find(|(name, _)| *name == column.table)
        {
            columns.push(column);
        }
    }
}

/// The column-list parsing capability; custom parsers register under a
/// tag and are referenced from join/select declarations.
pub trait SelectColumnsParser: Debug + Send + Sync {
    fn parse(&self, raw: &str, strict: bool) -> Result<ParsedColumns, BuildError>;
}
