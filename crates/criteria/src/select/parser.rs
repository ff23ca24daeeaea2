use crate::error::BuildError;
use crate::select::{ParsedColumns, SelectColumn, SelectColumnsParser};

/// Parser for the compact column-list grammar:
/// `Table:col1,col2,...;Table2:colA,...`.
///
/// A column wrapped in `{{ }}` is an opaque expression: its internal
/// commas do not separate and it is emitted without a qualifier. Empty
/// column tokens are dropped, so `"T:"` declares the table with zero
/// columns.
#[derive(Debug, Default)]
pub struct SelectParser;

impl SelectColumnsParser for SelectParser {
    fn parse(&self, raw: &str, strict: bool) -> Result<ParsedColumns, BuildError> {
        let mut parsed = ParsedColumns::default();
        for group in raw.split(';') {
            let group = group.trim();
            if group.is_empty() {
                continue;
            }
            let Some((table, columns)) = group.split_once(':') else {
                return Err(BuildError::Configuration(format!(
                    "select list group `{group}` is missing a `:` separator"
                )));
            };
            let table = table.trim();
            if table.is_empty() {
                return Err(BuildError::Configuration(format!(
                    "select list group `{group}` has an empty table name"
                )));
            }
            parsed.ensure_table(table);
            for token in split_columns(columns) {
                let token = token.trim();
                if token.is_empty() {
                    continue;
                }
                let (text, is_expression) = match token
                    .strip_prefix("{{")
                    .and_then(|inner| inner.strip_suffix("}}"))
                {
                    Some(inner) => (inner.to_string(), true),
                    None => (token.to_string(), false),
                };
                if strict && parsed.contains(table, &text) {
                    return Err(BuildError::DuplicateName {
                        table: table.to_string(),
                        column: text,
                    });
                }
                parsed.push(SelectColumn {
                    table: table.to_string(),
                    text,
                    is_expression,
                });
            }
        }
        Ok(parsed)
    }
}

/// Splits on commas that are outside `{{ }}` expression markers.
fn split_columns(raw: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                depth += 1;
                current.push_str("{{");
            }
            '}' if depth > 0 && chars.peek() == Some(&'}') => {
                chars.next();
                depth -= 1;
                current.push_str("}}");
            }
            ',' if depth == 0 => {
                parts.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    parts.push(current);
    parts
}
