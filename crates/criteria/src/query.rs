//! The compiled query handed to the execution layer.

use crate::value::Value;
use serde::Serialize;

/// Ordered name -> value parameter bag. Names carry no `@` sigil; the
/// SQL text references them as `@name`. Re-pushing a name overwrites its
/// value in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Parameters {
    entries: Vec<(String, Value)>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The full output contract toward the (external) execution and
/// row-materialization layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Query {
    pub sql: String,
    pub parameters: Parameters,
    /// Comma-separated split markers telling the materializer where one
    /// entity's columns end and the next nested entity's begin.
    pub split_on: String,
}
