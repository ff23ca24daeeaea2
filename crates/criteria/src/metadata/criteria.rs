use crate::metadata::{filter::FilterSpec, join::JoinSpec, select::SelectSpec, table::TableRef};
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// The base projection of a query instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaseProjection {
    /// `qualifier.*`
    #[default]
    Star,
    /// `qualifier.column`
    Column(String),
    /// Emitted verbatim, e.g. `sum(Houses.Price)`.
    Expression(String),
    /// No base projection; override columns only.
    Suppressed,
}

/// One logical criteria field with its ordered, repeatable declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub filters: Vec<FilterSpec>,
    pub joins: Vec<JoinSpec>,
    pub selects: Vec<SelectSpec>,
    /// Registry tag of a custom value transform applied before binding.
    pub transform_tag: Option<String>,
}

impl Field {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn filter(mut self, spec: FilterSpec) -> Self {
        self.filters.push(spec);
        self
    }

    pub fn join(mut self, spec: impl Into<JoinSpec>) -> Self {
        self.joins.push(spec.into());
        self
    }

    pub fn select(mut self, spec: SelectSpec) -> Self {
        self.selects.push(spec);
        self
    }

    pub fn transform(mut self, tag: &str) -> Self {
        self.transform_tag = Some(tag.to_string());
        self
    }
}

/// The capability a query-instance type exposes to the engine: a static
/// table binding and field declarations, plus live per-field values.
///
/// `fields()` may repeat a name; the later declaration replaces the
/// earlier one at its original position (derived criteria append their
/// overrides after the base declarations).
pub trait Criteria: 'static {
    fn table() -> TableRef
    where
        Self: Sized;

    fn fields() -> Vec<Field>
    where
        Self: Sized;

    /// Live value of a declared field; `Value::Null` when unset.
    fn value(&self, field: &str) -> Value;

    fn projection(&self) -> BaseProjection {
        BaseProjection::Star
    }

    fn group_by(&self) -> Vec<String> {
        Vec::new()
    }
}
