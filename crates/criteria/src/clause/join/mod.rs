//! JOIN fragment builders and their dispatch factory.

mod many_to_many;
mod simple;

pub use many_to_many::ManyToManyJoinBuilder;
pub use simple::SimpleJoinBuilder;

use crate::descriptor::JoinDescriptor;
use crate::error::BuildError;
use crate::metadata::join::{JoinSpec, JoinType, SimpleJoin};
use crate::metadata::table::strip_brackets;

/// The compiled contribution of one join declaration.
///
/// `join_sqls` fragments carry no `<TYPE> JOIN` prefix; the assembler
/// prepends it. A not-join keeps its splitter (the positional split slot
/// stays reserved) with `has_join = false` and empty SQL/selects.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    pub join_type: JoinType,
    pub join_sqls: Vec<String>,
    pub selects: Vec<String>,
    pub splitter: String,
    pub has_join: bool,
    pub order: Option<u32>,
    pub no_split: bool,
}

pub trait JoinClauseBuilder: Send + Sync {
    fn create(&self, join: &JoinDescriptor) -> Result<JoinClause, BuildError>;

    /// Reserves the join's split slot without emitting SQL, used when the
    /// join's toggle or including gate is off.
    fn create_not_join(&self, join: &JoinDescriptor) -> Result<JoinClause, BuildError> {
        let spec = &join.spec;
        Ok(JoinClause {
            join_type: spec.join_type(),
            join_sqls: Vec::new(),
            selects: Vec::new(),
            splitter: split_marker(spec),
            has_join: false,
            order: spec.order(),
            no_split: spec.no_split(),
        })
    }
}

/// Resolves a join-spec kind tag to its builder.
pub struct JoinClauseFactory;

impl JoinClauseFactory {
    pub fn get(kind: &str) -> Result<&'static dyn JoinClauseBuilder, BuildError> {
        match kind {
            "simple" => Ok(&SimpleJoinBuilder),
            "many-to-many" => Ok(&ManyToManyJoinBuilder),
            other => Err(BuildError::UnsupportedJoinKind(other.to_string())),
        }
    }
}

/// Marker column name reserved for this join in the SELECT list:
/// `SplitOn` + joined table (brackets stripped) + joined field.
pub(crate) fn split_marker(spec: &JoinSpec) -> String {
    let base = spec.base();
    format!(
        "SplitOn{}{}",
        strip_brackets(&base.joined_table),
        joined_field(base)
    )
}

/// The joined-side column, defaulting to the current-side one.
pub(crate) fn joined_field(base: &SimpleJoin) -> &str {
    base.joined_field.as_deref().unwrap_or(&base.current_field)
}

/// `"Table alias"` or the bare table name.
pub(crate) fn table_with_alias(table: &str, alias: Option<&str>) -> String {
    match alias {
        Some(alias) => format!("{table} {alias}"),
        None => table.to_string(),
    }
}

/// The current-side qualifier; errors when the scanner never bound the
/// join to a table.
pub(crate) fn current_qualifier(base: &SimpleJoin) -> Result<&str, BuildError> {
    base.current_alias
        .as_deref()
        .or(base.current_table.as_deref())
        .ok_or_else(|| {
            BuildError::Configuration(format!(
                "join onto `{}` has no current-table binding",
                base.joined_table
            ))
        })
}

/// ` AND <clause>` when an add-on predicate is declared.
pub(crate) fn add_on_sql(add_on: Option<&str>) -> String {
    match add_on {
        Some(clause) => format!(" AND {clause}"),
        None => String::new(),
    }
}
