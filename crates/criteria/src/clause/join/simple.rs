use crate::clause::join::{
    JoinClause, JoinClauseBuilder, add_on_sql, current_qualifier, joined_field, split_marker,
    table_with_alias,
};
use crate::descriptor::JoinDescriptor;
use crate::error::BuildError;
use crate::metadata::join::JoinSpec;

/// Builds the single ON fragment of a direct join.
pub struct SimpleJoinBuilder;

impl JoinClauseBuilder for SimpleJoinBuilder {
    fn create(&self, join: &JoinDescriptor) -> Result<JoinClause, BuildError> {
        let JoinSpec::Simple(spec) = &join.spec else {
            return Err(BuildError::Configuration(
                "simple join builder invoked with a non-simple join spec".to_string(),
            ));
        };
        let current_qual = current_qualifier(spec)?;
        let joined_qual = spec.joined_alias.as_deref().unwrap_or(&spec.joined_table);
        let joined_field = joined_field(spec);

        let sql = format!(
            "{} on {joined_qual}.{joined_field} = {current_qual}.{}{}",
            table_with_alias(&spec.joined_table, spec.joined_alias.as_deref()),
            spec.current_field,
            add_on_sql(spec.add_on.as_deref()),
        );

        let selects = match &join.columns {
            Some(columns) => columns.fragments(),
            None => vec![format!("{joined_qual}.*")],
        };

        Ok(JoinClause {
            join_type: spec.join_type,
            join_sqls: vec![sql],
            selects,
            splitter: split_marker(&join.spec),
            has_join: true,
            order: spec.order,
            no_split: spec.no_split,
        })
    }
}
