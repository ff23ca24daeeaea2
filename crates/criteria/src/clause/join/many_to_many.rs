use crate::clause::join::{
    JoinClause, JoinClauseBuilder, add_on_sql, current_qualifier, joined_field, split_marker,
    table_with_alias,
};
use crate::descriptor::JoinDescriptor;
use crate::error::BuildError;
use crate::metadata::join::{AddOnTarget, JoinSpec};

/// Builds the two fragments of a join routed through a communication
/// table: base -> communication, then communication -> joined.
pub struct ManyToManyJoinBuilder;

impl JoinClauseBuilder for ManyToManyJoinBuilder {
    fn create(&self, join: &JoinDescriptor) -> Result<JoinClause, BuildError> {
        let JoinSpec::ManyToMany(spec) = &join.spec else {
            return Err(BuildError::Configuration(
                "many-to-many join builder invoked with a non-many-to-many join spec".to_string(),
            ));
        };
        let base = &spec.base;
        let current_qual = current_qualifier(base)?;
        let comm_qual = spec
            .communication_alias
            .as_deref()
            .unwrap_or(&spec.communication_table);
        let joined_qual = base.joined_alias.as_deref().unwrap_or(&base.joined_table);
        let joined_field = joined_field(base);

        let add_on = |target: AddOnTarget| {
            if spec.add_on_target == target {
                add_on_sql(base.add_on.as_deref())
            } else {
                String::new()
            }
        };

        let communication = format!(
            "{} on {comm_qual}.{} = {current_qual}.{}{}",
            table_with_alias(&spec.communication_table, spec.communication_alias.as_deref()),
            spec.comm_current_field,
            base.current_field,
            add_on(AddOnTarget::Communication),
        );
        let joined = format!(
            "{} on {joined_qual}.{joined_field} = {comm_qual}.{}{}",
            table_with_alias(&base.joined_table, base.joined_alias.as_deref()),
            spec.comm_joined_field,
            add_on(AddOnTarget::Joined),
        );

        let selects = match &join.columns {
            Some(columns) => columns.fragments(),
            None => vec![format!("{joined_qual}.*")],
        };

        Ok(JoinClause {
            join_type: base.join_type,
            join_sqls: vec![communication, joined],
            selects,
            splitter: split_marker(&join.spec),
            has_join: true,
            order: base.order,
            no_split: base.no_split,
        })
    }
}
