//! The query assembler: composes filter and join fragments over one live
//! criteria instance into the final [`Query`].

use crate::clause::{FilterClauseBuilder, JoinClause, JoinClauseFactory};
use crate::descriptor::{self, Descriptor, JoinDescriptor};
use crate::error::BuildError;
use crate::metadata::criteria::{BaseProjection, Criteria};
use crate::query::{Parameters, Query};
use crate::value::Value;
use tracing::debug;

/// Split marker used when a criteria declares no joins at all.
const IDENTITY_SPLIT: &str = "Id";

/// One-shot builder over a borrowed criteria instance. Stateless between
/// calls; two builds over equal instances yield identical queries.
pub struct QueryBuilder<'a, T: Criteria> {
    criteria: &'a T,
}

impl<'a, T: Criteria> QueryBuilder<'a, T> {
    pub fn new(criteria: &'a T) -> Self {
        Self { criteria }
    }

    pub fn build(&self) -> Result<Query, BuildError> {
        let descriptor = descriptor::scan::<T>()?;
        let where_clauses = FilterClauseBuilder::build(self.criteria, &descriptor);
        let join_clauses = self.join_clauses(&descriptor)?;
        let selects = self.select_list(&descriptor, &join_clauses)?;

        let mut sql = format!(
            "Select {} from {}",
            selects.join(" , "),
            from_clause(&descriptor)
        );
        for join in join_clauses.iter().filter(|join| join.has_join) {
            for fragment in &join.join_sqls {
                sql.push(' ');
                sql.push_str(join.join_type.as_sql());
                sql.push(' ');
                sql.push_str(fragment);
            }
        }
        if !where_clauses.is_empty() {
            sql.push_str(" WHERE ");
            let fragments: Vec<&str> =
                where_clauses.iter().map(|clause| clause.sql.as_str()).collect();
            sql.push_str(&fragments.join(" AND "));
        }
        let group_by = self.criteria.group_by();
        if !group_by.is_empty() {
            sql.push_str(" GROUP BY ");
            sql.push_str(&group_by.join(" , "));
        }

        let mut parameters = Parameters::new();
        for clause in where_clauses {
            if let Some((name, value)) = clause.param {
                parameters.push(name, value);
            }
        }

        let split_on = if join_clauses.is_empty() {
            IDENTITY_SPLIT.to_string()
        } else {
            join_clauses
                .iter()
                .filter(|join| !join.no_split)
                .map(|join| join.splitter.as_str())
                .collect::<Vec<_>>()
                .join(",")
        };

        debug!(
            criteria = std::any::type_name::<T>(),
            joins = join_clauses.len(),
            params = parameters.len(),
            "query assembled"
        );
        Ok(Query {
            sql,
            parameters,
            split_on,
        })
    }

    /// All declared joins, explicitly-ordered ones first (ascending),
    /// unordered ones after in declaration order; ties stay stable.
    fn join_clauses(&self, descriptor: &Descriptor) -> Result<Vec<JoinClause>, BuildError> {
        let mut declared: Vec<(&str, &JoinDescriptor)> = Vec::new();
        for field in &descriptor.fields {
            for join in &field.joins {
                declared.push((&field.name, join));
            }
        }
        declared.sort_by_key(|(_, join)| match join.spec.order() {
            Some(order) => (0, order),
            None => (1, 0),
        });

        declared
            .into_iter()
            .map(|(field, join)| {
                let builder = JoinClauseFactory::get(join.spec.kind())?;
                let gate_open = match join.spec.including() {
                    Some(gate) => self.criteria.value(gate).as_bool() == Some(true),
                    None => true,
                };
                if gate_open && self.field_active(field) {
                    builder.create(join)
                } else {
                    builder.create_not_join(join)
                }
            })
            .collect()
    }

    /// A join or projection toggle fires on `true` for booleans and on
    /// any non-null value otherwise.
    fn field_active(&self, field: &str) -> bool {
        let value = self.criteria.value(field);
        !value.is_null() && value.as_bool() != Some(false)
    }

    fn select_list(
        &self,
        descriptor: &Descriptor,
        joins: &[JoinClause],
    ) -> Result<Vec<String>, BuildError> {
        let mut selects = Vec::new();
        let qualifier = descriptor.table.qualifier();
        match self.criteria.projection() {
            BaseProjection::Star => selects.push(format!("{qualifier}.*")),
            BaseProjection::Column(column) => selects.push(format!("{qualifier}.{column}")),
            BaseProjection::Expression(text) => selects.push(text),
            BaseProjection::Suppressed => {}
        }

        for field in &descriptor.fields {
            if field.selects.is_empty() || !self.field_active(&field.name) {
                continue;
            }
            for select in &field.selects {
                match &select.columns {
                    Some(columns) => selects.extend(columns.fragments()),
                    None => {
                        let value = self.criteria.value(&field.name);
                        let Value::String(raw) = &value else {
                            return Err(BuildError::Configuration(format!(
                                "projection override on `{field}` needs a string value",
                                field = field.name
                            )));
                        };
                        selects.extend(select.parser.parse(raw, true)?.fragments());
                    }
                }
            }
        }

        for join in joins {
            if join.no_split {
                continue;
            }
            selects.push(format!("0 as {}", join.splitter));
            selects.extend(join.selects.iter().cloned());
        }
        Ok(selects)
    }
}

fn from_clause(descriptor: &Descriptor) -> String {
    match &descriptor.table.alias {
        Some(alias) => format!("{} {alias}", descriptor.table.name),
        None => descriptor.table.name.clone(),
    }
}
