use crate::descriptor::{Descriptor, FieldDescriptor};
use crate::metadata::criteria::Criteria;
use crate::metadata::filter::{FilterSpec, WhereOperator};
use crate::metadata::table::{TableRef, strip_brackets};
use crate::transform::{Formatter, LikeFormatter};
use crate::value::Value;
use std::sync::Arc;

/// One WHERE fragment; `param` is `None` exactly for valueless operators.
#[derive(Debug, Clone, PartialEq)]
pub struct WhereClause {
    pub sql: String,
    pub param: Option<(String, Value)>,
}

/// Turns per-field filter declarations plus live values into ordered
/// WHERE fragments. Stateless.
pub struct FilterClauseBuilder;

impl FilterClauseBuilder {
    pub fn build<T: Criteria>(criteria: &T, descriptor: &Descriptor) -> Vec<WhereClause> {
        let mut clauses = Vec::new();
        for field in &descriptor.fields {
            if field.filters.is_empty() {
                continue;
            }
            let value = criteria.value(&field.name);
            if value.is_null() {
                continue;
            }
            if value.as_bool() == Some(false) {
                continue;
            }
            for spec in &field.filters {
                clauses.push(Self::clause(spec, field, &descriptor.table, value.clone()));
            }
        }
        clauses
    }

    fn clause(
        spec: &FilterSpec,
        field: &FieldDescriptor,
        table: &TableRef,
        value: Value,
    ) -> WhereClause {
        let qualifier = spec
            .table_alias
            .as_deref()
            .or(spec.table.as_deref())
            .or(table.alias.as_deref())
            .unwrap_or(&table.name);
        let field_name = spec.field.as_deref().unwrap_or(&field.name);
        let param_name = format!("{}{field_name}", strip_brackets(qualifier));
        let param_ref = format!("@{param_name}");

        let sql = match &spec.expression {
            Some(template) => {
                let substituted = template
                    .replace("/**TableName**/", qualifier)
                    .replace("/**FieldName**/", field_name)
                    .replace("/**CompareOperation**/", spec.operator.sql_token())
                    .replace("/**Parameter**/", &param_ref);
                format!("({substituted})")
            }
            None => format!(
                "{qualifier}.{field_name} {}",
                spec.operator.comparison(&param_ref)
            ),
        };

        let param = if spec.operator.is_valueless() {
            None
        } else {
            Some((
                param_name,
                apply_transform(spec.operator, field.transform.as_ref(), value),
            ))
        };
        WhereClause { sql, param }
    }
}

/// A declared transform always wins; otherwise the default is
/// operator-driven (`Like` wraps, everything else passes through).
fn apply_transform(
    operator: WhereOperator,
    custom: Option<&Arc<dyn Formatter>>,
    value: Value,
) -> Value {
    match custom {
        Some(formatter) => formatter.format(value),
        None if operator == WhereOperator::Like => LikeFormatter.format(value),
        None => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::scan;
    use crate::metadata::criteria::{Criteria, Field};
    use crate::metadata::filter::{FilterSpec, WhereOperator};

    #[derive(Default)]
    struct HouseFilters {
        id: Option<i64>,
        name: Option<String>,
        owner_id: Option<i64>,
        only_single_storey: bool,
    }

    impl Criteria for HouseFilters {
        fn table() -> TableRef {
            TableRef::new("Houses")
        }

        fn fields() -> Vec<Field> {
            vec![
                Field::new("Id").filter(FilterSpec::new(WhereOperator::Eq)),
                Field::new("Name").filter(FilterSpec::new(WhereOperator::Like)),
                Field::new("OwnerId")
                    .filter(FilterSpec::new(WhereOperator::Eq))
                    .filter(FilterSpec::new(WhereOperator::IsNotNull)),
                Field::new("OnlySingleStorey").filter(
                    FilterSpec::new(WhereOperator::Eq)
                        .field("FloorsCount")
                        .expression("/**TableName**/./**FieldName**/ = 1"),
                ),
            ]
        }

        fn value(&self, field: &str) -> Value {
            match field {
                "Id" => self.id.into(),
                "Name" => self.name.clone().into(),
                "OwnerId" => self.owner_id.into(),
                "OnlySingleStorey" => self.only_single_storey.into(),
                _ => Value::Null,
            }
        }
    }

    fn build(criteria: &HouseFilters) -> Vec<WhereClause> {
        let descriptor = scan::<HouseFilters>().expect("scan");
        FilterClauseBuilder::build(criteria, &descriptor)
    }

    #[test]
    fn null_fields_contribute_nothing() {
        assert!(build(&HouseFilters::default()).is_empty());
    }

    #[test]
    fn eq_binds_one_parameter() {
        let clauses = build(&HouseFilters {
            id: Some(1),
            ..Default::default()
        });
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].sql, "Houses.Id = @HousesId");
        assert_eq!(
            clauses[0].param,
            Some(("HousesId".to_string(), Value::Int(1)))
        );
    }

    #[test]
    fn like_wraps_the_value_by_default() {
        let clauses = build(&HouseFilters {
            name: Some("123".into()),
            ..Default::default()
        });
        assert_eq!(clauses[0].sql, "Houses.Name Like @HousesName");
        assert_eq!(
            clauses[0].param,
            Some(("HousesName".to_string(), Value::String("%123%".into())))
        );
    }

    #[test]
    fn repeated_specs_emit_in_declaration_order() {
        let clauses = build(&HouseFilters {
            owner_id: Some(7),
            ..Default::default()
        });
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].sql, "Houses.OwnerId = @HousesOwnerId");
        assert_eq!(clauses[1].sql, "Houses.OwnerId is not null");
        assert!(clauses[1].param.is_none());
    }

    #[test]
    fn boolean_field_gates_its_expression_clause() {
        let off = build(&HouseFilters::default());
        assert!(off.is_empty());

        let on = build(&HouseFilters {
            only_single_storey: true,
            ..Default::default()
        });
        assert_eq!(on.len(), 1);
        assert_eq!(on[0].sql, "(Houses.FloorsCount = 1)");
    }

    struct AliasedFilters {
        id: Option<i64>,
        company_id: Option<i64>,
    }

    impl Criteria for AliasedFilters {
        fn table() -> TableRef {
            TableRef::aliased("Persons", "[p]")
        }

        fn fields() -> Vec<Field> {
            vec![
                Field::new("Id").filter(FilterSpec::new(WhereOperator::Eq)),
                Field::new("CompanyId").filter(
                    FilterSpec::new(WhereOperator::Eq)
                        .field("Id")
                        .table("Company")
                        .table_alias("[c]"),
                ),
            ]
        }

        fn value(&self, field: &str) -> Value {
            match field {
                "Id" => self.id.into(),
                "CompanyId" => self.company_id.into(),
                _ => Value::Null,
            }
        }
    }

    #[test]
    fn qualifier_precedence_prefers_spec_alias_then_table() {
        let descriptor = scan::<AliasedFilters>().expect("scan");
        let clauses = FilterClauseBuilder::build(
            &AliasedFilters {
                id: Some(1),
                company_id: Some(2),
            },
            &descriptor,
        );
        assert_eq!(clauses[0].sql, "[p].Id = @pId");
        assert_eq!(clauses[0].param, Some(("pId".to_string(), Value::Int(1))));
        assert_eq!(clauses[1].sql, "[c].Id = @cId");
    }

    #[test]
    fn expression_template_substitutes_and_parenthesizes() {
        struct Expr {
            date: Option<String>,
        }

        impl Criteria for Expr {
            fn table() -> TableRef {
                TableRef::new("TableName")
            }

            fn fields() -> Vec<Field> {
                vec![Field::new("DateWithExpression").filter(
                    FilterSpec::new(WhereOperator::GtEq).field("Date").expression(
                        "(/**TableName**/./**FieldName**/ is not null and \
                         /**TableName**/./**FieldName**/ /**CompareOperation**/ /**Parameter**/) \
                         or (/**TableName**/.DateSecond /**CompareOperation**/ /**Parameter**/)",
                    ),
                )]
            }

            fn value(&self, field: &str) -> Value {
                match field {
                    "DateWithExpression" => self.date.clone().into(),
                    _ => Value::Null,
                }
            }
        }

        let descriptor = scan::<Expr>().expect("scan");
        let clauses = FilterClauseBuilder::build(
            &Expr {
                date: Some("2026-01-01".into()),
            },
            &descriptor,
        );
        assert_eq!(
            clauses[0].sql,
            "((TableName.Date is not null and TableName.Date >= @TableNameDate) \
             or (TableName.DateSecond >= @TableNameDate))"
        );
        assert_eq!(
            clauses[0].param,
            Some(("TableNameDate".to_string(), Value::String("2026-01-01".into())))
        );
    }
}
