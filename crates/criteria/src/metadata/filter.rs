use serde::{Deserialize, Serialize};

/// Comparison operator of a filter declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WhereOperator {
    Eq,
    NotEq,
    Gt,
    Lt,
    GtEq,
    LtEq,
    Like,
    In,
    NotIn,
    IsNull,
    IsNotNull,
}

impl WhereOperator {
    /// The literal SQL comparison token.
    pub fn sql_token(&self) -> &'static str {
        match self {
            WhereOperator::Eq => "=",
            WhereOperator::NotEq => "<>",
            WhereOperator::Gt => ">",
            WhereOperator::Lt => "<",
            WhereOperator::GtEq => ">=",
            WhereOperator::LtEq => "<=",
            WhereOperator::Like => "Like",
            WhereOperator::In => "in",
            WhereOperator::NotIn => "not in",
            WhereOperator::IsNull => "is null",
            WhereOperator::IsNotNull => "is not null",
        }
    }

    /// Valueless operators gate on the field value but bind no parameter.
    pub fn is_valueless(&self) -> bool {
        matches!(self, WhereOperator::IsNull | WhereOperator::IsNotNull)
    }

    /// Comparison fragment with the parameter reference attached, e.g.
    /// `"= @HousesId"` or the bare `"is null"`.
    pub fn comparison(&self, param: &str) -> String {
        if self.is_valueless() {
            self.sql_token().to_string()
        } else {
            format!("{} {param}", self.sql_token())
        }
    }
}

/// One filter declaration on a criteria field. A field may carry several;
/// they AND-combine in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Column name override; the declared field name is used when absent.
    pub field: Option<String>,
    pub operator: WhereOperator,
    pub table: Option<String>,
    pub table_alias: Option<String>,
    /// Expression template with `/**TableName**/`, `/**FieldName**/`,
    /// `/**CompareOperation**/` and `/**Parameter**/` placeholders.
    pub expression: Option<String>,
}

impl FilterSpec {
    pub fn new(operator: WhereOperator) -> Self {
        Self {
            field: None,
            operator,
            table: None,
            table_alias: None,
            expression: None,
        }
    }

    pub fn field(mut self, field: &str) -> Self {
        self.field = Some(field.to_string());
        self
    }

    pub fn table(mut self, table: &str) -> Self {
        self.table = Some(table.to_string());
        self
    }

    pub fn table_alias(mut self, alias: &str) -> Self {
        self.table_alias = Some(alias.to_string());
        self
    }

    pub fn expression(mut self, template: &str) -> Self {
        self.expression = Some(template.to_string());
        self
    }
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self::new(WhereOperator::Eq)
    }
}
