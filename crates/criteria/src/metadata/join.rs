use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinType {
    Left,
    Inner,
    Right,
    Full,
}

impl JoinType {
    pub fn as_sql(&self) -> &'static str {
        match self {
            JoinType::Left => "LEFT JOIN",
            JoinType::Inner => "INNER JOIN",
            JoinType::Right => "RIGHT JOIN",
            JoinType::Full => "FULL JOIN",
        }
    }
}

/// Which of a many-to-many join's two fragments receives the add-on
/// predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddOnTarget {
    Communication,
    Joined,
}

/// A direct join from the current table onto one joined table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleJoin {
    pub current_field: String,
    pub join_type: JoinType,
    pub joined_table: String,
    pub joined_alias: Option<String>,
    /// Defaults to `current_field` when absent.
    pub joined_field: Option<String>,
    /// Both default to the criteria's table binding when neither is set.
    pub current_table: Option<String>,
    pub current_alias: Option<String>,
    /// Raw column list for the join's projection, `Table:col1,col2;...`.
    pub select_columns: Option<String>,
    /// Registry tag of a custom column-list parser.
    pub parser_tag: Option<String>,
    /// Explicit emission order; unordered joins emit after ordered ones.
    pub order: Option<u32>,
    /// Suppresses the split marker and projection while the JOIN line and
    /// predicate still execute.
    pub no_split: bool,
    /// Name of a secondary boolean field gating the JOIN line and
    /// projection.
    pub including: Option<String>,
    /// Free-form extra predicate appended to the ON clause.
    pub add_on: Option<String>,
}

impl SimpleJoin {
    pub fn new(current_field: &str, join_type: JoinType, joined_table: &str) -> Self {
        Self {
            current_field: current_field.to_string(),
            join_type,
            joined_table: joined_table.to_string(),
            joined_alias: None,
            joined_field: None,
            current_table: None,
            current_alias: None,
            select_columns: None,
            parser_tag: None,
            order: None,
            no_split: false,
            including: None,
            add_on: None,
        }
    }

    pub fn joined_alias(mut self, alias: &str) -> Self {
        self.joined_alias = Some(alias.to_string());
        self
    }

    pub fn joined_field(mut self, field: &str) -> Self {
        self.joined_field = Some(field.to_string());
        self
    }

    pub fn current_table(mut self, table: &str) -> Self {
        self.current_table = Some(table.to_string());
        self
    }

    pub fn current_alias(mut self, alias: &str) -> Self {
        self.current_alias = Some(alias.to_string());
        self
    }

    pub fn select_columns(mut self, raw: &str) -> Self {
        self.select_columns = Some(raw.to_string());
        self
    }

    pub fn parser(mut self, tag: &str) -> Self {
        self.parser_tag = Some(tag.to_string());
        self
    }

    pub fn order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }

    pub fn no_split(mut self) -> Self {
        self.no_split = true;
        self
    }

    pub fn including(mut self, field: &str) -> Self {
        self.including = Some(field.to_string());
        self
    }

    pub fn add_on(mut self, clause: &str) -> Self {
        self.add_on = Some(clause.to_string());
        self
    }
}

/// A join routed through a communication (link) table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManyToManyJoin {
    pub base: SimpleJoin,
    pub communication_table: String,
    pub communication_alias: Option<String>,
    /// Column of the communication table matched against the current
    /// table's `current_field`.
    pub comm_current_field: String,
    /// Column of the communication table matched against the joined
    /// table's `joined_field`.
    pub comm_joined_field: String,
    pub add_on_target: AddOnTarget,
}

impl ManyToManyJoin {
    pub fn new(
        current_field: &str,
        join_type: JoinType,
        joined_table: &str,
        communication_table: &str,
        comm_current_field: &str,
        comm_joined_field: &str,
    ) -> Self {
        Self {
            base: SimpleJoin::new(current_field, join_type, joined_table),
            communication_table: communication_table.to_string(),
            communication_alias: None,
            comm_current_field: comm_current_field.to_string(),
            comm_joined_field: comm_joined_field.to_string(),
            add_on_target: AddOnTarget::Joined,
        }
    }

    pub fn joined_alias(mut self, alias: &str) -> Self {
        self.base = self.base.joined_alias(alias);
        self
    }

    pub fn joined_field(mut self, field: &str) -> Self {
        self.base = self.base.joined_field(field);
        self
    }

    pub fn current_table(mut self, table: &str) -> Self {
        self.base = self.base.current_table(table);
        self
    }

    pub fn current_alias(mut self, alias: &str) -> Self {
        self.base = self.base.current_alias(alias);
        self
    }

    pub fn communication_alias(mut self, alias: &str) -> Self {
        self.communication_alias = Some(alias.to_string());
        self
    }

    pub fn select_columns(mut self, raw: &str) -> Self {
        self.base = self.base.select_columns(raw);
        self
    }

    pub fn order(mut self, order: u32) -> Self {
        self.base = self.base.order(order);
        self
    }

    pub fn no_split(mut self) -> Self {
        self.base = self.base.no_split();
        self
    }

    pub fn including(mut self, field: &str) -> Self {
        self.base = self.base.including(field);
        self
    }

    pub fn add_on(mut self, clause: &str) -> Self {
        self.base = self.base.add_on(clause);
        self
    }

    pub fn add_on_target(mut self, target: AddOnTarget) -> Self {
        self.add_on_target = target;
        self
    }
}

/// A join declaration, dispatched to its builder by `kind()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinSpec {
    Simple(SimpleJoin),
    ManyToMany(ManyToManyJoin),
}

impl JoinSpec {
    pub fn kind(&self) -> &'static str {
        match self {
            JoinSpec::Simple(_) => "simple",
            JoinSpec::ManyToMany(_) => "many-to-many",
        }
    }

    /// The common join fields shared by every variant.
    pub fn base(&self) -> &SimpleJoin {
        match self {
            JoinSpec::Simple(spec) => spec,
            JoinSpec::ManyToMany(spec) => &spec.base,
        }
    }

    pub(crate) fn base_mut(&mut self) -> &mut SimpleJoin {
        match self {
            JoinSpec::Simple(spec) => spec,
            JoinSpec::ManyToMany(spec) => &mut spec.base,
        }
    }

    pub fn join_type(&self) -> JoinType {
        self.base().join_type
    }

    pub fn order(&self) -> Option<u32> {
        self.base().order
    }

    pub fn no_split(&self) -> bool {
        self.base().no_split
    }

    pub fn including(&self) -> Option<&str> {
        self.base().including.as_deref()
    }

    pub fn select_columns(&self) -> Option<&str> {
        self.base().select_columns.as_deref()
    }

    pub fn parser_tag(&self) -> Option<&str> {
        self.base().parser_tag.as_deref()
    }
}

impl From<SimpleJoin> for JoinSpec {
    fn from(spec: SimpleJoin) -> Self {
        JoinSpec::Simple(spec)
    }
}

impl From<ManyToManyJoin> for JoinSpec {
    fn from(spec: ManyToManyJoin) -> Self {
        JoinSpec::ManyToMany(spec)
    }
}
