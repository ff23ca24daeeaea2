//! A metadata-to-SQL query compiler.
//!
//! Criteria types declare a table binding plus per-field filter, join and
//! projection specs; one live instance is compiled into parameterized SQL
//! text, an ordered parameter bag and a split-marker string for the
//! row-materialization layer. The engine never touches a database: it is
//! a pure transformation over a static, per-type descriptor.

pub mod builder;
pub mod clause;
pub mod descriptor;
pub mod error;
pub mod metadata;
pub mod query;
pub mod select;
pub mod transform;
pub mod value;

pub use builder::QueryBuilder;
pub use error::BuildError;
pub use metadata::{
    AddOnTarget, BaseProjection, Criteria, Field, FilterSpec, JoinSpec, JoinType, ManyToManyJoin,
    SelectSpec, SimpleJoin, TableRef, WhereOperator,
};
pub use query::{Parameters, Query};
pub use transform::{Formatter, LikeFormatter};
pub use value::Value;
