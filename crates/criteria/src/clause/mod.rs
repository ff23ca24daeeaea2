//! WHERE and JOIN fragment builders.

pub mod filter;
pub mod join;

pub use filter::{FilterClauseBuilder, WhereClause};
pub use join::{
    JoinClause, JoinClauseBuilder, JoinClauseFactory, ManyToManyJoinBuilder, SimpleJoinBuilder,
};
