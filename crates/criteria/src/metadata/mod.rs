//! The metadata declaration surface consumed by the descriptor scanner.

pub mod criteria;
pub mod filter;
pub mod join;
pub mod select;
pub mod table;

pub use criteria::{BaseProjection, Criteria, Field};
pub use filter::{FilterSpec, WhereOperator};
pub use join::{AddOnTarget, JoinSpec, JoinType, ManyToManyJoin, SimpleJoin};
pub use select::SelectSpec;
pub use table::TableRef;
