//! Value transforms applied to a field value before it is bound.

use crate::value::Value;
use std::fmt::Debug;

/// Rewrites a bound value before it enters the parameter bag.
///
/// Implementations are registered under a tag (see
/// [`crate::descriptor::registry`]) and referenced from field
/// declarations; a declared transform always overrides the
/// operator-driven default.
pub trait Formatter: Debug + Send + Sync {
    fn format(&self, value: Value) -> Value;
}

/// Substring-search wrapping: the value becomes `%value%`.
///
/// This is also the built-in default transform for `Like` filters.
#[derive(Debug)]
pub struct LikeFormatter;

impl Formatter for LikeFormatter {
    fn format(&self, value: Value) -> Value {
        Value::String(format!("%{value}%"))
    }
}
