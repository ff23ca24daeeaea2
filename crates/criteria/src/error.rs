use thiserror::Error;

/// Failures raised while compiling a criteria instance into a query.
///
/// Every variant signals a defect in the metadata declarations, not a
/// transient runtime condition; assembly either fully succeeds or fails.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("unsupported join kind: {0}")]
    UnsupportedJoinKind(String),

    #[error("duplicate select column `{column}` for table `{table}`")]
    DuplicateName { table: String, column: String },
}
