/// Domain-level errors shared across crates.
///
/// The error taxonomy of this service is deliberately flat: a lookup either
/// misses (`NotFound`, carrying the user-facing message for that resource) or
/// the database call fails, which the API layer surfaces directly.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A lookup by key matched no row.
    #[error("{message}")]
    NotFound { message: &'static str },
}
