use thiserror::Error;

/// Canonical result for the query operators.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A dictionary materialization saw the same key twice. The message
    /// carries the `Debug` rendering of the colliding key; the partially
    /// built map is discarded.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    // The operators themselves never construct this, but higher layers may
    // map their own failures into it for convenience.
    #[error("internal invariant failed: {0}")]
    Invariant(String),
}
