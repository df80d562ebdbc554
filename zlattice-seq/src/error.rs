use thiserror::Error;

/// Rejected enumerator configuration.
///
/// All variants are raised synchronously by the constructors; a failed
/// construction leaves nothing behind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A cube enumeration needs at least one coordinate.
    #[error("dimension must be at least 1, got {0}")]
    Dimension(usize),
    /// The uniform bound is exclusive, so it must be at least 1 to
    /// admit the zero vector.
    #[error("bound must be at least 1, got {0}")]
    Bound(i64),
    /// Bound vector coordinates are inclusive ceilings and cannot be
    /// negative.
    #[error("negative bound {value} at coordinate {index}")]
    NegativeBound { index: usize, value: i64 },
}

pub type Result<T> = std::result::Result<T, Error>;
