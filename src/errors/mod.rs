pub mod types;

pub use types::{AppError, RepositoryError};

/// Result alias for repository layer operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;
