use crate::error::Error;

/// Result type alias used throughout MOLT.
///
/// This is a type alias for `std::result::Result<T, Error>`, providing a convenient
/// shorthand for functions that return MOLT errors. All MOLT operations that can
/// fail should return this type.
pub type Result<T> = std::result::Result<T, Error>;
