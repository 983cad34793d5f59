use scratch_tree::error::{AllocateDirectoryError, GenerateTreeError, RemoveTreeError};
use thiserror::Error;

/// Main `Error` for use in unit and integration tests.
///
/// Implements `From` for:
/// - [`std::io::Error`],
/// - [`AllocateDirectoryError`],
/// - [`GenerateTreeError`], and
/// - [`RemoveTreeError`].
#[derive(Error, Debug)]
pub enum TestError {
    #[error("std::io::Error")]
    IoError(
        #[from]
        #[source]
        std::io::Error,
    ),

    #[error("failed to allocate directory")]
    AllocateDirectoryError(
        #[from]
        #[source]
        AllocateDirectoryError,
    ),

    #[error("failed to generate tree")]
    GenerateTreeError(
        #[from]
        #[source]
        GenerateTreeError,
    ),

    #[error("failed to remove tree")]
    RemoveTreeError(
        #[from]
        #[source]
        RemoveTreeError,
    ),
}

/// A main `Result` type for use in unit and integration tests (shorthand for the [`TestError`] error).
pub type TestResult<O = ()> = std::result::Result<O, TestError>;
