use std::path::PathBuf;

use thiserror::Error;


/// An error that can occur when constructing a [`DirectoryPattern`].
///
/// All of these are detected before any filesystem access takes place.
///
///
/// [`DirectoryPattern`]: crate::directory::DirectoryPattern
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
pub enum InvalidDirectoryPatternError {
    /// The pattern is an empty string.
    #[error("invalid `options.pattern` value: pattern must not be empty")]
    Empty,

    /// The pattern contains more than one `*` wildcard.
    #[error(
        "invalid `options.pattern` value: pattern must contain at most one `*` wildcard: {pattern}"
    )]
    MultipleWildcards {
        /// The rejected pattern.
        pattern: String,
    },

    /// The pattern contains a path separator, meaning the allocated directory
    /// would not be a direct child of the base directory.
    #[error("invalid `options.pattern` value: pattern must not contain path separators: {pattern}")]
    ContainsPathSeparator {
        /// The rejected pattern.
        pattern: String,
    },
}



/// An error that can occur when allocating a uniquely-named directory.
///
/// The [`MissingPattern`] variant is a configuration error and is always
/// returned before the filesystem is touched (see [`is_configuration_error`]).
/// All other variants describe filesystem failures.
///
///
/// [`MissingPattern`]: AllocateDirectoryError::MissingPattern
/// [`is_configuration_error`]: AllocateDirectoryError::is_configuration_error
#[derive(Error, Debug)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
pub enum AllocateDirectoryError {
    /// The options require a pattern (see
    /// [`DirectoryAllocationOptions::require_pattern`]), but none was provided.
    ///
    ///
    /// [`DirectoryAllocationOptions::require_pattern`]: crate::directory::DirectoryAllocationOptions::require_pattern
    #[error("invalid `options.pattern` value: please add pattern value")]
    MissingPattern,

    /// The base directory does not exist.
    #[error("base directory does not exist: {}", .path.display())]
    BaseDirectoryNotFound {
        /// Base directory path.
        path: PathBuf,
    },

    /// The base directory path exists, but is not a directory.
    #[error("base path exists, but is not a directory: {}", .path.display())]
    BaseDirectoryNotADirectory {
        /// Base directory path.
        path: PathBuf,
    },

    /// The base directory could not be accessed, or the current working directory
    /// could not be obtained to resolve a relative base directory.
    ///
    /// The inner [`std::io::Error`] will likely describe the real cause of this error.
    #[error("unable to access base directory: {}", .path.display())]
    UnableToAccessBaseDirectory {
        /// Base directory path that could not be accessed.
        path: PathBuf,

        /// Underlying IO error describing why the base directory could not be accessed.
        #[source]
        error: std::io::Error,
    },

    /// The uniquely-named directory could not be created inside the base directory,
    /// for example due to missing permissions, or because every generated name was taken.
    #[error("unable to create directory in: {}", .path.display())]
    UnableToCreateDirectory {
        /// Base directory path the new directory was to be created in.
        path: PathBuf,

        /// Underlying IO error describing why the directory could not be created.
        #[source]
        error: std::io::Error,
    },
}

impl AllocateDirectoryError {
    /// Returns `true` if this error was caused by invalid options
    /// rather than by the filesystem.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::MissingPattern)
    }
}
