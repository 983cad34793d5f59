use std::path::PathBuf;

use thiserror::Error;

use super::AllocateDirectoryError;


/// An error that can occur when generating a directory tree.
#[derive(Error, Debug)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
pub enum GenerateTreeError {
    /// One of the [`TreeGenerationOptions`] has an unusable value.
    ///
    /// This is detected before any filesystem access takes place.
    ///
    ///
    /// [`TreeGenerationOptions`]: crate::tree::TreeGenerationOptions
    #[error("invalid `options.{option}` value: {reason}")]
    InvalidOptions {
        /// Name of the offending option.
        option: &'static str,

        /// What is wrong with it.
        reason: &'static str,
    },

    /// The root directory of the tree could not be allocated.
    #[error(transparent)]
    RootAllocation(#[from] AllocateDirectoryError),

    /// A directory inside the tree could not be created.
    #[error("unable to create directory: {}", .path.display())]
    UnableToCreateDirectory {
        /// Path of the directory that could not be created.
        path: PathBuf,

        /// Underlying IO error describing why the directory could not be created.
        #[source]
        error: std::io::Error,
    },

    /// A file inside the tree could not be created.
    #[error("unable to create file: {}", .path.display())]
    UnableToCreateFile {
        /// Path of the file that could not be created.
        path: PathBuf,

        /// Underlying IO error describing why the file could not be created.
        #[source]
        error: std::io::Error,
    },

    /// A file was created, but its contents could not be written.
    #[error("unable to write file contents: {}", .path.display())]
    UnableToWriteFile {
        /// Path of the file that could not be written to.
        path: PathBuf,

        /// Underlying IO error describing why the write failed.
        #[source]
        error: std::io::Error,
    },
}

impl GenerateTreeError {
    /// Returns `true` if this error was caused by invalid options
    /// rather than by the filesystem.
    pub fn is_configuration_error(&self) -> bool {
        match self {
            Self::InvalidOptions { .. } => true,
            Self::RootAllocation(error) => error.is_configuration_error(),
            _ => false,
        }
    }
}



/// An error that can occur when removing a generated tree from disk.
#[derive(Error, Debug)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
#[error("unable to remove generated tree: {}", .path.display())]
pub struct RemoveTreeError {
    /// Root directory of the tree that could not be (fully) removed.
    pub path: PathBuf,

    /// Underlying IO error describing why the removal failed.
    #[source]
    pub error: std::io::Error,
}
