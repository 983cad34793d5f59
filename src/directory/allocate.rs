use std::path::{Path, PathBuf};

use tracing::debug;

use super::DirectoryPattern;
use crate::error::AllocateDirectoryError;


/// Length of the random alphanumeric token inserted into every allocated directory name.
///
/// 16 alphanumeric characters carry roughly 95 bits of entropy.
pub const UNIQUE_TOKEN_LENGTH: usize = 16;

/// Name prefix used when no [`DirectoryPattern`] is provided.
pub const DEFAULT_DIRECTORY_NAME_PREFIX: &str = "tmp-";


/// Options that influence [`allocate_unique_directory`].
///
///
/// # Defaults
/// The default options allocate a `tmp-<token>` directory
/// inside [`std::env::temp_dir`].
///
///
/// # Examples
/// ```no_run
/// # use scratch_tree::directory::{DirectoryAllocationOptions, DirectoryPattern};
/// # use scratch_tree::error::AllocateDirectoryError;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let directory_path = scratch_tree::directory::allocate_unique_directory(
///     &DirectoryAllocationOptions {
///         pattern: Some(DirectoryPattern::new("test-*-folder")?),
///         ..Default::default()
///     },
/// )?;
///
/// assert!(directory_path.is_dir());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct DirectoryAllocationOptions {
    /// Directory to allocate the new directory in.
    ///
    /// If `None`, the system's temporary directory ([`std::env::temp_dir`]) is used.
    /// Relative paths are resolved against the current working directory.
    pub base_directory: Option<PathBuf>,

    /// Name template for the new directory.
    ///
    /// If `None`, the directory is named `tmp-<token>`.
    pub pattern: Option<DirectoryPattern>,

    /// If `true`, a missing [`pattern`][Self::pattern] is an error
    /// ([`AllocateDirectoryError::MissingPattern`]) instead of
    /// falling back to the default name.
    pub require_pattern: bool,
}


/// Resolves the base directory and ensures it is an existing directory.
///
/// The returned path is always absolute.
fn resolve_base_directory(
    base_directory: Option<&Path>,
) -> Result<PathBuf, AllocateDirectoryError> {
    let base_directory_path = match base_directory {
        Some(path) => path.to_path_buf(),
        None => std::env::temp_dir(),
    };

    let base_directory_path = if base_directory_path.is_absolute() {
        base_directory_path
    } else {
        let current_directory = std::env::current_dir().map_err(|error| {
            AllocateDirectoryError::UnableToAccessBaseDirectory {
                path: base_directory_path.clone(),
                error,
            }
        })?;

        current_directory.join(base_directory_path)
    };

    #[cfg(feature = "dunce")]
    let base_directory_path = dunce::simplified(&base_directory_path).to_path_buf();


    // We use `try_exists` instead of `exists` to catch permission
    // and other IO errors as distinct from the `BaseDirectoryNotFound` error.
    match base_directory_path.try_exists() {
        Ok(true) => {}
        Ok(false) => {
            return Err(AllocateDirectoryError::BaseDirectoryNotFound {
                path: base_directory_path,
            });
        }
        Err(error) => {
            return Err(AllocateDirectoryError::UnableToAccessBaseDirectory {
                path: base_directory_path,
                error,
            });
        }
    }

    if !base_directory_path.is_dir() {
        return Err(AllocateDirectoryError::BaseDirectoryNotADirectory {
            path: base_directory_path,
        });
    }

    Ok(base_directory_path)
}


/// Creates a new, empty, uniquely-named directory and returns its absolute path.
///
/// The directory is created directly inside the base directory
/// (see [`DirectoryAllocationOptions::base_directory`]) and is named
/// after the provided [`DirectoryPattern`], with its wildcard replaced by a freshly
/// generated alphanumeric token, [`UNIQUE_TOKEN_LENGTH`] characters long. Without a pattern,
/// the directory is named `tmp-<token>`.
///
/// The directory is never cleaned up automatically, that is up to the caller.
///
///
/// # Errors
/// - If [`require_pattern`] is set but no pattern was given, [`MissingPattern`] is
///   returned before the filesystem is touched.
/// - If the base directory does not exist or is not a directory,
///   [`BaseDirectoryNotFound`] or [`BaseDirectoryNotADirectory`] is returned.
/// - If the directory cannot be created (e.g. due to missing permissions),
///   [`UnableToCreateDirectory`] is returned.
///
/// On error, nothing has been created.
///
///
/// <br>
///
/// <details>
/// <summary><h4>Implementation details</h4></summary>
///
/// *This section describes internal implementations details.
/// They should not be relied on, because they are informative
/// and may change in the future.*
///
/// <br>
///
/// Name generation and creation are delegated to [`tempfile::Builder::tempdir_in`],
/// which only ever creates new directories and draws a new name when one is already taken.
/// The resulting [`TempDir`][tempfile::TempDir] is then kept, which disables its
/// automatic removal.
///
/// </details>
///
///
/// [`require_pattern`]: DirectoryAllocationOptions::require_pattern
/// [`MissingPattern`]: AllocateDirectoryError::MissingPattern
/// [`BaseDirectoryNotFound`]: AllocateDirectoryError::BaseDirectoryNotFound
/// [`BaseDirectoryNotADirectory`]: AllocateDirectoryError::BaseDirectoryNotADirectory
/// [`UnableToCreateDirectory`]: AllocateDirectoryError::UnableToCreateDirectory
pub fn allocate_unique_directory(
    options: &DirectoryAllocationOptions,
) -> Result<PathBuf, AllocateDirectoryError> {
    if options.require_pattern && options.pattern.is_none() {
        return Err(AllocateDirectoryError::MissingPattern);
    }

    let base_directory_path = resolve_base_directory(options.base_directory.as_deref())?;

    let (name_prefix, name_suffix) = match &options.pattern {
        Some(pattern) => (pattern.prefix(), pattern.suffix()),
        None => (DEFAULT_DIRECTORY_NAME_PREFIX, ""),
    };


    let temporary_directory = tempfile::Builder::new()
        .prefix(name_prefix)
        .suffix(name_suffix)
        .rand_bytes(UNIQUE_TOKEN_LENGTH)
        .tempdir_in(&base_directory_path)
        .map_err(|error| AllocateDirectoryError::UnableToCreateDirectory {
            path: base_directory_path.clone(),
            error,
        })?;

    let directory_path = temporary_directory.keep();

    debug!(path = %directory_path.display(), "allocated unique directory");

    Ok(directory_path)
}


/// Callback-style variant of [`allocate_unique_directory`].
///
/// Performs the same allocation and passes its outcome to `callback`,
/// which is called exactly once, before this function returns.
pub fn allocate_unique_directory_with_callback<F>(options: &DirectoryAllocationOptions, callback: F)
where
    F: FnOnce(Result<PathBuf, AllocateDirectoryError>),
{
    callback(allocate_unique_directory(options));
}
