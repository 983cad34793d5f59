use std::path::{Path, PathBuf};

use crate::{error::RemoveTreeError, macros::use_enabled_fs_module};

use_enabled_fs_module!();


/// A directory tree produced by [`generate_tree`].
///
/// The tree is not removed when this value is dropped;
/// use [`remove_from_disk`][Self::remove_from_disk] for that.
///
///
/// [`generate_tree`]: super::generate_tree
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GeneratedTree {
    pub(super) root_directory_path: PathBuf,
    pub(super) directory_paths: Vec<PathBuf>,
    pub(super) file_paths: Vec<PathBuf>,
    pub(super) total_bytes_written: u64,
    pub(super) seed: u64,
}

impl GeneratedTree {
    /// Absolute path of the allocated root directory.
    pub fn root_directory_path(&self) -> &Path {
        &self.root_directory_path
    }

    /// Every directory of the tree in creation order, starting with the root.
    pub fn directory_paths(&self) -> &[PathBuf] {
        &self.directory_paths
    }

    /// Every file of the tree in creation order.
    pub fn file_paths(&self) -> &[PathBuf] {
        &self.file_paths
    }

    /// Sum of the sizes of all generated files, in bytes.
    pub fn total_bytes_written(&self) -> u64 {
        self.total_bytes_written
    }

    /// The seed that drove randomization and file contents.
    ///
    /// Passing it back through [`TreeGenerationOptions::seed`] (with otherwise identical options)
    /// reproduces the same tree layout, file sizes and file contents.
    ///
    ///
    /// [`TreeGenerationOptions::seed`]: super::TreeGenerationOptions::seed
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Consumes the tree, returning the root directory path,
    /// the directory paths (root first) and the file paths.
    pub fn into_parts(self) -> (PathBuf, Vec<PathBuf>, Vec<PathBuf>) {
        (
            self.root_directory_path,
            self.directory_paths,
            self.file_paths,
        )
    }

    /// Recursively removes the entire tree, including the root directory.
    pub fn remove_from_disk(self) -> Result<(), RemoveTreeError> {
        fs::remove_dir_all(&self.root_directory_path).map_err(|error| RemoveTreeError {
            path: self.root_directory_path,
            error,
        })
    }
}
