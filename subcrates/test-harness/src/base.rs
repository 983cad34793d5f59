use std::path::{Path, PathBuf};

use tempfile::TempDir;


/// An empty temporary directory to allocate into during a test.
///
/// The directory and everything inside it is removed on drop
/// (or explicitly, with [`destroy`][Self::destroy]).
pub struct TemporaryBaseDirectory {
    temporary_directory: TempDir,
}

impl TemporaryBaseDirectory {
    pub fn new() -> Self {
        let temporary_directory = tempfile::Builder::new()
            .prefix("scratch-tree-test-")
            .tempdir()
            .expect("failed to create temporary base directory");

        Self {
            temporary_directory,
        }
    }

    /// Obtain a custom sub-path, by providing a relative `sub_path`.
    pub fn child_path<P>(&self, sub_path: P) -> PathBuf
    where
        P: AsRef<Path>,
    {
        self.temporary_directory.path().join(sub_path)
    }

    /// Consume `self` and remove the entire temporary directory.
    pub fn destroy(self) {
        self.temporary_directory
            .close()
            .expect("failed to remove temporary base directory");
    }
}

impl Default for TemporaryBaseDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Path> for TemporaryBaseDirectory {
    fn as_ref(&self) -> &Path {
        self.temporary_directory.path()
    }
}
