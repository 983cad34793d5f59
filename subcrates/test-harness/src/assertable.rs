use std::{
    fs,
    io::ErrorKind,
    path::Path,
};

use regex::Regex;


pub trait AsPath {
    fn as_path(&self) -> &Path;
}

/// Blanket implements `AsPath` for all `AsRef<Path>`s.
impl<P> AsPath for P
where
    P: AsRef<Path>,
{
    fn as_path(&self) -> &Path {
        self.as_ref()
    }
}


pub trait AssertablePath {
    /// Asserts the path does not exist on the filesystem.
    fn assert_not_exists(&self);

    /// Asserts the path points to a directory.
    fn assert_is_directory(&self);

    /// Asserts the path points to a directory that does not contain any entries.
    fn assert_is_directory_and_empty(&self);

    /// Asserts the path points to a file.
    fn assert_is_file(&self);

    /// Asserts the path points to a file that is exactly `expected_size` bytes large.
    fn assert_is_file_with_size(&self, expected_size: u64);

    /// Asserts the path points to a file that is strictly smaller than `size_limit` bytes.
    fn assert_is_file_smaller_than(&self, size_limit: u64);

    /// Asserts the path is a direct child of `parent_path`
    /// and that its string representation starts with it.
    fn assert_is_child_of<P>(&self, parent_path: P)
    where
        P: AsRef<Path>;

    /// Asserts the final component of the path matches `regex`.
    fn assert_file_name_matches(&self, regex: &Regex);
}


/// Blanket implementation of [`AssertablePath`] for all items
/// that implement [`AsPath`].
impl<A> AssertablePath for A
where
    A: AsPath,
{
    #[track_caller]
    fn assert_not_exists(&self) {
        match fs::symlink_metadata(self.as_path()) {
            Ok(_) => panic!("path exists: {}", self.as_path().display()),
            Err(error) => match error.kind() {
                ErrorKind::NotFound => {}
                _ => panic!(
                    "failed to determine whether the path exists or not (IO error): {} (for path {})",
                    error,
                    self.as_path().display()
                ),
            },
        };
    }

    #[track_caller]
    fn assert_is_directory(&self) {
        let metadata = fs::metadata(self.as_path()).unwrap_or_else(|error| {
            panic!(
                "failed to read metadata (IO error): {} (for path {})",
                error,
                self.as_path().display()
            )
        });

        if !metadata.is_dir() {
            panic!("path is not a directory: {}", self.as_path().display());
        }
    }

    #[track_caller]
    fn assert_is_directory_and_empty(&self) {
        self.assert_is_directory();

        let mut entries = fs::read_dir(self.as_path()).unwrap_or_else(|error| {
            panic!(
                "failed to read directory (IO error): {} (for path {})",
                error,
                self.as_path().display()
            )
        });

        if entries.next().is_some() {
            panic!("directory is not empty: {}", self.as_path().display());
        }
    }

    #[track_caller]
    fn assert_is_file(&self) {
        let metadata = fs::metadata(self.as_path()).unwrap_or_else(|error| {
            panic!(
                "failed to read metadata (IO error): {} (for path {})",
                error,
                self.as_path().display()
            )
        });

        if !metadata.is_file() {
            panic!("path is not a file: {}", self.as_path().display());
        }
    }

    #[track_caller]
    fn assert_is_file_with_size(&self, expected_size: u64) {
        self.assert_is_file();

        let actual_size = fs::metadata(self.as_path())
            .expect("failed to read file metadata")
            .len();

        assert_eq!(
            actual_size,
            expected_size,
            "file has unexpected size: {}",
            self.as_path().display()
        );
    }

    #[track_caller]
    fn assert_is_file_smaller_than(&self, size_limit: u64) {
        self.assert_is_file();

        let actual_size = fs::metadata(self.as_path())
            .expect("failed to read file metadata")
            .len();

        assert!(
            actual_size < size_limit,
            "file is {} bytes large, expected less than {}: {}",
            actual_size,
            size_limit,
            self.as_path().display()
        );
    }

    #[track_caller]
    fn assert_is_child_of<P>(&self, parent_path: P)
    where
        P: AsRef<Path>,
    {
        let path = self.as_path();
        let parent_path = parent_path.as_ref();

        assert_eq!(
            path.parent(),
            Some(parent_path),
            "path {} is not a direct child of {}",
            path.display(),
            parent_path.display()
        );

        assert!(
            path.to_string_lossy()
                .starts_with(parent_path.to_string_lossy().as_ref()),
            "path {} does not start with {}",
            path.display(),
            parent_path.display()
        );
    }

    #[track_caller]
    fn assert_file_name_matches(&self, regex: &Regex) {
        let file_name = self
            .as_path()
            .file_name()
            .unwrap_or_else(|| panic!("path has no file name: {}", self.as_path().display()))
            .to_string_lossy();

        assert!(
            regex.is_match(&file_name),
            "file name {} does not match {}",
            file_name,
            regex.as_str()
        );
    }
}
