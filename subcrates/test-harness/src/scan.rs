use std::{fs, path::Path};


/// Number of directories and files found on disk, see [`count_tree_entries`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TreeEntryCounts {
    /// Directories, including the root.
    pub directories: usize,

    /// Regular files.
    pub files: usize,
}

/// Recursively counts the directories (root included) and files under `root_directory_path`.
///
/// Symbolic links are not followed.
pub fn count_tree_entries<P>(root_directory_path: P) -> std::io::Result<TreeEntryCounts>
where
    P: AsRef<Path>,
{
    let mut counts = TreeEntryCounts {
        directories: 1,
        files: 0,
    };

    let mut pending_directories = vec![root_directory_path.as_ref().to_path_buf()];

    while let Some(directory_path) = pending_directories.pop() {
        for entry in fs::read_dir(&directory_path)? {
            let entry = entry?;
            let file_type = entry.file_type()?;

            if file_type.is_dir() {
                counts.directories += 1;
                pending_directories.push(entry.path());
            } else if file_type.is_file() {
                counts.files += 1;
            }
        }
    }

    Ok(counts)
}
