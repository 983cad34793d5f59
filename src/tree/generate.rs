use std::{
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use rand::{distributions::Standard, Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, trace};

use super::{GeneratedTree, TreeGenerationOptions};
use crate::{
    directory::allocate_unique_directory,
    error::GenerateTreeError,
    macros::use_enabled_fs_module,
    DEFAULT_WRITE_BUFFER_SIZE,
};

use_enabled_fs_module!();


/// Recursive state of a single [`generate_tree`] invocation.
///
/// Owns the random generator and the path accumulators;
/// nothing in here outlives the call.
struct TreeBuilder<'o> {
    options: &'o TreeGenerationOptions,

    random_generator: ChaCha20Rng,

    /// Filler bytes, written (repeatedly, if needed) into every file.
    file_content: Vec<u8>,

    directory_paths: Vec<PathBuf>,
    file_paths: Vec<PathBuf>,
    total_bytes_written: u64,
}

impl<'o> TreeBuilder<'o> {
    fn new(options: &'o TreeGenerationOptions, seed: u64) -> Self {
        let mut random_generator = ChaCha20Rng::seed_from_u64(seed);

        let file_content_size = options
            .maximum_file_size
            .min(DEFAULT_WRITE_BUFFER_SIZE as u64) as usize;

        let mut file_content: Vec<u8> = Vec::with_capacity(file_content_size);
        file_content.extend(
            (&mut random_generator)
                .sample_iter::<u8, _>(Standard)
                .take(file_content_size),
        );

        Self {
            options,
            random_generator,
            file_content,
            directory_paths: Vec::with_capacity(options.shape.maximum_directory_count().min(4096)),
            file_paths: Vec::with_capacity(options.shape.maximum_file_count().min(4096)),
            total_bytes_written: 0,
        }
    }

    /// Number of files (and sub-directories, if any) to create in the next directory.
    fn next_branch_count(&mut self) -> usize {
        let branching_factor = self.options.shape.branching_factor;

        if self.options.randomize {
            self.random_generator.gen_range(0..branching_factor)
        } else {
            branching_factor
        }
    }

    fn next_file_size(&mut self) -> u64 {
        let maximum_file_size = self.options.maximum_file_size;

        if self.options.randomize {
            self.random_generator.gen_range(0..maximum_file_size)
        } else {
            maximum_file_size
        }
    }

    /// Fills the directory at `directory_path` (which must already exist),
    /// then recurses into each of its newly-created sub-directories.
    ///
    /// `depth` is the depth of `directory_path` itself, the root being at depth 1.
    fn populate_directory(
        &mut self,
        directory_path: &Path,
        depth: usize,
    ) -> Result<(), GenerateTreeError> {
        let branch_count = self.next_branch_count();

        for file_index in 1..=branch_count {
            let file_path = directory_path.join(format!("file-{file_index}.bin"));
            let file_size = self.next_file_size();

            self.create_file(&file_path, file_size)?;
            self.file_paths.push(file_path);
        }

        if depth >= self.options.shape.depth {
            return Ok(());
        }

        for directory_index in 1..=branch_count {
            let subdirectory_path = directory_path.join(format!("directory-{directory_index}"));

            fs::create_dir(&subdirectory_path).map_err(|error| {
                GenerateTreeError::UnableToCreateDirectory {
                    path: subdirectory_path.clone(),
                    error,
                }
            })?;

            trace!(path = %subdirectory_path.display(), depth = depth + 1, "created directory");

            self.directory_paths.push(subdirectory_path.clone());
            self.populate_directory(&subdirectory_path, depth + 1)?;
        }

        Ok(())
    }

    fn create_file(&mut self, file_path: &Path, file_size: u64) -> Result<(), GenerateTreeError> {
        let file = fs::OpenOptions::new()
            .create_new(true)
            .write(true)
            .open(file_path)
            .map_err(|error| GenerateTreeError::UnableToCreateFile {
                path: file_path.to_path_buf(),
                error,
            })?;

        let mut buffered_file_writer = BufWriter::with_capacity(DEFAULT_WRITE_BUFFER_SIZE, file);

        let mut remaining_bytes = file_size;
        while remaining_bytes > 0 {
            let chunk_size = remaining_bytes.min(self.file_content.len() as u64) as usize;

            buffered_file_writer
                .write_all(&self.file_content[..chunk_size])
                .map_err(|error| GenerateTreeError::UnableToWriteFile {
                    path: file_path.to_path_buf(),
                    error,
                })?;

            remaining_bytes -= chunk_size as u64;
        }

        buffered_file_writer
            .flush()
            .map_err(|error| GenerateTreeError::UnableToWriteFile {
                path: file_path.to_path_buf(),
                error,
            })?;

        trace!(path = %file_path.display(), file_size, "created file");

        self.total_bytes_written += file_size;

        Ok(())
    }
}


/// Allocates a new, uniquely-named root directory and generates
/// a synthetic directory tree inside it.
///
/// Every directory in the tree (the root included) receives `n` files named
/// `file-1.bin`, `file-2.bin`, ..., and, unless it is on the deepest level, `n`
/// sub-directories named `directory-1`, `directory-2`, ..., each of which is filled
/// the same way. `n` is the [branching factor], or, if [`randomize`] is enabled,
/// a value drawn independently for each directory from `0..branching_factor`.
///
/// With the default options, the tree contains 781 directories and 3905 files,
/// each exactly [`maximum_file_size`] bytes large. See [`TreeGenerationOptions`]
/// for details on randomized file sizes.
///
/// The returned [`GeneratedTree`] lists every created directory (root first)
/// and every created file, in creation order.
///
///
/// # Errors
/// - If the options are unusable (e.g. a zero branching factor), [`InvalidOptions`]
///   is returned before the filesystem is touched.
/// - If the root directory cannot be allocated, [`RootAllocation`] is returned
///   (this includes the case of a missing, but required, pattern).
/// - If any directory or file inside the tree cannot be created or written,
///   [`UnableToCreateDirectory`], [`UnableToCreateFile`] or [`UnableToWriteFile`]
///   is returned.
///
/// **Partially generated trees are not removed on error.**
///
///
/// [branching factor]: super::TreeShape::branching_factor
/// [`randomize`]: TreeGenerationOptions::randomize
/// [`maximum_file_size`]: TreeGenerationOptions::maximum_file_size
/// [`InvalidOptions`]: GenerateTreeError::InvalidOptions
/// [`RootAllocation`]: GenerateTreeError::RootAllocation
/// [`UnableToCreateDirectory`]: GenerateTreeError::UnableToCreateDirectory
/// [`UnableToCreateFile`]: GenerateTreeError::UnableToCreateFile
/// [`UnableToWriteFile`]: GenerateTreeError::UnableToWriteFile
pub fn generate_tree(options: &TreeGenerationOptions) -> Result<GeneratedTree, GenerateTreeError> {
    options.validate()?;

    let seed = options.seed.unwrap_or_else(rand::random);

    let root_directory_path = allocate_unique_directory(&options.allocation)?;


    let mut builder = TreeBuilder::new(options, seed);
    builder.directory_paths.push(root_directory_path.clone());
    builder.populate_directory(&root_directory_path, 1)?;


    debug!(
        root = %root_directory_path.display(),
        seed,
        directories = builder.directory_paths.len(),
        files = builder.file_paths.len(),
        total_size = %humansize::format_size(builder.total_bytes_written, humansize::BINARY),
        "generated directory tree"
    );

    Ok(GeneratedTree {
        root_directory_path,
        directory_paths: builder.directory_paths,
        file_paths: builder.file_paths,
        total_bytes_written: builder.total_bytes_written,
        seed,
    })
}


/// Callback-style variant of [`generate_tree`].
///
/// Performs the same generation and passes its outcome to `callback`,
/// which is called exactly once, before this function returns.
pub fn generate_tree_with_callback<F>(options: &TreeGenerationOptions, callback: F)
where
    F: FnOnce(Result<GeneratedTree, GenerateTreeError>),
{
    callback(generate_tree(options));
}



#[cfg(test)]
mod tests {
    use std::{collections::HashSet, path::PathBuf};

    use super::*;
    use crate::{directory::DirectoryAllocationOptions, tree::TreeShape};

    fn options_with_unreachable_base_directory() -> TreeGenerationOptions {
        TreeGenerationOptions {
            allocation: DirectoryAllocationOptions {
                base_directory: Some(PathBuf::from("/this/path/should/really/not/exist")),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn invalid_options_are_reported_before_allocation() {
        let options = TreeGenerationOptions {
            shape: TreeShape {
                branching_factor: 0,
                depth: 5,
            },
            ..options_with_unreachable_base_directory()
        };

        let error = generate_tree(&options).unwrap_err();

        assert!(matches!(error, GenerateTreeError::InvalidOptions { .. }));
    }

    #[test]
    fn root_allocation_errors_are_propagated() {
        let error = generate_tree(&options_with_unreachable_base_directory()).unwrap_err();

        assert!(matches!(error, GenerateTreeError::RootAllocation(_)));
        assert!(!error.is_configuration_error());
    }

    #[test]
    fn randomized_branch_counts_stay_below_the_branching_factor() {
        let options = TreeGenerationOptions {
            randomize: true,
            maximum_file_size: 10,
            ..Default::default()
        };

        let mut builder = TreeBuilder::new(&options, 7);

        let mut branch_counts = HashSet::new();
        let mut file_sizes = HashSet::new();

        for _ in 0..1000 {
            let branch_count = builder.next_branch_count();
            assert!(branch_count < options.shape.branching_factor);
            branch_counts.insert(branch_count);

            let file_size = builder.next_file_size();
            assert!(file_size < options.maximum_file_size);
            file_sizes.insert(file_size);
        }

        assert_eq!(
            branch_counts,
            (0..options.shape.branching_factor).collect::<HashSet<_>>()
        );
        assert!(file_sizes.len() > 1);
    }

    #[test]
    fn fixed_branch_counts_and_sizes_are_used_without_randomization() {
        let options = TreeGenerationOptions {
            maximum_file_size: 10,
            ..Default::default()
        };

        let mut builder = TreeBuilder::new(&options, 7);

        assert_eq!(builder.next_branch_count(), 5);
        assert_eq!(builder.next_file_size(), 10);
        assert_eq!(builder.file_content.len(), 10);
    }

    #[test]
    fn file_content_buffer_is_capped() {
        let options = TreeGenerationOptions {
            maximum_file_size: 1024 * 1024 * 1024,
            ..Default::default()
        };

        let builder = TreeBuilder::new(&options, 7);

        assert_eq!(builder.file_content.len(), DEFAULT_WRITE_BUFFER_SIZE);
    }

    fn small_tree_options() -> TreeGenerationOptions {
        TreeGenerationOptions {
            shape: TreeShape {
                branching_factor: 2,
                depth: 3,
            },
            maximum_file_size: 10,
            ..Default::default()
        }
    }

    #[test]
    fn mid_tree_directory_failure_is_reported_and_leaves_partial_tree() {
        let root_directory = tempfile::tempdir().unwrap();
        let root_directory_path = root_directory.path();

        // A file occupying the second sub-directory's name.
        let blocked_directory_path = root_directory_path.join("directory-2");
        std::fs::write(&blocked_directory_path, b"blocked").unwrap();

        let options = small_tree_options();
        let mut builder = TreeBuilder::new(&options, 7);

        let error = builder
            .populate_directory(root_directory_path, 1)
            .unwrap_err();

        assert!(matches!(
            &error,
            GenerateTreeError::UnableToCreateDirectory { path, .. } if path == &blocked_directory_path
        ));
        assert!(!error.is_configuration_error());

        // The first sub-tree was completed before the failure and is left in place.
        assert!(root_directory_path.join("file-1.bin").is_file());
        assert!(root_directory_path.join("file-2.bin").is_file());
        assert!(root_directory_path
            .join("directory-1")
            .join("directory-2")
            .join("file-2.bin")
            .is_file());
        assert_eq!(builder.file_paths.len(), 2 + 2 + 2 * 2);

        for file_path in &builder.file_paths {
            assert!(file_path.is_file());
        }
    }

    #[test]
    fn mid_tree_file_failure_is_reported_and_leaves_partial_tree() {
        let root_directory = tempfile::tempdir().unwrap();
        let root_directory_path = root_directory.path();

        let blocked_file_path = root_directory_path.join("file-2.bin");
        std::fs::create_dir(&blocked_file_path).unwrap();

        let options = small_tree_options();
        let mut builder = TreeBuilder::new(&options, 7);

        let error = builder
            .populate_directory(root_directory_path, 1)
            .unwrap_err();

        assert!(matches!(
            &error,
            GenerateTreeError::UnableToCreateFile { path, .. } if path == &blocked_file_path
        ));

        assert_eq!(builder.file_paths, vec![root_directory_path.join("file-1.bin")]);
        assert_eq!(
            std::fs::metadata(root_directory_path.join("file-1.bin"))
                .unwrap()
                .len(),
            10
        );
        assert!(!root_directory_path.join("directory-1").exists());
    }
}
