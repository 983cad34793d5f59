use crate::{directory::DirectoryAllocationOptions, error::GenerateTreeError};


/// Default number of files and sub-directories per directory.
pub const DEFAULT_BRANCHING_FACTOR: usize = 5;

/// Default number of directory levels, including the root.
pub const DEFAULT_TREE_DEPTH: usize = 5;

/// 1 KiB
pub const DEFAULT_MAXIMUM_FILE_SIZE: u64 = 1024;


/// The shape of a generated tree: how wide and how deep it is.
///
/// Every directory in the tree receives `branching_factor` files.
/// Every directory above the deepest level additionally receives
/// `branching_factor` sub-directories. The root directory is at depth 1,
/// meaning that a `depth` of 1 produces a single directory with files in it.
///
///
/// # Defaults
/// [`Default`] is implemented for this struct: the branching factor
/// and depth are both 5, which produces 781 directories (including the root)
/// and 3905 files.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct TreeShape {
    /// Number of files and sub-directories created in each directory.
    pub branching_factor: usize,

    /// Number of directory levels, including the root.
    pub depth: usize,
}

impl Default for TreeShape {
    fn default() -> Self {
        Self {
            branching_factor: DEFAULT_BRANCHING_FACTOR,
            depth: DEFAULT_TREE_DEPTH,
        }
    }
}

impl TreeShape {
    /// Number of directories (root included) in a non-randomized tree of this shape.
    ///
    /// Saturates at [`usize::MAX`].
    pub fn maximum_directory_count(&self) -> usize {
        let mut directories_on_level: usize = 1;
        let mut total_directories: usize = 0;

        for _ in 0..self.depth {
            total_directories = total_directories.saturating_add(directories_on_level);
            directories_on_level = directories_on_level.saturating_mul(self.branching_factor);
        }

        total_directories
    }

    /// Number of files in a non-randomized tree of this shape.
    ///
    /// Saturates at [`usize::MAX`].
    pub fn maximum_file_count(&self) -> usize {
        self.maximum_directory_count()
            .saturating_mul(self.branching_factor)
    }
}



/// Options that influence [`generate_tree`].
///
///
/// # Defaults
/// [`Default`] is implemented for this struct: the root is allocated
/// with the default [`DirectoryAllocationOptions`], the tree has the default [`TreeShape`],
/// files are exactly [`DEFAULT_MAXIMUM_FILE_SIZE`] bytes large, and nothing is randomized.
///
///
/// # Examples
/// ```no_run
/// # use scratch_tree::directory::{DirectoryAllocationOptions, DirectoryPattern};
/// # use scratch_tree::tree::TreeGenerationOptions;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let options = TreeGenerationOptions {
///     allocation: DirectoryAllocationOptions {
///         pattern: Some(DirectoryPattern::new("tempjs-*")?),
///         ..Default::default()
///     },
///     maximum_file_size: scratch_tree::size::parse_byte_size("100b")?,
///     randomize: true,
///     seed: Some(42),
///     ..Default::default()
/// };
///
/// let tree = scratch_tree::tree::generate_tree(&options)?;
/// assert!(tree.directory_paths().len() < 781);
/// # Ok(())
/// # }
/// ```
///
///
/// [`generate_tree`]: super::generate_tree
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TreeGenerationOptions {
    /// How the root directory of the tree is allocated.
    pub allocation: DirectoryAllocationOptions,

    /// Size of generated files, in bytes. Must be at least 1.
    ///
    /// If [`randomize`][Self::randomize] is `false`, every file is exactly this large.
    /// Otherwise, each file size is drawn uniformly from `0..maximum_file_size`,
    /// meaning every file is *strictly smaller* than this value.
    pub maximum_file_size: u64,

    /// Whether to randomize the branch count of each directory and the size of each file.
    ///
    /// When enabled, each directory independently draws its branch count
    /// uniformly from `0..branching_factor`, so a randomized tree always has
    /// strictly fewer directories and files than a non-randomized one.
    pub randomize: bool,

    /// Width and depth of the tree.
    pub shape: TreeShape,

    /// Seed for the random generator that drives randomization and file contents.
    ///
    /// If `None`, a random seed is chosen (and reported in [`GeneratedTree::seed`]),
    /// which makes any generated tree reproducible after the fact.
    ///
    ///
    /// [`GeneratedTree::seed`]: super::GeneratedTree::seed
    pub seed: Option<u64>,
}

impl Default for TreeGenerationOptions {
    fn default() -> Self {
        Self {
            allocation: DirectoryAllocationOptions::default(),
            maximum_file_size: DEFAULT_MAXIMUM_FILE_SIZE,
            randomize: false,
            shape: TreeShape::default(),
            seed: None,
        }
    }
}

impl TreeGenerationOptions {
    /// Ensures the options can produce a tree, without touching the filesystem.
    pub(crate) fn validate(&self) -> Result<(), GenerateTreeError> {
        if self.shape.branching_factor == 0 {
            return Err(GenerateTreeError::InvalidOptions {
                option: "shape.branching_factor",
                reason: "branching factor must be at least 1",
            });
        }

        if self.shape.depth == 0 {
            return Err(GenerateTreeError::InvalidOptions {
                option: "shape.depth",
                reason: "depth must be at least 1",
            });
        }

        if self.maximum_file_size == 0 {
            return Err(GenerateTreeError::InvalidOptions {
                option: "maximum_file_size",
                reason: "maximum file size must be at least 1 byte",
            });
        }

        Ok(())
    }
}
