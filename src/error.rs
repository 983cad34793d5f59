//! Error types for all of the crate's operations.
//!
//! | operation | error type |
//! |-----------|------------|
//! | [`allocate_unique_directory`] | [`AllocateDirectoryError`] |
//! | [`DirectoryPattern::new`] | [`InvalidDirectoryPatternError`] |
//! | [`generate_tree`] | [`GenerateTreeError`] |
//! | [`parse_byte_size`] | [`ByteSizeParseError`] |
//!
//!
//! [`allocate_unique_directory`]: crate::directory::allocate_unique_directory
//! [`DirectoryPattern::new`]: crate::directory::DirectoryPattern::new
//! [`generate_tree`]: crate::tree::generate_tree
//! [`parse_byte_size`]: crate::size::parse_byte_size

mod directory;
mod size;
mod tree;

pub use directory::*;
pub use size::*;
pub use tree::*;
