//! Uniquely-named temporary directories and synthetic directory trees for test fixtures,
//! built on top of [`std::fs`].
//!
//!
//! # Main features
//! - allocate a new, empty, uniquely-named directory with:
//!     - a configurable base directory (the system temporary directory by default), and
//!     - an optional name pattern such as `test-*-folder`, and
//! - generate a deep directory tree filled with files, with:
//!     - configurable width, depth and file size, and
//!     - optional (seedable) randomization of branch counts and file sizes.
//!
//! <br>
//!
//! Visit the [`directory`] and [`tree`] modules
//! for more information and a list of available functions.
//!
//!
//! <br>
//!
//! # Feature flags
//! The following feature flags enable optional functionality:
//! - `dunce` (*enabled by default*): enables the optional [`dunce`](../dunce/index.html) support:
//!   This automatically strips Windows' UNC paths if they can be represented
//!   using the usual type of path (e.g. `\\?\C:\foo -> C:\foo`) from the base directory
//!   before allocating inside it. This crate only has an effect when compiling for Windows targets.
//! - `fs-err` (*disabled by default*): enables the optional [`fs-err`](../fs_err/index.html) support,
//!   which enables more helpful error messages for underlying IO errors.
//! - `miette` (*disabled by default*): derives [`miette::Diagnostic`](../miette/trait.Diagnostic.html)
//!   on all [error types](crate::error).
//!
//!
//! <br>
//!
//! # Logging
//! Allocations and generated trees are reported through [`tracing`](../tracing/index.html)
//! (`debug` level, individual entries at `trace` level).
//! No subscriber is installed by this crate.
//!
//!
//! <br>
//!
//! # Examples
//!
//! Allocating a directory named after a pattern:
//! ```no_run
//! # use scratch_tree::directory::{DirectoryAllocationOptions, DirectoryPattern};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let directory_path = scratch_tree::directory::allocate_unique_directory(
//!     &DirectoryAllocationOptions {
//!         pattern: Some(DirectoryPattern::new("test-*-folder")?),
//!         ..Default::default()
//!     },
//! )?;
//!
//! println!("Allocated {}.", directory_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! Generating a tree of 100-byte files and removing it afterwards:
//! ```no_run
//! # use scratch_tree::directory::{DirectoryAllocationOptions, DirectoryPattern};
//! # use scratch_tree::tree::TreeGenerationOptions;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tree = scratch_tree::tree::generate_tree(&TreeGenerationOptions {
//!     allocation: DirectoryAllocationOptions {
//!         pattern: Some(DirectoryPattern::new("tempjs-*")?),
//!         ..Default::default()
//!     },
//!     maximum_file_size: scratch_tree::size::parse_byte_size("100b")?,
//!     ..Default::default()
//! })?;
//!
//! assert_eq!(tree.directory_paths().len(), 781);
//! assert_eq!(tree.file_paths().len(), 3905);
//!
//! tree.remove_from_disk()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]


/// This brings in the README's doctests (and is present only when testing).
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;


/// 64 KiB
const DEFAULT_WRITE_BUFFER_SIZE: usize = 1024 * 64;



pub mod directory;
pub mod error;
mod macros;
pub mod size;
pub mod tree;
