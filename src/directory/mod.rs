//! Allocation of uniquely-named directories.
//!
//! <br>
//!
//! ##### Feature Overview
//!
//! | | <span style="font-weight:normal"><i>configured by</i></span> | <span style="font-weight:normal"><i>returns</i></span>
//! |-----------------------------|---------------------------------|:--------------------:|
//! | [`allocate_unique_directory`]               | [`DirectoryAllocationOptions`] | [`PathBuf`] <br><sup style="text-align: right">(or [`AllocateDirectoryError`])</sup> |
//! | [`allocate_unique_directory_with_callback`] | [`DirectoryAllocationOptions`] | *passes the same result to a callback* |
//! | [`DirectoryPattern::new`]                   | *pattern string*               | [`DirectoryPattern`] <br><sup style="text-align: right">(or [`InvalidDirectoryPatternError`])</sup> |
//!
//!
//! [`PathBuf`]: std::path::PathBuf
//! [`AllocateDirectoryError`]: crate::error::AllocateDirectoryError
//! [`InvalidDirectoryPatternError`]: crate::error::InvalidDirectoryPatternError


mod allocate;
mod pattern;


pub use allocate::*;
pub use pattern::*;
