//! Generation of synthetic directory trees for test fixtures.
//!
//! <br>
//!
//! ##### Feature Overview
//!
//! | | <span style="font-weight:normal"><i>configured by</i></span> | <span style="font-weight:normal"><i>returns</i></span>
//! |-----------------------------|---------------------------------|:--------------------:|
//! | [`generate_tree`]               | [`TreeGenerationOptions`] | [`GeneratedTree`] <br><sup style="text-align: right">(or [`GenerateTreeError`])</sup> |
//! | [`generate_tree_with_callback`] | [`TreeGenerationOptions`] | *passes the same result to a callback* |
//! | [`GeneratedTree::remove_from_disk`] |                       | `()` <br><sup style="text-align: right">(or [`RemoveTreeError`])</sup> |
//!
//!
//! [`GenerateTreeError`]: crate::error::GenerateTreeError
//! [`RemoveTreeError`]: crate::error::RemoveTreeError


mod generate;
mod options;
mod result;


pub use generate::*;
pub use options::*;
pub use result::*;
