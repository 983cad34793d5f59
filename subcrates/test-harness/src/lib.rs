pub mod assertable;
pub mod base;
pub mod error;
pub mod logging;
pub mod pattern;
pub mod prelude;
pub mod scan;

pub use assert_matches::assert_matches;
