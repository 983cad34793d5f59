pub use crate::assert_matches;
pub use crate::assertable::{AsPath, AssertablePath};
pub use crate::base::TemporaryBaseDirectory;
pub use crate::error::TestResult;
pub use crate::logging::initialize_test_logging;
pub use crate::pattern::directory_name_regex;
pub use crate::scan::{count_tree_entries, TreeEntryCounts};
