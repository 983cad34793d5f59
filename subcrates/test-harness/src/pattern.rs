use regex::Regex;
use scratch_tree::directory::{DirectoryPattern, UNIQUE_TOKEN_LENGTH};

/// Builds a regular expression that matches exactly the directory names
/// a [`DirectoryPattern`] can render to.
///
/// The wildcard (or, for patterns without one, the end of the pattern)
/// is replaced by a token of [`UNIQUE_TOKEN_LENGTH`] alphanumeric characters.
pub fn directory_name_regex(pattern: &DirectoryPattern) -> Regex {
    let expression = format!(
        "^{}[A-Za-z0-9]{{{}}}{}$",
        regex::escape(pattern.prefix()),
        UNIQUE_TOKEN_LENGTH,
        regex::escape(pattern.suffix())
    );

    Regex::new(&expression).expect("failed to compile directory name regex")
}
