use std::{fmt, str::FromStr};

use crate::error::InvalidDirectoryPatternError;


/// The wildcard character that is replaced by a unique token
/// when a [`DirectoryPattern`] is rendered.
pub const PATTERN_WILDCARD: char = '*';


/// A template for the name of an allocated directory.
///
/// A pattern contains at most one [`*`][PATTERN_WILDCARD] wildcard,
/// which is replaced by a unique token when a directory is allocated.
/// If the pattern has no wildcard, the token is appended to its end instead.
///
/// | pattern         | example name                   |
/// |-----------------|--------------------------------|
/// | `test-*-folder` | `test-Zq3x0bLk9P1mWc7a-folder` |
/// | `test-`         | `test-Zq3x0bLk9P1mWc7a`        |
/// | `*.d`           | `Zq3x0bLk9P1mWc7a.d`           |
///
/// Patterns must not contain path separators, as the allocated directory
/// must always be a direct child of the base directory.
///
///
/// # Examples
/// ```
/// # use scratch_tree::directory::DirectoryPattern;
/// let pattern = DirectoryPattern::new("test-*-folder").unwrap();
///
/// assert_eq!(pattern.prefix(), "test-");
/// assert_eq!(pattern.suffix(), "-folder");
/// assert_eq!(pattern.render("abc"), "test-abc-folder");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct DirectoryPattern {
    prefix: String,
    suffix: String,
    has_wildcard: bool,
}

impl DirectoryPattern {
    /// Parses and validates a directory name pattern.
    ///
    /// # Errors
    /// - [`Empty`] if the pattern is an empty string,
    /// - [`MultipleWildcards`] if it contains more than one `*`,
    /// - [`ContainsPathSeparator`] if it contains a path separator.
    ///
    ///
    /// [`Empty`]: InvalidDirectoryPatternError::Empty
    /// [`MultipleWildcards`]: InvalidDirectoryPatternError::MultipleWildcards
    /// [`ContainsPathSeparator`]: InvalidDirectoryPatternError::ContainsPathSeparator
    pub fn new<S>(pattern: S) -> Result<Self, InvalidDirectoryPatternError>
    where
        S: AsRef<str>,
    {
        let pattern = pattern.as_ref();

        if pattern.is_empty() {
            return Err(InvalidDirectoryPatternError::Empty);
        }

        if pattern.chars().any(std::path::is_separator) {
            return Err(InvalidDirectoryPatternError::ContainsPathSeparator {
                pattern: pattern.to_string(),
            });
        }

        let mut parts = pattern.splitn(3, PATTERN_WILDCARD);

        // `splitn` always yields at least one item.
        let prefix = parts.next().unwrap_or_default();
        let suffix = parts.next();

        if parts.next().is_some() {
            return Err(InvalidDirectoryPatternError::MultipleWildcards {
                pattern: pattern.to_string(),
            });
        }

        Ok(Self {
            prefix: prefix.to_string(),
            suffix: suffix.unwrap_or_default().to_string(),
            has_wildcard: suffix.is_some(),
        })
    }

    /// The part of the pattern before the wildcard
    /// (or the entire pattern, if it has no wildcard).
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The part of the pattern after the wildcard
    /// (empty if the pattern has no wildcard).
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Whether the pattern contains a wildcard.
    pub fn has_wildcard(&self) -> bool {
        self.has_wildcard
    }

    /// Renders a directory name by placing `token` where the wildcard is.
    pub fn render(&self, token: &str) -> String {
        let mut name = String::with_capacity(self.prefix.len() + token.len() + self.suffix.len());

        name.push_str(&self.prefix);
        name.push_str(token);
        name.push_str(&self.suffix);

        name
    }
}

impl FromStr for DirectoryPattern {
    type Err = InvalidDirectoryPatternError;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        Self::new(pattern)
    }
}

impl fmt::Display for DirectoryPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_wildcard {
            write!(f, "{}{}{}", self.prefix, PATTERN_WILDCARD, self.suffix)
        } else {
            f.write_str(&self.prefix)
        }
    }
}
