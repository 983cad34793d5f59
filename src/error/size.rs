use thiserror::Error;


/// An error that can occur when parsing a human-readable byte size.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "miette", derive(miette::Diagnostic))]
pub enum ByteSizeParseError {
    /// The input was empty (or only whitespace).
    #[error("byte size is empty")]
    Empty,

    /// The numeric part could not be parsed, or was negative.
    #[error("invalid number in byte size: {input}")]
    InvalidNumber {
        /// The full input.
        input: String,
    },

    /// The unit suffix is not recognized.
    #[error(
        "unknown byte size unit: {unit} (supported: b, kb/kib, mb/mib, gb/gib, tb/tib, pb/pib)"
    )]
    UnknownUnit {
        /// The unrecognized unit.
        unit: String,
    },

    /// The resulting byte count does not fit into a `u64`.
    #[error("byte size is too large: {input}")]
    TooLarge {
        /// The full input.
        input: String,
    },
}
