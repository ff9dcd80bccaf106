//! Fatal error conditions for a timing scan.
//!
//! Everything here aborts the scan. Unrecognised lines, overwritten pending
//! headers and repeated keys are not errors and never surface as one.

/// A fatal condition raised while scanning a log or writing its table.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// A timing-summary line matched structurally but its elapsed field did
    /// not normalise to `H:MM:SS.fff`.
    #[error("line {line}: malformed elapsed duration {text:?}")]
    MalformedDuration { line: usize, text: String },

    /// The input could not be opened, or a read failed part way through.
    #[error("cannot read input {input}")]
    UnreadableInput {
        input: String,
        #[source]
        source: std::io::Error,
    },

    /// The output table could not be created or written.
    #[error("cannot write output table {output}")]
    UnwritableOutput {
        output: String,
        #[source]
        source: std::io::Error,
    },

    /// The configured job-header pattern is not a valid regex.
    #[error("invalid job-header pattern {pattern:?}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Errors raised while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Load(#[from] config::ConfigError),

    #[error("output delimiter must be a single ASCII character, got {0:?}")]
    Delimiter(String),
}
