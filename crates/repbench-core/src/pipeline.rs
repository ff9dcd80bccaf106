//! Driver: wires input lines through the scanner into the accumulator and
//! hands the finished table to the emitter.
//!
//! ```text
//! Input ──► LogScanner ──► RecordAccumulator ──► TableEmitter ──► Output
//!              │
//!              └──► duration::normalize
//! ```
//!
//! The table is written only after the whole input has been scanned, so a
//! fatal scan error never leaves a partial table behind.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use crate::config::Config;
use crate::emit::TableEmitter;
use crate::error::ScanError;
use crate::scanner::{scan, Patterns};
use crate::table::{RecordAccumulator, ResultTable};

/// Where log lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Path(PathBuf),
    Stdin,
}

impl Input {
    /// `-` selects stdin, anything else is a path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Input::Stdin
        } else {
            Input::Path(PathBuf::from(arg))
        }
    }

    fn open(&self) -> Result<Box<dyn BufRead>, ScanError> {
        match self {
            Input::Stdin => Ok(Box::new(io::stdin().lock())),
            Input::Path(path) => {
                let file = File::open(path).map_err(|source| ScanError::UnreadableInput {
                    input: self.to_string(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Path(path) => write!(f, "{}", path.display()),
            Input::Stdin => write!(f, "<stdin>"),
        }
    }
}

/// Where the table goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Path(PathBuf),
    Stdout,
}

impl Output {
    /// `-` selects stdout, anything else is a path.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.as_os_str() == "-" {
            Output::Stdout
        } else {
            Output::Path(path)
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Path(path) => write!(f, "{}", path.display()),
            Output::Stdout => write!(f, "<stdout>"),
        }
    }
}

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub jobs: usize,
    pub successes: usize,
    pub failures: usize,
}

impl From<&ResultTable> for ScanSummary {
    fn from(table: &ResultTable) -> Self {
        Self {
            jobs: table.len(),
            successes: table.successes(),
            failures: table.failures(),
        }
    }
}

/// Scan any buffered reader into a finished table.
pub fn scan_reader<R: BufRead>(
    patterns: &Patterns,
    input: &str,
    reader: R,
) -> Result<ResultTable, ScanError> {
    let mut acc = RecordAccumulator::new();
    for record in scan(patterns, input, reader.lines()) {
        let record = record?;
        acc.observe(record.key, record.outcome);
    }
    Ok(acc.finish())
}

/// Scan `input` with the configured header pattern.
pub fn extract(config: &Config, input: &Input) -> Result<ResultTable, ScanError> {
    let patterns = Patterns::new(&config.scanner.header_pattern)?;
    let reader = input.open()?;
    let table = scan_reader(&patterns, &input.to_string(), reader)?;
    tracing::info!(
        input = %input,
        jobs = table.len(),
        failures = table.failures(),
        "log scanned"
    );
    Ok(table)
}

/// Scan `input` and write the table to `output`.
pub fn run(
    config: &Config,
    input: &Input,
    output: &Output,
    emitter: &TableEmitter,
) -> Result<ScanSummary, ScanError> {
    let table = extract(config, input)?;
    match output {
        Output::Path(path) => emitter.write_path(&table, path)?,
        Output::Stdout => emitter
            .write(&table, io::stdout().lock())
            .map_err(|source| ScanError::UnwritableOutput {
                output: output.to_string(),
                source,
            })?,
    }
    Ok(ScanSummary::from(&table))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
