//! LogScanner: line-by-line automaton over GNU `time` execution logs.
//!
//! Three line shapes matter, tried in this order on every line:
//!
//! | Shape        | Example                                                  |
//! |--------------|----------------------------------------------------------|
//! | job header   | `processing hg19/chr21.fa`                               |
//! | exit status  | `Command exited with non-zero status 2`                  |
//! | timing       | `41.20user 0.93system 0:42.37elapsed 99%CPU (0avgtext…)` |
//!
//! A header arms the scanner with that job's key. While armed, a timing line
//! resolves the job as [`Outcome::Success`] and an exit status other than `1`
//! resolves it as [`Outcome::Failure`]. Exit status `1` leaves the job armed:
//! in the benchmark environment it precedes a retry of the same job, whose
//! timing line then resolves the key. Everything else is ignored.

use std::io;

use regex::Regex;

use crate::duration;
use crate::error::ScanError;
use crate::types::{JobKey, JobRecord, Outcome};

/// Default job-header pattern: a release directory followed by a chromosome
/// FASTA file, e.g. `hg38/chrX.fa`.
pub const DEFAULT_HEADER_PATTERN: &str = r"hg\d{2}/chr.*\.fa";

const EXIT_STATUS_PATTERN: &str = r"Command exited with non-zero status (\d+)";
const TIMING_PATTERN: &str =
    r"(\d+\.\d+)user\s(\d+\.\d+)system\s((?:\d+:)?\d+:\d+(?:\.\d+)?)elapsed";

/// The exit status that announces a retry rather than a final failure.
///
/// This is a convention of the environment the logs come from, not a general
/// property of exit codes. No other status is treated this way.
pub const RETRY_EXIT_STATUS: u64 = 1;

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

/// Compiled line patterns for one log dialect.
#[derive(Debug, Clone)]
pub struct Patterns {
    header: Regex,
    exit_status: Regex,
    timing: Regex,
}

impl Patterns {
    /// Compile the patterns with a custom job-header regex.
    pub fn new(header_pattern: &str) -> Result<Self, ScanError> {
        let header = Regex::new(header_pattern).map_err(|source| ScanError::Pattern {
            pattern: header_pattern.to_owned(),
            source,
        })?;
        Ok(Self {
            header,
            exit_status: Regex::new(EXIT_STATUS_PATTERN).expect("exit-status pattern is valid"),
            timing: Regex::new(TIMING_PATTERN).expect("timing pattern is valid"),
        })
    }

    /// The GNU `time` dialect with the default header pattern.
    pub fn linux() -> Self {
        Self::new(DEFAULT_HEADER_PATTERN).expect("default header pattern is valid")
    }

    fn classify<'l>(&self, line: &'l str) -> Line<'l> {
        if let Some(m) = self.header.find(line) {
            return Line::Header(m.as_str());
        }
        if let Some(caps) = self.exit_status.captures(line) {
            let status = caps.get(1).map_or("", |m| m.as_str());
            return Line::ExitStatus(status);
        }
        if let Some(caps) = self.timing.captures(line) {
            let field = |i: usize| caps.get(i).map_or("", |m| m.as_str());
            return Line::Timing {
                user: field(1),
                sys: field(2),
                elapsed: field(3),
            };
        }
        Line::Other
    }
}

impl Default for Patterns {
    fn default() -> Self {
        Self::linux()
    }
}

/// A classified input line. Borrowed slices point into the line itself.
#[derive(Debug, PartialEq)]
enum Line<'l> {
    Header(&'l str),
    ExitStatus(&'l str),
    Timing {
        user: &'l str,
        sys: &'l str,
        elapsed: &'l str,
    },
    Other,
}

// ---------------------------------------------------------------------------
// Scan state
// ---------------------------------------------------------------------------

/// The only mutable state of a scan: at most one job awaiting resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScanState {
    #[default]
    Idle,
    Armed(JobKey),
}

impl ScanState {
    pub fn pending(&self) -> Option<&JobKey> {
        match self {
            ScanState::Idle => None,
            ScanState::Armed(key) => Some(key),
        }
    }
}

/// Push-style scanner: feed it lines, collect the records it resolves.
#[derive(Debug)]
pub struct LogScanner<'p> {
    patterns: &'p Patterns,
    state: ScanState,
    line_no: usize,
}

impl<'p> LogScanner<'p> {
    pub fn new(patterns: &'p Patterns) -> Self {
        Self {
            patterns,
            state: ScanState::Idle,
            line_no: 0,
        }
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Number of lines fed so far.
    pub fn lines_seen(&self) -> usize {
        self.line_no
    }

    /// Advance the automaton by one line.
    ///
    /// Returns the record resolved by this line, if any. The only error is
    /// [`ScanError::MalformedDuration`], which is fatal for the scan.
    pub fn feed(&mut self, line: &str) -> Result<Option<JobRecord>, ScanError> {
        self.line_no += 1;
        let line = line.trim();

        match (self.patterns.classify(line), &self.state) {
            (Line::Header(key), state) => {
                if let ScanState::Armed(dropped) = state {
                    tracing::debug!(line = self.line_no, %dropped, "pending job replaced by new header");
                }
                self.state = ScanState::Armed(JobKey::from(key));
                Ok(None)
            }
            (Line::ExitStatus(status), ScanState::Armed(key)) => {
                if is_retry(status) {
                    tracing::debug!(line = self.line_no, %key, "exit status 1, waiting for retry");
                    return Ok(None);
                }
                tracing::debug!(line = self.line_no, %key, status, "job failed");
                Ok(self.resolve(Outcome::Failure))
            }
            (Line::Timing { user, sys, elapsed }, ScanState::Armed(_)) => {
                let outcome = self.timing(user, sys, elapsed)?;
                let record = self.resolve(outcome);
                if let Some(record) = &record {
                    tracing::debug!(line = self.line_no, key = %record.key, outcome = %record.outcome, "job timed");
                }
                Ok(record)
            }
            _ => Ok(None),
        }
    }

    /// End the scan. Returns the key still pending, if any; it never
    /// produces a record.
    pub fn finish(self) -> Option<JobKey> {
        match self.state {
            ScanState::Idle => None,
            ScanState::Armed(key) => {
                tracing::warn!(%key, "job header without exit status or timing at end of input");
                Some(key)
            }
        }
    }

    fn timing(&self, user: &str, sys: &str, elapsed: &str) -> Result<Outcome, ScanError> {
        let malformed = || ScanError::MalformedDuration {
            line: self.line_no,
            text: elapsed.to_owned(),
        };
        let real_seconds = duration::normalize(elapsed).map_err(|_| malformed())?;
        // The pattern only admits `\d+\.\d+` here.
        let user_seconds = user.parse().map_err(|_| malformed())?;
        let sys_seconds = sys.parse().map_err(|_| malformed())?;
        Ok(Outcome::success(real_seconds, user_seconds, sys_seconds))
    }

    /// Close the pending job with `outcome` and return to idle.
    fn resolve(&mut self, outcome: Outcome) -> Option<JobRecord> {
        match std::mem::take(&mut self.state) {
            ScanState::Armed(key) => Some(JobRecord::new(key, outcome)),
            ScanState::Idle => None,
        }
    }
}

fn is_retry(status: &str) -> bool {
    status
        .parse::<u64>()
        .is_ok_and(|code| code == RETRY_EXIT_STATUS)
}

// ---------------------------------------------------------------------------
// Pull-style scan
// ---------------------------------------------------------------------------

/// Lazy, finite, single-pass scan over a line source.
///
/// Yields each resolved record in input order. Stops after the first error;
/// read failures surface as [`ScanError::UnreadableInput`].
pub struct Scan<'p, I> {
    scanner: Option<LogScanner<'p>>,
    lines: I,
    input: String,
}

impl<'p, I> Scan<'p, I>
where
    I: Iterator<Item = io::Result<String>>,
{
    pub fn new(patterns: &'p Patterns, input: impl Into<String>, lines: I) -> Self {
        Self {
            scanner: Some(LogScanner::new(patterns)),
            lines,
            input: input.into(),
        }
    }
}

impl<I> Iterator for Scan<'_, I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = Result<JobRecord, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.scanner.is_none() {
                return None;
            }
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(source)) => {
                    self.scanner = None;
                    return Some(Err(ScanError::UnreadableInput {
                        input: self.input.clone(),
                        source,
                    }));
                }
                None => {
                    if let Some(scanner) = self.scanner.take() {
                        let lines = scanner.lines_seen();
                        scanner.finish();
                        tracing::debug!(input = %self.input, lines, "end of input");
                    }
                    return None;
                }
            };
            let scanner = self.scanner.as_mut()?;
            match scanner.feed(&line) {
                Ok(Some(record)) => return Some(Ok(record)),
                Ok(None) => continue,
                Err(err) => {
                    self.scanner = None;
                    return Some(Err(err));
                }
            }
        }
    }
}

/// Scan a line source with the given patterns.
pub fn scan<I>(patterns: &Patterns, input: impl Into<String>, lines: I) -> Scan<'_, I::IntoIter>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    Scan::new(patterns, input, lines.into_iter())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
