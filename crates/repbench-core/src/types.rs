//! Core types shared by the scanner, the accumulator and the emitter.
//!
//! A [`JobKey`] names one timed job, an [`Outcome`] says how it ended, and a
//! [`JobRecord`] pairs the two once the scanner has resolved a job.

use std::fmt;

/// Identifier of a job, taken verbatim from its header line
/// (e.g. `hg19/chr1.fa`). Retried jobs reuse the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JobKey(String);

impl JobKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for JobKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for JobKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for JobKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// How a job ended.
///
/// `Failure` carries no numbers at all; it is rendered as a missing-value
/// marker only when the table is written.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Wall-clock, CPU user and CPU system time, all in seconds.
    Success {
        real_seconds: f64,
        user_seconds: f64,
        sys_seconds: f64,
    },
    /// The timed command exited with a non-retryable status.
    Failure,
}

impl Outcome {
    pub fn success(real_seconds: f64, user_seconds: f64, sys_seconds: f64) -> Self {
        Outcome::Success {
            real_seconds,
            user_seconds,
            sys_seconds,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success {
                real_seconds,
                user_seconds,
                sys_seconds,
            } => write!(
                f,
                "real={real_seconds}s user={user_seconds}s sys={sys_seconds}s"
            ),
            Outcome::Failure => write!(f, "failed"),
        }
    }
}

/// A resolved job: its key and how it ended.
#[derive(Debug, Clone, PartialEq)]
pub struct JobRecord {
    pub key: JobKey,
    pub outcome: Outcome,
}

impl JobRecord {
    pub fn new(key: impl Into<JobKey>, outcome: Outcome) -> Self {
        Self {
            key: key.into(),
            outcome,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
