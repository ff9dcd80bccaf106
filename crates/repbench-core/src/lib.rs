//! repbench-core: timing extraction from benchmark execution logs.
//!
//! Benchmark runs wrap every per-chromosome job in GNU `time`, producing a
//! log where each job prints a header naming its input file, possibly an
//! exit-status line, and a timing summary. This crate turns such a log into
//! one table row per job.
//!
//! # Architecture
//!
//! ```text
//! lines ──► LogScanner ──► RecordAccumulator ──► TableEmitter
//!              │
//!              └──► duration::normalize
//! ```
//!
//! Scanning is single-threaded and strictly sequential: whether a line means
//! anything depends on the lines before it.

pub mod config;
pub mod duration;
pub mod emit;
pub mod error;
pub mod pipeline;
pub mod scanner;
pub mod table;
pub mod types;

pub use emit::{TableEmitter, TableFormat};
pub use error::{ConfigError, ScanError};
pub use scanner::{LogScanner, Patterns, ScanState};
pub use table::{RecordAccumulator, ResultTable};
pub use types::{JobKey, JobRecord, Outcome};
