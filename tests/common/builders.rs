//! Test builders: ergonomic constructors for benchmark logs and result
//! tables.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use std::io::Write;
use std::path::{Path, PathBuf};

use repbench_core::pipeline::scan_reader;
use repbench_core::{Patterns, ResultTable, TableEmitter, TableFormat};

// ---------------------------------------------------------------------------
// LogBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for benchmark log text.
///
/// # Example
///
/// ```rust
/// let log = LogBuilder::new()
///     .job("hg19/chr1.fa")
///     .timing(41.2, 0.93, "0:42.37")
///     .job("hg19/chr2.fa")
///     .exit(137)
///     .build();
/// ```
#[derive(Debug, Default, Clone)]
pub struct LogBuilder {
    lines: Vec<String>,
}

impl LogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Header line naming the job's input file.
    pub fn job(self, key: &str) -> Self {
        self.line(format!("=== {key}"))
    }

    pub fn exit(self, status: u32) -> Self {
        self.line(format!("Command exited with non-zero status {status}"))
    }

    /// GNU `time` summary line.
    pub fn timing(self, user: f64, sys: f64, elapsed: &str) -> Self {
        self.line(format!(
            "{user:.2}user {sys:.2}system {elapsed}elapsed 99%CPU (0avgtext+0avgdata 4096maxresident)k"
        ))
    }

    /// Program chatter that matches nothing.
    pub fn noise(self, text: &str) -> Self {
        self.line(text.to_string())
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn build(self) -> String {
        let mut log = self.lines.join("\n");
        log.push('\n');
        log
    }

    /// Write the log into `dir` and return its path.
    pub fn write_to(self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).expect("create log file");
        file.write_all(self.build().as_bytes())
            .expect("write log file");
        path
    }
}

// ---------------------------------------------------------------------------
// One-shot helpers
// ---------------------------------------------------------------------------

/// Scan `log` with the default Linux patterns.
pub fn scan_text(log: &str) -> ResultTable {
    scan_reader(&Patterns::linux(), "<test>", log.as_bytes()).expect("scan log")
}

/// Render `table` with `format` into a string.
pub fn render(table: &ResultTable, format: TableFormat) -> String {
    let mut out = Vec::new();
    TableEmitter::new(format)
        .write(table, &mut out)
        .expect("render table");
    String::from_utf8(out).expect("table is UTF-8")
}

/// Render with the default format (`,`, header row, empty missing marker).
pub fn render_default(table: &ResultTable) -> String {
    render(table, TableFormat::default())
}
