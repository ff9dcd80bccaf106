//! HMM library filtering.
//!
//! A profile-HMM library (HMMER3 text format, as shipped by Dfam) is a run
//! of records each terminated by a `//` line. The record's family accession
//! is on its `ACC` line. Filtering keeps only records of known families,
//! copied verbatim.

use std::collections::HashSet;
use std::io::{self, BufRead, Write};

use crate::error::Result;
use crate::known::strip_version;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HmmRecord {
    /// Accession without version, if the record had an `ACC` line.
    pub accession: Option<String>,
    /// Raw lines, line endings included.
    pub lines: Vec<String>,
}

/// Streaming HMM record reader. `#` comment lines are dropped.
pub struct HmmRecords<R> {
    reader: R,
    current: HmmRecord,
    done: bool,
}

impl<R: BufRead> HmmRecords<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            current: HmmRecord::default(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for HmmRecords<R> {
    type Item = io::Result<HmmRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => {
                    self.done = true;
                    // An unterminated trailing record is kept only if it
                    // carries an accession.
                    let record = std::mem::take(&mut self.current);
                    return record.accession.is_some().then_some(Ok(record));
                }
                Ok(_) => {}
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }

            if line.starts_with('#') {
                continue;
            }
            let terminator = line.starts_with("//");
            if let Some(acc) = line.strip_prefix("ACC") {
                self.current.accession = Some(strip_version(acc.trim()).to_string());
            }
            self.current.lines.push(line);
            if terminator {
                return Some(Ok(std::mem::take(&mut self.current)));
            }
        }
        None
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HmmStats {
    pub total: usize,
    pub kept: usize,
}

/// Copy the records whose accession is in `known` (version-stripped).
pub fn filter_hmm<R: BufRead, W: Write>(
    reader: R,
    out: &mut W,
    known: &HashSet<String>,
) -> Result<HmmStats> {
    tracing::info!(known = known.len(), "filtering HMM library");
    let mut stats = HmmStats::default();
    for record in HmmRecords::new(reader) {
        let record = record?;
        stats.total += 1;
        let Some(acc) = record.accession.as_deref() else {
            continue;
        };
        tracing::debug!(accession = acc, "found repeat");
        if !known.contains(acc) {
            continue;
        }
        for line in &record.lines {
            out.write_all(line.as_bytes())?;
        }
        tracing::debug!(accession = acc, "record kept");
        stats.kept += 1;
    }
    out.flush()?;
    tracing::info!(kept = stats.kept, total = stats.total, "HMM library filtered");
    Ok(stats)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
