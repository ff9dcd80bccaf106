//! EMBL → FASTA.
//!
//! An EMBL record runs from its `ID` line to the next one. Only three parts
//! matter here: the identifier and declared length on the `ID` line, and the
//! sequence block between `SQ` and the `//` terminator. `XX` spacer lines are
//! dropped on read.

use std::collections::{HashMap, HashSet};
use std::io::{self, BufRead, Write};
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{AnnotError, Result};

/// FASTA line width.
pub const FASTA_WIDTH: usize = 80;

fn id_regex() -> &'static Regex {
    static ID: OnceLock<Regex> = OnceLock::new();
    ID.get_or_init(|| Regex::new(r"ID\s+(.+)\s+.*;\s(\d+)\sBP.").expect("ID pattern is valid"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmblRecord {
    pub id: String,
    /// Lowercase bases, no digits or whitespace.
    pub sequence: String,
}

impl EmblRecord {
    /// Build a record from its lines. `first_line` is the 1-based input line
    /// of the `ID` line, used in error messages.
    pub fn from_lines(lines: &[String], first_line: usize) -> Result<Self> {
        let malformed = |reason: &str| AnnotError::MalformedRecord {
            line: first_line,
            reason: reason.to_string(),
        };

        let head = lines.first().ok_or_else(|| malformed("empty record"))?;
        let caps = id_regex()
            .captures(head)
            .ok_or_else(|| malformed("ID line lacks identifier or length"))?;
        let id = caps[1]
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string();
        let declared: usize = caps[2]
            .parse()
            .map_err(|_| malformed("declared length out of range"))?;

        // Last occurrence of each leading token wins.
        let index: HashMap<&str, usize> = lines
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, line)| (line.split(' ').next().unwrap_or_default(), i))
            .collect();
        let sq = *index.get("SQ").ok_or_else(|| malformed("no SQ line"))?;
        let end = *index.get("//").ok_or_else(|| malformed("no // terminator"))?;

        let sequence: String = lines
            .get(sq + 1..end)
            .unwrap_or_default()
            .iter()
            .flat_map(|line| line.chars())
            .filter(|c| !c.is_ascii_digit() && !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();

        let actual = sequence.chars().count();
        if actual != declared {
            return Err(AnnotError::LengthMismatch {
                id,
                declared,
                actual,
            });
        }
        Ok(Self { id, sequence })
    }

    /// Write `>id` followed by the sequence wrapped at [`FASTA_WIDTH`].
    pub fn write_fasta<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, ">{}", self.id)?;
        let mut column = 0;
        for base in self.sequence.chars() {
            if column == FASTA_WIDTH {
                out.write_all(b"\n")?;
                column = 0;
            }
            write!(out, "{base}")?;
            column += 1;
        }
        if column > 0 {
            out.write_all(b"\n")?;
        }
        Ok(())
    }
}

/// Streaming EMBL reader yielding one record at a time.
pub struct EmblReader<R> {
    lines: io::Lines<R>,
    pending: Vec<String>,
    pending_start: usize,
    line_no: usize,
    done: bool,
}

impl<R: BufRead> EmblReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            pending: Vec::new(),
            pending_start: 0,
            line_no: 0,
            done: false,
        }
    }

    fn flush(&mut self) -> Option<Result<EmblRecord>> {
        if self.pending.is_empty() {
            return None;
        }
        let lines = std::mem::take(&mut self.pending);
        Some(EmblRecord::from_lines(&lines, self.pending_start))
    }
}

impl<R: BufRead> Iterator for EmblReader<R> {
    type Item = Result<EmblRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(err)) => {
                    self.done = true;
                    return Some(Err(err.into()));
                }
                None => {
                    self.done = true;
                    return self.flush();
                }
            };
            self.line_no += 1;
            let line = line.trim_end().to_string();

            if line.starts_with("XX") {
                continue;
            }
            if self.pending.is_empty() && line.is_empty() {
                continue;
            }
            let finished = if line.starts_with("ID") {
                let finished = self.flush();
                self.pending_start = self.line_no;
                finished
            } else {
                None
            };
            if self.pending.is_empty() && !line.starts_with("ID") {
                self.done = true;
                return Some(Err(AnnotError::MalformedRecord {
                    line: self.line_no,
                    reason: "expected an ID line".to_string(),
                }));
            }
            self.pending.push(line);
            if finished.is_some() {
                return finished;
            }
        }
        None
    }
}

/// Counts from one conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmblStats {
    pub read: usize,
    pub written: usize,
}

/// Convert every record (optionally only those whose id is in `keep`).
pub fn embl_to_fasta<R: BufRead, W: Write>(
    reader: R,
    out: &mut W,
    keep: Option<&HashSet<String>>,
) -> Result<EmblStats> {
    let mut stats = EmblStats::default();
    for record in EmblReader::new(reader) {
        let record = record?;
        stats.read += 1;
        if keep.is_some_and(|ids| !ids.contains(&record.id)) {
            tracing::debug!(id = %record.id, "record filtered out");
            continue;
        }
        record.write_fasta(out)?;
        stats.written += 1;
    }
    out.flush()?;
    tracing::info!(read = stats.read, written = stats.written, "EMBL records converted");
    Ok(stats)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
