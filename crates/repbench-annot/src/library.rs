//! RepeatMasker custom library labelling.
//!
//! RepeatMasker reads the repeat class of each library entry from its FASTA
//! header, `>name#class`. This rewrites plain headers into that form using
//! the `RepeatMasker` section of the known-repeats file.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::known::ClassMap;

/// Class used for families absent from the class map.
pub const UNKNOWN_CLASS: &str = "unknown";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelStats {
    pub headers: usize,
    pub unknown: usize,
}

/// Copy a FASTA stream, appending `#class` to every header. Sequence lines
/// are copied byte for byte.
pub fn label_library<R: BufRead, W: Write>(
    mut reader: R,
    out: &mut W,
    classes: &ClassMap,
) -> Result<LabelStats> {
    let mut stats = LabelStats::default();
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let Some(header) = line.strip_prefix('>') else {
            out.write_all(line.as_bytes())?;
            continue;
        };
        let name = header.trim();
        let class = match classes.get(name) {
            Some(class) => class.as_str(),
            None => {
                stats.unknown += 1;
                UNKNOWN_CLASS
            }
        };
        writeln!(out, ">{name}#{class}")?;
        stats.headers += 1;
    }
    out.flush()?;
    tracing::info!(headers = stats.headers, unknown = stats.unknown, "library labelled");
    Ok(stats)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
