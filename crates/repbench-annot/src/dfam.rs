//! DFAM hits → labelled BED.
//!
//! Reads a tab-separated DFAM hits table (`nhmmscan`-style, header row
//! starting with `#seq_name`), keeps hits whose family is a known repeat, and
//! writes a headerless BED-like table with a numeric repeat label.

use std::io::{Read, Write};

use crate::error::{AnnotError, Result};
use crate::known::ClassMap;

/// Repeat classes in label order. A class at position `i` gets label `i + 1`;
/// classes not listed get [`UNLABELLED`].
pub const CLASS_ORDER: [&str; 4] = ["Satellite", "ALR/Alpha", "SINE/Alu", "LINE/L1"];
pub const UNLABELLED: u8 = 0;

const SEQ_NAME: &str = "#seq_name";
const FAMILY_ACC: &str = "family_acc";
const ALI_START: &str = "ali-st";
const ALI_END: &str = "ali-en";

/// Numeric label for a repeat class.
pub fn class_label(class: &str) -> u8 {
    CLASS_ORDER
        .iter()
        .position(|c| *c == class)
        .map_or(UNLABELLED, |i| i as u8 + 1)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BedStats {
    pub hits: usize,
    pub written: usize,
}

struct Columns {
    seq_name: usize,
    family_acc: usize,
    start: usize,
    end: usize,
}

impl Columns {
    fn locate(headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(AnnotError::MissingColumn(name))
        };
        Ok(Self {
            seq_name: find(SEQ_NAME)?,
            family_acc: find(FAMILY_ACC)?,
            start: find(ALI_START)?,
            end: find(ALI_END)?,
        })
    }
}

/// Join DFAM hits with the known DFAM families and write labelled BED rows:
/// `seq_name, ali-st, ali-en, label, family_acc, class`.
pub fn dfam_to_bed<R: Read, W: Write>(reader: R, out: W, known: &ClassMap) -> Result<BedStats> {
    let mut hits = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let columns = Columns::locate(hits.headers()?)?;

    let mut bed = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(out);

    let mut stats = BedStats::default();
    for row in hits.records() {
        let row = row?;
        stats.hits += 1;
        let line = row.position().map_or(0, |p| p.line() as usize);
        let field = |idx: usize, column: &'static str| {
            row.get(idx).ok_or_else(|| AnnotError::InvalidField {
                line,
                column,
                value: String::new(),
            })
        };
        let coordinate = |idx: usize, column: &'static str| -> Result<u64> {
            let value = field(idx, column)?;
            value.trim().parse().map_err(|_| AnnotError::InvalidField {
                line,
                column,
                value: value.to_string(),
            })
        };

        let family = field(columns.family_acc, FAMILY_ACC)?;
        let Some(class) = known.get(family) else {
            continue;
        };
        let seq_name = field(columns.seq_name, SEQ_NAME)?;
        let start = coordinate(columns.start, ALI_START)?.to_string();
        let end = coordinate(columns.end, ALI_END)?.to_string();
        let label = class_label(class).to_string();

        bed.write_record([
            seq_name,
            start.as_str(),
            end.as_str(),
            label.as_str(),
            family,
            class.as_str(),
        ])?;
        stats.written += 1;
    }
    bed.flush()?;
    tracing::info!(hits = stats.hits, written = stats.written, "DFAM hits converted");
    Ok(stats)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
