//! TableEmitter: writes a [`ResultTable`] as a delimited table.
//!
//! Columns are always `job, real, sys, user`. Numbers are written in their
//! shortest round-tripping form with at least one decimal (`123.0`,
//! `3723.5`); failed jobs get the missing-value marker in all three numeric
//! columns.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::error::ScanError;
use crate::table::ResultTable;
use crate::types::{JobRecord, Outcome};

/// Header row, in column order.
pub const COLUMNS: [&str; 4] = ["job", "real", "sys", "user"];

/// Layout of the emitted table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFormat {
    pub delimiter: u8,
    pub header: bool,
    /// Written in place of each number for failed jobs.
    pub missing: String,
}

impl Default for TableFormat {
    fn default() -> Self {
        Self {
            delimiter: b',',
            header: true,
            missing: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TableEmitter {
    format: TableFormat,
}

impl TableEmitter {
    pub fn new(format: TableFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> &TableFormat {
        &self.format
    }

    /// Write `table` to any sink. The sink is flushed before returning.
    pub fn write<W: Write>(&self, table: &ResultTable, sink: W) -> io::Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.format.delimiter)
            .has_headers(false)
            .from_writer(sink);

        if self.format.header {
            writer.write_record(COLUMNS)?;
        }
        for record in table {
            writer.write_record(self.row(record))?;
        }
        writer.flush()
    }

    /// Create (or truncate) `path` and write `table` into it.
    pub fn write_path(&self, table: &ResultTable, path: &Path) -> Result<(), ScanError> {
        let unwritable = |source| ScanError::UnwritableOutput {
            output: path.display().to_string(),
            source,
        };
        let file = File::create(path).map_err(unwritable)?;
        self.write(table, file).map_err(unwritable)?;
        tracing::info!(path = %path.display(), rows = table.len(), "timing table written");
        Ok(())
    }

    fn row(&self, record: &JobRecord) -> [String; 4] {
        let key = record.key.to_string();
        match record.outcome {
            Outcome::Success {
                real_seconds,
                user_seconds,
                sys_seconds,
            } => [
                key,
                seconds(real_seconds),
                seconds(sys_seconds),
                seconds(user_seconds),
            ],
            Outcome::Failure => {
                let missing = &self.format.missing;
                [key, missing.clone(), missing.clone(), missing.clone()]
            }
        }
    }
}

fn seconds(value: f64) -> String {
    format!("{value:?}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
