//! File helpers: buffered text readers (plain or gzip) and writers with the
//! path attached to any open/create failure.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::{AnnotError, Result};

/// Open `path` for line reading, decompressing when it ends in `.gz`.
pub fn open_text(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|source| AnnotError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    if is_gzip(path) {
        tracing::debug!(path = %path.display(), "reading gzip input");
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Create (or truncate) `path` behind a buffered writer.
pub fn create_text(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|source| AnnotError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
