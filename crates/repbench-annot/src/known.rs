//! Known-repeats file: one JSON document mapping repeat families to classes,
//! split by source database.
//!
//! ```json
//! {
//!   "DFAM":         { "DF0000001.4": "SINE/Alu", ... },
//!   "RepeatMasker": { "AluY": "SINE/Alu", ... }
//! }
//! ```

use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{AnnotError, Result};

pub type ClassMap = HashMap<String, String>;

#[derive(Debug, Default, Deserialize)]
pub struct KnownRepeats {
    #[serde(rename = "DFAM")]
    dfam: Option<ClassMap>,
    #[serde(rename = "RepeatMasker")]
    repeatmasker: Option<ClassMap>,
    #[serde(skip)]
    origin: String,
}

impl KnownRepeats {
    pub fn load(path: &Path) -> Result<Self> {
        let reader = std::fs::File::open(path).map_err(|source| AnnotError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut known = Self::from_reader(std::io::BufReader::new(reader)).map_err(|source| {
            AnnotError::Json {
                path: path.to_path_buf(),
                source,
            }
        })?;
        known.origin = path.display().to_string();
        Ok(known)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        let mut known: Self = serde_json::from_reader(reader)?;
        known.origin = "<known repeats>".to_string();
        Ok(known)
    }

    /// DFAM accession → class.
    pub fn dfam(&self) -> Result<&ClassMap> {
        self.dfam.as_ref().ok_or_else(|| self.missing("DFAM"))
    }

    /// RepeatMasker family name → class.
    pub fn repeatmasker(&self) -> Result<&ClassMap> {
        self.repeatmasker
            .as_ref()
            .ok_or_else(|| self.missing("RepeatMasker"))
    }

    /// DFAM accessions exactly as listed (versions included).
    pub fn dfam_ids(&self) -> Result<HashSet<String>> {
        Ok(self.dfam()?.keys().cloned().collect())
    }

    /// DFAM accessions with the `.N` version suffix removed.
    pub fn dfam_accessions(&self) -> Result<HashSet<String>> {
        Ok(self
            .dfam()?
            .keys()
            .map(|acc| strip_version(acc).to_string())
            .collect())
    }

    fn missing(&self, section: &'static str) -> AnnotError {
        AnnotError::MissingSection {
            origin: self.origin.clone(),
            section,
        }
    }
}

/// `DF0000001.4` → `DF0000001`.
pub fn strip_version(accession: &str) -> &str {
    accession.split('.').next().unwrap_or(accession)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
