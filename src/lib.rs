//! repbench: benchmark bookkeeping for repeat-annotation runs.
//!
//! The binary bundles two kinds of tools:
//!
//! - `timings`: scans GNU `time` execution logs and writes one row of
//!   wall/user/system seconds per job ([`repbench_core`]).
//! - converters between EMBL, FASTA, DFAM hits, BED and HMM libraries
//!   ([`repbench_annot`]).
//!
//! The CLI definition lives here rather than in `main.rs` so the process
//! harness and unit tests can build it directly.

pub mod cli;
pub mod logging;
