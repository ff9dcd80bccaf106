//! repbench-annot: repeat-annotation converters used alongside the
//! benchmarks.
//!
//! Each converter is a single streaming pass over one input:
//!
//! | Module      | Input                   | Output                         |
//! |-------------|-------------------------|--------------------------------|
//! | [`embl`]    | EMBL repeat library     | FASTA, optionally filtered     |
//! | [`library`] | FASTA repeat library    | FASTA with `#class` headers    |
//! | [`dfam`]    | DFAM hits table (gz ok) | labelled BED                   |
//! | [`hmm`]     | HMMER3 library          | HMMER3 library, filtered       |
//!
//! Families and classes come from the known-repeats JSON file ([`known`]).

pub mod dfam;
pub mod embl;
pub mod error;
pub mod hmm;
pub mod input;
pub mod known;
pub mod library;

pub use error::{AnnotError, Result};
pub use known::KnownRepeats;
