//! Command-line surface: one subcommand per tool.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};

use repbench_annot::{dfam, embl, hmm, input, library, KnownRepeats};
use repbench_core::config::Config;
use repbench_core::pipeline::{self, Input, Output};
use repbench_core::TableEmitter;

#[derive(Debug, Parser)]
#[command(
    name = "repbench",
    version,
    about = "Benchmark timing extraction and repeat-annotation converters"
)]
pub struct Cli {
    /// More log output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write debug logs to /tmp/repbench-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    pub debug: bool,

    /// Extra config file layered over ~/.config/repbench/config.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract per-job wall/user/system times from a benchmark log.
    Timings(TimingsArgs),
    /// Convert an EMBL repeat library to FASTA.
    EmblToFasta(EmblToFastaArgs),
    /// Append RepeatMasker `#class` labels to FASTA library headers.
    LabelLibrary(LabelLibraryArgs),
    /// Join DFAM hits with known repeats into a labelled BED file.
    DfamToBed(DfamToBedArgs),
    /// Keep only known repeat families in an HMM library.
    FilterHmm(FilterHmmArgs),
}

/// Options for the `timings` subcommand.
#[derive(Debug, Args)]
pub struct TimingsArgs {
    /// Benchmark log to scan, or `-` for stdin.
    pub log: String,

    /// Log dialect: GNU `time` output on Linux. This is the only dialect and
    /// the default.
    #[arg(long)]
    pub linux: bool,

    /// Output table path, or `-` for stdout. Default: running_time.csv
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Regex matching the job key on header lines.
    #[arg(long, value_name = "REGEX")]
    pub header_pattern: Option<String>,

    /// Single-character column delimiter.
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Omit the header row.
    #[arg(long)]
    pub no_header: bool,

    /// Marker written in the numeric columns of failed jobs.
    #[arg(long, value_name = "TEXT")]
    pub missing: Option<String>,
}

/// Options for the `embl-to-fasta` subcommand.
#[derive(Debug, Args)]
pub struct EmblToFastaArgs {
    pub embl: PathBuf,
    pub fasta: PathBuf,
    /// Known-repeats JSON; only records listed in its DFAM section are kept.
    #[arg(long, value_name = "JSON")]
    pub filter: Option<PathBuf>,
}

/// Options for the `label-library` subcommand.
#[derive(Debug, Args)]
pub struct LabelLibraryArgs {
    pub infile: PathBuf,
    pub outfile: PathBuf,
    /// Known-repeats JSON providing the RepeatMasker classes.
    #[arg(long, value_name = "JSON")]
    pub repeatclass: Option<PathBuf>,
}

/// Options for the `dfam-to-bed` subcommand.
#[derive(Debug, Args)]
pub struct DfamToBedArgs {
    /// DFAM hits table (tab-separated, optionally gzipped).
    #[arg(long, default_value = "hg38_dfam.nrph.hits.gz")]
    pub dfamfile: PathBuf,
    /// Known-repeats JSON.
    #[arg(long, default_value = "../repeats.json")]
    pub knownrepeats: PathBuf,
    /// Output BED path.
    #[arg(short, long, default_value = "hg38.dfam.bed")]
    pub output: PathBuf,
}

/// Options for the `filter-hmm` subcommand.
#[derive(Debug, Args)]
pub struct FilterHmmArgs {
    pub hmm_file: PathBuf,
    pub known_repeats: PathBuf,
    pub outputfile: PathBuf,
}

/// Run the selected subcommand.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Timings(args) => timings(args, cli.config.as_deref()),
        Command::EmblToFasta(args) => embl_to_fasta(args),
        Command::LabelLibrary(args) => label_library(args),
        Command::DfamToBed(args) => dfam_to_bed(args),
        Command::FilterHmm(args) => filter_hmm(args),
    }
}

// ---------------------------------------------------------------------------
// timings
// ---------------------------------------------------------------------------

fn timings(args: TimingsArgs, config_path: Option<&Path>) -> Result<()> {
    let mut config = Config::load(config_path).context("loading configuration")?;
    if let Some(pattern) = args.header_pattern {
        config.scanner.header_pattern = pattern;
    }
    if let Some(delimiter) = args.delimiter {
        config.output.delimiter = delimiter;
    }
    if let Some(missing) = args.missing {
        config.output.missing = missing;
    }
    if args.no_header {
        config.output.header = false;
    }
    if args.linux {
        tracing::debug!("dialect: GNU time (linux)");
    }

    let emitter = TableEmitter::new(config.output.table_format()?);
    let input = Input::from_arg(&args.log);
    let output = Output::from_path(args.output.unwrap_or_else(|| config.output.path.clone()));

    let summary = pipeline::run(&config, &input, &output, &emitter)
        .with_context(|| format!("extracting timings from {input}"))?;
    tracing::info!(
        output = %output,
        jobs = summary.jobs,
        successes = summary.successes,
        failures = summary.failures,
        "done"
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// converters
// ---------------------------------------------------------------------------

fn embl_to_fasta(args: EmblToFastaArgs) -> Result<()> {
    let keep = match &args.filter {
        Some(path) => Some(KnownRepeats::load(path)?.dfam_ids()?),
        None => None,
    };
    let reader = input::open_text(&args.embl)?;
    let mut out = input::create_text(&args.fasta)?;
    embl::embl_to_fasta(reader, &mut out, keep.as_ref())
        .with_context(|| format!("converting {}", args.embl.display()))?;
    Ok(())
}

fn label_library(args: LabelLibraryArgs) -> Result<()> {
    let classes = match &args.repeatclass {
        Some(path) => KnownRepeats::load(path)?.repeatmasker()?.clone(),
        None => Default::default(),
    };
    let reader = input::open_text(&args.infile)?;
    let mut out = input::create_text(&args.outfile)?;
    library::label_library(reader, &mut out, &classes)
        .with_context(|| format!("labelling {}", args.infile.display()))?;
    Ok(())
}

fn dfam_to_bed(args: DfamToBedArgs) -> Result<()> {
    let known = KnownRepeats::load(&args.knownrepeats)?;
    let reader = input::open_text(&args.dfamfile)?;
    let out = input::create_text(&args.output)?;
    dfam::dfam_to_bed(reader, out, known.dfam()?)
        .with_context(|| format!("converting {}", args.dfamfile.display()))?;
    Ok(())
}

fn filter_hmm(args: FilterHmmArgs) -> Result<()> {
    let known = KnownRepeats::load(&args.known_repeats)?.dfam_accessions()?;
    tracing::info!(known = known.len(), "found known repeats");
    let reader = input::open_text(&args.hmm_file)?;
    let mut out = input::create_text(&args.outputfile)?;
    let stats = hmm::filter_hmm(reader, &mut out, &known)
        .with_context(|| format!("filtering {}", args.hmm_file.display()))?;
    tracing::info!(
        "wrote {} of {} repeats to new file {}",
        stats.kept,
        stats.total,
        args.outputfile.display()
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
