use clap::Parser;

use repbench::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    repbench::logging::init(cli.verbose, cli.debug)?;
    cli::run(cli)
}
