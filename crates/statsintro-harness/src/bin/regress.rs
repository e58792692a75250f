use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use statsintro_harness::{registry, Runner};
use statsintro_plot::OutputConfig;
use tracing_subscriber::EnvFilter;

/// Re-run the statsintro demos and compare their results with the records
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory figures are saved into [default: $STATSINTRO_OUT_DIR or ../Images]
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Run only cases whose name contains this text
    #[arg(long)]
    filter: Option<String>,

    /// Skip the figure demos
    #[arg(long)]
    checked_only: bool,

    /// Wait for Enter before exiting
    #[arg(long)]
    pause: bool,
}

fn pause() -> anyhow::Result<()> {
    println!("Thanks for using programs from Thomas!");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut output = OutputConfig::from_env().context("reading output settings")?;
    if let Some(dir) = cli.out_dir {
        output = output.with_out_dir(dir);
    }

    let mut runner = Runner::new().checked_only(cli.checked_only);
    if let Some(filter) = cli.filter {
        runner = runner.with_filter(filter);
    }
    let report = runner.run(&registry::cases(&output));
    println!("{report}");

    if cli.pause {
        pause()?;
    }
    if !report.is_success() {
        bail!("{} of {} cases failed", report.failed(), report.cases.len());
    }
    Ok(())
}
