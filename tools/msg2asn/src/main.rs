//! Command-line front end for the ROS message → ASN.1 generator.

use std::{fs::File, path::PathBuf, process::ExitCode, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use rosmsg2asn1::{FsSink, GenerateReport, Generator, msg::PackageIndex};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "msg2asn", about = "Convert ROS messages to ASN.1 modules")]
struct Cli {
    /// Messages to convert (`Name` or `pkg/Name`); referenced messages are
    /// generated automatically
    messages: Vec<String>,

    /// Directory to save the ASN.1 modules to
    #[arg(short, long, default_value = "/tmp/asn1_msgs")]
    output: PathBuf,

    /// Additional package search root (repeatable); `ROS_PACKAGE_PATH` is
    /// searched as well
    #[arg(short = 'p', long = "msg-path")]
    msg_path: Vec<PathBuf>,

    /// Verbose output of the operation
    #[arg(short, long)]
    verbose: bool,

    /// Write log output to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = init_logging(&cli) {
        eprintln!("error: {err:#}");
        return ExitCode::from(2);
    }

    let report = run(&cli);
    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run(cli: &Cli) -> GenerateReport {
    let index = PackageIndex::scan(search_roots(cli));
    tracing::debug!("indexed {} message definitions", index.len());

    let mut sink = FsSink::new(&cli.output);
    let report = Generator::new(index).generate_all(cli.messages.iter().cloned(), &mut sink);

    for failure in &report.failures {
        tracing::error!("{}: {}", failure.name, failure.error);
    }
    tracing::info!(
        "generated {} modules into {} ({} failed)",
        report.generated.len(),
        cli.output.display(),
        report.failures.len()
    );
    report
}

fn search_roots(cli: &Cli) -> Vec<PathBuf> {
    let mut roots = cli.msg_path.clone();
    if let Ok(env_path) = std::env::var("ROS_PACKAGE_PATH") {
        roots.extend(
            env_path
                .split(':')
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        );
    }
    roots
}

fn init_logging(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "info" }));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("could not open log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Arc::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}
