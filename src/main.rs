//! `salary-roster` binary: registers employees on the terminal and prints
//! their salary report.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use salary_roster::config::{ConfigLoader, ReportFormat, SessionConfig};
use salary_roster::error::RosterResult;
use salary_roster::session::{IoConsole, Session};

/// Register employees and print a salary report
#[derive(Parser, Debug)]
#[command(name = "salary-roster", version)]
struct Args {
    /// YAML session configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// do not clear the screen between registrations
    #[arg(long)]
    no_clear: bool,

    /// print the report as JSON
    #[arg(long)]
    json: bool,
}

/// Logs go to stderr so they never mix with the report on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn build_config(args: &Args) -> RosterResult<SessionConfig> {
    let mut config = match &args.config {
        Some(path) => ConfigLoader::load(path)?.into_config(),
        None => SessionConfig::default(),
    };
    if args.no_clear {
        config.clear_screen = false;
    }
    if args.json {
        config.report_format = ReportFormat::Json;
    }
    Ok(config)
}

fn run(args: &Args) -> RosterResult<()> {
    let config = build_config(args)?;
    Session::new(IoConsole::stdio(), config).run()?;
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Session terminated abnormally");
            eprintln!("Erro: {err}");
            ExitCode::FAILURE
        }
    }
}
