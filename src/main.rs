//! Compose Collector - gathers docker-compose files into a tracked project
//!
//! This is the CLI entry point.

use anyhow::Context;
use clap::Parser;
use compose_collector::config::{ConfigValidator, CONFIG_FILE};
use compose_collector::container::CollisionPolicy;
use compose_collector::{CollectReport, ComposeCollector};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Collect docker-compose files into this project
#[derive(Parser)]
#[command(name = "compose-collector")]
#[command(author = "Evoker Industries")]
#[command(version)]
#[command(about = "Collect docker-compose files into a project and track them in config.yaml", long_about = None)]
struct Cli {
    /// Directory to scan for docker-compose files
    source: PathBuf,

    /// Project directory receiving containers/ and config.yaml
    #[arg(short, long)]
    project_dir: Option<PathBuf>,

    /// Fail if two compose files share a parent directory name
    #[arg(long)]
    strict: bool,

    /// Print the collection report as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

/// Process exit status on success
const EXIT_SUCCESS: u8 = 0;
/// Process exit status on usage errors, empty scans and failures
const EXIT_FAILURE: u8 = 1;

/// Usage errors exit 1; --help and --version exit 0
fn parse_error_status(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        EXIT_FAILURE
    } else {
        EXIT_SUCCESS
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let status = parse_error_status(&err);
            let _ = err.print();
            return ExitCode::from(status);
        }
    };

    // Initialize logging
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(status) => ExitCode::from(status),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let project_dir = match cli.project_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };

    let policy = if cli.strict {
        CollisionPolicy::Reject
    } else {
        CollisionPolicy::Overwrite
    };

    let collector = ComposeCollector::new(&cli.source, &project_dir).policy(policy);

    if !cli.json {
        println!("Scanning {} for docker-compose files...", cli.source.display());
    }

    let discovered = collector
        .discover()
        .with_context(|| format!("Failed to scan {}", cli.source.display()))?;

    if discovered.is_empty() {
        if cli.json {
            eprintln!("No docker-compose files found!");
        } else {
            println!("No docker-compose files found!");
        }
        return Ok(EXIT_FAILURE);
    }

    if !cli.json {
        println!("Found {} docker-compose files", discovered.len());
    }

    let report = collector
        .collect(discovered)
        .with_context(|| format!("Failed to collect into {}", project_dir.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }

    Ok(EXIT_SUCCESS)
}

fn print_summary(report: &CollectReport) {
    println!("\nProcessed files:");
    for mapping in &report.mappings {
        println!("\n{}:", mapping.container_name);
        println!("  Source: {}", mapping.source.display());
        println!("  Local: {}", mapping.local_path);
    }

    let pending = ConfigValidator::pending_sources(&report.config).len();
    println!(
        "\nConfiguration updated ({} new, {} awaiting a source URL). Please:",
        report.added, pending
    );
    println!("1. Review the {} file", CONFIG_FILE);
    println!("2. Add source URLs for each compose file");
    println!("3. Configure your preferred notification method");

    let warnings = ConfigValidator::validate(&report.config);
    if !warnings.is_empty() {
        println!("\nWarnings:");
        for warning in warnings {
            println!("  - {}", warning);
        }
    }
}
