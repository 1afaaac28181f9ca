use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use yamlcheck::{run, OutputFormat, RunConfig, DEFAULT_SEARCH_DIRS, USAGE};

/// Exit status for runs aborted by unreadable or malformed input.
const EXIT_FATAL: u8 = 2;

#[derive(Parser)]
#[command(name = "yamlcheck")]
#[command(about = "Validate YAML resource definitions against a rules document", long_about = None)]
#[command(version)]
struct Cli {
    /// Rules document (YAML) with mandatory, dependency, type, length and allowed_values tables
    #[arg(value_name = "CONDITIONS_FILE")]
    rules: Option<PathBuf>,

    /// Directory searched recursively for *.yaml record documents (repeatable)
    #[arg(
        long = "dir",
        value_name = "DIR",
        env = "YAMLCHECK_DIRS",
        value_delimiter = ',',
        default_values = DEFAULT_SEARCH_DIRS.iter().copied()
    )]
    dirs: Vec<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::TRACE
    } else if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    // stdout carries the report only
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(cli.debug)
        .with_writer(std::io::stderr)
        .init();

    let Some(rules) = cli.rules else {
        println!("{}", USAGE);
        return ExitCode::from(1);
    };

    let config = RunConfig {
        rules,
        search_dirs: cli.dirs,
        format: cli.format,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = run(&config, &mut out);
    let _ = out.flush();

    match result {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_FATAL)
        }
    }
}
