//! ds-check: find forgotten ds() debugging calls
//!
//! Scans the configured directories (ds-check.toml or DS_CHECK_IN_DIR) and
//! fails when any leftover debugging call is found. Intended for pre-commit
//! hooks and CI.
//!
//! Exit codes:
//! - 0: nothing found (or nothing dirty with --dirty)
//! - 1: leftover calls found
//! - 2: configuration or filesystem error
use anyhow::{Context, Result};
use clap::Parser;
use ds_check::cli::{OutputFormat, OutputWriter, ProgressReporter};
use ds_check::config::{CONFIG_FILE_NAME, CheckConfig, FileConfig};
use ds_check::git::GitStatus;
use ds_check::{CheckOptions, Checker};
use std::collections::HashMap;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "ds-check")]
#[command(about = "Check if you forgot any ds() in your files", long_about = None)]
#[command(version)]
struct Cli {
    /// Only check files git reports as modified, added or untracked
    #[arg(short, long)]
    dirty: bool,

    /// Stop at the first leftover call
    #[arg(short = 's', long = "stop-on-failure")]
    stop_on_failure: bool,

    /// Positional form of --stop-on-failure (any value but 0/false enables it)
    #[arg(value_name = "STOP_ON_FAILURE")]
    stop_on_failure_arg: Option<String>,

    /// Project base path; configured directories are relative to it
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Config file (defaults to <root>/ds-check.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Scan files on N threads (0 = one per CPU)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Optional log file path for debug logging
    #[arg(short, long)]
    log: Option<PathBuf>,
}

impl Cli {
    fn stop_on_first_match(&self) -> bool {
        self.stop_on_failure
            || self
                .stop_on_failure_arg
                .as_deref()
                .map(str::trim)
                .is_some_and(|v| !v.is_empty() && v != "0" && !v.eq_ignore_ascii_case("false"))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log.as_ref()) {
        eprintln!("Failed to initialize logging: {:#}", e);
    }

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!();
            eprintln!("  👋️  Whoops. {:#}", e);
            eprintln!();
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let root = match &cli.root {
        Some(root) => root.clone(),
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };

    let file_config = match &cli.config {
        Some(path) => Some(
            FileConfig::load(path).with_context(|| format!("Failed to load {}", path.display()))?,
        ),
        None => FileConfig::load_optional(&root.join(CONFIG_FILE_NAME))?,
    };

    // The only place the process environment is read
    let env: HashMap<String, String> = std::env::vars().collect();
    let config = CheckConfig::resolve(&root, file_config, &env)?;
    debug!("Resolved configuration: {:?}", config);

    let show_progress = cli.format == OutputFormat::Text && std::io::stderr().is_terminal();
    if cli.format == OutputFormat::Text {
        let dirs: Vec<String> = config
            .directories
            .iter()
            .map(|dir| dir.display().to_string())
            .collect();
        println!();
        println!(
            "    ds-check is searching for words used in debugging in: {}",
            dirs.join(", ")
        );
    }

    let options = CheckOptions {
        dirty_only: cli.dirty,
        stop_on_first_match: cli.stop_on_first_match(),
        threads: cli.threads,
    };

    let mut progress = ProgressReporter::new(show_progress);
    let report = Checker::new(&config).run(&options, &GitStatus::new(&config.root), &mut progress)?;
    progress.complete();
    debug!("Observed {} scanned file(s), {} match(es)", progress.scanned(), progress.matches());

    let stdout = std::io::stdout();
    let hyperlinks = stdout.is_terminal();
    let mut writer = OutputWriter::new(cli.format, stdout.lock()).with_hyperlinks(hyperlinks);
    writer.write_report(&report)?;

    info!("{}", if report.is_success() { "Check passed".to_string() } else { report.summary() });

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Initialize logging with optional file output
fn init_logging(log_path: Option<&PathBuf>) -> Result<()> {
    use tracing_subscriber::fmt::writer::MakeWriterExt;

    if let Some(log_file) = log_path {
        // With log file: info+ to file, warn+ to stderr
        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

        let file_appender = tracing_appender::rolling::never(
            log_file
                .parent()
                .unwrap_or_else(|| std::path::Path::new(".")),
            log_file
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("ds-check.log"),
        );

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_ansi(false)
            .with_writer(file_appender.and(std::io::stderr.with_max_level(tracing::Level::WARN)))
            .try_init()
            .map_err(|e| anyhow::anyhow!("{}", e))?;

        eprintln!("📝 Debug logging enabled: {:?}", log_file);
    } else {
        // No log file: warn+ to stderr only (unless RUST_LOG overrides)
        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!("{}", e))?;
    }

    Ok(())
}
