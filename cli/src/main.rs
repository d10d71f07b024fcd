//! Skillscan CLI
//!
//! Runs the security scanner over every skill and summarizes the results.

mod report;

use clap::Parser;
use colored::Colorize;
use report::Reporter;
use skillscan_core::config::{DEFAULT_LAUNCHER, DEFAULT_SKILLS_DIR, DEFAULT_TIMEOUT};
use skillscan_core::{
    run_exit, skill_name, ScanConfig, ScanError, ScanRunner, ScanSummary, ScannerLocator,
    SkillEnumerator,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const EXIT_CODES_HELP: &str = "\
Exit codes:
  0  All skills passed
  1  Some skills failed (or the scanner / skills directory is missing)
  2  Critical issues found
  3  gitleaks not installed or scans errored

Examples:
  skillscan              # Scan all skills
  skillscan --verbose    # Detailed scan with pattern checks";

#[derive(Parser)]
#[command(name = "skillscan")]
#[command(author = "GentlyOS Team")]
#[command(version)]
#[command(about = "Security scanner for all skills", long_about = None)]
#[command(after_help = EXIT_CODES_HELP)]
struct Cli {
    /// Show detailed educational review with pattern-based checks
    #[arg(short, long)]
    verbose: bool,

    /// Directory containing one subdirectory per skill
    #[arg(long, env = "SKILLSCAN_SKILLS_DIR", default_value = DEFAULT_SKILLS_DIR)]
    skills_dir: PathBuf,

    /// Scanner to use before searching the default locations
    #[arg(long, env = "SKILLSCAN_SCANNER")]
    scanner: Option<PathBuf>,

    /// Command that runs the scanner script (empty runs it directly)
    #[arg(long, env = "SKILLSCAN_LAUNCHER", default_value = DEFAULT_LAUNCHER)]
    launcher: String,

    /// Per-skill timeout in seconds
    #[arg(long, env = "SKILLSCAN_TIMEOUT", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,

    /// Additional folder name to skip (repeatable)
    #[arg(long = "exclude", value_name = "NAME")]
    exclude: Vec<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn into_config(self) -> ScanConfig {
        let mut config = ScanConfig {
            skills_dir: self.skills_dir,
            scanner_override: self.scanner,
            launcher: ScanConfig::parse_launcher(&self.launcher),
            timeout: Duration::from_secs(self.timeout),
            verbose: self.verbose,
            ..ScanConfig::default()
        };
        config.excluded.extend(self.exclude);
        config
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = cli.into_config();
    let mut reporter = Reporter::new(io::stdout().lock());

    match scan_all(&config, &mut reporter).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".bright_red(), e);
            ExitCode::from(run_exit::SETUP_FAILURE)
        }
    }
}

/// Locate the scanner, scan every skill in order, print the summary.
/// Setup failures are reported before any scan output.
async fn scan_all<W: Write>(
    config: &ScanConfig,
    reporter: &mut Reporter<W>,
) -> Result<u8, ScanError> {
    let scanner = ScannerLocator::from_config(config).locate()?;
    reporter.info(&format!("Using security scan: {}", scanner.display()))?;

    let skills = SkillEnumerator::from_config(config).enumerate()?;
    reporter.info(&format!("Found {} skills to scan", skills.len()))?;

    let runner = ScanRunner::from_config(scanner, config);
    let mut results = Vec::with_capacity(skills.len());

    for skill in &skills {
        reporter.scan_started(&skill_name(skill))?;
        let result = runner.run(skill, config.verbose).await;
        reporter.scan_finished(&result, config.verbose)?;
        results.push(result);
    }

    let summary = ScanSummary::from_results(&results);
    reporter.summary(&summary)?;

    Ok(summary.exit_code())
}
