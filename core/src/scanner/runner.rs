//! Scan Runner - one scanner subprocess per skill
//!
//! The scanner is a black box: its exit code, stdout and stderr are the whole
//! contract. Each skill gets a single attempt bounded by a timeout. Anything
//! that keeps the scanner from reporting (spawn failure, timeout, signal) is
//! recorded as a scan error instead of aborting the run.

use crate::config::{ScanConfig, DEFAULT_LAUNCHER, DEFAULT_TIMEOUT};
use crate::report::{skill_name, SkillScan};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, warn};

/// Flag forwarded to the scanner in verbose mode
pub const VERBOSE_FLAG: &str = "--verbose";

pub const TIMEOUT_MESSAGE: &str = "Scan timed out";

#[derive(Debug, Clone)]
pub struct ScanRunner {
    scanner: PathBuf,
    launcher: Vec<String>,
    timeout: Duration,
}

impl ScanRunner {
    pub fn new(scanner: PathBuf) -> Self {
        Self {
            scanner,
            launcher: ScanConfig::parse_launcher(DEFAULT_LAUNCHER),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn from_config(scanner: PathBuf, config: &ScanConfig) -> Self {
        Self::new(scanner)
            .with_launcher(config.launcher.clone())
            .with_timeout(config.timeout)
    }

    pub fn with_launcher(mut self, launcher: Vec<String>) -> Self {
        self.launcher = launcher;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The full argv used to scan `skill_path`
    pub fn command_line(&self, skill_path: &Path, verbose: bool) -> Vec<String> {
        let mut line = self.launcher.clone();
        line.push(self.scanner.display().to_string());
        line.push(skill_path.display().to_string());
        if verbose {
            line.push(VERBOSE_FLAG.to_string());
        }
        line
    }

    fn command(&self, skill_path: &Path, verbose: bool) -> Command {
        let mut cmd = match self.launcher.split_first() {
            Some((program, args)) => {
                let mut cmd = Command::new(program);
                cmd.args(args).arg(&self.scanner);
                cmd
            }
            None => Command::new(&self.scanner),
        };

        cmd.arg(skill_path);
        if verbose {
            cmd.arg(VERBOSE_FLAG);
        }

        // Dropping the wait future on timeout kills the scanner.
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        cmd
    }

    /// Scan one skill. Never fails: problems become exit code 4.
    pub async fn run(&self, skill_path: &Path, verbose: bool) -> SkillScan {
        let name = skill_name(skill_path);
        debug!(
            skill = %name,
            command = ?self.command_line(skill_path, verbose),
            "spawning scanner"
        );

        let child = match self.command(skill_path, verbose).spawn() {
            Ok(child) => child,
            Err(e) => {
                warn!(skill = %name, error = %e, "failed to launch scanner");
                return SkillScan::scan_error(skill_path, e.to_string());
            }
        };

        match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => {
                let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
                let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

                match output.status.code() {
                    Some(exit_code) => {
                        debug!(skill = %name, exit_code, "scanner finished");
                        SkillScan {
                            skill_name: name,
                            skill_path: skill_path.to_path_buf(),
                            exit_code,
                            stdout,
                            stderr,
                        }
                    }
                    None => {
                        warn!(skill = %name, status = %output.status, "scanner killed by signal");
                        SkillScan {
                            stdout,
                            ..SkillScan::scan_error(
                                skill_path,
                                format!("Scanner terminated without exit code ({})", output.status),
                            )
                        }
                    }
                }
            }
            Ok(Err(e)) => {
                warn!(skill = %name, error = %e, "failed to collect scanner output");
                SkillScan::scan_error(skill_path, e.to_string())
            }
            Err(_) => {
                warn!(
                    skill = %name,
                    timeout_secs = self.timeout.as_secs_f64(),
                    "scan timed out"
                );
                SkillScan::scan_error(skill_path, TIMEOUT_MESSAGE)
            }
        }
    }
}
