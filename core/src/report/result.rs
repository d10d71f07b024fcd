//! Per-skill scan results and the scanner's exit-code contract

use std::path::{Path, PathBuf};

/// Exit codes the scanner reports for a single skill
pub mod scanner_exit {
    pub const PASS: i32 = 0;
    pub const HIGH: i32 = 1;
    pub const CRITICAL: i32 = 2;
    /// gitleaks is not installed
    pub const MISSING_DEPENDENCY: i32 = 3;
    /// Reserved for failures to run the scanner at all (timeout, launch error)
    pub const SCAN_ERROR: i32 = 4;
}

/// Substrings identifying the scanner's summary lines in verbose mode
pub const REPORT_MARKERS: &[&str] = &["[CRIT]", "[HIGH]", "[FAIL]", "[PASS]"];

/// Outcome of scanning one skill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillScan {
    pub skill_name: String,
    pub skill_path: PathBuf,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// How a result is labelled on its status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStatus {
    Pass,
    Error,
    Fail,
}

impl ScanStatus {
    pub fn from_exit_code(code: i32) -> Self {
        match code {
            scanner_exit::PASS => ScanStatus::Pass,
            scanner_exit::MISSING_DEPENDENCY => ScanStatus::Error,
            _ => ScanStatus::Fail,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScanStatus::Pass => "PASS",
            ScanStatus::Error => "ERROR",
            ScanStatus::Fail => "FAIL",
        }
    }
}

/// Human-readable meaning of a scanner exit code
pub fn describe_exit_code(code: i32) -> String {
    match code {
        scanner_exit::PASS => "PASS".to_string(),
        scanner_exit::HIGH => "HIGH severity".to_string(),
        scanner_exit::CRITICAL => "CRITICAL".to_string(),
        scanner_exit::MISSING_DEPENDENCY => "gitleaks not installed".to_string(),
        scanner_exit::SCAN_ERROR => "Scan error".to_string(),
        other => format!("Code {}", other),
    }
}

/// Display name of a skill: its directory name
pub fn skill_name(skill_path: &Path) -> String {
    skill_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| skill_path.display().to_string())
}

impl SkillScan {
    /// Synthetic result for a scan that could not complete
    pub fn scan_error(skill_path: &Path, message: impl Into<String>) -> Self {
        Self {
            skill_name: skill_name(skill_path),
            skill_path: skill_path.to_path_buf(),
            exit_code: scanner_exit::SCAN_ERROR,
            stdout: String::new(),
            stderr: message.into(),
        }
    }

    pub fn passed(&self) -> bool {
        self.exit_code == scanner_exit::PASS
    }

    pub fn status(&self) -> ScanStatus {
        ScanStatus::from_exit_code(self.exit_code)
    }

    pub fn description(&self) -> String {
        describe_exit_code(self.exit_code)
    }

    /// Lines of the scanner's stdout carrying one of [`REPORT_MARKERS`]
    pub fn marker_lines(&self) -> impl Iterator<Item = &str> {
        self.stdout
            .lines()
            .filter(|line| REPORT_MARKERS.iter().any(|m| line.contains(m)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(code: i32, stdout: &str) -> SkillScan {
        SkillScan {
            skill_name: "demo".to_string(),
            skill_path: PathBuf::from("/skills/demo"),
            exit_code: code,
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(describe_exit_code(0), "PASS");
        assert_eq!(describe_exit_code(1), "HIGH severity");
        assert_eq!(describe_exit_code(2), "CRITICAL");
        assert_eq!(describe_exit_code(3), "gitleaks not installed");
        assert_eq!(describe_exit_code(4), "Scan error");
        assert_eq!(describe_exit_code(127), "Code 127");
        assert_eq!(describe_exit_code(-1), "Code -1");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ScanStatus::from_exit_code(0), ScanStatus::Pass);
        assert_eq!(ScanStatus::from_exit_code(3), ScanStatus::Error);
        for code in [1, 2, 4, 9] {
            assert_eq!(ScanStatus::from_exit_code(code), ScanStatus::Fail);
        }
        assert_eq!(ScanStatus::Error.label(), "ERROR");
    }

    #[test]
    fn test_marker_lines() {
        let result = scan(
            1,
            "Scanning demo\n[HIGH] token in config.json\nchecked 12 files\n[PASS] no private keys\r\n[CRIT] aws key\n",
        );

        let lines: Vec<&str> = result.marker_lines().collect();
        assert_eq!(
            lines,
            vec![
                "[HIGH] token in config.json",
                "[PASS] no private keys",
                "[CRIT] aws key"
            ]
        );
    }

    #[test]
    fn test_scan_error() {
        let result = SkillScan::scan_error(Path::new("/skills/slow"), "Scan timed out");

        assert_eq!(result.skill_name, "slow");
        assert_eq!(result.exit_code, scanner_exit::SCAN_ERROR);
        assert_eq!(result.stderr, "Scan timed out");
        assert!(result.stdout.is_empty());
        assert!(!result.passed());
    }
}
