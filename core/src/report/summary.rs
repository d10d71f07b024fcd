//! Summary counts and the overall exit code

use super::result::{scanner_exit, SkillScan};

/// Exit codes of the whole run
pub mod run_exit {
    pub const ALL_PASSED: u8 = 0;
    pub const FAILED: u8 = 1;
    pub const CRITICAL: u8 = 2;
    pub const ERRORS: u8 = 3;
    /// Scanner missing or skills root missing
    pub const SETUP_FAILURE: u8 = 1;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub total: usize,
    pub passed: usize,
    /// High or critical findings
    pub failed: usize,
    /// Missing dependency or scan errors (timeouts, launch failures)
    pub errors: usize,
    pub critical: usize,
}

impl ScanSummary {
    pub fn from_results(results: &[SkillScan]) -> Self {
        let mut summary = Self {
            total: results.len(),
            ..Self::default()
        };

        for result in results {
            match result.exit_code {
                scanner_exit::PASS => summary.passed += 1,
                scanner_exit::HIGH => summary.failed += 1,
                scanner_exit::CRITICAL => {
                    summary.failed += 1;
                    summary.critical += 1;
                }
                scanner_exit::MISSING_DEPENDENCY | scanner_exit::SCAN_ERROR => summary.errors += 1,
                // Unknown codes only count towards the total
                _ => {}
            }
        }

        summary
    }

    /// Critical beats failed beats errors. Timeouts reach `ERRORS` through
    /// the errors bucket.
    pub fn exit_code(&self) -> u8 {
        if self.critical > 0 {
            run_exit::CRITICAL
        } else if self.failed > 0 {
            run_exit::FAILED
        } else if self.errors > 0 {
            run_exit::ERRORS
        } else {
            run_exit::ALL_PASSED
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn results(codes: &[i32]) -> Vec<SkillScan> {
        codes
            .iter()
            .enumerate()
            .map(|(i, &code)| SkillScan {
                skill_name: format!("skill-{}", i),
                skill_path: PathBuf::from(format!("/skills/skill-{}", i)),
                exit_code: code,
                stdout: String::new(),
                stderr: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_mixed_results() {
        let summary = ScanSummary::from_results(&results(&[0, 1, 2]));

        assert_eq!(
            summary,
            ScanSummary {
                total: 3,
                passed: 1,
                failed: 2,
                errors: 0,
                critical: 1,
            }
        );
        assert_eq!(summary.exit_code(), run_exit::CRITICAL);
    }

    #[test]
    fn test_failed_without_critical() {
        let summary = ScanSummary::from_results(&results(&[0, 1, 3]));
        assert_eq!(summary.exit_code(), run_exit::FAILED);
    }

    #[test]
    fn test_missing_dependency() {
        let summary = ScanSummary::from_results(&results(&[3]));

        assert_eq!(summary.errors, 1);
        assert_eq!(summary.passed, 0);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.exit_code(), run_exit::ERRORS);
    }

    #[test]
    fn test_all_timeouts_exit_with_errors() {
        let summary = ScanSummary::from_results(&results(&[4, 4]));

        assert_eq!(summary.errors, 2);
        assert_eq!(summary.exit_code(), run_exit::ERRORS);
    }

    #[test]
    fn test_unknown_code_only_counts_in_total() {
        let summary = ScanSummary::from_results(&results(&[0, 7]));

        assert_eq!(summary.total, 2);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed + summary.errors, 0);
        assert_eq!(summary.exit_code(), run_exit::ALL_PASSED);
    }

    #[test]
    fn test_empty() {
        let summary = ScanSummary::from_results(&[]);

        assert_eq!(summary, ScanSummary::default());
        assert_eq!(summary.exit_code(), run_exit::ALL_PASSED);
    }
}
