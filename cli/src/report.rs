//! Colored console report

use colored::Colorize;
use skillscan_core::{ScanStatus, ScanSummary, SkillScan};
use std::io::{self, Write};

const RULE_WIDTH: usize = 60;

pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn info(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", format!("[INFO] {}", message).bright_blue())?;
        writeln!(self.out)
    }

    pub fn scan_started(&mut self, skill_name: &str) -> io::Result<()> {
        writeln!(self.out, "{}", format!("[SCAN] {}", skill_name).bright_blue())?;
        self.out.flush()
    }

    pub fn scan_finished(&mut self, result: &SkillScan, verbose: bool) -> io::Result<()> {
        let status = result.status();
        let tag = format!("[{}]", status.label());
        let tag = match status {
            ScanStatus::Pass => tag.bright_green(),
            ScanStatus::Error | ScanStatus::Fail => tag.bright_red(),
        };
        writeln!(self.out, "  {} {}", tag, result.description())?;

        if verbose && !result.passed() {
            for line in result.marker_lines() {
                writeln!(self.out, "    {}", line)?;
            }
        }

        writeln!(self.out)
    }

    pub fn summary(&mut self, summary: &ScanSummary) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(self.out, "{}", rule)?;
        writeln!(self.out, "{}", "[SUMMARY]".bright_blue())?;
        writeln!(self.out, "  Total skills scanned: {}", summary.total)?;
        writeln!(self.out, "  {}", format!("Passed: {}", summary.passed).bright_green())?;
        writeln!(self.out, "  {}", format!("Failed: {}", summary.failed).bright_red())?;
        if summary.errors > 0 {
            writeln!(self.out, "  {}", format!("Errors: {}", summary.errors).bright_yellow())?;
        }
        if summary.critical > 0 {
            writeln!(
                self.out,
                "  {}",
                format!("Critical issues: {}", summary.critical).bright_red()
            )?;
        }
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out)?;

        self.out.flush()
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}
