//! Skillscan Core
//!
//! Runs an external security scanner over every skill directory and
//! aggregates the results.
//!
//! # Overview
//!
//! The scanner itself is a black box. This crate provides the plumbing
//! around it:
//! - **Locator**: pick the scanner from an ordered list of candidate paths
//! - **Enumerator**: list skill directories, skipping hidden and excluded ones
//! - **Runner**: one scanner subprocess per skill, bounded by a timeout
//! - **Summary**: pass/fail/error counts and the overall exit code
//!
//! # Example
//!
//! ```rust,ignore
//! use skillscan_core::{ScanConfig, ScanRunner, ScanSummary, ScannerLocator, SkillEnumerator};
//!
//! let config = ScanConfig::default();
//! let scanner = ScannerLocator::from_config(&config).locate()?;
//! let runner = ScanRunner::from_config(scanner, &config);
//!
//! let mut results = Vec::new();
//! for skill in SkillEnumerator::from_config(&config).enumerate()? {
//!     results.push(runner.run(&skill, config.verbose).await);
//! }
//!
//! std::process::exit(ScanSummary::from_results(&results).exit_code() as i32);
//! ```

pub mod config;
pub mod error;
pub mod report;
pub mod scanner;
pub mod skills;

// Re-export main types
pub use config::ScanConfig;
pub use error::{Result, ScanError};
pub use report::{
    describe_exit_code, run_exit, scanner_exit, skill_name, ScanStatus, ScanSummary, SkillScan,
};
pub use scanner::{ScanRunner, ScannerLocator};
pub use skills::SkillEnumerator;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
