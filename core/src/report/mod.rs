//! Report module - scan results and their aggregation

mod result;
mod summary;

pub use result::{
    describe_exit_code, scanner_exit, skill_name, ScanStatus, SkillScan, REPORT_MARKERS,
};
pub use summary::{run_exit, ScanSummary};
