//! Scanner module - finding and driving the external security scanner

mod locator;
mod runner;

pub use locator::ScannerLocator;
pub use runner::{ScanRunner, TIMEOUT_MESSAGE, VERBOSE_FLAG};
