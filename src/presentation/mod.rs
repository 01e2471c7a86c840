/// Smoke run reports and summary table
pub mod report;

pub use report::*;
