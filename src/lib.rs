//! Reporting layer for regression test runs.
//!
//! Given outcomes that were already computed by a test executor, this crate
//! tallies the outcome flags and renders a plain-text log, an HTML index and
//! one HTML diff page per test whose output differs from its reference.

pub mod config;
pub mod diff;
pub mod html;
pub mod report;
pub mod tally;
pub mod types;

pub use config::{ReportConfig, load_config};
pub use report::{ReportArtifacts, ReportWriter};
pub use tally::FlagTally;
pub use types::{Check, Flag, FlagValue, Outcome, RunSummary, TestCase, TestRecord};
